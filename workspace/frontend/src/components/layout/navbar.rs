use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    pub on_help: Callback<()>,
    pub on_about: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let on_help = {
        let on_help = props.on_help.clone();
        Callback::from(move |_| on_help.emit(()))
    };
    let on_about = {
        let on_about = props.on_about.clone();
        Callback::from(move |_| on_about.emit(()))
    };

    html! {
        <div class="navbar bg-primary text-primary-content">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                    <i class="fas fa-chart-line"></i>
                    {" ChronoCast"}
                </Link<Route>>
            </div>
            <div class="navbar-center hidden lg:flex">
                <span class="text-lg font-semibold">{&props.title}</span>
            </div>
            <div class="navbar-end gap-1">
                <button class="btn btn-ghost btn-sm" onclick={on_help}>
                    <i class="fas fa-question-circle"></i>
                    {" Help"}
                </button>
                <button class="btn btn-ghost btn-sm" onclick={on_about}>
                    <i class="fas fa-info-circle"></i>
                    {" About"}
                </button>
            </div>
        </div>
    }
}
