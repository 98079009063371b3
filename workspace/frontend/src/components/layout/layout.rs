use yew::prelude::*;

use super::navbar::Navbar;
use crate::components::modals::{AboutModal, HelpModal};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let show_help = use_state(|| false);
    let show_about = use_state(|| false);

    let on_help = {
        let show_help = show_help.clone();
        Callback::from(move |_| show_help.set(true))
    };
    let on_help_close = {
        let show_help = show_help.clone();
        Callback::from(move |_| show_help.set(false))
    };
    let on_about = {
        let show_about = show_about.clone();
        Callback::from(move |_| show_about.set(true))
    };
    let on_about_close = {
        let show_about = show_about.clone();
        Callback::from(move |_| show_about.set(false))
    };

    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} {on_help} {on_about} />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
            <HelpModal show={*show_help} on_close={on_help_close} />
            <AboutModal show={*show_about} on_close={on_about_close} />
        </div>
    }
}
