use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod settings;

use common::toast::ToastProvider;
use components::dashboard::Dashboard;
use components::layout::Layout;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <Layout title="Forecast"><Dashboard /></Layout> }
        }
        Route::About => {
            html! {
                <Layout title="About">
                    <div class="prose">
                        <h1>{"ChronoCast"}</h1>
                        <p>{"A dashboard for time-series forecasting. Pick a model, tune its \
                             parameters, upload CSV data and compare the forecast against \
                             held-out validation data."}</p>
                    </div>
                </Layout>
            }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== ChronoCast Dashboard Starting ===");
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
