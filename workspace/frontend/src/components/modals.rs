use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component(HelpModal)]
pub fn help_modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{"How to use"}</h3>
                <ul class="py-4 space-y-2 list-disc list-inside text-sm">
                    <li>{"Pick a forecast model; its parameters appear below the selector."}</li>
                    <li>{"Set the horizon (1-365 periods) and optionally narrow the data date range."}</li>
                    <li>{"Press Run Forecast, or Ctrl+Enter anywhere in the control panel."}</li>
                    <li>{"Upload a CSV file to replace the series being forecast."}</li>
                    <li>{"Accuracy metrics appear once enough validation data is available."}</li>
                </ul>
                <div class="modal-action">
                    <button class="btn" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </dialog>
    }
}

#[function_component(AboutModal)]
pub fn about_modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <dialog class={classes!("modal", props.show.then_some("modal-open"))}>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{"ChronoCast"}</h3>
                <p class="py-4 text-sm">
                    {"Time-series forecasting dashboard. Model fitting runs on the backend; \
                      this page shapes the requests and renders the results."}
                </p>
                <div class="modal-action">
                    <button class="btn" onclick={on_close}>{"Close"}</button>
                </div>
            </div>
        </dialog>
    }
}
