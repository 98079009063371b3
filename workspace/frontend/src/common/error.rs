use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Refetch callback from the owning card's fetch hook.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Card-embedded failure notice for a dashboard resource that could not be
/// loaded, with a reload button when the card can refetch.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    html! {
        <div class="alert alert-error text-sm">
            <i class="fas fa-exclamation-circle"></i>
            <span>{&props.message}</span>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-ghost btn-xs"
                        onclick={Callback::from(move |_| on_retry.emit(()))}
                    >
                        <i class="fas fa-redo"></i>
                        {" Reload"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
