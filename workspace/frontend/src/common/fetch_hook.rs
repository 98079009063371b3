use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::common::toast::ToastContext;

/// Lifecycle of one fetched dashboard resource. Every resource starts
/// loading on mount, so there is no pre-fetch variant.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Loads a named dashboard resource on mount and hands back the state plus
/// a refetch callback for the card's reload button.
///
/// Transport failures land in the state for the card to render and
/// additionally surface as an error toast naming the resource. Validation
/// warnings never come through here; those stay with the submission flow.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(
    resource: &'static str,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let state = state.clone();
        let toast_ctx = toast_ctx.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let state = state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            log::debug!("Loading {}", resource);
            state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match (*fetch_fn)().await {
                    Ok(data) => state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::error!("Failed to load {}: {}", resource, err);
                        toast_ctx.show_error(format!("Failed to load {}: {}", resource, err));
                        state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Initial load on mount.
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (state, refetch)
}
