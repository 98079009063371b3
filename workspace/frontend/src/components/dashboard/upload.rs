use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement};

use crate::api_client::data::{PreviewPoint, UploadResult, get_uploaded_preview, upload_csv};
use crate::common::toast::ToastContext;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Emitted with the uploaded series so the dashboard can plot it.
    pub on_preview: Callback<Vec<PreviewPoint>>,
}

/// CSV upload card. Only `.csv`-named files are accepted; the check is on
/// the name alone, content validation is the backend's job.
#[function_component(UploadCard)]
pub fn upload_card(props: &Props) -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();
    let uploading = use_state(|| false);
    let last_upload = use_state(|| None::<UploadResult>);

    let onchange = {
        let toast_ctx = toast_ctx.clone();
        let uploading = uploading.clone();
        let last_upload = last_upload.clone();
        let on_preview = props.on_preview.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Clear the input so re-selecting the same file fires again.
            input.set_value("");

            if !file.name().to_lowercase().ends_with(".csv") {
                toast_ctx.show_warning("Only CSV files are supported".to_string());
                return;
            }

            let form = match FormData::new() {
                Ok(form) => form,
                Err(_) => {
                    log::error!("Failed to construct upload form data");
                    toast_ctx.show_error("Upload failed: could not build form".to_string());
                    return;
                }
            };
            if form.append_with_blob("file", &file).is_err() {
                log::error!("Failed to attach file to upload form");
                toast_ctx.show_error("Upload failed: could not attach file".to_string());
                return;
            }

            uploading.set(true);
            let toast_ctx = toast_ctx.clone();
            let uploading = uploading.clone();
            let last_upload = last_upload.clone();
            let on_preview = on_preview.clone();

            spawn_local(async move {
                match upload_csv(&form).await {
                    Ok(result) => {
                        last_upload.set(Some(result));
                        // Re-plot the fresh series; preview failure is not
                        // fatal to the upload itself.
                        match get_uploaded_preview().await {
                            Ok(points) => on_preview.emit(points),
                            Err(e) => log::warn!("Uploaded data preview unavailable: {}", e),
                        }
                        toast_ctx.show_success("Data uploaded".to_string());
                    }
                    Err(e) => {
                        toast_ctx.show_error(format!("Upload failed: {}", e));
                    }
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Upload Data"}</h3>
                <input
                    type="file"
                    accept=".csv"
                    class="file-input file-input-bordered w-full"
                    disabled={*uploading}
                    {onchange}
                />
                { if *uploading {
                    html! { <span class="text-sm text-gray-500">{"Uploading..."}</span> }
                } else {
                    html! {}
                }}
                { if let Some(result) = &*last_upload {
                    upload_summary(result)
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

fn upload_summary(result: &UploadResult) -> Html {
    let rows = result
        .rows
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());
    let range = result
        .date_range
        .as_ref()
        .map(|r| format!("{} to {}", r.start, r.end))
        .unwrap_or_else(|| "-".to_string());

    html! {
        <div class="alert alert-success text-sm">
            <i class="fas fa-check-circle"></i>
            <span>{format!("{rows} rows loaded, {range}")}</span>
        </div>
    }
}
