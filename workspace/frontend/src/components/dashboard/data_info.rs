use yew::prelude::*;

use crate::api_client::data::{DataInfo, DateRange, get_data_info};
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::{FetchState, use_fetch_with_refetch};
use crate::common::loading::LoadingSpinner;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Emitted once the loaded data's date range is known, so the control
    /// panel can seed its date fields.
    pub on_date_range: Callback<DateRange>,
}

fn stat(label: &str, value: String) -> Html {
    html! {
        <div class="flex justify-between text-sm">
            <span class="text-gray-500">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}

#[function_component(DataInfoCard)]
pub fn data_info_card(props: &Props) -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch("data info", get_data_info);

    {
        let on_date_range = props.on_date_range.clone();
        let state = (*fetch_state).clone();
        use_effect_with(state, move |state| {
            if let FetchState::Success(info) = state {
                if let Some(range) = &info.date_range {
                    on_date_range.emit(range.clone());
                }
            }
            || ()
        });
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Data Info"}</h3>
                { match &*fetch_state {
                    FetchState::Loading => html! { <LoadingSpinner /> },
                    FetchState::Error(error) => html! {
                        <ErrorDisplay message={error.clone()} on_retry={Some(refetch)} />
                    },
                    FetchState::Success(info) => info_body(info),
                }}
            </div>
        </div>
    }
}

fn info_body(info: &DataInfo) -> Html {
    let dash = || "-".to_string();
    let range = info
        .date_range
        .as_ref()
        .map(|r| format!("{} to {}", r.start, r.end))
        .unwrap_or_else(dash);
    let (mean, std) = match &info.statistics {
        Some(stats) => (
            stats.mean.map(|v| format!("{v:.2}")).unwrap_or_else(dash),
            stats.std.map(|v| format!("{v:.2}")).unwrap_or_else(dash),
        ),
        None => (dash(), dash()),
    };

    html! {
        <div class="space-y-2">
            { stat("Device", info.device_id.clone().unwrap_or_else(dash)) }
            { stat("Points", info.total_points.map(|v| v.to_string()).unwrap_or_else(dash)) }
            { stat("Frequency", info.frequency.clone().unwrap_or_else(dash)) }
            { stat("Range", range) }
            { stat("Mean", mean) }
            { stat("Std dev", std) }
        </div>
    }
}
