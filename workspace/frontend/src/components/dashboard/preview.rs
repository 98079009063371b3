use yew::prelude::*;

use crate::api_client::data::{PreviewRecord, get_preview_records};
use crate::common::fetch_hook::{FetchState, use_fetch_with_refetch};
use crate::common::loading::LoadingSpinner;

fn cell(value: &Option<String>) -> Html {
    html! { <td>{value.clone().unwrap_or_else(|| "-".to_string())}</td> }
}

fn count_cell(value: &Option<i64>) -> Html {
    html! { <td>{value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}</td> }
}

/// Monitoring-record preview of the currently loaded data set.
#[function_component(PreviewTable)]
pub fn preview_table() -> Html {
    let (fetch_state, _refetch) = use_fetch_with_refetch("data preview", get_preview_records);

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Data Preview"}</h3>
                { match &*fetch_state {
                    FetchState::Loading => html! { <LoadingSpinner /> },
                    FetchState::Error(error) => html! {
                        <div class="alert alert-error"><span>{error}</span></div>
                    },
                    FetchState::Success(records) => records_table(records),
                }}
            </div>
        </div>
    }
}

fn records_table(records: &[PreviewRecord]) -> Html {
    if records.is_empty() {
        return html! {
            <div class="text-center py-8 text-gray-500">{"No data available"}</div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        <th>{"Start"}</th>
                        <th>{"End"}</th>
                        <th>{"CI ID"}</th>
                        <th>{"CI Type"}</th>
                        <th>{"Code"}</th>
                        <th>{"Normal"}</th>
                        <th>{"Abnormal"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for records.iter().enumerate().map(|(index, record)| html! {
                        <tr key={index}>
                            { cell(&record.data_start_time) }
                            { cell(&record.data_end_time) }
                            { cell(&record.ci_id) }
                            { cell(&record.ci_type) }
                            { cell(&record.code) }
                            { count_cell(&record.normal_count) }
                            { count_cell(&record.abnormal_count) }
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
