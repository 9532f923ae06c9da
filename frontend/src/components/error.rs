use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Flattens the per-field messages carried in `details`, whether the backend
/// sent `{errors: [..]}` or a FastAPI `detail` array.
pub fn detail_messages(error: &ApiError) -> Vec<String> {
    match error.details.as_ref() {
        Some(Value::Object(map)) => map
            .get("errors")
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let messages = error.get().map(|e| detail_messages(&e)).unwrap_or_default();
                    (!messages.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {messages.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}
