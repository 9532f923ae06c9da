use crate::{
    api::DailyStats,
    state::fetch::Fetch,
    utils::time::{format_date_input, parse_date_input},
};
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn DailySummary(
    date: Signal<NaiveDate>,
    daily: Signal<Fetch<DailyStats>>,
    on_date: Callback<NaiveDate>,
) -> impl IntoView {
    let count = move |pick: fn(&DailyStats) -> i64| {
        Signal::derive(move || daily.with(|daily| daily.display_with(|stats| pick(stats).to_string())))
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                <div>
                    <h3 class="text-base font-semibold text-fg">"Daily Summary"</h3>
                    {move || daily.with(|daily| daily.error().map(|message| view! {
                        <p class="text-xs text-status-error-text">{message.to_string()}</p>
                    }))}
                </div>
                <label class="text-sm text-fg">
                    "Date"
                    <input
                        type="date"
                        class="ml-2 rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-1 text-sm"
                        prop:value=move || format_date_input(date.get())
                        on:change=move |ev| {
                            if let Some(value) = parse_date_input(&event_target_value(&ev)) {
                                on_date.call(value);
                            }
                        }
                    />
                </label>
            </div>
            <div class="grid grid-cols-3 gap-4">
                <Count label="Present" tone="text-status-success-text" value=count(|s| s.present) />
                <Count label="Absent" tone="text-status-error-text" value=count(|s| s.absent) />
                <Count label="Total" tone="text-fg" value=count(|s| s.total) />
            </div>
        </section>
    }
}

#[component]
fn Count(label: &'static str, tone: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border p-4 text-center">
            <p class="text-xs uppercase tracking-wide text-fg-muted">{label}</p>
            <p class=format!("mt-1 text-2xl font-bold {}", tone)>{move || value.get()}</p>
        </div>
    }
}
