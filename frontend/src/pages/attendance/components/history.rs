use crate::{
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::attendance::utils::{status_badge_class, tally_history},
    state::{attendance::AttendanceState, fetch::Fetch},
    utils::time::format_long_date,
};
use leptos::*;

#[component]
pub fn HistoryPanel(state: Signal<AttendanceState>, on_close: Callback<()>) -> impl IntoView {
    let heading = move || {
        state.with(|s| {
            s.selected_employee()
                .map(|employee| format!("{} · History", employee.full_name))
                .unwrap_or_else(|| "History".to_string())
        })
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-base font-semibold text-fg">{heading}</h3>
                <Show when=move || state.with(|s| s.selected().is_some())>
                    <button
                        type="button"
                        class="text-sm text-fg-muted hover:text-fg"
                        aria-label="Close history"
                        on:click=move |_| on_close.call(())
                    >
                        {"✕"}
                    </button>
                </Show>
            </div>
            {move || match state.with(|s| s.history().clone()) {
                Fetch::Idle => view! {
                    <p class="text-sm text-fg-muted">"Select an employee to see their attendance history."</p>
                }.into_view(),
                Fetch::Loading => view! { <LoadingSpinner /> }.into_view(),
                Fetch::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                Fetch::Loaded(records) if records.is_empty() => view! {
                    <EmptyState title="No attendance records yet" icon="fas fa-calendar-times" />
                }.into_view(),
                Fetch::Loaded(records) => {
                    let tally = tally_history(&records);
                    view! {
                        <p class="text-xs text-fg-muted">
                            {format!("{} present · {} absent", tally.present, tally.absent)}
                        </p>
                        <ul class="divide-y divide-border">
                            {records.into_iter().map(|record| view! {
                                <li class="py-2 flex items-center justify-between gap-3">
                                    <div>
                                        <p class="text-sm text-fg">{format_long_date(record.date)}</p>
                                        <p class="text-xs text-fg-muted">
                                            {record.check_in_time.unwrap_or_else(|| "-".to_string())}
                                            " · "
                                            {record.remarks.unwrap_or_default()}
                                        </p>
                                    </div>
                                    <span class=status_badge_class(record.status)>{record.status.as_str()}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}
        </section>
    }
}
