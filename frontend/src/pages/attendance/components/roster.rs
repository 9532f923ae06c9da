use crate::{
    api::{AttendanceStatus, Employee, EmployeeId},
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    state::{attendance::AttendanceState, fetch::Fetch},
};
use leptos::*;

#[component]
pub fn RosterPanel(
    state: Signal<AttendanceState>,
    on_search: Callback<String>,
    on_select: Callback<EmployeeId>,
    on_mark: Callback<(EmployeeId, AttendanceStatus)>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let rows = Signal::derive(move || state.with(|s| s.filtered_roster()));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <h3 class="text-base font-semibold text-fg">"Mark Attendance"</h3>
                <div class="flex items-center gap-2">
                    <input
                        type="search"
                        class="w-full sm:w-64 rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm"
                        placeholder="Filter by name or department"
                        prop:value=move || state.with(|s| s.search().to_string())
                        on:input=move |ev| on_search.call(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        aria-label="Reload roster"
                        on:click=move |_| on_refresh.call(())
                    >
                        <i class="fas fa-sync-alt"></i>
                    </button>
                </div>
            </div>
            {move || match state.with(|s| s.roster().map(|_| ())) {
                Fetch::Idle | Fetch::Loading => view! { <LoadingSpinner /> }.into_view(),
                Fetch::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                Fetch::Loaded(()) if rows.with(Vec::is_empty) => {
                    let filtered = state.with(|s| !s.search().trim().is_empty());
                    let title = if filtered { "No employees match this filter" } else { "No employees yet" };
                    view! { <EmptyState title=title icon="fas fa-users" /> }.into_view()
                }
                Fetch::Loaded(()) => view! {
                    <ul class="divide-y divide-border">
                        <For
                            each=move || rows.get()
                            key=|employee| employee.id
                            children=move |employee| view! {
                                <RosterRow employee=employee state=state on_select=on_select on_mark=on_mark />
                            }
                        />
                    </ul>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn RosterRow(
    employee: Employee,
    state: Signal<AttendanceState>,
    on_select: Callback<EmployeeId>,
    on_mark: Callback<(EmployeeId, AttendanceStatus)>,
) -> impl IntoView {
    let id = employee.id;
    let marking = Signal::derive(move || state.with(|s| s.marking_status(id)));
    let selected = Signal::derive(move || state.with(|s| s.selected() == Some(id)));
    let row_class = move || {
        if selected.get() {
            "py-3 flex items-center justify-between gap-3 bg-surface-muted px-2 rounded"
        } else {
            "py-3 flex items-center justify-between gap-3 px-2"
        }
    };
    let mark_button = move |status: AttendanceStatus, idle_label: &'static str, class: &'static str| {
        view! {
            <button
                type="button"
                class=format!("inline-flex items-center rounded-md px-3 py-1 text-xs font-semibold disabled:opacity-50 {}", class)
                disabled=move || marking.get().is_some()
                on:click=move |_| on_mark.call((id, status))
            >
                {move || if marking.get() == Some(status) { "Saving..." } else { idle_label }}
            </button>
        }
    };

    view! {
        <li class=row_class>
            <button
                type="button"
                class="text-left flex-1"
                aria-pressed=move || selected.get().to_string()
                on:click=move |_| on_select.call(id)
            >
                <p class="text-sm font-medium text-fg">{employee.full_name}</p>
                <p class="text-xs text-fg-muted">
                    {employee.employee_id}" · "{employee.department.as_str()}
                </p>
            </button>
            <div class="flex gap-2">
                {mark_button(AttendanceStatus::Present, "Present", "bg-status-success-bg text-status-success-text")}
                {mark_button(AttendanceStatus::Absent, "Absent", "bg-status-error-bg text-status-error-text")}
            </div>
        </li>
    }
}
