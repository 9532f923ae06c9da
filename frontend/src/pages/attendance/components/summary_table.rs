use crate::{
    api::AttendanceSummaryItem,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::attendance::utils::{optional_count, rank_summary},
    state::fetch::Fetch,
};
use leptos::*;

#[component]
pub fn SummaryTable(summary: Signal<Fetch<Vec<AttendanceSummaryItem>>>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"All-time Summary"</h3>
            {move || match summary.get() {
                Fetch::Idle | Fetch::Loading => view! { <LoadingSpinner /> }.into_view(),
                Fetch::Failed(message) => view! { <ErrorMessage message=message /> }.into_view(),
                Fetch::Loaded(items) if items.is_empty() => view! {
                    <EmptyState title="No employees to summarize" icon="fas fa-table" />
                }.into_view(),
                Fetch::Loaded(items) => view! {
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Department"</th>
                                <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase">"Present Days"</th>
                                <th class="px-4 py-2 text-right text-xs font-medium text-fg-muted uppercase">"Absent Days"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {rank_summary(&items).into_iter().map(|item| view! {
                                <tr>
                                    <td class="px-4 py-2">
                                        <p class="text-sm text-fg">{item.full_name}</p>
                                        <p class="text-xs text-fg-muted">{item.employee_id}</p>
                                    </td>
                                    <td class="px-4 py-2 text-sm text-fg">
                                        {item.department.map(|d| d.as_str()).unwrap_or("-")}
                                    </td>
                                    <td class="px-4 py-2 text-sm text-right text-fg">{item.present_days}</td>
                                    <td class="px-4 py-2 text-sm text-right text-fg">{optional_count(item.absent_days)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view(),
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Department;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_present_days_and_optional_columns() {
        let html = render_to_string(move || {
            let items = vec![
                AttendanceSummaryItem {
                    employee_id: "EMP-001".into(),
                    full_name: "Alice".into(),
                    present_days: 4,
                    absent_days: Some(1),
                    department: Some(Department::Engineering),
                },
                AttendanceSummaryItem {
                    employee_id: "EMP-002".into(),
                    full_name: "Bob".into(),
                    present_days: 0,
                    absent_days: None,
                    department: None,
                },
            ];
            view! { <SummaryTable summary=Signal::derive(move || Fetch::Loaded(items.clone())) /> }
        });
        assert!(html.contains("Alice"));
        assert!(html.contains("EMP-002"));
        assert!(html.contains("Engineering"));
        assert!(html.find("Alice").unwrap() < html.find("Bob").unwrap());
    }

    #[test]
    fn empty_summary_has_own_state() {
        let html = render_to_string(move || {
            view! { <SummaryTable summary=Signal::derive(|| Fetch::Loaded(Vec::new())) /> }
        });
        assert!(html.contains("No employees to summarize"));
    }
}
