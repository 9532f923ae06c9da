use crate::{
    api::DashboardStats,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    state::fetch::Fetch,
};
use leptos::*;

#[component]
pub fn RecentHires(stats: Signal<Fetch<DashboardStats>>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Recent Hires"</h3>
            {move || match stats.get() {
                Fetch::Loaded(stats) if stats.recent_employees.is_empty() => view! {
                    <EmptyState title="No employees yet" icon="fas fa-user-plus" />
                }.into_view(),
                Fetch::Loaded(stats) => view! {
                    <ul class="divide-y divide-border">
                        {stats.recent_employees.into_iter().map(|employee| view! {
                            <li class="py-3 flex items-center justify-between">
                                <div>
                                    <p class="text-sm font-medium text-fg">{employee.full_name}</p>
                                    <p class="text-xs text-fg-muted">{employee.designation}</p>
                                </div>
                                <span class="text-xs text-fg-muted">{employee.department.as_str()}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view(),
                Fetch::Failed(_) => view! { <p class="text-sm text-fg-muted">"-"</p> }.into_view(),
                Fetch::Idle | Fetch::Loading => view! { <LoadingSpinner /> }.into_view(),
            }}
        </section>
    }
}
