use crate::{
    api::DashboardStats,
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::dashboard::utils::department_bars,
    state::fetch::Fetch,
};
use leptos::*;

#[component]
pub fn DepartmentLoad(stats: Signal<Fetch<DashboardStats>>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Department Load"</h3>
            {move || match stats.get() {
                Fetch::Loaded(stats) if stats.department_distribution.is_empty() => view! {
                    <EmptyState title="No departments to show" description="Add employees to see how they are distributed." />
                }.into_view(),
                Fetch::Loaded(stats) => {
                    let bars = department_bars(&stats.department_distribution, stats.total_employees);
                    view! {
                        <div class="space-y-3">
                            {bars.into_iter().map(|bar| view! {
                                <div>
                                    <div class="flex justify-between text-sm text-fg">
                                        <span>{bar.name}</span>
                                        <span>{bar.count}</span>
                                    </div>
                                    <div class="h-2 rounded bg-surface-muted">
                                        <div
                                            class="h-2 rounded bg-action-primary-bg"
                                            style=format!("width: {:.0}%", bar.percent)
                                        ></div>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
                Fetch::Failed(_) => view! { <p class="text-sm text-fg-muted">"-"</p> }.into_view(),
                Fetch::Idle | Fetch::Loading => view! { <LoadingSpinner /> }.into_view(),
            }}
        </section>
    }
}
