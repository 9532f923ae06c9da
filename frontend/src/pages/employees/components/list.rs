use crate::{
    api::Employee,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::employees::utils::Page,
    state::fetch::Fetch,
};
use leptos::*;

#[component]
pub fn EmployeeSearch(search: Signal<String>, on_search: Callback<String>) -> impl IntoView {
    view! {
        <div class="relative w-full sm:w-72">
            <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-fg-muted"></i>
            <input
                type="search"
                class="block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg pl-9 pr-3 py-2 text-sm"
                placeholder="Search name, ID or department"
                prop:value=move || search.get()
                on:input=move |ev| on_search.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn EmployeeTable(
    page: Signal<Fetch<Page<Employee>>>,
    on_page: Callback<usize>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            {move || match page.get() {
                Fetch::Idle | Fetch::Loading => view! { <LoadingSpinner /> }.into_view(),
                Fetch::Failed(message) => view! {
                    <div class="p-4"><ErrorMessage message=message /></div>
                }.into_view(),
                Fetch::Loaded(page) if page.total == 0 => view! {
                    <div class="p-4">
                        <EmptyState
                            title="No employees found"
                            description="Add an employee or adjust your search."
                            icon="fas fa-users"
                        />
                    </div>
                }.into_view(),
                Fetch::Loaded(page) => {
                    let caption = page.caption("employees");
                    let current = page.page;
                    let has_previous = page.has_previous();
                    let has_next = page.has_next();
                    view! {
                        <table class="min-w-full divide-y divide-border">
                            <thead class="bg-surface-muted">
                                <tr>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Employee"</th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Department"</th>
                                    <th class="px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase">"Status"</th>
                                    <th class="px-4 py-3"></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {page.items.into_iter().map(|employee| {
                                    let target = employee.clone();
                                    let delete_label = format!("Delete {}", employee.full_name);
                                    view! {
                                        <tr>
                                            <td class="px-4 py-3">
                                                <p class="text-sm font-medium text-fg">{employee.full_name}</p>
                                                <p class="text-xs text-fg-muted">
                                                    {employee.employee_id}" · "{employee.email}
                                                </p>
                                            </td>
                                            <td class="px-4 py-3 text-sm text-fg">
                                                {employee.department.as_str()}
                                                <p class="text-xs text-fg-muted">{employee.designation}</p>
                                            </td>
                                            <td class="px-4 py-3 text-sm text-fg">{employee.status.as_str()}</td>
                                            <td class="px-4 py-3 text-right">
                                                <button
                                                    type="button"
                                                    class="text-sm text-action-danger-bg hover:underline"
                                                    aria-label=delete_label
                                                    on:click=move |_| on_delete.call(target.clone())
                                                >
                                                    <i class="fas fa-trash"></i>
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                        <div class="flex items-center justify-between px-4 py-3 border-t border-border">
                            <p class="text-sm text-fg-muted">{caption}</p>
                            <div class="flex gap-2">
                                <button
                                    type="button"
                                    class="px-3 py-1 text-sm rounded border border-border disabled:opacity-50"
                                    disabled=!has_previous
                                    on:click=move |_| on_page.call(current.saturating_sub(1))
                                >
                                    "Previous"
                                </button>
                                <button
                                    type="button"
                                    class="px-3 py-1 text-sm rounded border border-border disabled:opacity-50"
                                    disabled=!has_next
                                    on:click=move |_| on_page.call(current + 1)
                                >
                                    "Next"
                                </button>
                            </div>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
