use crate::{
    components::confirm_dialog::ConfirmDialog,
    pages::employees::{
        components::{AddEmployeeModal, EmployeeSearch, EmployeeTable},
        layout::EmployeesFrame,
        view_model::use_employees_view_model,
    },
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let pending_delete = vm.pending_delete;
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|employee| {
                format!(
                    "{} ({}) and all of their attendance records will be removed.",
                    employee.full_name, employee.employee_id
                )
            })
            .unwrap_or_default()
    });

    view! {
        <EmployeesFrame>
            <div class="space-y-6">
                <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <h2 class="text-2xl font-semibold text-fg">"Employees"</h2>
                        <p class="text-sm text-fg-muted">"Manage the employee roster"</p>
                    </div>
                    <div class="flex flex-col gap-2 sm:flex-row sm:items-center">
                        <EmployeeSearch
                            search=vm.search.into()
                            on_search=Callback::new(move |value| vm.set_search(value))
                        />
                        <button
                            type="button"
                            class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| vm.open_form()
                        >
                            <i class="fas fa-plus"></i>
                            "Add Employee"
                        </button>
                    </div>
                </div>
                <EmployeeTable
                    page=vm.visible_page()
                    on_page=Callback::new(move |page| vm.page.set(page))
                    on_delete=Callback::new(move |employee| vm.request_delete(employee))
                />
            </div>
            <AddEmployeeModal
                is_open=vm.form_open.into()
                form=vm.form
                error=vm.form_error.into()
                pending=vm.saving.into()
                on_submit=Callback::new(move |_| vm.submit_form())
                on_close=Callback::new(move |_| vm.close_form())
            />
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete employee permanently?"
                message=delete_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="Delete"
                confirm_disabled=Signal::from(vm.deleting)
                destructive=true
            />
        </EmployeesFrame>
    }
}
