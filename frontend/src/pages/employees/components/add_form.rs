use crate::{
    api::{ApiError, Department, EmployeeStatus},
    components::error::InlineErrorMessage,
    pages::employees::utils::EmployeeFormState,
};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm";

#[component]
pub fn AddEmployeeModal(
    is_open: Signal<bool>,
    form: EmployeeFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let employee_id = form.employee_id_signal();
    let full_name = form.full_name_signal();
    let email = form.email_signal();
    let department = form.department_signal();
    let designation = form.designation_signal();
    let status = form.status_signal();

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <form
                    class="relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit.call(());
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">"Add Employee"</h2>
                    <InlineErrorMessage error=error />
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <label class="block text-sm font-medium text-fg">
                            "Employee ID"
                            <input
                                class=INPUT_CLASS
                                placeholder="EMP-001"
                                prop:value=move || employee_id.get()
                                on:input=move |ev| employee_id.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="block text-sm font-medium text-fg">
                            "Department"
                            <select
                                class=INPUT_CLASS
                                on:change=move |ev| {
                                    if let Some(value) = Department::from_label(&event_target_value(&ev)) {
                                        department.set(value);
                                    }
                                }
                            >
                                {Department::ALL
                                    .into_iter()
                                    .map(|option| view! {
                                        <option
                                            value=option.as_str()
                                            selected=move || department.get() == option
                                        >
                                            {option.as_str()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="block text-sm font-medium text-fg">
                            "Full Name"
                            <input
                                class=INPUT_CLASS
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="block text-sm font-medium text-fg">
                            "Designation"
                            <input
                                class=INPUT_CLASS
                                placeholder="Staff"
                                prop:value=move || designation.get()
                                on:input=move |ev| designation.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="block text-sm font-medium text-fg sm:col-span-2">
                            "Email"
                            <input
                                type="email"
                                class=INPUT_CLASS
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <fieldset class="sm:col-span-2">
                            <legend class="text-sm font-medium text-fg">"Status"</legend>
                            <div class="mt-1 flex gap-4">
                                {[EmployeeStatus::Active, EmployeeStatus::Inactive]
                                    .into_iter()
                                    .map(|option| view! {
                                        <label class="inline-flex items-center gap-2 text-sm text-fg">
                                            <input
                                                type="radio"
                                                name="employee-status"
                                                prop:checked=move || status.get() == option
                                                on:change=move |_| status.set(option)
                                            />
                                            {option.as_str()}
                                        </label>
                                    })
                                    .collect_view()}
                            </div>
                        </fieldset>
                    </div>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_close.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Saving..." } else { "Add Employee" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
