use crate::pages::dashboard::utils::REPORT_FILENAME;
use leptos::*;

#[component]
pub fn ReportCard(pending: Signal<bool>, on_generate: Callback<()>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-3">
            <h3 class="text-base font-semibold text-fg">"Attendance Report"</h3>
            <p class="text-sm text-fg-muted">
                "Present days and attendance rate per employee, exported as "
                <code>{REPORT_FILENAME}</code>
            </p>
            <button
                type="button"
                class="inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
                on:click=move |_| on_generate.call(())
            >
                <i class="fas fa-file-csv"></i>
                {move || if pending.get() { "Generating..." } else { "Generate Report" }}
            </button>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn pending_disables_button() {
        let html = render_to_string(move || {
            view! { <ReportCard pending=Signal::derive(|| true) on_generate=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Generating..."));
        assert!(html.contains("disabled"));
        assert!(html.contains("hrms_report.csv"));
    }
}
