use crate::pages::dashboard::{
    components::{DepartmentLoad, RecentHires, ReportCard, StatCards},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let stats = vm.stats();
    let report_pending: Signal<bool> = vm.report_action.pending().into();

    view! {
        <DashboardFrame>
            <div class="space-y-6">
                <StatCards stats=stats />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2">
                        <DepartmentLoad stats=stats />
                    </div>
                    <div class="space-y-6">
                        <RecentHires stats=stats />
                        <ReportCard
                            pending=report_pending
                            on_generate=Callback::new(move |_| vm.generate_report())
                        />
                    </div>
                </div>
            </div>
        </DashboardFrame>
    }
}
