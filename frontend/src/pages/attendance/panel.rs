use crate::{
    api::{AttendanceStatus, EmployeeId},
    pages::attendance::{
        components::{DailySummary, HistoryPanel, RosterPanel, SummaryTable},
        layout::AttendanceFrame,
        view_model::use_attendance_view_model,
    },
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let state = vm.read_state();
    let date = Signal::derive(move || state.with(|s| s.selected_date()));
    let daily = Signal::derive(move || state.with(|s| s.daily().clone()));

    view! {
        <AttendanceFrame>
            <div class="space-y-6">
                <DailySummary
                    date=date
                    daily=daily
                    on_date=Callback::new(move |date| vm.change_date(date))
                />
                <div class="grid grid-cols-1 lg:grid-cols-5 gap-6">
                    <div class="lg:col-span-3">
                        <RosterPanel
                            state=state
                            on_search=Callback::new(move |search| vm.set_search(search))
                            on_select=Callback::new(move |id| vm.select(id))
                            on_mark=Callback::new(move |(id, status): (EmployeeId, AttendanceStatus)| vm.mark(id, status))
                            on_refresh=Callback::new(move |_| vm.load_roster())
                        />
                    </div>
                    <div class="lg:col-span-2">
                        <HistoryPanel state=state on_close=Callback::new(move |_| vm.clear_selection()) />
                    </div>
                </div>
                <SummaryTable summary=vm.summary() />
            </div>
        </AttendanceFrame>
    }
}
