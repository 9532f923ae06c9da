use crate::{
    api::DashboardStats, pages::dashboard::utils::attendance_rate, state::fetch::Fetch,
};
use leptos::*;

#[component]
pub fn StatCards(stats: Signal<Fetch<DashboardStats>>) -> impl IntoView {
    let value = move |pick: fn(&DashboardStats) -> String| {
        Signal::derive(move || stats.with(|stats| stats.display_with(pick)))
    };

    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <Metric label="Total Employees" icon="fas fa-users" value=value(|s| s.total_employees.to_string()) />
            <Metric label="Present Today" icon="fas fa-user-check" value=value(|s| s.present_today.to_string()) />
            <Metric label="Absent Today" icon="fas fa-user-times" value=value(|s| s.absent_today.to_string()) />
            <Metric
                label="Attendance Rate"
                icon="fas fa-chart-pie"
                value=value(|s| format!("{}%", attendance_rate(s.present_today, s.total_employees)))
            />
        </div>
    }
}

#[component]
fn Metric(
    label: &'static str,
    icon: &'static str,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-surface-elevated border border-border shadow-sm">
            <div class="flex items-center justify-between">
                <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
                <i class=format!("{} text-fg-muted", icon)></i>
            </div>
            <p class="mt-3 text-3xl font-extrabold text-fg">{move || value.get()}</p>
        </div>
    }
}
