use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! {
        <Title text="Attendance | HRMS Lite"/>
        <Layout>
            <div class="mb-6">
                <h2 class="text-2xl font-semibold text-fg">"Attendance"</h2>
                <p class="text-sm text-fg-muted">"Mark daily attendance and review history"</p>
            </div>
            {children()}
        </Layout>
    }
}
