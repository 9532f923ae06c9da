use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardFrame(children: Children) -> impl IntoView {
    view! {
        <Title text="Dashboard | HRMS Lite"/>
        <Layout>
            <div class="mb-6">
                <h2 class="text-2xl font-semibold text-fg">"Dashboard"</h2>
                <p class="text-sm text-fg-muted">"Today's attendance at a glance"</p>
            </div>
            {children()}
        </Layout>
    }
}
