use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeesFrame(children: Children) -> impl IntoView {
    view! {
        <Title text="Employees | HRMS Lite"/>
        <Layout>{children()}</Layout>
    }
}
