use leptos::*;

/// Shown when a list has loaded and holds nothing, as opposed to a
/// placeholder for data that has not arrived.
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    let icon_class = icon.unwrap_or_else(|| "fas fa-folder-open".to_string());
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <i class=format!("{} text-3xl text-fg-muted", icon_class) aria-hidden="true"></i>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}
