use crate::state::notifications::{use_notifications, NoticeKind};
use leptos::*;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = use_notifications();
    let queue = notifications.queue();

    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || queue.get().items().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "bg-status-success-bg border border-status-success-border text-status-success-text",
                        NoticeKind::Error => "bg-status-error-bg border border-status-error-border text-status-error-text",
                    };
                    let id = notice.id;
                    view! {
                        <div class=format!("{} px-4 py-3 rounded shadow flex items-start justify-between gap-3", class) role="status">
                            <p class="text-sm">{notice.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-sm opacity-75 hover:opacity-100"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
