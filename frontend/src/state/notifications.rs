use leptos::*;

const MAX_VISIBLE: usize = 4;
#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Transient toasts shared by every page through context.
#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NoticeQueue>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(NoticeQueue::default()),
        }
    }

    pub fn queue(&self) -> RwSignal<NoticeQueue> {
        self.queue
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.push(NoticeKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let queue = self.queue;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            let _ = queue.try_update(|queue| queue.dismiss(id));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(|| {
        let notifications = Notifications::new();
        provide_context(notifications);
        notifications
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_most_recent_notices() {
        let mut queue = NoticeQueue::default();
        for n in 0..6 {
            queue.push(NoticeKind::Success, format!("notice {}", n));
        }
        assert_eq!(queue.items().len(), MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "notice 2");
    }

    #[test]
    fn dismiss_removes_only_target() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(NoticeKind::Error, "failed");
        let second = queue.push(NoticeKind::Success, "saved");
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn notifications_push_into_queue() {
        crate::test_support::ssr::with_runtime(|| {
            let notifications = Notifications::new();
            notifications.error("Failed to mark attendance");
            notifications.success("Marked Present");
            let queue = notifications.queue().get();
            assert_eq!(queue.items().len(), 2);
            assert_eq!(queue.items()[0].kind, NoticeKind::Error);
        });
    }
}
