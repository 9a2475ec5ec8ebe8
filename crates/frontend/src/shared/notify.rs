//! Toast notification service.
//!
//! Provided once via context (like `ModalService`); any view or view-model
//! can push a success or error toast. `error_once` deduplicates by a stable
//! key so repeated renders of the same server message do not stack
//! duplicate toasts.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub text: String,
    /// Stable identity used by `error_once`; `None` means never deduped.
    pub dedup_key: Option<String>,
}

/// Centralized toast stack.
#[derive(Clone, Copy)]
pub struct NotifyService {
    notifications: RwSignal<Vec<Notification>>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text.into(), None);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NotificationKind::Error, text.into(), None);
    }

    /// Push an error toast unless one with the same key is still visible.
    pub fn error_once(&self, dedup_key: impl Into<String>, text: impl Into<String>) {
        let key = dedup_key.into();
        let already_shown = self
            .notifications
            .with_untracked(|list| list.iter().any(|n| n.dedup_key.as_deref() == Some(&key)));
        if !already_shown {
            self.push(NotificationKind::Error, text.into(), Some(key));
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.notifications.update(|list| list.retain(|n| n.id != id));
    }

    pub fn notifications(&self) -> RwSignal<Vec<Notification>> {
        self.notifications
    }

    fn push(&self, kind: NotificationKind, text: String, dedup_key: Option<String>) {
        let id = Uuid::new_v4();
        self.notifications.update(|list| {
            list.push(Notification {
                id,
                kind,
                text,
                dedup_key,
            })
        });

        let service = *self;
        Timeout::new(AUTO_DISMISS_MS, move || service.dismiss(id)).forget();
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to use the notification service.
pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>()
        .expect("NotifyService not found. Wrap your app with the App root component.")
}

/// Renders the toast stack. Mounted once at the application root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notify();
    let notifications = service.notifications();

    view! {
        <div class="notification-host" dir="rtl">
            <For
                each=move || notifications.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let class = match n.kind {
                        NotificationKind::Success => "notification notification--success",
                        NotificationKind::Error => "notification notification--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class on:click=move |_| service.dismiss(id)>
                            {n.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
