use crate::shared::api::ApiError;
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Notices close by themselves after this delay
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

/// Сервис всплывающих уведомлений
#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text.into());
    }

    /// Shows the backend message of a failed call
    pub fn api_error(&self, err: &ApiError) {
        self.error(err.user_message());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.notices.try_update(|n| n.retain(|x| x.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = Uuid::new_v4();
        self.notices.update(|n| n.push(Notice { id, kind, text }));
        let service = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            service.dismiss(id);
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional lookup for components that may render outside the shell
pub fn use_notifications() -> Option<NotificationService> {
    use_context::<NotificationService>()
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_context::<NotificationService>().unwrap_or_default();

    view! {
        <div class="notice-stack">
            <For
                each=move || service.notices.get()
                key=|n| n.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="status">
                            <span class="notice__text">{notice.text}</span>
                            <button class="notice__close" on:click=move |_| service.dismiss(id)>
                                {icon(Icon::X)}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
