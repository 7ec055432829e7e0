//! Toast notifications
//!
//! `ToastContext` owns the queue; `ToastContainer` renders it in the top-right
//! corner. Each toast schedules an expiry sweep for its own deadline; the
//! user can close it earlier.

use leptos::prelude::*;

use super::icon::{Icon, icons};
use crate::core::clock::now_millis;
use crate::core::toast::{Toast, ToastId, ToastKind, ToastQueue};

/// Handle for pushing toasts from anywhere under the provider
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    pub fn show(&self, kind: ToastKind, title: impl Into<String>, message: Option<String>) -> ToastId {
        let mut id = ToastId::nil();
        let mut deadline = 0;
        let title = title.into();
        self.queue.update(|queue| {
            id = queue.push(kind, title, message, now_millis());
            deadline = queue.entries().last().map_or(0, Toast::expires_at);
        });
        self.schedule_expiry(deadline);
        id
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Success, title, Some(message.into()))
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Error, title, Some(message.into()))
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) -> ToastId {
        self.show(ToastKind::Info, title, Some(message.into()))
    }

    /// Error toast whose body is the error's display text
    pub fn push_error(&self, title: impl Into<String>, err: &impl std::fmt::Display) -> ToastId {
        self.error(title, err.to_string())
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|queue| {
            queue.remove(id);
        });
    }

    /// Drop every toast whose lifetime has elapsed at `now_ms`
    pub fn expire(&self, now_ms: i64) {
        self.queue.try_update(|queue| queue.expire(now_ms));
    }

    #[cfg(feature = "hydrate")]
    fn schedule_expiry(&self, deadline: i64) {
        use crate::core::toast::TOAST_TTL_MS;
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            // Sweep no earlier than this toast's own deadline
            ctx.expire(now_millis().max(deadline));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule_expiry(&self, _deadline: i64) {}
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toast_context() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}

/// Renders the live queue; place once near the root
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="fixed top-4 right-4 z-[100] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]" role="status" aria-live="polite">
            <For
                each=move || toasts.queue().get().entries().to_vec()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toast();
    let id = toast.id;

    let icon = toast.kind.icon();
    let accent = match toast.kind {
        ToastKind::Success => "border-emerald-500/40 text-emerald-500",
        ToastKind::Error => "border-red-500/40 text-red-500",
        ToastKind::Info => "border-blue-500/40 text-blue-500",
    };
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-xl border bg-white dark:bg-slate-900 shadow-lg animate-slide-in {}",
        accent
    );

    view! {
        <div class=container_class>
            <Icon name=icon />
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-semibold text-slate-900 dark:text-white">{toast.title}</h4>
                {toast.message.map(|message| view! {
                    <p class="text-xs text-slate-500 dark:text-slate-400 mt-0.5">{message}</p>
                })}
            </div>
            <button
                class="text-slate-400 hover:text-slate-700 dark:hover:text-white transition-colors"
                aria-label="Dismiss"
                on:click=move |_| toasts.dismiss(id)
            >
                <Icon name=icons::CLOSE class="text-[18px]" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::toast::TOAST_TTL_MS;

    #[test]
    fn test_toast_is_gone_after_its_lifetime() {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let toasts = ToastContext::new();
            toasts.info("Starting Class...", "Connecting to the room");
            let created = toasts.queue().with_untracked(|q| q.entries()[0].created_at);

            toasts.expire(created + i64::from(TOAST_TTL_MS) - 1);
            assert_eq!(toasts.queue().with_untracked(ToastQueue::len), 1);

            toasts.expire(created + i64::from(TOAST_TTL_MS) + 1);
            assert!(toasts.queue().with_untracked(ToastQueue::is_empty));
        });
    }

    #[test]
    fn test_dismiss_before_expiry() {
        let owner = Owner::new_root(None);
        owner.with(|| {
            let toasts = ToastContext::new();
            let first = toasts.error("Upload Error", "File too large");
            toasts.success("Course Created", "Saved");

            toasts.dismiss(first);

            let titles = toasts.queue().with_untracked(|q| {
                q.entries().iter().map(|t| t.title.clone()).collect::<Vec<_>>()
            });
            assert_eq!(titles, vec!["Course Created".to_string()]);
        });
    }
}
