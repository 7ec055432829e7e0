//! Reusable message components for inline errors, notices and failed loads

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="flex items-center gap-2 p-3 rounded-xl bg-red-50 dark:bg-red-900/20 text-sm text-red-600 dark:text-red-400 border border-red-100 dark:border-red-900/40">
                <Icon name=icons::ERROR />
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Success message component
#[component]
pub fn SuccessMessage(
    /// Success message signal - shows when Some, hidden when None
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="flex items-center gap-2 p-3 rounded-xl bg-emerald-50 dark:bg-emerald-900/20 text-sm text-emerald-700 dark:text-emerald-400 border border-emerald-100 dark:border-emerald-900/40">
                <Icon name=icons::CHECK />
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Panel shown in place of content whose API load failed
#[component]
pub fn BackendUnavailable(
    /// Error text from the failed call
    message: String,
    /// Invoked by the "Try Again" button
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center gap-3 py-16 px-6 rounded-2xl border border-dashed border-slate-200 dark:border-slate-700">
            <Icon name=icons::CLOUD_OFF class="text-[40px] text-slate-400" />
            <h3 class="text-lg font-bold text-slate-900 dark:text-white">"Backend Unavailable"</h3>
            <p class="text-sm text-slate-500 dark:text-slate-400 max-w-md">{message}</p>
            <button
                class="mt-2 inline-flex items-center gap-2 px-4 py-2 rounded-xl bg-blue-600 hover:bg-blue-700 text-white text-sm font-bold"
                on:click=move |_| on_retry.run(())
            >
                <Icon name=icons::REFRESH class="text-[18px]" />
                "Try Again"
            </button>
        </div>
    }
}

/// Neutral message for an empty list
#[component]
pub fn EmptyState(
    icon: &'static str,
    title: &'static str,
    #[prop(default = "")]
    hint: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center gap-2 py-12 text-slate-500 dark:text-slate-400">
            <Icon name=icon class="text-[36px]" />
            <p class="font-semibold text-slate-700 dark:text-slate-200">{title}</p>
            {(!hint.is_empty()).then(|| view! { <p class="text-sm">{hint}</p> })}
        </div>
    }
}
