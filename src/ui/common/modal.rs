use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Dialog with a title bar, closed by the X button, Escape, or the backdrop
#[component]
pub fn Modal(
    /// Modal title
    title: &'static str,
    /// Whether modal is open
    is_open: RwSignal<bool>,
    /// Modal content
    children: ChildrenFn,
    /// Maximum width class
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                is_open.set(false);
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-slate-900/60 backdrop-blur-sm"
                    on:click=move |_| is_open.set(false)
                ></div>
                <div class=format!(
                    "relative w-full {} rounded-2xl bg-white dark:bg-slate-900 shadow-2xl border border-slate-100 dark:border-slate-800",
                    max_width
                )>
                    <div class="flex items-center justify-between px-6 py-4 border-b border-slate-100 dark:border-slate-800">
                        <h3 class="text-lg font-bold text-slate-900 dark:text-white">{title}</h3>
                        <button
                            class="w-8 h-8 rounded-full flex items-center justify-center text-slate-400 hover:bg-slate-100 dark:hover:bg-slate-800"
                            on:click=move |_| is_open.set(false)
                            aria-label="Close modal"
                        >
                            <Icon name=icons::CLOSE class="text-[20px]" />
                        </button>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
