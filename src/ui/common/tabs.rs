use leptos::prelude::*;

use crate::ui::Icon;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    /// Unique identifier for the tab
    pub id: &'static str,
    /// Display label for the tab
    pub label: &'static str,
    /// Optional icon name
    pub icon: Option<&'static str>,
}

impl TabItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            icon: None,
        }
    }

    /// Add an icon to the tab
    pub const fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Tab strip; the caller owns the active id
#[component]
pub fn Tabs(
    /// List of tab items
    tabs: Vec<TabItem>,
    /// Currently active tab ID
    active_tab: RwSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex gap-1 border-b border-slate-200 dark:border-slate-800 overflow-x-auto" role="tablist">
            {tabs.into_iter().map(|tab| {
                let is_active = move || active_tab.get() == tab.id;
                let tab_class = move || {
                    if is_active() {
                        "flex items-center gap-2 px-4 py-3 text-sm font-bold border-b-2 border-blue-600 text-blue-600 dark:text-blue-400"
                    } else {
                        "flex items-center gap-2 px-4 py-3 text-sm font-semibold border-b-2 border-transparent text-slate-500 hover:text-slate-900 dark:hover:text-white"
                    }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| active_tab.set(tab.id)
                        role="tab"
                        aria-selected=move || is_active().to_string()
                        aria-controls=format!("panel-{}", tab.id)
                    >
                        {tab.icon.map(|icon| view! { <Icon name=icon class="text-[18px]" /> })}
                        <span>{tab.label}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Tab panel content component
#[component]
pub fn TabPanel(
    /// Tab ID this panel belongs to
    tab_id: &'static str,
    /// Currently active tab ID
    active_tab: RwSignal<&'static str>,
    /// Panel content
    children: Children,
) -> impl IntoView {
    let is_active = move || active_tab.get() == tab_id;

    view! {
        <div
            class="py-6"
            role="tabpanel"
            id=format!("panel-{}", tab_id)
            style:display=move || if is_active() { "block" } else { "none" }
        >
            {children()}
        </div>
    }
}
