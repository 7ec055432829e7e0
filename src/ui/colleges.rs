//! College data shared by the directory, compare and detail pages
//!
//! - `CollegeFeed`: the `/colleges` listing with loading/error flags and a retry
//! - `ShortlistContext`: favourites persisted in localStorage
//! - `CompareContext`: up to three colleges picked for side-by-side view
//! - `CollegeCard`: the directory tile

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::directory::{College, CompareSelection, MAX_COMPARE, ToggleOutcome};
use crate::core::route;
use crate::core::shortlist::{SHORTLIST_STORAGE_KEY, Shortlist};
use crate::ui::api::use_api;
use crate::ui::icon::{Icon, icons};
use crate::ui::storage;
use crate::ui::toast::{ToastContext, use_toast};

/// Reactive handle over one fetch of the college listing
#[derive(Clone, Copy)]
pub struct CollegeFeed {
    pub colleges: RwSignal<Vec<College>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    reload: RwSignal<u32>,
}

impl CollegeFeed {
    /// Fetch again, e.g. from a "Try Again" button
    pub fn retry(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }
}

/// Load `/colleges` (optionally limited) once the page mounts
///
/// Failures raise an error toast titled `error_title` and leave the
/// message in `error` for an inline panel.
pub fn use_college_feed(limit: Option<usize>, error_title: &'static str) -> CollegeFeed {
    let api = use_api();
    let toasts = use_toast();
    let feed = CollegeFeed {
        colleges: RwSignal::new(Vec::new()),
        loading: RwSignal::new(true),
        error: RwSignal::new(None),
        reload: RwSignal::new(0),
    };

    Effect::new(move |_| {
        feed.reload.track();
        let api = api.clone();
        feed.loading.set(true);
        feed.error.set(None);
        spawn_local(async move {
            match api.colleges(limit).await {
                Ok(list) => {
                    feed.colleges.try_set(list);
                }
                Err(e) => {
                    feed.error.try_set(Some(e.to_string()));
                    toasts.push_error(error_title, &e);
                }
            }
            feed.loading.try_set(false);
        });
    });

    feed
}

/// Favourite colleges, shared by every page under the provider
#[derive(Clone, Copy)]
pub struct ShortlistContext {
    pub shortlist: RwSignal<Shortlist>,
}

impl ShortlistContext {
    pub fn contains(&self, id: &str) -> bool {
        self.shortlist.with(|list| list.contains(id))
    }

    /// Toggle `id` and persist; returns true when it is now saved
    pub fn toggle(&self, id: &str) -> bool {
        let mut added = false;
        self.shortlist.update(|list| {
            added = list.toggle(id);
            storage::set_item(SHORTLIST_STORAGE_KEY, &list.to_json());
        });
        added
    }
}

/// Provide the shortlist; storage is read after hydration
pub fn provide_shortlist_context() -> ShortlistContext {
    let ctx = ShortlistContext {
        shortlist: RwSignal::new(Shortlist::new()),
    };

    Effect::new(move |_| {
        let stored = storage::get_item(SHORTLIST_STORAGE_KEY);
        ctx.shortlist.set(Shortlist::from_json(stored.as_deref()));
    });

    provide_context(ctx);
    ctx
}

pub fn use_shortlist() -> ShortlistContext {
    expect_context::<ShortlistContext>()
}

/// Compare tray shared by the directory and the compare page
#[derive(Clone, Copy)]
pub struct CompareContext {
    pub selection: RwSignal<CompareSelection>,
    toasts: ToastContext,
}

impl CompareContext {
    pub fn contains(&self, id: &str) -> bool {
        self.selection.with(|selection| selection.contains(id))
    }

    /// Toggle `id`; a full tray is reported with an info toast
    pub fn toggle(&self, id: &str) -> ToggleOutcome {
        let mut outcome = ToggleOutcome::LimitReached;
        self.selection.update(|selection| outcome = selection.toggle(id));
        if outcome == ToggleOutcome::LimitReached {
            self.toasts.info(
                "Maximum Reached",
                format!("You can only compare up to {} colleges at once.", MAX_COMPARE),
            );
        }
        outcome
    }
}

pub fn provide_compare_context() -> CompareContext {
    let ctx = CompareContext {
        selection: RwSignal::new(CompareSelection::new()),
        toasts: use_toast(),
    };
    provide_context(ctx);
    ctx
}

pub fn use_compare() -> CompareContext {
    expect_context::<CompareContext>()
}

/// Cover image or a gradient placeholder
#[component]
pub fn CollegeCover(college: College, #[prop(default = "h-40")] height: &'static str) -> impl IntoView {
    let class = format!("{} relative overflow-hidden bg-slate-200 dark:bg-slate-800", height);
    view! {
        <div class=class>
            {match college.cover_image_url.clone() {
                Some(src) => {
                    view! {
                        <img
                            alt=college.name.clone()
                            class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                            src=src
                        />
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="w-full h-full bg-gradient-to-tr from-blue-100 to-blue-600/20 dark:from-slate-800 dark:to-blue-900/40 flex items-center justify-center">
                            <Icon name=icons::SCHOOL class="text-5xl text-blue-600/40" />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Directory tile with shortlist and compare actions
#[component]
pub fn CollegeCard(
    college: College,
    /// Whether the college is in the compare tray
    #[prop(into)]
    compared: Signal<bool>,
    on_compare: Callback<String>,
) -> impl IntoView {
    let shortlist = use_shortlist();
    let toasts = use_toast();
    let id = StoredValue::new(college.id.clone());
    let name = StoredValue::new(college.name.clone());
    let saved = move || id.with_value(|id| shortlist.contains(id));

    let toggle_saved = move |_| {
        let added = id.with_value(|id| shortlist.toggle(id));
        let title = if added { "Saved to shortlist" } else { "Removed from shortlist" };
        toasts.info(title, name.get_value());
    };

    let badge = match college.rating {
        Some(rating) if rating > 0.0 => format!("{:.1} Rating", rating),
        _ => "Top Ranked".to_string(),
    };
    let location = college.location();
    let kind = college.kind.clone();
    let affiliation = college.affiliation.clone();
    let href = route::college_path(&college.id);

    view! {
        <article class="group bg-white dark:bg-slate-900 rounded-2xl overflow-hidden border border-slate-100 dark:border-slate-800 shadow-sm hover:shadow-lg hover:border-blue-600/30 transition-all flex flex-col h-full">
            <div class="relative">
                <CollegeCover college=college.clone() />
                <div class="absolute top-3 right-3 bg-white/90 dark:bg-black/80 backdrop-blur text-xs font-bold px-2 py-1 rounded-md text-emerald-600 flex items-center gap-1">
                    <Icon name=icons::STAR class="text-[14px]" />
                    {badge}
                </div>
            </div>
            <div class="p-5 flex flex-col flex-grow">
                <div class="flex justify-between items-start gap-3 mb-2">
                    <div class="flex-1 min-w-0">
                        <h3 class="font-bold text-lg text-slate-900 dark:text-white leading-tight mb-1 line-clamp-2">
                            {college.name.clone()}
                        </h3>
                        <div class="flex items-center text-slate-500 dark:text-slate-400 text-sm">
                            <Icon name=icons::LOCATION class="text-sm mr-1" />
                            {location}
                        </div>
                    </div>
                    <button
                        class="w-10 h-10 shrink-0 rounded-full bg-slate-50 dark:bg-slate-800 flex items-center justify-center border border-slate-100 dark:border-slate-700 hover:bg-blue-50"
                        aria-label="Toggle shortlist"
                        on:click=toggle_saved
                    >
                        {move || {
                            if saved() {
                                view! { <Icon name=icons::BOOKMARK_ADDED class="text-[20px] text-blue-600" /> }
                            } else {
                                view! { <Icon name=icons::BOOKMARK class="text-[20px] text-slate-400" /> }
                            }
                        }}
                    </button>
                </div>
                <div class="mt-3 flex flex-wrap gap-2 mb-5">
                    {kind
                        .map(|kind| {
                            view! {
                                <span class="px-2 py-1 bg-blue-50 dark:bg-blue-900/30 text-blue-600 dark:text-blue-300 rounded text-xs font-medium uppercase tracking-wide">
                                    {kind}
                                </span>
                            }
                        })}
                    {affiliation
                        .map(|affiliation| {
                            view! {
                                <span class="px-2 py-1 bg-purple-50 dark:bg-purple-900/30 text-purple-600 dark:text-purple-300 rounded text-xs font-medium truncate max-w-[140px]">
                                    {affiliation}
                                </span>
                            }
                        })}
                </div>
                <div class="mt-auto flex gap-2">
                    <A
                        href=href
                        attr:class="flex-1 py-3 border border-blue-600/20 text-blue-600 dark:text-blue-400 font-semibold rounded-xl hover:bg-blue-600 hover:text-white flex items-center justify-center gap-2"
                    >
                        "Explore College"
                        <Icon name=icons::ARROW_FORWARD class="text-sm" />
                    </A>
                    <button
                        class=move || {
                            if compared.get() {
                                "px-3 rounded-xl bg-blue-600 text-white"
                            } else {
                                "px-3 rounded-xl border border-slate-200 dark:border-slate-700 text-slate-500 hover:border-blue-500"
                            }
                        }
                        aria-label="Toggle compare"
                        on:click=move |_| on_compare.run(id.get_value())
                    >
                        <Icon name=icons::COMPARE />
                    </button>
                </div>
            </div>
        </article>
    }
}
