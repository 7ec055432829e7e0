//! College directory: search, sort, shortlist and the compare tray

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::directory::{MAX_COMPARE, SortKey, filter_colleges, sort_colleges};
use crate::core::route;
use crate::ui::colleges::{CollegeCard, use_college_feed, use_compare, use_shortlist};
use crate::ui::common::{BackendUnavailable, SkeletonGrid};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PublicLayout;

#[component]
pub fn CollegesPage() -> impl IntoView {
    let feed = use_college_feed(None, "Error loading colleges");
    let compare = use_compare();
    let shortlist = use_shortlist();

    let search_query = RwSignal::new(String::new());
    let sort_key = RwSignal::new(SortKey::default());
    let saved_only = RwSignal::new(false);

    // Filtered and sorted colleges
    let visible = Memo::new(move |_| {
        let query = search_query.get();
        let mut result = feed.colleges.with(|all| filter_colleges(all, query.trim()));
        if saved_only.get() {
            shortlist.shortlist.with(|list| result.retain(|c| list.contains(&c.id)));
        }
        sort_colleges(&mut result, sort_key.get());
        result
    });

    let on_compare = Callback::new(move |id: String| {
        compare.toggle(&id);
    });

    view! {
        <Title text="Find Colleges | Zpluse University" />
        <PublicLayout>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
                <section class="mb-8">
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-blue-50 dark:bg-blue-900/30 text-blue-600 text-xs font-semibold mb-3 border border-blue-100 dark:border-blue-800">
                        <span class="w-2 h-2 rounded-full bg-blue-600 animate-pulse"></span>
                        "Zpluse University Directory"
                    </div>
                    <h1 class="text-3xl sm:text-4xl font-extrabold text-slate-900 dark:text-white mb-2">
                        "Find Your " <span class="text-blue-600">"Perfect Campus"</span>
                    </h1>
                    <p class="text-slate-500 dark:text-slate-400">
                        "Explore top-rated institutions tailored to your future."
                    </p>
                </section>

                // Search and sort
                <section class="flex flex-col md:flex-row gap-3 mb-6">
                    <div class="relative flex-1">
                        <span class="absolute inset-y-0 left-0 pl-4 flex items-center pointer-events-none text-slate-400">
                            <Icon name=icons::SEARCH />
                        </span>
                        <input
                            type="search"
                            class="block w-full pl-12 pr-4 py-3.5 rounded-2xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-900 text-slate-900 dark:text-white placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-blue-500/40"
                            placeholder="Search by college name or city..."
                            aria-label="Search colleges"
                            bind:value=search_query
                        />
                    </div>
                    <select
                        class="px-4 py-3.5 rounded-2xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-900 text-sm font-semibold"
                        aria-label="Sort colleges"
                        prop:value=move || sort_key.get().as_str()
                        on:change=move |ev| sort_key.set(SortKey::parse(&event_target_value(&ev)))
                    >
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                            .collect_view()}
                    </select>
                    <button
                        class=move || {
                            if saved_only.get() {
                                "flex items-center gap-2 px-4 py-3 rounded-2xl bg-blue-600 text-white text-sm font-bold"
                            } else {
                                "flex items-center gap-2 px-4 py-3 rounded-2xl border border-slate-200 dark:border-slate-700 text-sm font-semibold text-slate-600 dark:text-slate-300"
                            }
                        }
                        on:click=move |_| saved_only.update(|v| *v = !*v)
                    >
                        <Icon name=icons::BOOKMARK class="text-[18px]" />
                        {move || format!("Shortlist ({})", shortlist.shortlist.with(|l| l.len()))}
                    </button>
                </section>

                <section>
                    {move || {
                        if feed.loading.get() {
                            view! { <SkeletonGrid count=6 /> }.into_any()
                        } else if let Some(message) = feed.error.get() {
                            view! {
                                <BackendUnavailable
                                    message=message
                                    on_retry=Callback::new(move |_| feed.retry())
                                />
                            }
                                .into_any()
                        } else if visible.with(Vec::is_empty) {
                            view! {
                                <div class="text-center py-20 bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800">
                                    <Icon name=icons::SEARCH class="text-[40px] text-slate-400" />
                                    <h3 class="mt-3 text-xl font-bold text-slate-900 dark:text-white">
                                        {move || format!("No results matching \"{}\"", search_query.get())}
                                    </h3>
                                    <p class="text-slate-500 dark:text-slate-400 mt-2 text-sm">
                                        "Try adjusting your search terms to find more institutions."
                                    </p>
                                    <button
                                        class="mt-6 px-4 py-2 bg-blue-600 text-white text-sm font-semibold rounded-lg hover:bg-blue-700"
                                        on:click=move |_| {
                                            search_query.set(String::new());
                                            saved_only.set(false);
                                        }
                                    >
                                        "Clear all filters"
                                    </button>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <p class="text-sm text-slate-500 mb-4">
                                    {move || format!("Showing {} institutions", visible.with(Vec::len))}
                                </p>
                                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                    <For
                                        each=move || visible.get()
                                        key=|college| college.id.clone()
                                        children=move |college| {
                                            let id = college.id.clone();
                                            let compared = Signal::derive(move || compare.contains(&id));
                                            view! { <CollegeCard college=college compared=compared on_compare=on_compare /> }
                                        }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </div>

            // Compare tray
            <Show when=move || !compare.selection.with(|s| s.is_empty())>
                <div class="fixed bottom-6 left-1/2 -translate-x-1/2 z-40 flex items-center gap-4 px-5 py-3 rounded-2xl bg-slate-900 text-white shadow-2xl">
                    <Icon name=icons::COMPARE />
                    <span class="text-sm font-semibold">
                        {move || format!("{}/{} selected for comparison", compare.selection.with(|s| s.len()), MAX_COMPARE)}
                    </span>
                    <A
                        href=route::COMPARE
                        attr:class="px-4 py-2 rounded-xl bg-blue-600 hover:bg-blue-500 text-sm font-bold"
                    >
                        "Compare Now"
                    </A>
                </div>
            </Show>
        </PublicLayout>
    }
}
