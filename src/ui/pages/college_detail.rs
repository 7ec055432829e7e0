//! College profile with tabbed sections

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::core::directory::{College, PlacementStats, ToggleOutcome};
use crate::core::route;
use crate::ui::api::use_api;
use crate::ui::colleges::{CollegeCover, use_compare, use_shortlist};
use crate::ui::common::{EmptyState, FullPageSpinner, TabItem, TabPanel, Tabs};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PublicLayout;
use crate::ui::toast::use_toast;

const ABOUT_FALLBACK: &str = "Detailed information about this institution is currently being updated. Please check back later or visit the official website below.";

const DETAIL_TABS: [TabItem; 4] = [
    TabItem::new("overview", "Overview").with_icon(icons::INFO),
    TabItem::new("courses", "Courses").with_icon(icons::BOOK),
    TabItem::new("placements", "Placements").with_icon(icons::TRENDING_UP),
    TabItem::new("gallery", "Gallery").with_icon(icons::CALENDAR),
];

#[component]
pub fn CollegeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let api = use_api();
    let toasts = use_toast();

    let college = RwSignal::new(None::<College>);
    let loading = RwSignal::new(true);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        let api = api.clone();
        loading.set(true);
        spawn_local(async move {
            match api.college(&id).await {
                Ok(found) => {
                    college.try_set(Some(found));
                }
                Err(e) => {
                    college.try_set(None);
                    toasts.push_error("Error Loading College", &e);
                }
            }
            loading.try_set(false);
        });
    });

    view! {
        <PublicLayout>
            {move || {
                if loading.get() {
                    view! { <FullPageSpinner message="Loading institution...".to_string() /> }.into_any()
                } else {
                    match college.get() {
                        Some(college) => view! { <CollegeProfile college=college /> }.into_any(),
                        None => {
                            view! {
                                <Title text="College Not Found | Zpluse University" />
                                <div class="min-h-[60vh] flex flex-col items-center justify-center p-8">
                                    <Icon name=icons::SEARCH class="text-6xl text-slate-400 mb-4" />
                                    <h1 class="text-2xl font-bold dark:text-white">"College Not Found"</h1>
                                    <A href=route::COLLEGES attr:class="mt-4 text-blue-600 font-bold">
                                        "Return to Directory"
                                    </A>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }
            }}
        </PublicLayout>
    }
}

#[component]
fn CollegeProfile(college: College) -> impl IntoView {
    let shortlist = use_shortlist();
    let compare = use_compare();
    let toasts = use_toast();
    let active_tab = RwSignal::new("overview");

    let id = StoredValue::new(college.id.clone());
    let saved = move || id.with_value(|id| shortlist.contains(id));
    let compared = move || id.with_value(|id| compare.contains(id));

    let toggle_saved = move |_| {
        let added = id.with_value(|id| shortlist.toggle(id));
        if added {
            toasts.success("Shortlisted", "Saved to your shortlist.");
        } else {
            toasts.info("Removed", "Removed from your shortlist.");
        }
    };
    let toggle_compare = move |_| {
        if id.with_value(|id| compare.toggle(id)) == ToggleOutcome::Added {
            toasts.info("Added to comparison", "Open Compare Colleges to see them side by side.");
        }
    };

    let location = college.location();
    let about = college.description.clone().unwrap_or_else(|| ABOUT_FALLBACK.to_string());
    let fee = college.fee_structure.clone().unwrap_or_else(|| "Contact Admin".to_string());
    let recognition = college
        .accreditation
        .clone()
        .or_else(|| college.affiliation.clone())
        .unwrap_or_else(|| "Nationally Recognized".to_string());
    let courses = college.courses.clone();
    let gallery = college.gallery.clone();
    let placement = college.placement.clone();
    let website = college.website.clone();
    let rating = college
        .rating
        .map(|r| format!("{:.1} Platform Rating", r))
        .unwrap_or_else(|| "Unrated".to_string());

    view! {
        <Title text=format!("{} | Zpluse University", college.name) />

        // Hero
        <div class="relative bg-slate-900 text-white">
            <div class="absolute inset-0 opacity-40">
                <CollegeCover college=college.clone() height="h-full" />
            </div>
            <div class="relative max-w-7xl mx-auto px-6 lg:px-8 pt-24 pb-12 flex flex-col md:flex-row md:items-end gap-8">
                <div class="w-32 h-32 shrink-0 bg-white dark:bg-slate-900 rounded-3xl p-2 shadow-2xl flex items-center justify-center overflow-hidden">
                    {match college.logo_url.clone() {
                        Some(src) => view! { <img src=src alt=format!("{} logo", college.name) class="w-full h-full object-contain" /> }.into_any(),
                        None => view! { <Icon name=icons::SCHOOL class="text-6xl text-slate-300" /> }.into_any(),
                    }}
                </div>
                <div class="flex-1">
                    <span class="inline-flex px-3 py-1 rounded-full bg-white/10 border border-white/20 text-xs font-bold uppercase tracking-wider mb-4">
                        {college.kind.clone().unwrap_or_else(|| "Institution".to_string())}
                    </span>
                    <h1 class="text-4xl md:text-5xl font-black tracking-tight">{college.name.clone()}</h1>
                    <div class="mt-4 flex flex-wrap gap-3 text-slate-200 text-sm font-bold">
                        <span class="flex items-center gap-1.5 bg-black/30 px-3 py-1.5 rounded-lg">
                            <Icon name=icons::LOCATION class="text-sm text-blue-400" />
                            {location.clone()}
                        </span>
                        <span class="flex items-center gap-1.5 bg-black/30 px-3 py-1.5 rounded-lg">
                            <Icon name=icons::STAR class="text-sm text-yellow-400" />
                            {rating}
                        </span>
                        {college.established().map(|year| view! {
                            <span class="flex items-center gap-1.5 bg-black/30 px-3 py-1.5 rounded-lg">
                                <Icon name=icons::CALENDAR class="text-sm text-emerald-400" />
                                {format!("Est. {}", year)}
                            </span>
                        })}
                    </div>
                </div>
            </div>
        </div>

        <div class="max-w-7xl mx-auto px-6 lg:px-8 py-10 grid lg:grid-cols-3 gap-10">
            <div class="lg:col-span-2">
                <Tabs tabs=DETAIL_TABS.to_vec() active_tab=active_tab />

                <TabPanel tab_id="overview" active_tab=active_tab>
                    <section class="space-y-6">
                        <h2 class="text-2xl font-bold text-slate-900 dark:text-white">"About the Institution"</h2>
                        <p class="text-slate-600 dark:text-slate-400 text-lg leading-relaxed">
                            {about}
                        </p>
                        <div class="grid sm:grid-cols-2 gap-4">
                            <StatCard icon=icons::LANGUAGE title="Location" value=location.clone() />
                            <StatCard
                                icon=icons::PAYMENTS
                                title="Estimated Fee"
                                value=fee
                            />
                            <StatCard
                                icon=icons::SHIELD
                                title="Accreditation / Affiliation"
                                value=recognition
                            />
                        </div>
                    </section>
                </TabPanel>

                <TabPanel tab_id="courses" active_tab=active_tab>
                    {if courses.is_empty() {
                        view! { <EmptyState icon=icons::BOOK title="No programs listed yet" /> }.into_any()
                    } else {
                        view! {
                            <h2 class="text-2xl font-bold text-slate-900 dark:text-white mb-6">"Programs Offered"</h2>
                            <div class="flex flex-wrap gap-3">
                                {courses
                                    .into_iter()
                                    .map(|course| view! {
                                        <span class="px-5 py-2.5 bg-slate-100 dark:bg-white/5 rounded-2xl text-slate-700 dark:text-slate-300 font-bold text-sm">
                                            {course}
                                        </span>
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }}
                </TabPanel>

                <TabPanel tab_id="placements" active_tab=active_tab>
                    {match placement {
                        Some(stats) => view! { <PlacementSummary stats=stats /> }.into_any(),
                        None => view! {
                            <EmptyState icon=icons::TRENDING_UP title="Placement data unavailable" hint="This institution has not published placement statistics." />
                        }
                            .into_any(),
                    }}
                </TabPanel>

                <TabPanel tab_id="gallery" active_tab=active_tab>
                    {if gallery.is_empty() {
                        view! { <EmptyState icon=icons::CALENDAR title="No photos yet" /> }.into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                                {gallery
                                    .into_iter()
                                    .map(|src| view! {
                                        <img src=src alt="Campus photo" loading="lazy" class="w-full h-40 object-cover rounded-2xl" />
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }}
                </TabPanel>
            </div>

            // Quick actions
            <aside class="space-y-4">
                <div class="rounded-3xl p-6 bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-800 shadow-xl sticky top-24 space-y-4">
                    <h3 class="font-bold text-slate-900 dark:text-white uppercase tracking-widest text-sm">"Quick Actions"</h3>
                    {match website {
                        Some(href) => view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="w-full py-3 rounded-2xl bg-blue-600 hover:bg-blue-700 text-white font-bold flex items-center justify-center gap-2"
                            >
                                <Icon name=icons::LANGUAGE />
                                "Visit Campus"
                            </a>
                        }
                            .into_any(),
                        None => view! {
                            <div class="w-full py-3 rounded-2xl bg-slate-100 dark:bg-slate-800 text-slate-400 font-bold text-center">
                                "Website Hidden"
                            </div>
                        }
                            .into_any(),
                    }}
                    <button
                        class="w-full py-3 rounded-2xl border border-slate-200 dark:border-slate-700 font-bold flex items-center justify-center gap-2 hover:border-blue-500"
                        on:click=toggle_saved
                    >
                        <Icon name=icons::BOOKMARK />
                        {move || if saved() { "Shortlisted" } else { "Shortlist" }}
                    </button>
                    <button
                        class="w-full py-3 rounded-2xl border border-slate-200 dark:border-slate-700 font-bold flex items-center justify-center gap-2 hover:border-blue-500"
                        on:click=toggle_compare
                    >
                        <Icon name=icons::COMPARE />
                        {move || if compared() { "Remove from Compare" } else { "Add to Compare" }}
                    </button>
                    <A href=route::COMPARE attr:class="block text-center text-sm font-bold text-blue-600 hover:underline">
                        "Open comparison"
                    </A>
                </div>
            </aside>
        </div>
    }
}

#[component]
fn StatCard(icon: &'static str, title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-3xl p-5 border border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 flex items-center gap-4">
            <div class="w-12 h-12 rounded-2xl flex items-center justify-center shrink-0 bg-indigo-100 dark:bg-indigo-900/40 text-indigo-600 dark:text-indigo-400">
                <Icon name=icon class="text-[28px]" />
            </div>
            <div>
                <p class="text-[10px] font-black text-slate-400 uppercase tracking-widest mb-1">{title}</p>
                <p class="text-base font-bold text-slate-900 dark:text-white">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn PlacementSummary(stats: PlacementStats) -> impl IntoView {
    let rate = stats
        .placement_rate
        .map(|rate| format!("{:.0}%", rate))
        .unwrap_or_else(|| "N/A".to_string());

    view! {
        <div class="space-y-6">
            <div class="grid sm:grid-cols-3 gap-4">
                <StatCard icon=icons::PAYMENTS title="Average Package" value=stats.average_package.clone().unwrap_or_else(|| "N/A".to_string()) />
                <StatCard icon=icons::TROPHY title="Highest Package" value=stats.highest_package.clone().unwrap_or_else(|| "N/A".to_string()) />
                <StatCard icon=icons::TRENDING_UP title="Placement Rate" value=rate />
            </div>
            {(!stats.top_recruiters.is_empty()).then(|| view! {
                <div>
                    <h3 class="font-bold text-slate-900 dark:text-white mb-3">"Top Recruiters"</h3>
                    <div class="flex flex-wrap gap-2">
                        {stats
                            .top_recruiters
                            .iter()
                            .map(|name| view! {
                                <span class="px-3 py-1.5 rounded-xl bg-emerald-50 dark:bg-emerald-900/20 text-emerald-700 dark:text-emerald-300 text-sm font-semibold">
                                    {name.clone()}
                                </span>
                            })
                            .collect_view()}
                    </div>
                </div>
            })}
        </div>
    }
}
