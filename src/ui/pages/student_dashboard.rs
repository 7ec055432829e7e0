//! Student dashboard
//!
//! Enrolled courses with progress, a few suggested colleges and quick links
//! into the directory.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::lms::{Enrollment, LearningSummary};
use crate::core::role::Role;
use crate::core::route;
use crate::ui::api::use_api;
use crate::ui::colleges::{CollegeCover, use_college_feed};
use crate::ui::common::{BackendUnavailable, EmptyState, Spinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::DashboardLayout;
use crate::ui::toast::use_toast;

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toast();
    let suggestions = use_college_feed(Some(3), "Error loading colleges");

    let enrollments = RwSignal::new(Vec::<Enrollment>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        reload.track();
        let api = api.clone();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api.my_enrollments().await {
                Ok(list) => {
                    enrollments.try_set(list);
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                    toasts.push_error("Error loading courses", &e);
                }
            }
            loading.try_set(false);
        });
    });

    let summary = Memo::new(move |_| enrollments.with(|list| LearningSummary::from_enrollments(list)));

    view! {
        <Title text="My Learning | Zpluse University" />
        <DashboardLayout title="My Learning" role=Role::Student>
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-8">
                <SummaryTile icon=icons::BOOK label="Enrolled Courses" value=Signal::derive(move || summary.get().enrolled.to_string()) />
                <SummaryTile icon=icons::TROPHY label="Completed" value=Signal::derive(move || summary.get().completed.to_string()) />
                <SummaryTile icon=icons::TRENDING_UP label="Average Progress" value=Signal::derive(move || format!("{}%", summary.get().average_progress)) />
            </div>

            <div class="grid lg:grid-cols-3 gap-8">
                <section class="lg:col-span-2 bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6">
                    <h2 class="text-lg font-bold mb-4">"My Courses"</h2>
                    {move || {
                        if loading.get() {
                            view! { <div class="py-12 flex justify-center"><Spinner /></div> }.into_any()
                        } else if let Some(message) = error.get() {
                            view! {
                                <BackendUnavailable
                                    message=message
                                    on_retry=Callback::new(move |_| reload.update(|n| *n = n.wrapping_add(1)))
                                />
                            }
                                .into_any()
                        } else if enrollments.with(Vec::is_empty) {
                            view! {
                                <EmptyState
                                    icon=icons::BOOK
                                    title="You are not enrolled in any courses yet"
                                    hint="Browse colleges to find programs that fit your goals."
                                />
                            }
                                .into_any()
                        } else {
                            view! {
                                <ul class="space-y-4">
                                    {enrollments
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, enrollment)| view! { <EnrollmentRow enrollment=enrollment index=index /> })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <aside class="bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-lg font-bold">"Suggested Colleges"</h2>
                        <A href=route::COLLEGES attr:class="text-sm font-semibold text-blue-600 hover:underline">
                            "View all"
                        </A>
                    </div>
                    <Show
                        when=move || !suggestions.loading.get()
                        fallback=|| view! { <div class="py-8 flex justify-center"><Spinner /></div> }
                    >
                        <div class="space-y-4">
                            <For
                                each=move || suggestions.colleges.get()
                                key=|college| college.id.clone()
                                children=|college| {
                                    let href = route::college_path(&college.id);
                                    let location = college.location();
                                    let name = college.name.clone();
                                    view! {
                                        <A href=href attr:class="flex gap-3 items-center group">
                                            <div class="w-16 shrink-0 rounded-lg overflow-hidden">
                                                <CollegeCover college=college height="h-12" />
                                            </div>
                                            <div class="min-w-0">
                                                <p class="font-semibold text-sm truncate group-hover:text-blue-600">{name}</p>
                                                <p class="text-xs text-slate-500 truncate">{location}</p>
                                            </div>
                                        </A>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </aside>
            </div>
        </DashboardLayout>
    }
}

#[component]
fn SummaryTile(icon: &'static str, label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 p-5 rounded-2xl bg-white dark:bg-slate-900 border border-slate-100 dark:border-slate-800">
            <div class="w-12 h-12 rounded-xl bg-blue-50 dark:bg-blue-900/30 text-blue-600 flex items-center justify-center">
                <Icon name=icon />
            </div>
            <div>
                <p class="text-2xl font-extrabold">{move || value.get()}</p>
                <p class="text-xs font-semibold text-slate-500 uppercase tracking-wide">{label}</p>
            </div>
        </div>
    }
}

#[component]
fn EnrollmentRow(enrollment: Enrollment, index: usize) -> impl IntoView {
    let progress = enrollment.progress();
    let completed = enrollment.is_completed();
    let title = enrollment.title_or(index);
    let category = enrollment.course_category.clone().unwrap_or_else(|| "General".to_string());
    let live_href = route::live_class_path(&enrollment.course_id);

    view! {
        <li class="p-4 rounded-xl border border-slate-100 dark:border-slate-800 hover:border-blue-500/40">
            <div class="flex items-start justify-between gap-4 mb-3">
                <div class="min-w-0">
                    <p class="text-xs font-semibold text-blue-600 uppercase tracking-wide">{category}</p>
                    <h3 class="font-bold truncate">{title}</h3>
                </div>
                {if completed {
                    view! {
                        <span class="shrink-0 px-2 py-1 rounded-md bg-emerald-50 dark:bg-emerald-900/30 text-emerald-600 text-xs font-bold">
                            "Completed"
                        </span>
                    }
                        .into_any()
                } else {
                    view! {
                        <A
                            href=live_href
                            attr:class="shrink-0 flex items-center gap-1 px-3 py-1.5 rounded-lg bg-blue-600 text-white text-xs font-bold"
                        >
                            <Icon name=icons::VIDEO class="text-[16px]" />
                            "Join Live"
                        </A>
                    }
                        .into_any()
                }}
            </div>
            <div class="flex items-center gap-3">
                <div class="flex-1 h-2 rounded-full bg-slate-100 dark:bg-slate-800 overflow-hidden">
                    <div
                        class=if completed { "h-full rounded-full bg-emerald-500" } else { "h-full rounded-full bg-blue-600" }
                        style=format!("width: {:.0}%", progress)
                    ></div>
                </div>
                <span class="text-xs font-bold text-slate-500 w-10 text-right">{format!("{:.0}%", progress)}</span>
            </div>
        </li>
    }
}
