//! Study Hub: the student's focused learning area
//!
//! Home with enrolled courses, a personal live room, a performance overview
//! and the account profile. Every page is mounted behind a student-only guard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::lms::Enrollment;
use crate::core::live_class::{personal_room_url, user_room_name};
use crate::core::role::Role;
use crate::core::route;
use crate::ui::api::{use_api, use_services};
use crate::ui::auth::{initials, use_auth_context};
use crate::ui::common::{BackendUnavailable, EmptyState};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{CONTACT_EMAIL, DashboardLayout};
use crate::ui::toast::use_toast;

const QUICK_LINKS: [(&str, &str, &str, &str); 3] = [
    ("Live Classes", route::STUDY_HUB_LIVE, icons::VIDEO, "text-blue-500"),
    ("Performance", route::STUDY_HUB_PERFORMANCE, icons::TRENDING_UP, "text-green-500"),
    ("My Profile", route::STUDY_HUB_PROFILE, icons::ACCOUNT, "text-purple-500"),
];

#[component]
fn BackToHub() -> impl IntoView {
    view! {
        <div class="text-center mt-6">
            <A href=route::STUDY_HUB attr:class="inline-flex items-center gap-1 text-sm font-medium text-slate-400 hover:text-blue-600">
                <Icon name=icons::ARROW_BACK class="text-[16px]" />
                "Back to Study Hub"
            </A>
        </div>
    }
}

#[component]
pub fn StudyHubPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth_context();
    let toasts = use_toast();

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
                    toasts.push_error("Could not load courses", &e);
                }
            }
            loading.try_set(false);
        });
    });

    let first_name = move || {
        auth.user()
            .map(|user| user.first_name())
            .unwrap_or_else(|| "Student".to_string())
    };

    view! {
        <Title text="Study Hub | Zpluse University" />
        <DashboardLayout title="Study Hub" role=Role::Student>
            <div class="max-w-5xl mx-auto">
                <div class="mb-8">
                    <h2 class="text-2xl font-bold mb-1">{move || format!("Welcome back, {}", first_name())}</h2>
                    <p class="text-sm text-slate-500 dark:text-slate-400">
                        "Pick up where you left off. Your Zpluse University courses are waiting."
                    </p>
                </div>

                <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 mb-10">
                    {QUICK_LINKS
                        .into_iter()
                        .map(|(label, href, icon, color)| {
                            view! {
                                <A
                                    href=href
                                    attr:class="flex flex-col items-center gap-2 p-5 rounded-2xl bg-white dark:bg-slate-900 border border-slate-100 dark:border-slate-800 hover:shadow-md hover:-translate-y-0.5 transition-all"
                                >
                                    <span class=format!("material-symbols-outlined text-3xl {}", color)>{icon}</span>
                                    <span class="text-sm font-semibold text-slate-700 dark:text-slate-200">{label}</span>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>

                <h2 class="text-lg font-bold mb-4">"My Courses"</h2>
                {move || {
                    if loading.get() {
                        view! {
                            <div class="grid gap-4 sm:grid-cols-2">
                                <div class="h-28 rounded-2xl bg-slate-100 dark:bg-slate-800 animate-pulse"></div>
                                <div class="h-28 rounded-2xl bg-slate-100 dark:bg-slate-800 animate-pulse"></div>
                            </div>
                        }
                            .into_any()
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
                            <div class="text-center">
                                <EmptyState icon=icons::SCHOOL title="No courses yet" />
                                <A
                                    href=route::COLLEGES
                                    attr:class="inline-block px-5 py-2.5 bg-blue-600 text-white text-sm font-bold rounded-xl hover:bg-blue-700"
                                >
                                    "Explore Colleges"
                                </A>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid gap-4 sm:grid-cols-2">
                                {enrollments
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, enrollment)| view! { <CourseCard enrollment=enrollment index=index /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </DashboardLayout>
    }
}

#[component]
fn CourseCard(enrollment: Enrollment, index: usize) -> impl IntoView {
    let progress = enrollment.progress();
    let title = enrollment.title_or(index);
    let category = enrollment
        .course_category
        .clone()
        .unwrap_or_else(|| "General Studies".to_string());

    view! {
        <div class="bg-white dark:bg-slate-900 rounded-2xl p-5 border border-slate-100 dark:border-slate-800 hover:shadow-md transition-shadow">
            <div class="flex items-start gap-3 mb-4">
                <div class="w-10 h-10 rounded-xl bg-blue-100 dark:bg-blue-900/40 flex items-center justify-center shrink-0">
                    <Icon name=icons::PLAY_LESSON class="text-blue-600 text-xl" />
                </div>
                <div class="min-w-0">
                    <p class="font-semibold text-sm truncate">{title}</p>
                    <p class="text-xs text-slate-400">{category}</p>
                </div>
            </div>
            <div class="space-y-1">
                <div class="flex justify-between text-xs font-medium text-slate-500">
                    <span>"Progress"</span>
                    <span>{format!("{:.0}%", progress)}</span>
                </div>
                <div class="h-1.5 bg-slate-100 dark:bg-slate-800 rounded-full overflow-hidden">
                    <div class="h-full bg-blue-600 rounded-full" style=format!("width: {:.0}%", progress)></div>
                </div>
            </div>
        </div>
    }
}

/// Launch card for the student's personal meeting room
#[component]
pub fn StudyHubLiveClassesPage() -> impl IntoView {
    let auth = use_auth_context();
    let meet_domain = StoredValue::new(use_services().config.meet_domain);

    let user_id = move || auth.user().map(|user| user.id);
    let room_url = move || meet_domain.with_value(|domain| personal_room_url(domain, user_id().as_deref()));
    let room = move || user_room_name(user_id().as_deref());

    view! {
        <Title text="Live Classes | Zpluse University" />
        <DashboardLayout title="Live Classes" role=Role::Student>
            <div class="max-w-4xl mx-auto">
                <p class="text-sm text-slate-500 dark:text-slate-400 mb-6">
                    "Join scheduled live sessions with your teachers on Zpluse University."
                </p>
                <div class="bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-8 text-center shadow-sm">
                    <div class="w-16 h-16 bg-blue-100 dark:bg-blue-900/40 rounded-2xl flex items-center justify-center mx-auto mb-4">
                        <Icon name=icons::VIDEO class="text-blue-600 text-4xl" />
                    </div>
                    <h2 class="text-xl font-bold mb-2">"Join Your Live Session"</h2>
                    <p class="text-slate-500 dark:text-slate-400 text-sm mb-2 max-w-xs mx-auto">
                        "Your teacher will share the class link. Click below to open the meeting room."
                    </p>
                    <p class="text-xs font-mono text-slate-400 mb-6">{room}</p>
                    <a
                        href=room_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white font-bold rounded-xl shadow-md shadow-blue-600/25"
                    >
                        <Icon name=icons::PLAY_CIRCLE class="text-lg" />
                        "Launch Meeting Room"
                    </a>
                </div>
                <BackToHub />
            </div>
        </DashboardLayout>
    }
}

#[component]
pub fn StudyHubPerformancePage() -> impl IntoView {
    let auth = use_auth_context();
    let subtitle = move || {
        let name = auth
            .user()
            .and_then(|user| user.user_metadata.full_name.clone())
            .and_then(|name| name.split_whitespace().next().map(str::to_string))
            .unwrap_or_else(|| "Student".to_string());
        format!("{}'s academic overview on Zpluse University", name)
    };

    view! {
        <Title text="Performance | Zpluse University" />
        <DashboardLayout title="Performance" role=Role::Student>
            <div class="max-w-3xl mx-auto">
                <p class="text-sm text-slate-500 dark:text-slate-400 mb-6">{subtitle}</p>
                <div class="bg-white dark:bg-slate-900 rounded-2xl border border-dashed border-slate-200 dark:border-slate-700 p-12 text-center">
                    <Icon name=icons::TRENDING_UP class="text-5xl text-slate-300 dark:text-slate-600 mb-4 block" />
                    <h2 class="text-lg font-bold text-slate-700 dark:text-slate-200 mb-2">"Analytics Coming Soon"</h2>
                    <p class="text-sm text-slate-400 max-w-sm mx-auto mb-6">
                        "Detailed progress charts, assignment scores, and attendance reports will appear here once your courses begin."
                    </p>
                    <A
                        href=route::STUDY_HUB
                        attr:class="inline-flex items-center gap-1.5 px-5 py-2.5 bg-blue-600 text-white text-sm font-bold rounded-xl hover:bg-blue-700"
                    >
                        <Icon name=icons::ARROW_BACK class="text-base" />
                        "Back to Study Hub"
                    </A>
                </div>
            </div>
        </DashboardLayout>
    }
}

#[component]
pub fn StudyHubProfilePage() -> impl IntoView {
    let auth = use_auth_context();

    let name = move || {
        auth.user()
            .map(|user| user.display_name())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Student".to_string())
    };
    let role = move || match auth.role() {
        Some(Ok(role)) => role.display_name().to_string(),
        _ => Role::Student.display_name().to_string(),
    };
    let email = move || {
        auth.user()
            .map(|user| user.email)
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| "—".to_string())
    };
    let joined = move || {
        auth.user()
            .and_then(|user| user.joined_label())
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <Title text="My Profile | Zpluse University" />
        <DashboardLayout title="My Profile" role=Role::Student>
            <div class="max-w-lg mx-auto">
                <div class="bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6 shadow-sm">
                    <div class="flex items-center gap-4 mb-8 pb-6 border-b border-slate-100 dark:border-slate-800">
                        <div class="w-16 h-16 rounded-2xl bg-gradient-to-tr from-blue-500 to-purple-500 flex items-center justify-center text-white text-xl font-bold shadow">
                            {move || initials(&name())}
                        </div>
                        <div>
                            <p class="font-bold text-lg">{name}</p>
                            <span class="inline-block px-2.5 py-0.5 rounded-full bg-blue-100 dark:bg-blue-900/40 text-blue-600 dark:text-blue-300 text-xs font-semibold">
                                {role}
                            </span>
                        </div>
                    </div>

                    <div class="space-y-4">
                        <ProfileField label="Email" icon=icons::MAIL value=Signal::derive(email) />
                        <ProfileField label="Role" icon=icons::BADGE value=Signal::derive(role) />
                        <ProfileField label="Joined" icon=icons::CALENDAR value=Signal::derive(joined) />
                    </div>

                    <div class="mt-8 pt-4 border-t border-slate-100 dark:border-slate-800 text-center">
                        <p class="text-xs text-slate-400">
                            "To update your profile, contact "
                            <a href=format!("mailto:{}", CONTACT_EMAIL) class="text-blue-500 hover:underline">
                                {CONTACT_EMAIL}
                            </a>
                        </p>
                    </div>
                </div>
                <BackToHub />
            </div>
        </DashboardLayout>
    }
}

#[component]
fn ProfileField(label: &'static str, icon: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <Icon name=icon class="text-blue-500 text-[20px] w-6 shrink-0" />
            <div>
                <p class="text-[10px] font-bold uppercase tracking-wider text-slate-400">{label}</p>
                <p class="text-sm font-medium text-slate-800 dark:text-slate-200">{move || value.get()}</p>
            </div>
        </div>
    }
}
