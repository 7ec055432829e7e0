//! Admin control panel
//!
//! Recent colleges and recent accounts are loaded side by side. New
//! colleges are onboarded by pointing the backend scraper at their website.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::directory::College;
use crate::core::forms::validate_http_url;
use crate::core::lms::UserSummary;
use crate::core::role::Role;
use crate::core::route;
use crate::ui::api::use_api;
use crate::ui::common::{EmptyState, InlineSpinner, Spinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::DashboardLayout;
use crate::ui::toast::use_toast;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = use_api();
    let toasts = use_toast();

    let colleges = RwSignal::new(Vec::<College>::new());
    let users = RwSignal::new(Vec::<UserSummary>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0u32);

    let target_url = RwSignal::new(String::new());
    let scraping = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move |_| {
            reload.track();
            let api = api.clone();
            loading.set(true);
            spawn_local(async move {
                let (college_result, user_result) =
                    futures::join!(api.colleges(Some(RECENT_LIMIT)), api.recent_users(RECENT_LIMIT));
                match college_result {
                    Ok(list) => {
                        colleges.try_set(list);
                    }
                    Err(e) => {
                        toasts.push_error("Error loading colleges", &e);
                    }
                }
                match user_result {
                    Ok(list) => {
                        users.try_set(list);
                    }
                    Err(e) => {
                        toasts.push_error("Error loading users", &e);
                    }
                }
                loading.try_set(false);
            });
        });
    }

    let on_scrape = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if scraping.get_untracked() {
            return;
        }
        let url = target_url.get_untracked().trim().to_string();
        if let Err(e) = validate_http_url(&url) {
            toasts.error(e.title, e.message);
            return;
        }

        scraping.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.scrape_and_create(&url).await {
                Ok(created) => {
                    let name = created
                        .map(|college| college.name)
                        .unwrap_or_else(|| "The college".to_string());
                    toasts.success("College Added", format!("{} was created from its website.", name));
                    target_url.try_set(String::new());
                    reload.try_update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    toasts.push_error("Scrape Failed", &e);
                }
            }
            scraping.try_set(false);
        });
    };

    view! {
        <Title text="Control Panel | Zpluse University" />
        <DashboardLayout title="Control Panel" role=Role::Admin>
            <section class="mb-8 p-6 rounded-2xl bg-gradient-to-r from-blue-600 to-indigo-600 text-white">
                <h2 class="text-lg font-bold mb-1">"Onboard a College"</h2>
                <p class="text-sm text-blue-100 mb-4">
                    "Paste the official website and the registry entry is built from it automatically."
                </p>
                <form on:submit=on_scrape class="flex flex-col sm:flex-row gap-3">
                    <input
                        type="url"
                        class="flex-1 px-4 py-2.5 rounded-xl bg-white/95 text-slate-900 placeholder:text-slate-400 focus:outline-none"
                        placeholder="https://www.example.edu"
                        bind:value=target_url
                    />
                    <button
                        type="submit"
                        class="flex items-center justify-center gap-2 px-5 py-2.5 rounded-xl bg-slate-900 hover:bg-slate-800 disabled:opacity-60 text-sm font-bold"
                        disabled=move || scraping.get()
                    >
                        <Show
                            when=move || scraping.get()
                            fallback=|| view! { <Icon name=icons::LANGUAGE class="text-[18px]" /> "Scrape & Create" }
                        >
                            <InlineSpinner />
                            "Scraping..."
                        </Show>
                    </button>
                </form>
            </section>

            <div class="grid lg:grid-cols-2 gap-8">
                <Panel title="Recent Colleges" icon=icons::SCHOOL>
                    {move || {
                        if loading.get() {
                            view! { <div class="py-8 flex justify-center"><Spinner /></div> }.into_any()
                        } else if colleges.with(Vec::is_empty) {
                            view! { <EmptyState icon=icons::SCHOOL title="No colleges in the registry" /> }.into_any()
                        } else {
                            view! {
                                <ul class="divide-y divide-slate-100 dark:divide-slate-800">
                                    {colleges
                                        .get()
                                        .into_iter()
                                        .map(|college| {
                                            let href = route::college_path(&college.id);
                                            view! {
                                                <li class="py-3 flex items-center justify-between gap-3">
                                                    <div class="min-w-0">
                                                        <p class="font-semibold truncate">{college.name.clone()}</p>
                                                        <p class="text-xs text-slate-500 truncate">{college.location()}</p>
                                                    </div>
                                                    <A href=href attr:class="text-xs font-bold text-blue-600 hover:underline shrink-0">
                                                        "View"
                                                    </A>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </Panel>

                <Panel title="Recent Users" icon=icons::GROUP>
                    {move || {
                        if loading.get() {
                            view! { <div class="py-8 flex justify-center"><Spinner /></div> }.into_any()
                        } else if users.with(Vec::is_empty) {
                            view! { <EmptyState icon=icons::GROUP title="No users yet" /> }.into_any()
                        } else {
                            view! {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="text-left text-xs uppercase tracking-wide text-slate-500">
                                            <th class="py-2">"Name"</th>
                                            <th class="py-2">"Role"</th>
                                            <th class="py-2 text-right">"Joined"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-slate-100 dark:divide-slate-800">
                                        {users.get().into_iter().map(|user| view! { <UserRow user=user /> }).collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                    }}
                </Panel>
            </div>
        </DashboardLayout>
    }
}

#[component]
fn Panel(title: &'static str, icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6">
            <h2 class="flex items-center gap-2 text-lg font-bold mb-4">
                <Icon name=icon class="text-blue-600" />
                {title}
            </h2>
            {children()}
        </section>
    }
}

#[component]
fn UserRow(user: UserSummary) -> impl IntoView {
    let joined = user.joined_label();
    let role = Role::from_metadata(user.role.as_deref())
        .map(|role| role.display_name().to_string())
        .unwrap_or_else(|_| "Unknown".to_string());
    let name = user.full_name.clone().filter(|n| !n.trim().is_empty()).unwrap_or(user.email.clone());

    view! {
        <tr>
            <td class="py-2.5">
                <p class="font-semibold truncate">{name}</p>
                <p class="text-xs text-slate-500 truncate">{user.email}</p>
            </td>
            <td class="py-2.5">{role}</td>
            <td class="py-2.5 text-right text-slate-500">{joined}</td>
        </tr>
    }
}
