//! Page chrome shared across routes
//!
//! - `PublicLayout`: navbar + footer around the public pages
//! - `DashboardLayout`: role-specific sidebar around the guarded workspaces

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::role::Role;
use crate::core::route;
use crate::ui::auth::{UserMenu, use_auth_context};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

pub const BRAND_NAME: &str = "Zpluse University";
pub const BRAND_TAGLINE: &str = "The Next-Gen Education Ecosystem";
pub const CONTACT_EMAIL: &str = "admissions@zpluseuniversity.com";
pub const CONTACT_PHONE: &str = "+91 8630735008";
pub const CONTACT_ADDRESS: &str = "Noida, Uttar Pradesh, India";

/// Primary navigation shown to every visitor
pub const PUBLIC_NAV_LINKS: [(&str, &str); 4] = [
    ("Home", route::HOME),
    ("Find Colleges", route::COLLEGES),
    ("Admissions", route::ADMISSIONS),
    ("About Us", "/#about"),
];

pub const FOOTER_LINKS: [(&str, &str); 5] = [
    ("College Directory", route::COLLEGES),
    ("Compare Colleges", route::COMPARE),
    ("Help Center", route::HELP),
    ("Admissions Guide", route::ADMISSIONS),
    ("Educator Docs", route::EDUCATOR_DOCS),
];

const LEGAL_LINKS: [(&str, &str); 2] = [("Terms of Service", route::TERMS), ("Privacy Policy", route::PRIVACY)];

/// Sidebar entries for a role's workspace
fn workspace_links(role: Role) -> &'static [(&'static str, &'static str, &'static str)] {
    match role {
        Role::Student => &[
            ("My Learning", route::STUDENT_DASHBOARD, icons::DASHBOARD),
            ("Study Hub", route::STUDY_HUB, icons::PLAY_LESSON),
            ("Find Colleges", route::COLLEGES, icons::SEARCH),
            ("Compare", route::COMPARE, icons::COMPARE),
            ("Help Center", route::HELP, icons::HELP),
        ],
        Role::Teacher => &[
            ("Workspace", route::TEACHER_DASHBOARD, icons::DASHBOARD),
            ("Educator Docs", route::EDUCATOR_DOCS, icons::BOOK),
            ("Help Center", route::HELP, icons::HELP),
        ],
        Role::Admin => &[
            ("Control Panel", route::ADMIN_DASHBOARD, icons::DASHBOARD),
            ("College Directory", route::COLLEGES, icons::SCHOOL),
            ("Help Center", route::HELP, icons::HELP),
        ],
    }
}

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <A href=route::HOME attr:class="flex items-center gap-2.5 hover:opacity-90">
            <span class="w-10 h-10 rounded-xl bg-gradient-to-br from-blue-600 to-indigo-600 flex items-center justify-center text-white shadow-lg shadow-blue-600/30">
                <Icon name=icons::SCHOOL class="text-[22px]" />
            </span>
            <span class="flex flex-col leading-tight">
                <span class="text-lg font-extrabold text-slate-900 dark:text-white">"Zpluse"</span>
                <span class="text-[10px] uppercase tracking-[0.2em] font-bold text-blue-600">"University"</span>
            </span>
        </A>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="p-2 rounded-xl text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-800 border border-slate-200 dark:border-slate-700"
            on:click=move |_| theme.toggle()
            aria-label="Toggle dark mode"
        >
            {move || {
                if theme.is_dark() {
                    view! { <Icon name=icons::LIGHT_MODE /> }
                } else {
                    view! { <Icon name=icons::DARK_MODE /> }
                }
            }}
        </button>
    }
}

/// Top navigation bar for public pages
#[component]
pub fn PublicNavbar() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let location = use_location();

    let link_class = move |href: &'static str| {
        let active = location.pathname.with(|path| path == href);
        if active {
            "text-sm font-bold text-blue-600"
        } else {
            "text-sm font-semibold text-slate-600 dark:text-slate-300 hover:text-blue-600"
        }
    };

    view! {
        <header class="sticky top-0 z-40 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md border-b border-slate-200/70 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <Logo />

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-8">
                        {PUBLIC_NAV_LINKS
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <A href=href attr:class=move || link_class(href)>
                                        {label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center gap-3">
                        <ThemeToggle />
                        <UserMenu />
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-slate-100 dark:hover:bg-slate-800"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::CLOSE class="text-[24px]" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="text-[24px]" /> }
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <Show when=move || mobile_menu_open.get()>
                    <div class="md:hidden py-4 space-y-3 border-t border-slate-200 dark:border-slate-800">
                        <nav class="flex flex-col gap-1">
                            {PUBLIC_NAV_LINKS
                                .into_iter()
                                .map(|(label, href)| {
                                    view! {
                                        <A
                                            href=href
                                            attr:class="block px-3 py-2 rounded-lg text-sm font-semibold text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800"
                                            on:click=move |_| set_mobile_menu_open.set(false)
                                        >
                                            {label}
                                        </A>
                                    }
                                })
                                .collect_view()}
                        </nav>
                        <div class="flex items-center justify-between px-3">
                            <ThemeToggle />
                            <UserMenu />
                        </div>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-950 text-slate-400 pt-16 pb-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-10 mb-12">
                    <div class="md:col-span-2 space-y-4">
                        <p class="text-xl font-extrabold text-white">{BRAND_NAME}</p>
                        <p class="text-sm max-w-md">{BRAND_TAGLINE}</p>
                        <ul class="space-y-2 text-sm">
                            <li class="flex items-center gap-2">
                                <Icon name=icons::MAIL class="text-[18px]" />
                                <a href=format!("mailto:{}", CONTACT_EMAIL) class="hover:text-white">{CONTACT_EMAIL}</a>
                            </li>
                            <li class="flex items-center gap-2">
                                <Icon name=icons::PHONE class="text-[18px]" />
                                <a href=format!("tel:{}", CONTACT_PHONE.replace(' ', "")) class="hover:text-white">{CONTACT_PHONE}</a>
                            </li>
                            <li class="flex items-center gap-2">
                                <Icon name=icons::LOCATION class="text-[18px]" />
                                {CONTACT_ADDRESS}
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-bold text-white mb-4">"Explore"</h4>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .into_iter()
                                .map(|(label, href)| {
                                    view! {
                                        <li>
                                            <A href=href attr:class="text-sm hover:text-white">{label}</A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-bold text-white mb-4">"Legal"</h4>
                        <ul class="space-y-2">
                            {LEGAL_LINKS
                                .into_iter()
                                .map(|(label, href)| {
                                    view! {
                                        <li>
                                            <A href=href attr:class="text-sm hover:text-white">{label}</A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-slate-800 text-sm text-center">
                    {format!("© {} {}. All rights reserved.", copyright_year(), BRAND_NAME)}
                </div>
            </div>
        </footer>
    }
}

fn copyright_year() -> i32 {
    use chrono::{Datelike, TimeZone, Utc};

    let now_secs = crate::core::clock::now_secs();
    Utc.timestamp_opt(now_secs, 0)
        .single()
        .map(|dt| dt.year())
        .unwrap_or(2025)
}

/// Navbar and footer around a public page
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-slate-50 dark:bg-slate-950 text-slate-900 dark:text-slate-100">
            <PublicNavbar />
            <main class="flex-1">{children()}</main>
            <Footer />
        </div>
    }
}

/// Split screen for the sign-in and password pages: brand panel + form card
#[component]
pub fn AuthLayout(
    /// Line under the brand on the side panel
    headline: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-slate-50 dark:bg-slate-950 text-slate-900 dark:text-slate-100">
            <div class="hidden lg:flex lg:w-1/2 relative flex-col justify-between p-12 bg-gradient-to-br from-blue-700 via-blue-600 to-indigo-700 text-white">
                <A href=route::HOME attr:class="flex items-center gap-2 font-extrabold text-xl">
                    <Icon name=icons::SCHOOL class="text-3xl" />
                    {BRAND_NAME}
                </A>
                <div>
                    <h2 class="text-4xl font-extrabold leading-tight mb-4">{headline}</h2>
                    <p class="text-blue-100 max-w-md">{BRAND_TAGLINE}</p>
                </div>
                <p class="text-sm text-blue-200">{format!("© {} {}", copyright_year(), BRAND_NAME)}</p>
            </div>
            <div class="flex-1 flex flex-col">
                <div class="flex items-center justify-between p-4 lg:justify-end">
                    <div class="lg:hidden">
                        <Logo />
                    </div>
                    <ThemeToggle />
                </div>
                <div class="flex-1 flex items-center justify-center px-4 pb-12">
                    <div class="w-full max-w-md">{children()}</div>
                </div>
            </div>
        </div>
    }
}

/// Sidebar shell for a role's workspace
#[component]
pub fn DashboardLayout(
    /// Heading shown above the content
    title: &'static str,
    /// Workspace whose links are listed
    role: Role,
    children: Children,
) -> impl IntoView {
    let auth = use_auth_context();
    let location = use_location();
    let greeting = move || {
        auth.user()
            .map(|user| format!("Welcome back, {}", user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen flex bg-slate-50 dark:bg-slate-950 text-slate-900 dark:text-slate-100">
            <aside class="hidden lg:flex w-64 flex-col border-r border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-900 p-5 gap-8">
                <Logo />
                <nav class="flex flex-col gap-1">
                    {workspace_links(role)
                        .iter()
                        .map(|&(label, href, icon)| {
                            let class = move || {
                                if location.pathname.with(|path| path == href) {
                                    "flex items-center gap-3 px-3 py-2.5 rounded-xl bg-blue-50 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300 font-bold text-sm"
                                } else {
                                    "flex items-center gap-3 px-3 py-2.5 rounded-xl text-slate-600 dark:text-slate-400 hover:bg-slate-100 dark:hover:bg-slate-800 font-semibold text-sm"
                                }
                            };
                            view! {
                                <A href=href attr:class=class>
                                    <Icon name=icon />
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="mt-auto text-xs text-slate-400">
                    {format!("{} workspace", role.display_name())}
                </div>
            </aside>

            <div class="flex-1 flex flex-col min-w-0">
                <header class="h-16 flex items-center justify-between px-4 sm:px-8 border-b border-slate-200 dark:border-slate-800 bg-white/80 dark:bg-slate-900/80 backdrop-blur">
                    <div>
                        <h1 class="text-lg font-extrabold">{title}</h1>
                        <p class="text-xs text-slate-500">{greeting}</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <ThemeToggle />
                        <UserMenu />
                    </div>
                </header>
                <main class="flex-1 p-4 sm:p-8">{children()}</main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_links_start_at_role_home() {
        for role in Role::ALL {
            let links = workspace_links(role);
            assert_eq!(links[0].1, role.home_path(), "{role}");
        }
    }

    #[test]
    fn test_study_hub_is_student_only() {
        let has_hub = |role| workspace_links(role).iter().any(|link| link.1 == route::STUDY_HUB);
        assert!(has_hub(Role::Student));
        assert!(!has_hub(Role::Teacher));
        assert!(!has_hub(Role::Admin));
    }

    #[test]
    fn test_footer_links_are_local_paths() {
        for (_, href) in FOOTER_LINKS.iter().chain(LEGAL_LINKS.iter()) {
            assert!(href.starts_with('/'));
        }
    }
}
