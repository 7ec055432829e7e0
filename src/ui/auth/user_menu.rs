//! User menu component
//!
//! Shows Login / Get Started links for visitors and an avatar dropdown with
//! the user's dashboard and a sign-out action once signed in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use crate::core::route;
use crate::core::session::{AuthState, User};
use crate::ui::icon::{Icon, icons};
use crate::ui::toast::use_toast;

const AVATAR_COLORS: [&str; 6] = [
    "bg-blue-500",
    "bg-emerald-500",
    "bg-amber-500",
    "bg-rose-500",
    "bg-violet-500",
    "bg-teal-500",
];

/// Up to two uppercase initials of a display name
pub(crate) fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_string() } else { letters }
}

/// Stable color for a user id
fn avatar_color(seed: &str) -> &'static str {
    let hash = seed.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    AVATAR_COLORS[hash % AVATAR_COLORS.len()]
}

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <div class="relative">
            {move || match auth.state.get() {
                AuthState::Loading => {
                    view! {
                        <div class="w-9 h-9 rounded-full bg-slate-200 dark:bg-slate-700 animate-pulse"></div>
                    }
                        .into_any()
                }
                AuthState::Anonymous => {
                    view! {
                        <div class="flex items-center gap-2">
                            <A
                                href=route::LOGIN
                                attr:class="px-4 py-2 text-sm font-bold text-slate-700 dark:text-slate-200 hover:text-blue-600"
                            >
                                "Login"
                            </A>
                            <A
                                href=route::REGISTER
                                attr:class="px-4 py-2 text-sm font-bold text-white bg-blue-600 hover:bg-blue-700 rounded-xl shadow-lg shadow-blue-600/20"
                            >
                                "Get Started"
                            </A>
                        </div>
                    }
                        .into_any()
                }
                AuthState::Authenticated(session) => {
                    view! { <SignedInMenu user=session.user /> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SignedInMenu(user: User) -> impl IntoView {
    let auth = use_auth_context();
    let toasts = use_toast();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let name = user.display_name();
    let role = user.role().ok();
    let dashboard = role.map(|r| r.home_path());
    let role_label = role.map(|r| r.display_name()).unwrap_or("Member");
    let color = avatar_color(&user.id);
    let avatar = initials(&name);

    let handle_sign_out = move |_| {
        menu_open.set(false);
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = auth.sign_out().await {
                toasts.push_error("Sign out incomplete", &e);
            }
            navigate(route::LOGIN, Default::default());
        });
    };

    view! {
        <button
            class="flex items-center gap-2 p-1 pr-2 rounded-xl hover:bg-slate-100 dark:hover:bg-slate-800"
            aria-haspopup="menu"
            aria-expanded=move || menu_open.get().to_string()
            on:click=move |_| menu_open.update(|open| *open = !*open)
        >
            <span class=format!(
                "{} w-9 h-9 rounded-full flex items-center justify-center text-white text-sm font-bold",
                color,
            )>{avatar}</span>
            <span class="hidden sm:block text-sm font-semibold text-slate-800 dark:text-slate-100 max-w-[140px] truncate">
                {name.clone()}
            </span>
            <Icon name=icons::EXPAND_MORE class="text-[18px] text-slate-400" />
        </button>

        <Show when=move || menu_open.get()>
            <div
                class="absolute right-0 mt-2 w-60 bg-white dark:bg-slate-900 rounded-xl shadow-xl border border-slate-200 dark:border-slate-700 py-1 z-50"
                role="menu"
            >
                <div class="px-4 py-3 border-b border-slate-100 dark:border-slate-800">
                    <p class="text-sm font-bold text-slate-900 dark:text-white truncate">{name.clone()}</p>
                    <p class="text-xs text-slate-500 truncate">{user.email.clone()}</p>
                    <p class="mt-1 text-[11px] uppercase tracking-wide font-bold text-blue-600">{role_label}</p>
                </div>
                {dashboard
                    .map(|href| {
                        view! {
                            <A
                                href=href
                                attr:class="w-full px-4 py-2 text-sm text-slate-700 dark:text-slate-200 hover:bg-slate-50 dark:hover:bg-slate-800 flex items-center gap-2"
                                on:click=move |_| menu_open.set(false)
                            >
                                <Icon name=icons::DASHBOARD class="text-[18px]" />
                                "Dashboard"
                            </A>
                        }
                    })}
                <button
                    class="w-full px-4 py-2 text-sm text-left text-red-600 hover:bg-red-50 dark:hover:bg-red-900/20 flex items-center gap-2"
                    role="menuitem"
                    on:click=handle_sign_out.clone()
                >
                    <Icon name=icons::LOGOUT class="text-[18px]" />
                    "Sign Out"
                </button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Asha Rao"), "AR");
        assert_eq!(initials("asha"), "A");
        assert_eq!(initials("Asha Devi Rao"), "AD");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_avatar_color_is_stable() {
        assert_eq!(avatar_color("user-1"), avatar_color("user-1"));
        assert!(AVATAR_COLORS.contains(&avatar_color("")));
    }
}
