//! Register form component
//!
//! Account creation with a role choice. The chosen role is stored in the
//! user's metadata and decides which dashboard the new user lands on.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::forms::{validate_email, validate_password, validate_required};
use crate::core::role::Role;
use crate::core::route;
use crate::ui::api::use_services;
use crate::ui::common::{FormField, InlineSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::toast::use_toast;

/// Roles a visitor may pick for themselves
const SELF_SERVICE_ROLES: [(Role, &str, &str); 2] = [
    (Role::Student, "Student", icons::SCHOOL),
    (Role::Teacher, "Educator", icons::BOOK),
];

/// Register form component
#[component]
pub fn RegisterForm() -> impl IntoView {
    let services = StoredValue::new(use_services());
    let toasts = use_toast();
    let navigate = use_navigate();

    let role = RwSignal::new(Role::Student);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let name_val = full_name.get_untracked();
        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let checked = validate_required(&name_val, "Name required", "Please enter your full name.")
            .and_then(|_| validate_email(&email_val))
            .and_then(|_| validate_password(&password_val));
        if let Err(e) = checked {
            toasts.error(e.title, e.message);
            return;
        }

        loading.set(true);
        let chosen = role.get_untracked();
        let auth = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();

        spawn_local(async move {
            let result = auth
                .sign_up(email_val.trim(), &password_val, name_val.trim(), chosen)
                .await;
            match result {
                Ok(Some(_)) => {
                    toasts.success("Account Created!", "Welcome to Zpluse University.");
                    navigate(chosen.home_path(), Default::default());
                }
                Ok(None) => {
                    toasts.info(
                        "Confirm your email",
                        "We sent a confirmation link. Sign in once your address is verified.",
                    );
                    navigate(route::LOGIN, Default::default());
                }
                Err(e) => {
                    toasts.push_error("Registration Failed", &e);
                }
            }
            loading.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div>
                <h2 class="text-3xl font-extrabold text-slate-900 dark:text-white tracking-tight">
                    "Create your account"
                </h2>
                <p class="mt-2 text-sm text-slate-600 dark:text-slate-400">
                    "Already have an account? "
                    <A href=route::LOGIN attr:class="font-bold text-blue-600 hover:text-blue-500">
                        "Sign in"
                    </A>
                </p>
            </div>

            <div class="grid grid-cols-2 gap-3" role="radiogroup" aria-label="I am a">
                {SELF_SERVICE_ROLES
                    .into_iter()
                    .map(|(option, label, icon)| {
                        let selected = move || role.get() == option;
                        view! {
                            <button
                                type="button"
                                role="radio"
                                aria-checked=move || selected().to_string()
                                class=move || {
                                    if selected() {
                                        "flex flex-col items-center gap-1 p-4 rounded-xl border-2 border-blue-600 bg-blue-50 dark:bg-blue-900/20 text-blue-700 dark:text-blue-300 font-bold"
                                    } else {
                                        "flex flex-col items-center gap-1 p-4 rounded-xl border-2 border-slate-200 dark:border-slate-700 text-slate-600 dark:text-slate-400 hover:border-slate-300 font-semibold"
                                    }
                                }
                                on:click=move |_| role.set(option)
                            >
                                <Icon name=icon class="text-[28px]" />
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <FormField
                label="Full name"
                placeholder="Asha Rao"
                autocomplete="name"
                required=true
                value=full_name
            />
            <FormField
                label="Email address"
                input_type="email"
                placeholder="you@example.com"
                autocomplete="email"
                required=true
                value=email
            />
            <FormField
                label="Password"
                input_type="password"
                placeholder="At least 6 characters"
                autocomplete="new-password"
                required=true
                value=password
            />

            <button
                type="submit"
                class="w-full flex justify-center items-center gap-2 py-3 rounded-xl bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white font-bold shadow-lg shadow-blue-600/20"
                disabled=move || loading.get()
            >
                <Show when=move || loading.get() fallback=|| "Create Account">
                    <InlineSpinner />
                    "Creating account..."
                </Show>
            </button>
        </form>
    }
}
