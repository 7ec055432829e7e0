//! Login form component
//!
//! Email/password sign-in against the hosted auth provider. On success the
//! user lands on the page they were bounced from, or on their role's home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::forms::{validate_email, validate_required};
use crate::core::route::{self, safe_return_path};
use crate::ui::api::use_services;
use crate::ui::common::{FormField, InlineSpinner};
use crate::ui::toast::use_toast;

/// Login form component
#[component]
pub fn LoginForm(
    /// Path requested before the redirect to login
    return_to: Option<String>,
) -> impl IntoView {
    let services = StoredValue::new(use_services());
    let toasts = use_toast();
    let navigate = use_navigate();
    let return_to = StoredValue::new(return_to);

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let checked = validate_email(&email_val).and_then(|_| {
            validate_required(&password_val, "Password required", "Please enter your password.")
        });
        if let Err(e) = checked {
            toasts.error(e.title, e.message);
            return;
        }

        loading.set(true);
        let auth = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();

        spawn_local(async move {
            match auth.sign_in_with_password(email_val.trim(), &password_val).await {
                Ok(session) => {
                    let home = session
                        .user
                        .role()
                        .map(|role| role.home_path())
                        .unwrap_or(route::HOME);
                    let target = return_to.with_value(|path| safe_return_path(path.as_deref(), home));
                    toasts.success("Welcome back!", format!("Signed in as {}", session.user.display_name()));
                    navigate(&target, Default::default());
                }
                Err(e) => {
                    toasts.push_error("Login Failed", &e);
                }
            }
            loading.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div>
                <h2 class="text-3xl font-extrabold text-slate-900 dark:text-white tracking-tight">
                    "Welcome back"
                </h2>
                <p class="mt-2 text-sm text-slate-600 dark:text-slate-400">
                    "New to Zpluse? "
                    <A href=route::REGISTER attr:class="font-bold text-blue-600 hover:text-blue-500">
                        "Create an account"
                    </A>
                </p>
            </div>

            <FormField
                label="Email address"
                input_type="email"
                placeholder="Enter your email"
                autocomplete="email"
                required=true
                value=email
            />
            <FormField
                label="Password"
                input_type="password"
                placeholder="Enter your password"
                autocomplete="current-password"
                required=true
                value=password
            />

            <div class="flex justify-end">
                <A href=route::FORGOT_PASSWORD attr:class="text-sm font-semibold text-blue-600 hover:text-blue-500">
                    "Forgot password?"
                </A>
            </div>

            <button
                type="submit"
                class="w-full flex justify-center items-center gap-2 py-3 rounded-xl bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white font-bold shadow-lg shadow-blue-600/20"
                disabled=move || loading.get()
            >
                <Show when=move || loading.get() fallback=|| "Sign In">
                    <InlineSpinner />
                    "Signing in..."
                </Show>
            </button>
        </form>
    }
}
