//! Forgot password page
//!
//! Asks the auth provider to email a recovery link that lands on
//! `/reset-password` of the current origin.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::forms::validate_email;
use crate::core::route;
use crate::ui::api::use_services;
use crate::ui::common::{FormField, InlineSpinner, SuccessMessage};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::AuthLayout;
use crate::ui::toast::use_toast;

/// Absolute URL of the reset page, as the recovery email must link to it
fn reset_redirect_url() -> String {
    #[cfg(not(feature = "ssr"))]
    {
        if let Ok(origin) = window().location().origin() {
            return format!("{}{}", origin, route::RESET_PASSWORD);
        }
    }
    route::RESET_PASSWORD.to_string()
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let services = StoredValue::new(use_services());
    let toasts = use_toast();

    let email = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let sent_to = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        if let Err(e) = validate_email(&email_val) {
            toasts.error(e.title, e.message);
            return;
        }

        loading.set(true);
        let auth = services.with_value(|s| s.auth.clone());
        spawn_local(async move {
            match auth.reset_password_for_email(&email_val, &reset_redirect_url()).await {
                Ok(()) => {
                    toasts.success("Email Sent", "Check your inbox for the password reset link.");
                    sent_to.try_set(Some(format!("A reset link is on its way to {}.", email_val)));
                }
                Err(e) => {
                    toasts.push_error("Failed", &e);
                }
            }
            loading.try_set(false);
        });
    };

    view! {
        <Title text="Forgot Password | Zpluse University" />
        <AuthLayout headline="Locked out? It happens.">
            <form on:submit=on_submit class="space-y-5">
                <div>
                    <div class="w-12 h-12 rounded-2xl bg-blue-50 dark:bg-blue-900/30 text-blue-600 flex items-center justify-center mb-4">
                        <Icon name=icons::LOCK />
                    </div>
                    <h2 class="text-3xl font-extrabold text-slate-900 dark:text-white tracking-tight">
                        "Reset your password"
                    </h2>
                    <p class="mt-2 text-sm text-slate-600 dark:text-slate-400">
                        "Enter the email you registered with and we will send you a reset link."
                    </p>
                </div>

                <SuccessMessage message=sent_to />

                <FormField
                    label="Email address"
                    input_type="email"
                    placeholder="Enter your email"
                    autocomplete="email"
                    required=true
                    value=email
                />

                <button
                    type="submit"
                    class="w-full flex justify-center items-center gap-2 py-3 rounded-xl bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white font-bold"
                    disabled=move || loading.get()
                >
                    <Show when=move || loading.get() fallback=|| "Send Reset Link">
                        <InlineSpinner />
                        "Sending..."
                    </Show>
                </button>

                <A href=route::LOGIN attr:class="flex items-center justify-center gap-1 text-sm font-semibold text-blue-600 hover:text-blue-500">
                    <Icon name=icons::ARROW_BACK class="text-[18px]" />
                    "Back to Sign In"
                </A>
            </form>
        </AuthLayout>
    }
}
