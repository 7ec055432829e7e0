//! Reset password page
//!
//! Landing page of the recovery email. The link carries the recovery
//! tokens in the URL fragment; they are turned into a session before the
//! new password can be saved.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::forms::validate_new_password;
use crate::core::route;
use crate::ui::api::use_services;
use crate::ui::auth::use_auth_context;
use crate::ui::common::{FormField, FullPageSpinner, InlineSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::AuthLayout;
use crate::ui::toast::use_toast;

/// `Ready` and `Invalid` are only reached in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ssr", allow(dead_code))]
enum LinkState {
    Checking,
    Ready,
    Invalid,
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let services = StoredValue::new(use_services());
    let auth = use_auth_context();
    let toasts = use_toast();
    let navigate = use_navigate();

    let link = RwSignal::new(LinkState::Checking);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            use crate::core::auth_client::session_from_fragment;
            use crate::core::clock::now_secs;

            if link.get_untracked() != LinkState::Checking {
                return;
            }
            let hash = window().location().hash().unwrap_or_default();
            if hash.trim_start_matches('#').is_empty() {
                // Reopened without a fragment: only usable with a live session
                if auth.is_loading() {
                    return;
                }
                let next = if auth.is_authenticated() { LinkState::Ready } else { LinkState::Invalid };
                if next == LinkState::Invalid {
                    toasts.error("Invalid Link", "This reset link is invalid or has expired.");
                }
                link.set(next);
                return;
            }

            let auth_client = services.with_value(|s| s.auth.clone());
            spawn_local(async move {
                let adopted = match session_from_fragment(&hash, now_secs()) {
                    Ok(tokens) => auth_client.adopt_session(tokens).await,
                    Err(e) => Err(e),
                };
                match adopted {
                    Ok(_) => {
                        // Drop the tokens from the address bar
                        if let Ok(history) = window().history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(route::RESET_PASSWORD),
                            );
                        }
                        link.try_set(LinkState::Ready);
                    }
                    Err(e) => {
                        leptos::logging::warn!("Recovery link rejected: {}", e);
                        toasts.error("Invalid Link", "This reset link is invalid or has expired.");
                        link.try_set(LinkState::Invalid);
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let password_val = password.get_untracked();
        if let Err(e) = validate_new_password(&password_val, &confirm.get_untracked()) {
            toasts.error(e.title, e.message);
            return;
        }

        loading.set(true);
        let auth_client = services.with_value(|s| s.auth.clone());
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth_client.update_password(&password_val).await {
                Ok(_) => {
                    toasts.success("Password Updated!", "You can now sign in with your new password.");
                    // The recovery session only existed to set the password
                    if let Err(e) = auth.sign_out().await {
                        leptos::logging::warn!("Sign out after reset failed: {}", e);
                    }
                    navigate(route::LOGIN, Default::default());
                }
                Err(e) => {
                    toasts.push_error("Update Failed", &e);
                }
            }
            loading.try_set(false);
        });
    };

    view! {
        <Title text="Reset Password | Zpluse University" />
        <AuthLayout headline="Choose a fresh password.">
            {move || match link.get() {
                LinkState::Checking => {
                    view! { <FullPageSpinner message="Verifying reset link...".to_string() /> }.into_any()
                }
                LinkState::Invalid => {
                    view! {
                        <div class="text-center space-y-4">
                            <Icon name=icons::ERROR class="text-[48px] text-red-500" />
                            <h2 class="text-2xl font-extrabold">"Invalid Link"</h2>
                            <p class="text-sm text-slate-500">"This reset link is invalid or has expired."</p>
                            <A
                                href=route::FORGOT_PASSWORD
                                attr:class="inline-block px-5 py-2.5 rounded-xl bg-blue-600 text-white text-sm font-bold"
                            >
                                "Request a new link"
                            </A>
                        </div>
                    }
                        .into_any()
                }
                LinkState::Ready => {
                    view! {
                        <form on:submit=on_submit.clone() class="space-y-5">
                            <div>
                                <h2 class="text-3xl font-extrabold text-slate-900 dark:text-white tracking-tight">
                                    "Set a new password"
                                </h2>
                                <p class="mt-2 text-sm text-slate-600 dark:text-slate-400">
                                    "Use at least 6 characters."
                                </p>
                            </div>
                            <FormField
                                label="New password"
                                input_type="password"
                                autocomplete="new-password"
                                required=true
                                value=password
                            />
                            <FormField
                                label="Confirm password"
                                input_type="password"
                                autocomplete="new-password"
                                required=true
                                value=confirm
                            />
                            <button
                                type="submit"
                                class="w-full flex justify-center items-center gap-2 py-3 rounded-xl bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white font-bold"
                                disabled=move || loading.get()
                            >
                                <Show when=move || loading.get() fallback=|| "Update Password">
                                    <InlineSpinner />
                                    "Updating..."
                                </Show>
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </AuthLayout>
    }
}
