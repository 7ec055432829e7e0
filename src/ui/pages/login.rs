//! Login page component
//!
//! Wraps the login form. Visitors bounced here by a role guard carry the
//! original path in `redirectTo` and are sent back after signing in.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::core::route::{REDIRECT_PARAM, safe_return_path};
use crate::ui::auth::{LoginForm, use_auth_context};
use crate::ui::layout::AuthLayout;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let query = use_query_map();
    let navigate = use_navigate();
    let return_to = query.with_untracked(|params| params.get(REDIRECT_PARAM));

    // Redirect if already authenticated
    let redirect_from = return_to.clone();
    Effect::new(move |_| {
        if let Some(Ok(role)) = auth.role() {
            let target = safe_return_path(redirect_from.as_deref(), role.home_path());
            navigate(&target, Default::default());
        }
    });

    view! {
        <Title text="Sign In | Zpluse University" />
        <AuthLayout headline="Welcome back to your campus.">
            <LoginForm return_to=return_to />
        </AuthLayout>
    }
}
