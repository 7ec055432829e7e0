//! Register page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{RegisterForm, use_auth_context};
use crate::ui::layout::AuthLayout;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth_context();
    let navigate = use_navigate();

    // Signed-in users have nothing to register
    Effect::new(move |_| {
        if let Some(Ok(role)) = auth.role() {
            navigate(role.home_path(), Default::default());
        }
    });

    view! {
        <Title text="Create Account | Zpluse University" />
        <AuthLayout headline="Start your journey with Zpluse.">
            <RegisterForm />
        </AuthLayout>
    }
}
