//! Route gate that renders its children only for allowed roles

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use super::context::use_auth_context;
use crate::core::guard::{GuardState, evaluate};
use crate::core::role::Role;
use crate::ui::common::FullPageSpinner;

/// Renders `children` only when the signed-in user has one of `allowed`
///
/// Anyone else is redirected (replacing the history entry) and sees a
/// verification placeholder until the navigation lands.
#[component]
pub fn RoleGuard(
    /// Roles permitted to see the content
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth_context();
    let location = use_location();
    let navigate = use_navigate();

    let guard = Memo::new(move |_| {
        let path = location.pathname.get();
        auth.state.with(|state| evaluate(state, allowed, &path))
    });

    Effect::new(move |_| {
        if let Some(target) = guard.with(|state| state.redirect_target().map(str::to_string)) {
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || guard.with(GuardState::is_authorized)
            fallback=|| view! { <FullPageSpinner message="Verifying access...".to_string() /> }
        >
            {children()}
        </Show>
    }
}
