//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Starts in `Loading` on both server and client (no hydration mismatch)
//! - Reads the current session once after mount
//! - Follows every later change through the session store subscription
//! - Detaches that subscription when the owning scope is cleaned up

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::core::error::AuthError;
use crate::core::role::{Role, RoleError};
use crate::core::session::{AuthState, SessionStore, User};
use crate::ui::api::Services;

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    services: StoredValue<Services>,
}

impl AuthContext {
    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|state| state.session().is_some())
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        self.state.with(|state| state.user().cloned())
    }

    /// Validated role of the signed-in user
    pub fn role(&self) -> Option<Result<Role, RoleError>> {
        self.state.with(|state| state.user().map(User::role))
    }

    /// Sign out with the provider and locally
    ///
    /// The local state always ends up anonymous; the error only reports a
    /// storage failure.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let auth = self.services.with_value(|services| services.auth.clone());
        let result = auth.sign_out().await;
        self.state.set(AuthState::Anonymous);
        result
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context(services: Services) -> AuthContext {
    let state = RwSignal::new(AuthState::Loading);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::session::watch_session;
        use leptos::logging::warn;

        let subscription = watch_session(&services.auth, move |next| {
            state.try_set(next);
        });
        on_cleanup(move || drop(subscription));

        let auth = services.auth.clone();
        Effect::new(move |_| {
            let auth = auth.clone();
            spawn_local(async move {
                let lookup = auth.get_session().await;
                if let Err(e) = &lookup {
                    warn!("Initial session lookup failed: {}", e);
                }
                state.try_update(|current| {
                    *current = std::mem::take(current).settle(lookup);
                });
            });
        });
    }

    let ctx = AuthContext {
        state,
        services: StoredValue::new(services),
    };
    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
