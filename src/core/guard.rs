//! Role guard decision logic
//!
//! `evaluate` maps the current auth state onto one of three guard states.
//! Protected content may only be rendered in `GuardState::Authorized`; the
//! component in `ui::auth::role_guard` shows a placeholder otherwise.

use leptos::logging::error;

use super::role::{Role, RoleError};
use super::route;
use super::session::AuthState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// Auth lookup still running
    Checking,
    Authorized,
    /// Viewer must be sent elsewhere (history is replaced, not pushed)
    Redirecting(String),
}

impl GuardState {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardState::Redirecting(target) => Some(target),
            _ => None,
        }
    }
}

/// Decide what a guard over `allowed` shows for `auth` at `current_path`
pub fn evaluate(auth: &AuthState, allowed: &[Role], current_path: &str) -> GuardState {
    let session = match auth {
        AuthState::Loading => return GuardState::Checking,
        AuthState::Anonymous => {
            return GuardState::Redirecting(route::login_with_return(current_path));
        }
        AuthState::Authenticated(session) => session,
    };

    match session.user.role() {
        Ok(role) if allowed.contains(&role) => GuardState::Authorized,
        Ok(role) => GuardState::Redirecting(role.home_path().to_string()),
        Err(RoleError::Missing) => {
            error!("User {} has no role defined in metadata.", session.user.id);
            GuardState::Redirecting(route::LOGIN.to_string())
        }
        Err(e @ RoleError::Unknown(_)) => {
            error!("User {}: {}", session.user.id, e);
            GuardState::Redirecting(route::HOME.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::fixtures::session_with_role;

    fn signed_in(role: Option<&str>) -> AuthState {
        AuthState::Authenticated(session_with_role(role))
    }

    #[test]
    fn test_loading_keeps_checking() {
        assert_eq!(
            evaluate(&AuthState::Loading, &[Role::Student], "/dashboard"),
            GuardState::Checking
        );
    }

    #[test]
    fn test_anonymous_goes_to_login_with_return_path() {
        let state = evaluate(&AuthState::Anonymous, &[Role::Admin], "/admin");
        assert_eq!(
            state,
            GuardState::Redirecting("/login?redirectTo=%2Fadmin".to_string())
        );
    }

    #[test]
    fn test_teacher_on_student_page_goes_to_teacher_home() {
        let state = evaluate(&signed_in(Some("teacher")), &[Role::Student], "/dashboard");
        assert_eq!(state, GuardState::Redirecting("/teacher".to_string()));
        assert!(!state.is_authorized());
    }

    #[test]
    fn test_missing_role_fails_closed_to_login() {
        let state = evaluate(&signed_in(None), &Role::ALL, "/live/abc");
        assert_eq!(state.redirect_target(), Some("/login"));
    }

    #[test]
    fn test_unknown_role_goes_to_root() {
        let state = evaluate(&signed_in(Some("registrar")), &Role::ALL, "/admin");
        assert_eq!(state.redirect_target(), Some("/"));
    }

    #[test]
    fn test_authorized_iff_session_and_allowed_role() {
        let allowed_sets: [&[Role]; 4] = [
            &[Role::Student],
            &[Role::Teacher],
            &[Role::Admin],
            &[Role::Teacher, Role::Admin],
        ];
        for allowed in allowed_sets {
            for role in Role::ALL {
                let state = evaluate(&signed_in(Some(role.as_str())), allowed, "/x");
                assert_eq!(state.is_authorized(), allowed.contains(&role));
                if !allowed.contains(&role) {
                    assert_eq!(state.redirect_target(), Some(role.home_path()));
                }
            }
            assert!(!evaluate(&AuthState::Anonymous, allowed, "/x").is_authorized());
            assert!(!evaluate(&AuthState::Loading, allowed, "/x").is_authorized());
        }
    }

    #[test]
    fn test_empty_allowed_set_authorizes_nobody() {
        for role in Role::ALL {
            let state = evaluate(&signed_in(Some(role.as_str())), &[], "/x");
            assert_eq!(state.redirect_target(), Some(role.home_path()));
        }
    }
}
