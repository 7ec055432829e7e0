//! Authentication UI module
//!
//! This module provides authentication-related components and context
//! for the Zpluse frontend.

mod context;
mod login_form;
mod register_form;
mod role_guard;
mod user_menu;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use role_guard::RoleGuard;
pub use user_menu::UserMenu;
pub(crate) use user_menu::initials;
