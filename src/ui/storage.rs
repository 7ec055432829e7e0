//! localStorage access
//!
//! All helpers are no-ops during server rendering.

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::auth_client::SessionPersistence;
use crate::core::error::AuthError;
use crate::core::session::Session;

/// Key holding the serialized auth session
pub const SESSION_STORAGE_KEY: &str = "zpluse-auth-session";

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(not(feature = "ssr"))]
pub fn get_item(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

#[cfg(not(feature = "ssr"))]
pub fn set_item(key: &str, value: &str) -> bool {
    local_storage()
        .map(|storage| storage.set_item(key, value).is_ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "ssr"))]
pub fn remove_item(key: &str) -> bool {
    local_storage()
        .map(|storage| storage.remove_item(key).is_ok())
        .unwrap_or(false)
}

#[cfg(feature = "ssr")]
pub fn get_item(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "ssr")]
pub fn set_item(_key: &str, _value: &str) -> bool {
    false
}

#[cfg(feature = "ssr")]
pub fn remove_item(_key: &str) -> bool {
    false
}

/// Session persistence in the browser's localStorage
#[derive(Clone, Copy, Default)]
pub struct LocalStoragePersistence;

impl SessionPersistence for LocalStoragePersistence {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        Ok(get_item(SESSION_STORAGE_KEY).and_then(|raw| serde_json::from_str(&raw).ok()))
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let raw = serde_json::to_string(session).map_err(|e| AuthError::Storage(e.to_string()))?;
        if set_item(SESSION_STORAGE_KEY, &raw) || cfg!(feature = "ssr") {
            Ok(())
        } else {
            Err(AuthError::Storage("localStorage unavailable".to_string()))
        }
    }

    fn clear(&self) -> Result<(), AuthError> {
        remove_item(SESSION_STORAGE_KEY);
        Ok(())
    }
}
