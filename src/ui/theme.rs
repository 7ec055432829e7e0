//! Theme context module for light/dark mode
//!
//! Provides:
//! - ThemeMode enum (Light, Dark)
//! - ThemeContext for reactive theme state
//! - System preference as the fallback when nothing is stored
//! - LocalStorage persistence under `theme`

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// localStorage key holding `light` or `dark`
pub const THEME_STORAGE_KEY: &str = "theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Stored value, or `None` when nothing usable was saved
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// Mode for a stored value, falling back to the system preference
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(Self::parse) {
            Some(mode) => mode,
            None if system_prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.mode.get().is_dark()
    }

    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        super::storage::set_item(THEME_STORAGE_KEY, mode.as_str());
        apply_theme_class(mode);
    }

    pub fn toggle(&self) {
        self.set_mode(self.mode.get_untracked().toggled());
    }
}

/// Apply the dark class to the document element
fn apply_theme_class(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(html) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            let class_list = html.class_list();
            if mode.is_dark() {
                let _ = class_list.add_1("dark");
            } else {
                let _ = class_list.remove_1("dark");
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Detect system color scheme preference
#[cfg(not(feature = "ssr"))]
fn detect_system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|media_query| media_query.matches())
        .unwrap_or(false)
}

/// Provide theme context to the application
///
/// Starts light on both server and client to avoid a hydration mismatch,
/// then applies the stored preference once mounted.
pub fn provide_theme_context() -> ThemeContext {
    let ctx = ThemeContext {
        mode: RwSignal::new(ThemeMode::Light),
    };

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let stored = super::storage::get_item(THEME_STORAGE_KEY);
            let mode = ThemeMode::resolve(stored.as_deref(), detect_system_prefers_dark());
            ctx.mode.set(mode);
            apply_theme_class(mode);
        });
    }

    provide_context(ctx);
    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_value_wins_over_system() {
        assert_eq!(ThemeMode::resolve(Some("light"), true), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(Some("dark"), false), ThemeMode::Dark);
    }

    #[test]
    fn test_system_preference_without_stored_value() {
        assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(Some("auto"), false), ThemeMode::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().as_str(), "light");
    }
}
