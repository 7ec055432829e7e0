use leptos::prelude::*;

/// Material Symbols glyph rendered from the icon font
#[component]
pub fn Icon(
    /// Glyph name, e.g. `school`
    name: &'static str,
    /// Extra CSS classes
    #[prop(default = "text-[20px]")]
    class: &'static str,
) -> impl IntoView {
    let class = format!("material-symbols-outlined select-none {}", class);

    view! {
        <span class=class aria-hidden="true">{name}</span>
    }
}

/// Glyph names used across the app
#[allow(dead_code)]
pub mod icons {
    pub const SCHOOL: &str = "school";
    pub const SEARCH: &str = "search";
    pub const STAR: &str = "star";
    pub const LOCATION: &str = "location_on";
    pub const BOOKMARK: &str = "bookmark";
    pub const BOOKMARK_ADDED: &str = "bookmark_added";
    pub const COMPARE: &str = "compare_arrows";
    pub const ADD: &str = "add";
    pub const CLOSE: &str = "close";
    pub const CHECK: &str = "check";
    pub const ERROR: &str = "error";
    pub const INFO: &str = "info";
    pub const UPLOAD: &str = "upload_file";
    pub const VIDEO: &str = "videocam";
    pub const LOGOUT: &str = "logout";
    pub const DARK_MODE: &str = "dark_mode";
    pub const LIGHT_MODE: &str = "light_mode";
    pub const DASHBOARD: &str = "dashboard";
    pub const GROUP: &str = "group";
    pub const BOOK: &str = "menu_book";
    pub const LANGUAGE: &str = "language";
    pub const CLOUD_OFF: &str = "cloud_off";
    pub const REFRESH: &str = "refresh";
    pub const ARROW_BACK: &str = "arrow_back";
    pub const ARROW_FORWARD: &str = "arrow_forward";
    pub const EXPAND_MORE: &str = "expand_more";
    pub const MENU: &str = "menu";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "call";
    pub const LOCK: &str = "lock";
    pub const HELP: &str = "help";
    pub const GAVEL: &str = "gavel";
    pub const SHIELD: &str = "shield";
    pub const TRENDING_UP: &str = "trending_up";
    pub const CALENDAR: &str = "calendar_month";
    pub const LINK: &str = "link";
    pub const PDF: &str = "picture_as_pdf";
    pub const TROPHY: &str = "emoji_events";
    pub const PAYMENTS: &str = "payments";
    pub const ACCOUNT: &str = "account_circle";
    pub const BADGE: &str = "badge";
    pub const PLAY_CIRCLE: &str = "play_circle";
    pub const PLAY_LESSON: &str = "play_lesson";
}
