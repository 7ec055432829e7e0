//! Live-class room naming and the conferencing embed URL

use super::role::Role;
use super::route::encode_component;
use super::session::User;

pub const ROOM_PREFIX: &str = "ZplusEducation-LiveClass-";

/// Prefix of a student's personal practice room
pub const PERSONAL_ROOM_PREFIX: &str = "zpluse-live-";

/// Name shown when the user has no full name on record
pub const FALLBACK_PARTICIPANT: &str = "Zpluse Participant";

/// Room name for a class; characters outside `[A-Za-z0-9_-]` are dropped
pub fn room_name(class_id: &str) -> String {
    let id: String = class_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    format!("{}{}", ROOM_PREFIX, id)
}

/// Personal room for a user: the first 8 safe characters of the id, or `guest`
pub fn user_room_name(user_id: Option<&str>) -> String {
    let id: String = user_id
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(8)
        .collect();
    let id = if id.is_empty() { "guest".to_string() } else { id };
    format!("{}{}", PERSONAL_ROOM_PREFIX, id)
}

/// Direct meeting link for a personal room, opened in a new tab
pub fn personal_room_url(domain: &str, user_id: Option<&str>) -> String {
    format!("https://{}/{}", domain.trim_end_matches('/'), user_room_name(user_id))
}

/// Iframe URL for joining `class_id` on `domain` as `user`
///
/// Everyone except teachers joins with audio and video muted.
pub fn embed_url(domain: &str, class_id: &str, user: &User) -> String {
    let muted = !matches!(user.role(), Ok(Role::Teacher));
    let display_name = match user.user_metadata.full_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => FALLBACK_PARTICIPANT.to_string(),
    };

    let params = [
        format!("config.startWithAudioMuted={}", muted),
        format!("config.startWithVideoMuted={}", muted),
        "config.disableDeepLinking=true".to_string(),
        "config.prejoinPageEnabled=false".to_string(),
        "interfaceConfig.DISABLE_JOIN_LEAVE_NOTIFICATIONS=true".to_string(),
        "interfaceConfig.SHOW_JITSI_WATERMARK=false".to_string(),
        format!(
            "userInfo.displayName=%22{}%22",
            encode_component(&display_name)
        ),
        format!("userInfo.email=%22{}%22", encode_component(&user.email)),
    ];

    format!(
        "https://{}/{}#{}",
        domain.trim_end_matches('/'),
        room_name(class_id),
        params.join("&")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::fixtures::user_with_role;

    #[test]
    fn test_room_name() {
        assert_eq!(room_name("abc"), "ZplusEducation-LiveClass-abc");
        assert_eq!(room_name("c_1-x"), "ZplusEducation-LiveClass-c_1-x");
    }

    #[test]
    fn test_room_name_strips_unsafe_characters() {
        assert_eq!(room_name("../a b?c#d"), "ZplusEducation-LiveClass-abcd");
        assert_eq!(room_name(""), ROOM_PREFIX);
    }

    #[test]
    fn test_user_room_name_uses_id_prefix() {
        assert_eq!(
            user_room_name(Some("3f2b9c1d-aaaa-bbbb-cccc-1234567890ab")),
            "zpluse-live-3f2b9c1d"
        );
        assert_eq!(user_room_name(Some("u1")), "zpluse-live-u1");
    }

    #[test]
    fn test_user_room_name_without_user() {
        assert_eq!(user_room_name(None), "zpluse-live-guest");
        assert_eq!(user_room_name(Some("../ ?")), "zpluse-live-guest");
    }

    #[test]
    fn test_personal_room_url() {
        assert_eq!(
            personal_room_url("meet.jit.si/", Some("user-1")),
            "https://meet.jit.si/zpluse-live-user-1"
        );
    }

    #[test]
    fn test_teacher_joins_unmuted() {
        let url = embed_url("meet.jit.si", "abc", &user_with_role(Some("teacher")));
        assert!(url.starts_with("https://meet.jit.si/ZplusEducation-LiveClass-abc#"));
        assert!(url.contains("config.startWithAudioMuted=false"));
        assert!(url.contains("userInfo.displayName=%22Asha%20Rao%22"));
    }

    #[test]
    fn test_student_joins_muted() {
        let url = embed_url("meet.jit.si/", "abc", &user_with_role(Some("student")));
        assert!(url.contains("config.startWithAudioMuted=true"));
        assert!(url.contains("config.startWithVideoMuted=true"));
        assert!(!url.contains("si//"));
    }

    #[test]
    fn test_missing_name_uses_fallback() {
        let mut user = user_with_role(Some("student"));
        user.user_metadata.full_name = None;
        let url = embed_url("meet.jit.si", "abc", &user);
        assert!(url.contains("userInfo.displayName=%22Zpluse%20Participant%22"));
    }
}
