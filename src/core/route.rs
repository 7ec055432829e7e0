//! Application paths and redirect helpers

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const RESET_PASSWORD: &str = "/reset-password";
pub const COLLEGES: &str = "/colleges";
pub const COMPARE: &str = "/colleges/compare";
pub const ADMISSIONS: &str = "/admissions";
pub const HELP: &str = "/help";
pub const TERMS: &str = "/terms";
pub const PRIVACY: &str = "/privacy";
pub const EDUCATOR_DOCS: &str = "/docs/educators";
pub const STUDENT_DASHBOARD: &str = "/dashboard";
pub const TEACHER_DASHBOARD: &str = "/teacher";
pub const ADMIN_DASHBOARD: &str = "/admin";
pub const STUDY_HUB: &str = "/study-hub";
pub const STUDY_HUB_LIVE: &str = "/study-hub/live-classes";
pub const STUDY_HUB_PERFORMANCE: &str = "/study-hub/performance";
pub const STUDY_HUB_PROFILE: &str = "/study-hub/profile";

/// Query parameter carrying the page to return to after sign-in
pub const REDIRECT_PARAM: &str = "redirectTo";

pub fn college_path(id: &str) -> String {
    format!("/college/{}", encode_component(id))
}

pub fn live_class_path(class_id: &str) -> String {
    format!("/live/{}", encode_component(class_id))
}

/// Login route that returns to `return_to` afterwards
pub fn login_with_return(return_to: &str) -> String {
    with_query(LOGIN, REDIRECT_PARAM, return_to)
}

/// `path?key=value` with the pair form-encoded
pub fn with_query(path: &str, key: &str, value: &str) -> String {
    match serde_urlencoded::to_string([(key, value)]) {
        Ok(query) => format!("{}?{}", path, query),
        Err(_) => path.to_string(),
    }
}

/// Post-login destination: the requested local path, else the fallback
///
/// Only same-origin absolute paths are honoured.
pub fn safe_return_path(requested: Option<&str>, fallback: &str) -> String {
    match requested {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && path != LOGIN => {
            path.to_string()
        }
        _ => fallback.to_string(),
    }
}

/// Percent-encode everything except RFC 3986 unreserved characters
///
/// For path segments and the conferencing hash config, where a space must
/// stay `%20`. Query strings go through [`with_query`].
pub fn encode_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_with_return_encodes_path() {
        assert_eq!(
            login_with_return("/dashboard"),
            "/login?redirectTo=%2Fdashboard"
        );
        assert_eq!(
            login_with_return("/live/abc 1?x=y"),
            "/login?redirectTo=%2Flive%2Fabc+1%3Fx%3Dy"
        );
    }

    #[test]
    fn test_with_query_round_trips_through_form_decoding() {
        let url = with_query("/recover", "redirect_to", "https://zpluse.edu/reset-password?a=b&c=d é");
        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap();
        assert_eq!(
            pairs,
            vec![(
                "redirect_to".to_string(),
                "https://zpluse.edu/reset-password?a=b&c=d é".to_string()
            )]
        );
    }

    #[test]
    fn test_encode_component_multibyte() {
        assert_eq!(encode_component("é"), "%C3%A9");
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/teacher"), "/"), "/teacher");
        assert_eq!(safe_return_path(Some("//evil.com"), "/"), "/");
        assert_eq!(safe_return_path(Some("https://evil.com"), "/"), "/");
        assert_eq!(safe_return_path(Some("/login"), "/dashboard"), "/dashboard");
        assert_eq!(safe_return_path(None, "/admin"), "/admin");
    }

    #[test]
    fn test_entity_paths() {
        assert_eq!(college_path("c-12"), "/college/c-12");
        assert_eq!(live_class_path("course 7"), "/live/course%207");
    }
}
