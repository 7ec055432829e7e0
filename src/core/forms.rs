//! Client-side checks run before a form is submitted

/// Minimum password length accepted by the provider
pub const MIN_PASSWORD_LEN: usize = 6;

/// Rejected input: a short title plus the message shown under it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub title: &'static str,
    pub message: &'static str,
}

const fn field_error(title: &'static str, message: &'static str) -> FieldError {
    FieldError { title, message }
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(field_error("Email required", "Please enter your email address."));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => Ok(()),
        _ => Err(field_error("Invalid email", "Please enter a valid email address.")),
    }
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        Err(field_error("Too short", "Password must be at least 6 characters."))
    } else {
        Ok(())
    }
}

/// New password plus its confirmation
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password != confirm {
        return Err(field_error(
            "Passwords do not match",
            "Please make sure both passwords are identical.",
        ));
    }
    validate_password(password)
}

pub fn validate_required(value: &str, title: &'static str, message: &'static str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(field_error(title, message))
    } else {
        Ok(())
    }
}

/// Accepts only absolute http(s) URLs with a host
pub fn validate_http_url(url: &str) -> Result<(), FieldError> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() && !rest.starts_with('/') && !rest.contains(' ') => Ok(()),
        _ => Err(field_error("Invalid URL", "Enter a full http:// or https:// address.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert!(validate_email("asha@example.edu").is_ok());
        assert!(validate_email("  asha@example.edu ").is_ok());
        assert_eq!(validate_email("").unwrap_err().title, "Email required");
        for bad in ["asha", "@example.edu", "asha@example", "asha@.edu"] {
            assert_eq!(validate_email(bad).unwrap_err().title, "Invalid email", "{bad}");
        }
    }

    #[test]
    fn test_new_password_checks_match_first() {
        assert_eq!(
            validate_new_password("abc", "abd").unwrap_err().title,
            "Passwords do not match"
        );
        assert_eq!(validate_new_password("abc", "abc").unwrap_err().title, "Too short");
        assert!(validate_new_password("abcdef", "abcdef").is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(validate_password("éééééé").is_ok());
        assert!(validate_password("12345").is_err());
    }

    #[test]
    fn test_required() {
        assert!(validate_required("  ", "Title required", "x").is_err());
        assert!(validate_required("Rust", "Title required", "x").is_ok());
    }

    #[test]
    fn test_http_url() {
        assert!(validate_http_url("https://www.iitb.ac.in").is_ok());
        assert!(validate_http_url("http://nitt.edu/about").is_ok());
        assert!(validate_http_url("ftp://x.edu").is_err());
        assert!(validate_http_url("https://").is_err());
        assert!(validate_http_url("iitb.ac.in").is_err());
    }
}
