//! User roles and their canonical landing routes

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::route;

/// Role carried in the user's metadata, validated when the session is read
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("student")]
    Student,
    #[display("teacher")]
    Teacher,
    #[display("admin")]
    Admin,
}

/// Role validation failures at the authentication boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("user has no role defined in metadata")]
    Missing,
    #[error("unknown role: {0}")]
    Unknown(String),
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Route a signed-in user of this role lands on
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => route::STUDENT_DASHBOARD,
            Role::Teacher => route::TEACHER_DASHBOARD,
            Role::Admin => route::ADMIN_DASHBOARD,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Administrator",
        }
    }

    /// Validate an optional raw metadata value
    pub fn from_metadata(raw: Option<&str>) -> Result<Self, RoleError> {
        match raw.map(str::trim) {
            None | Some("") => Err(RoleError::Missing),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_home_paths() {
        assert_eq!(Role::Student.home_path(), "/dashboard");
        assert_eq!(Role::Teacher.home_path(), "/teacher");
        assert_eq!(Role::Admin.home_path(), "/admin");
    }

    #[test]
    fn test_role_parse_is_exact() {
        assert_eq!("teacher".parse::<Role>(), Ok(Role::Teacher));
        assert_eq!(
            "Teacher".parse::<Role>(),
            Err(RoleError::Unknown("Teacher".to_string()))
        );
    }

    #[test]
    fn test_role_from_metadata() {
        assert_eq!(Role::from_metadata(Some("admin")), Ok(Role::Admin));
        assert_eq!(Role::from_metadata(None), Err(RoleError::Missing));
        assert_eq!(Role::from_metadata(Some("  ")), Err(RoleError::Missing));
        assert_eq!(
            Role::from_metadata(Some("dean")),
            Err(RoleError::Unknown("dean".to_string()))
        );
    }

    #[test]
    fn test_role_display_matches_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
            assert_eq!(role.to_string(), role.as_str());
        }
    }
}
