//! Field validation for projects and user profiles.
//!
//! Validators are pure and accept partial records: a field that is `None` is
//! not checked (except `client_name`, which is always required). Each returns
//! the list of violation messages; an empty list means the input is valid.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateUrl;

use crate::error::CoreError;
use crate::profile::PartialProfile;
use crate::project::PartialProject;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum trimmed length of a project's client name.
pub const MIN_CLIENT_NAME_LENGTH: usize = 2;

/// Maximum trimmed length of a project's client name.
pub const MAX_CLIENT_NAME_LENGTH: usize = 200;

/// Minimum trimmed length of the profile name.
pub const MIN_PROFILE_NAME_LENGTH: usize = 2;

/// Maximum trimmed length of the profile name.
pub const MAX_PROFILE_NAME_LENGTH: usize = 100;

/// `localpart@domain.tld`, no whitespace and a single `@`.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate a (possibly partial) project.
pub fn validate_project(project: &PartialProject<'_>) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(length) = project.client_name.map(trimmed_length).filter(|&n| n > 0) else {
        errors.push("Client name is required".to_string());
        return errors;
    };

    if length < MIN_CLIENT_NAME_LENGTH {
        errors.push(format!(
            "Client name must be at least {MIN_CLIENT_NAME_LENGTH} characters"
        ));
    } else if length > MAX_CLIENT_NAME_LENGTH {
        errors.push(format!(
            "Client name must be at most {MAX_CLIENT_NAME_LENGTH} characters"
        ));
    }

    errors
}

/// Validate a (possibly partial) user profile.
pub fn validate_user_profile(profile: &PartialProfile<'_>) -> Vec<String> {
    let mut errors = Vec::new();

    if let Some(name) = profile.name {
        let length = trimmed_length(name);
        if length == 0 {
            errors.push("Name is required".to_string());
        } else if length < MIN_PROFILE_NAME_LENGTH {
            errors.push(format!(
                "Name must be at least {MIN_PROFILE_NAME_LENGTH} characters"
            ));
        } else if length > MAX_PROFILE_NAME_LENGTH {
            errors.push(format!(
                "Name must be at most {MAX_PROFILE_NAME_LENGTH} characters"
            ));
        }
    }

    if let Some(email) = profile.email.filter(|e| !e.is_empty()) {
        if !is_valid_email(email) {
            errors.push("Email must be a valid address".to_string());
        }
    }

    if let Some(photo) = profile.photo.filter(|p| !p.is_empty()) {
        if !is_valid_url(photo) {
            errors.push("Photo URL must be valid".to_string());
        }
    }

    errors
}

/// Turn a violation list into a `Result`, failing with
/// [`CoreError::Validation`] when it is non-empty.
pub fn ensure_valid(errors: Vec<String>) -> Result<(), CoreError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(errors))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether `email` has the `localpart@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `url` parses as a well-formed absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    url.validate_url()
}

fn trimmed_length(value: &str) -> usize {
    value.trim().chars().count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn project(name: &str) -> Vec<String> {
        validate_project(&PartialProject {
            client_name: Some(name),
        })
    }

    fn profile(name: Option<&str>, email: Option<&str>, photo: Option<&str>) -> Vec<String> {
        validate_user_profile(&PartialProfile { name, email, photo })
    }

    #[test]
    fn client_name_required() {
        assert_eq!(validate_project(&PartialProject::default()), vec!["Client name is required"]);
        assert_eq!(project(""), vec!["Client name is required"]);
        assert_eq!(project("   "), vec!["Client name is required"]);
    }

    #[test]
    fn client_name_length_bounds() {
        assert_eq!(project("A"), vec!["Client name must be at least 2 characters"]);
        assert_eq!(project("  A  "), vec!["Client name must be at least 2 characters"]);
        assert!(project("Al").is_empty());
        assert!(project("Valid Name").is_empty());
        assert!(project(&"x".repeat(200)).is_empty());
        assert_eq!(
            project(&"x".repeat(201)),
            vec!["Client name must be at most 200 characters"]
        );
    }

    #[test]
    fn client_name_counts_characters_not_bytes() {
        assert!(project("Zé").is_empty());
        assert!(project(&"ç".repeat(200)).is_empty());
    }

    #[test]
    fn profile_fields_are_optional() {
        assert!(validate_user_profile(&PartialProfile::default()).is_empty());
        assert!(profile(None, Some(""), Some("")).is_empty());
    }

    #[test]
    fn profile_name_bounds() {
        assert_eq!(profile(Some(" "), None, None), vec!["Name is required"]);
        assert_eq!(profile(Some("A"), None, None), vec!["Name must be at least 2 characters"]);
        assert!(profile(Some("Ana"), None, None).is_empty());
        assert_eq!(
            profile(Some(&"n".repeat(101)), None, None),
            vec!["Name must be at most 100 characters"]
        );
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ana@studio.com.br"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ana@studio"));
        assert!(!is_valid_email("ana silva@studio.com"));
        assert!(!is_valid_email("ana@@studio.com"));
        assert_eq!(
            profile(Some("Ana"), Some("not-an-email"), None),
            vec!["Email must be a valid address"]
        );
    }

    #[test]
    fn photo_must_be_absolute_url() {
        assert!(is_valid_url("https://cdn.example.com/me.png"));
        assert!(!is_valid_url("/images/me.png"));
        assert!(!is_valid_url("not a url"));
        assert_eq!(
            profile(Some("Ana"), None, Some("me.png")),
            vec!["Photo URL must be valid"]
        );
    }

    #[test]
    fn collects_every_violation() {
        let errors = profile(Some("A"), Some("bad"), Some("bad"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn ensure_valid_wraps_violations() {
        assert!(ensure_valid(Vec::new()).is_ok());
        assert_matches!(
            ensure_valid(project("A")),
            Err(CoreError::Validation(errors)) if errors.len() == 1
        );
    }
}
