// Field-level input validation applied before any write.
//
// Each validator inspects the whole input and returns every violation it
// finds; callers reject the operation when the list is non-empty. The
// validators themselves never short-circuit, so a client sees all offending
// fields in one round trip.

use serde::Serialize;

/// One field-level rule failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

const MIN_PASSWORD_LENGTH: usize = 5;
const MIN_TITLE_LENGTH: usize = 5;
const MIN_CONTENT_LENGTH: usize = 5;

/// Validate a registration request: email format plus password strength.
pub fn validate_registration(email: &str, password: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !is_valid_email(email) {
        violations.push(Violation::new("email", "Email is invalid"));
    }
    check_required_length(&mut violations, "password", password, MIN_PASSWORD_LENGTH);

    violations
}

/// Validate post title and content for create and update.
pub fn validate_post_input(title: &str, content: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_required_length(&mut violations, "title", title, MIN_TITLE_LENGTH);
    check_required_length(&mut violations, "content", content, MIN_CONTENT_LENGTH);

    violations
}

/// Validate a user status update.
pub fn validate_status(status: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    if status.trim().is_empty() {
        violations.push(Violation::new("status", "Status must not be empty"));
    }

    violations
}

fn check_required_length(violations: &mut Vec<Violation>, field: &str, value: &str, min: usize) {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, format!("{} must not be empty", capitalize(field))));
    } else if value.chars().count() < min {
        violations.push(Violation::new(
            field,
            format!("{} must be at least {} characters", capitalize(field), min),
        ));
    }
}

/// Syntactic email check: non-empty local part, a single "@", and a domain
/// containing an interior dot. Deliverability is not our problem.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_registration() {
        assert!(validate_registration("a@b.com", "short").is_empty());
    }

    #[test]
    fn collects_every_violation_not_just_the_first() {
        let violations = validate_registration("bad", "abc");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "email");
        assert_eq!(violations[1].field, "password");
    }

    #[test]
    fn empty_password_is_reported_as_empty() {
        let violations = validate_registration("a@b.com", "");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("empty"));
    }

    #[test]
    fn email_requires_local_part_and_dotted_domain() {
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn post_input_reports_both_short_fields() {
        let violations = validate_post_input("hi", "");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "title");
        assert_eq!(violations[1].field, "content");
    }

    #[test]
    fn post_input_at_minimum_length_passes() {
        assert!(validate_post_input("title", "12345").is_empty());
    }

    #[test]
    fn blank_status_is_rejected() {
        assert_eq!(validate_status("  ").len(), 1);
        assert!(validate_status("I am new here!").is_empty());
    }
}
