//! Advisory pre-submit validation for the registration form.
//!
//! These checks are UI affordances, not a security boundary; the backend
//! revalidates everything.

use std::collections::BTreeMap;

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Check a registration attempt; an empty map means it may be submitted.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    if username.trim().chars().count() < USERNAME_MIN_LEN {
        errors.insert(
            "username".to_string(),
            format!("Le nom d'utilisateur doit faire au moins {USERNAME_MIN_LEN} caractères."),
        );
    }
    if !is_plausible_email(email) {
        errors.insert(
            "email".to_string(),
            "Adresse email invalide.".to_string(),
        );
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        errors.insert(
            "password".to_string(),
            format!("Le mot de passe doit faire au moins {PASSWORD_MIN_LEN} caractères."),
        );
    }
    errors
}

/// Basic email shape: one `@`, non-empty local part, dotted domain.
pub fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_username_is_blocked_before_submit() {
        let errors = validate_registration("ab", "alice@example.com", "longenough");
        assert!(errors.contains_key("username"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn short_password_is_blocked() {
        let errors = validate_registration("alice", "alice@example.com", "12345");
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_registration("alice", "alice@example.com", "123456").is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(is_plausible_email("a@b.fr"));
        assert!(!is_plausible_email("ab.fr"));
        assert!(!is_plausible_email("@b.fr"));
        assert!(!is_plausible_email("a@bfr"));
        assert!(!is_plausible_email("a@b.fr@c"));
        assert!(!is_plausible_email("a@.fr"));
    }
}
