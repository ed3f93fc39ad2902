// SPDX-License-Identifier: MPL-2.0
//! Form validators.
//!
//! Each validator returns the notification kind key to dispatch on failure,
//! together with the field the annotation belongs to.

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Exact length of an account hash, in characters.
pub const ACCOUNT_HASH_LEN: usize = 20;

/// A failed validation: which kind to dispatch, and for which field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub kind: &'static str,
    pub field: &'static str,
}

impl Violation {
    const fn new(kind: &'static str, field: &'static str) -> Self {
        Self { kind, field }
    }
}

/// Returns whether `value` looks like an email address.
///
/// Accepts `local@domain.tld` with no whitespace, exactly one `@`, and at
/// least one dot in the domain that is neither its first nor last character.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1 && !domain.starts_with('.'),
        None => false,
    }
}

/// Checks that every `(field, value)` pair is non-blank.
///
/// # Errors
///
/// Returns `MISSING_FIELDS` on the first blank field.
pub fn required(fields: &[(&'static str, &str)]) -> Result<(), Violation> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(Violation::new("MISSING_FIELDS", field)),
        None => Ok(()),
    }
}

/// # Errors
///
/// Returns `INVALID_EMAIL` if the address is malformed.
pub fn email(field: &'static str, value: &str) -> Result<(), Violation> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(Violation::new("INVALID_EMAIL", field))
    }
}

/// # Errors
///
/// Returns `PASSWORD_TOO_SHORT` below [`PASSWORD_MIN_LEN`] characters.
pub fn password(field: &'static str, value: &str) -> Result<(), Violation> {
    if value.chars().count() >= PASSWORD_MIN_LEN {
        Ok(())
    } else {
        Err(Violation::new("PASSWORD_TOO_SHORT", field))
    }
}

/// # Errors
///
/// Returns `INVALID_ACCOUNT_HASH` unless the trimmed value is exactly
/// [`ACCOUNT_HASH_LEN`] characters.
pub fn account_hash(field: &'static str, value: &str) -> Result<(), Violation> {
    if value.trim().chars().count() == ACCOUNT_HASH_LEN {
        Ok(())
    } else {
        Err(Violation::new("INVALID_ACCOUNT_HASH", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{kind, Surface};

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("analyst@scanora.io"));
        assert!(is_valid_email("  first.last+tag@mail.example.com "));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "",
            "plain",
            "@domain.com",
            "user@",
            "user@domain",
            "user@.com",
            "user@domain.",
            "a b@domain.com",
            "a@b@c.com",
        ] {
            assert!(!is_valid_email(bad), "accepted {bad:?}");
        }
    }

    #[test]
    fn required_reports_first_blank_field() {
        let result = required(&[("email", "a@b.co"), ("password", "  "), ("username", "")]);
        assert_eq!(result, Err(Violation::new("MISSING_FIELDS", "password")));
        assert!(required(&[("email", "x")]).is_ok());
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(password("password", "1234567").is_err());
        assert!(password("password", "12345678").is_ok());
        assert!(password("password", "éééééééé").is_ok());
    }

    #[test]
    fn account_hash_must_be_twenty_characters() {
        assert!(account_hash("hash", "ABCDEFGHIJKLMNOPQRST").is_ok());
        assert!(account_hash("hash", "ABCDEFGHIJKLMNOPQRS").is_err());
        assert!(account_hash("hash", "ABCDEFGHIJKLMNOPQRSTU").is_err());
    }

    #[test]
    fn every_violation_kind_is_an_inline_kind() {
        for key in [
            "MISSING_FIELDS",
            "INVALID_EMAIL",
            "PASSWORD_TOO_SHORT",
            "INVALID_ACCOUNT_HASH",
        ] {
            let kind = kind::lookup(key).expect("registered kind");
            assert_eq!(kind.surface(), Surface::Inline, "{key}");
        }
    }
}
