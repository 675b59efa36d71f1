// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Input checks the services run before storing a record.

use thiserror::Error;

/// Why a create request was refused. Reported to the client as a bare 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("invalid {0} format")]
    Format(&'static str),

    #[error("{0} must be greater than 0")]
    NotPositive(&'static str),
}

/// Non-blank after trimming.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `local@domain.tld`: local part from `[A-Za-z0-9+_.-]`, domain from
/// `[A-Za-z0-9.-]`, and a final label of at least two ASCII letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'));
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    local_ok && host_ok && tld_ok
}

/// E.164-ish: optional `+`, first digit 1-9, 2 to 15 digits in total.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let mut chars = digits.chars();
    let first_ok = matches!(chars.next(), Some('1'..='9'));
    first_ok
        && (2..=15).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings() {
        assert!(is_not_empty("a"));
        assert!(!is_not_empty(""));
        assert!(!is_not_empty("   "));
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co"));
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@example.c"));
        assert!(!is_valid_email("ada@example.c0m"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada@.com"));
    }

    #[test]
    fn phones() {
        assert!(is_valid_phone("+14155550123"));
        assert!(is_valid_phone("62812345678"));
        assert!(is_valid_phone("12"));
        assert!(!is_valid_phone("1"));
        assert!(!is_valid_phone("0812345678"));
        assert!(!is_valid_phone("+1 415 555 0123"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone(""));
    }
}
