//! Shared field validation helpers for request payloads.

/// Checks that a value looks like an email address.
///
/// Accepts a single `@` with a non-empty local part, no whitespace anywhere,
/// and a dot inside the domain with non-empty segments around it.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// Checks that a value is a plain phone number: digits only, at least ten.
///
/// No separators or country-code prefixes are accepted; clients submit the
/// number exactly as it should be stored.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() >= 10 && value.chars().all(|c| c.is_ascii_digit())
}
