//! Input validation and normalization for contact fields.
//!
//! - Phones: any formatting is allowed, only the digits are kept, and there
//!   must be between 10 and 15 of them. A digit is any Unicode decimal digit
//!   (`\d`), so fullwidth `５` counts and is kept as written.
//! - Emails: a deliberately loose `local@domain.tld` shape check. It accepts
//!   plenty of addresses RFC 5322 would not (`a..b@c.d`, `-@-.x`) and that is
//!   the intended behavior; changing the pattern changes which stored books
//!   still validate. One trailing newline is tolerated after the address.
//! - Names: trimmed and title-cased to form the contact key.

use crate::error::{ContactsError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;

static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid digit regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+\n?$").expect("valid email regex"));

/// Strips everything but digits and checks the digit count.
///
/// # Examples
/// ```
/// use contactbook::validation::validate_phone;
///
/// assert_eq!(validate_phone("(555) 123-4567").unwrap(), "5551234567");
/// assert!(validate_phone("123-4567").is_err());
/// ```
pub fn validate_phone(raw: &str) -> Result<String> {
    let digits = NON_DIGIT_RE.replace_all(raw, "");
    if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.chars().count()) {
        Ok(digits.into_owned())
    } else {
        Err(ContactsError::InvalidPhone(raw.to_string()))
    }
}

pub fn validate_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

/// Produces the contact key for a raw display name.
///
/// A cased letter is uppercased when it starts a run of letters and
/// lowercased otherwise, so `"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`.
///
/// # Examples
/// ```
/// use contactbook::validation::clean_name;
///
/// assert_eq!(clean_name(" john smith "), "John Smith");
/// assert_eq!(clean_name("   "), "");
/// ```
pub fn clean_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_cased = false;

    for ch in raw.trim().chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && !prev_cased {
            out.extend(ch.to_uppercase());
        } else if cased {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev_cased = cased;
    }

    out
}
