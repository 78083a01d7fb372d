//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for logs (e.g., 091****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

/// Mask every phone in a list and join them for log output
pub fn mask_phone_numbers(phones: &[String]) -> String {
    phones
        .iter()
        .map(|phone| mask_phone_number(phone))
        .collect::<Vec<_>>()
        .join(",")
}

/// Rewrite an Iranian mobile number into `+98` international form
///
/// Numbers that do not look Iranian are returned with formatting stripped.
pub fn to_iran_international(phone: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(phone, "").into_owned();

    if let Some(rest) = digits.strip_prefix('0') {
        return format!("+98{}", rest);
    }
    if digits.starts_with("98") {
        return format!("+{}", digits);
    }
    if digits.len() == 10 {
        return format!("+98{}", digits);
    }
    digits
}
