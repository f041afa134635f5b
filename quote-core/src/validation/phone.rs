use std::sync::LazyLock;

use regex::Regex;

/// Canonical WhatsApp number: `(DD) D DDDD-DDDD`.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\d{2}\) \d \d{4}-\d{4}$").expect("phone pattern is a valid regex")
});

const MAX_PHONE_DIGITS: usize = 11;

/// Reformats whatever the user typed into the display mask.
///
/// Non-digits are dropped and the number is capped at eleven digits. Short
/// inputs get a partial mask so the field can be re-formatted on every
/// keystroke:
///
/// ```
/// use quote_core::validation::format_phone;
///
/// assert_eq!(format_phone("61"), "61");
/// assert_eq!(format_phone("6198"), "(61) 98");
/// assert_eq!(format_phone("61982104088"), "(61) 9 8210-4088");
/// assert_eq!(format_phone("+55 (61) 98210-40889999"), "(55) 6 1982-1040");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    match digits.len() {
        n if n > 6 => format!(
            "({}) {} {}-{}",
            &digits[..2],
            &digits[2..3],
            &digits[3..7],
            &digits[7..]
        ),
        n if n > 2 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => digits,
    }
}

/// Whether `phone` is exactly in the canonical mask.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}
