//! Character variety rules - digits, uppercase letters, special characters.
//!
//! Only ASCII counts as a letter or digit. Anything else, including
//! whitespace and non-ASCII letters, is a special character.

/// At least one ASCII digit `0-9`.
pub fn digit_rule(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// At least one ASCII uppercase letter `A-Z`.
pub fn uppercase_rule(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// At least one character that is neither an ASCII letter nor an ASCII digit.
pub fn special_rule(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
