//! Length rule - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is counted in UTF-16 code units, the way browser input fields
/// report it. Characters outside the Basic Multilingual Plane (emoji)
/// count twice.
pub fn length_rule(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}
