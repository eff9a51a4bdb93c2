//! Character class sections - digits, uppercase and special characters.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::charset::{is_digit, is_special};
use crate::types::Vulnerability;

/// Flags passwords without a digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(is_digit) {
        return Some(Vulnerability::MissingNumbers);
    }
    None
}

/// Flags passwords without an uppercase letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(char::is_uppercase) {
        return Some(Vulnerability::MissingUppercase);
    }
    None
}

/// Flags passwords without an ASCII punctuation character.
pub fn special_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(is_special) {
        return Some(Vulnerability::MissingSpecialCharacters);
    }
    None
}
