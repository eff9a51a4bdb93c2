//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::Vulnerability;

const MIN_LENGTH: usize = 8;

/// Flags passwords shorter than eight characters.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Vulnerability::TooShort);
    }
    None
}
