//! Pattern section - detects predictable substrings.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::patterns::contains_common_pattern;
use crate::types::Vulnerability;

/// Flags passwords containing a known predictable substring.
pub fn pattern_section(password: &SecretString) -> SectionResult {
    if contains_common_pattern(password.expose_secret()) {
        return Some(Vulnerability::PredictablePattern);
    }
    None
}
