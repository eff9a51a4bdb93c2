//! Vulnerability detection sections
//!
//! Each section checks one weakness. Sections run in a fixed order so the
//! detected vulnerabilities are reproducible.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::pattern_section;
pub use variety::{digit_section, special_section, uppercase_section};

use secrecy::SecretString;

use crate::types::Vulnerability;

/// Result type for section check functions.
/// - `Some(vulnerability)` - Section found a weakness
/// - `None` - Section passed
pub type SectionResult = Option<Vulnerability>;

type Section = fn(&SecretString) -> SectionResult;

const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("digits", digit_section),
    ("uppercase", uppercase_section),
    ("special", special_section),
    ("pattern", pattern_section),
];

/// Runs every section over the password and collects the weaknesses found,
/// in section order.
pub fn detect_vulnerabilities(password: &SecretString) -> Vec<Vulnerability> {
    let mut found = Vec::new();
    for (_section_name, section_fn) in SECTIONS {
        if let Some(vulnerability) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::trace!("section {} flagged: {}", _section_name, vulnerability);
            found.push(vulnerability);
        }
    }
    found
}
