//! Audit data types: scores, strength bands, vulnerabilities and records.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Upper bound of a password score.
pub const MAX_SCORE: u8 = 100;

const MEDIUM_THRESHOLD: u8 = 50;
const STRONG_THRESHOLD: u8 = 80;

/// A password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score, clamping the raw value into `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_SCORE as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Strength band this score falls into.
    pub fn strength(self) -> PasswordStrength {
        PasswordStrength::from_score(self)
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Coarse strength category of a scored password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub const ALL: [PasswordStrength; 3] = [Self::Strong, Self::Medium, Self::Weak];

    /// Classifies a score: below 50 is weak, below 80 is medium, the rest strong.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            s if s < MEDIUM_THRESHOLD => Self::Weak,
            s if s < STRONG_THRESHOLD => Self::Medium,
            _ => Self::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named weakness found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vulnerability {
    TooShort,
    MissingNumbers,
    MissingUppercase,
    MissingSpecialCharacters,
    PredictablePattern,
}

impl Vulnerability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TooShort => "too short",
            Self::MissingNumbers => "missing numbers",
            Self::MissingUppercase => "missing uppercase",
            Self::MissingSpecialCharacters => "missing special characters",
            Self::PredictablePattern => "predictable pattern found",
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of auditing a single password candidate.
///
/// Records are built once by the evaluator and are read-only afterwards.
/// The password stays wrapped in a [`SecretString`], so `Debug` output
/// never shows it.
#[derive(Debug)]
pub struct AuditRecord {
    password: SecretString,
    score: PasswordScore,
    strength: PasswordStrength,
    vulnerabilities: Vec<Vulnerability>,
}

impl AuditRecord {
    pub(crate) fn new(
        password: SecretString,
        score: PasswordScore,
        vulnerabilities: Vec<Vulnerability>,
    ) -> Self {
        Self {
            password,
            strength: score.strength(),
            score,
            vulnerabilities,
        }
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Plain-text password, for report writers that need to print it.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Detected weaknesses, in detection order.
    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }

    /// Weaknesses joined with `", "`, as shown in audit reports.
    pub fn vulnerability_summary(&self) -> String {
        self.vulnerabilities
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(PasswordScore::new(-20).value(), 0);
        assert_eq!(PasswordScore::new(0).value(), 0);
        assert_eq!(PasswordScore::new(73).value(), 73);
        assert_eq!(PasswordScore::new(100).value(), 100);
        assert_eq!(PasswordScore::new(250).value(), 100);
    }

    #[test]
    fn test_strength_boundaries() {
        let cases = [
            (0, PasswordStrength::Weak),
            (49, PasswordStrength::Weak),
            (50, PasswordStrength::Medium),
            (79, PasswordStrength::Medium),
            (80, PasswordStrength::Strong),
            (100, PasswordStrength::Strong),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                PasswordScore::new(raw).strength(),
                expected,
                "score {} classified wrongly",
                raw
            );
        }
    }

    #[test]
    fn test_every_score_has_exactly_one_band() {
        for raw in 0..=100 {
            let strength = PasswordStrength::from_score(PasswordScore::new(raw));
            let matching = PasswordStrength::ALL
                .iter()
                .filter(|&&s| s == strength)
                .count();
            assert_eq!(matching, 1);
        }
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(PasswordStrength::Medium.to_string(), "Medium");
        assert_eq!(PasswordScore::new(92).to_string(), "92/100");
        assert_eq!(
            Vulnerability::MissingSpecialCharacters.to_string(),
            "missing special characters"
        );
    }

    #[test]
    fn test_record_strength_follows_score() {
        let record = AuditRecord::new(
            SecretString::new("abc".to_string().into()),
            PasswordScore::new(42),
            vec![Vulnerability::TooShort, Vulnerability::PredictablePattern],
        );
        assert_eq!(record.strength(), PasswordStrength::Weak);
        assert_eq!(record.expose_password(), "abc");
        assert_eq!(
            record.vulnerability_summary(),
            "too short, predictable pattern found"
        );
        assert!(!format!("{:?}", record).contains("\"abc\""));
    }
}
