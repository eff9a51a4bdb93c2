//! Password scoring and single-candidate audit.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::{is_digit, is_special};
use crate::sections::detect_vulnerabilities;
use crate::types::{AuditRecord, PasswordScore, PasswordStrength};

const POINTS_PER_CHAR: usize = 4;
const MAX_LENGTH_POINTS: usize = 40;
const UPPERCASE_POINTS: i64 = 10;
const LOWERCASE_POINTS: i64 = 10;
const DIGIT_POINTS: i64 = 20;
const SPECIAL_POINTS: i64 = 20;

/// Computes the strength score of a password.
///
/// Length gives 4 points per character up to 40. Each character class
/// present adds its weight: uppercase 10, lowercase 10, digit (any script)
/// 20, ASCII punctuation 20. The total is capped at 100.
pub fn score_password(password: &SecretString) -> PasswordScore {
    let pwd = password.expose_secret();

    let length = pwd.chars().count();
    let length_points = length
        .saturating_mul(POINTS_PER_CHAR)
        .min(MAX_LENGTH_POINTS) as i64;

    let has_upper = pwd.chars().any(char::is_uppercase);
    let has_lower = pwd.chars().any(char::is_lowercase);
    let has_digit = pwd.chars().any(is_digit);
    let has_special = pwd.chars().any(is_special);

    let class_points = [
        (has_upper, UPPERCASE_POINTS),
        (has_lower, LOWERCASE_POINTS),
        (has_digit, DIGIT_POINTS),
        (has_special, SPECIAL_POINTS),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, points)| points)
    .sum::<i64>();

    PasswordScore::new(length_points + class_points)
}

/// Maps a score to its strength category.
pub fn classify_score(score: PasswordScore) -> PasswordStrength {
    PasswordStrength::from_score(score)
}

/// Scores, classifies and checks one password, producing its audit record.
pub fn audit_password(password: SecretString) -> AuditRecord {
    let score = score_password(&password);
    let vulnerabilities = detect_vulnerabilities(&password);
    AuditRecord::new(password, score, vulnerabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vulnerability;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_score_empty_password() {
        assert_eq!(score_password(&secret("")).value(), 0);
    }

    #[test]
    fn test_score_all_classes_minimum_length() {
        // 8 chars * 4 = 32, plus 10 + 10 + 20 + 20
        let score = score_password(&secret("Aa1!aaaa"));
        assert_eq!(score.value(), 92);
        assert_eq!(classify_score(score), PasswordStrength::Strong);
    }

    #[test]
    fn test_score_length_contribution_caps_at_forty() {
        assert_eq!(score_password(&secret("aaaaaaaaaa")).value(), 50);
        assert_eq!(score_password(&secret("aaaaaaaaaaaaaaaaaaaaaaaaa")).value(), 50);
    }

    #[test]
    fn test_score_capped_at_hundred() {
        assert_eq!(score_password(&secret("LongEnough123!@#xyz")).value(), 100);
    }

    #[test]
    fn test_score_digits_only() {
        // 6 * 4 + 20
        let score = score_password(&secret("482915"));
        assert_eq!(score.value(), 44);
        assert_eq!(classify_score(score), PasswordStrength::Weak);
    }

    #[test]
    fn test_score_medium_band() {
        // 5 * 4 + 10 + 20 + 20
        let score = score_password(&secret("k#9z!"));
        assert_eq!(score.value(), 70);
        assert_eq!(classify_score(score), PasswordStrength::Medium);
    }

    #[test]
    fn test_score_counts_non_ascii_digits() {
        // 9 * 4 + 10 + 10 + 20 + 20
        let score = score_password(&secret("Abcdefg٣!"));
        assert_eq!(score.value(), 96);
        assert_eq!(classify_score(score), PasswordStrength::Strong);
    }

    #[test]
    fn test_score_fraction_is_not_a_digit() {
        // 9 * 4 + 10 + 10 + 20
        assert_eq!(score_password(&secret("Abcdefg½!")).value(), 76);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let samples = [
            "",
            "a",
            " ",
            "ÄÖÜäöü",
            "🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀",
            "Aa1!Aa1!Aa1!Aa1!Aa1!Aa1!Aa1!",
            "\u{0}\u{1}\u{2}",
        ];
        for sample in samples {
            let score = score_password(&secret(sample));
            assert!(
                score.value() <= 100,
                "score {} out of bounds for {:?}",
                score.value(),
                sample
            );
        }
    }

    #[test]
    #[serial]
    fn test_audit_password_record() {
        let record = audit_password(secret("Password123!"));
        assert_eq!(record.expose_password(), "Password123!");
        assert_eq!(record.score().value(), 100);
        assert_eq!(record.strength(), PasswordStrength::Strong);
        assert_eq!(record.vulnerabilities(), &[Vulnerability::PredictablePattern]);
    }

    #[test]
    #[serial]
    fn test_audit_password_non_ascii_digit() {
        let record = audit_password(secret("Abcdefg٣!"));
        assert_eq!(record.score().value(), 96);
        assert_eq!(record.strength(), PasswordStrength::Strong);
        assert_eq!(record.vulnerabilities(), &[Vulnerability::PredictablePattern]);
    }

    #[test]
    #[serial]
    fn test_audit_password_weak_record() {
        let record = audit_password(secret("abc1"));
        // 4 * 4 + 10 + 20
        assert_eq!(record.score().value(), 46);
        assert_eq!(record.strength(), PasswordStrength::Weak);
        assert_eq!(
            record.vulnerabilities(),
            &[
                Vulnerability::TooShort,
                Vulnerability::MissingUppercase,
                Vulnerability::MissingSpecialCharacters,
                Vulnerability::PredictablePattern,
            ]
        );
    }
}
