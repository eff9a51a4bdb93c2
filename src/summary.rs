//! Batch statistics and certification verdict over audit records.

use std::fmt;

use crate::types::{AuditRecord, PasswordStrength};

/// Number of weak passwords listed in a summary.
pub const WEAK_SAMPLE_SIZE: usize = 5;

/// Weak-password count from which a batch fails certification.
const FAIL_THRESHOLD: usize = 5;

/// Batch-level audit verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificationStatus {
    Pass,
    ConditionalPass,
    Fail,
}

impl CertificationStatus {
    /// Pass with no weak passwords, conditional pass below five, fail otherwise.
    pub fn from_weak_count(weak: usize) -> Self {
        match weak {
            0 => Self::Pass,
            n if n < FAIL_THRESHOLD => Self::ConditionalPass,
            _ => Self::Fail,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::ConditionalPass => "CONDITIONAL PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for CertificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weak record together with its place in the audited batch.
#[derive(Debug, Clone, Copy)]
pub struct WeakEntry<'a> {
    /// Zero-based index of the record in the batch.
    pub position: usize,
    pub record: &'a AuditRecord,
}

impl WeakEntry<'_> {
    /// One-based batch position, as listed in reports.
    pub fn number(&self) -> usize {
        self.position + 1
    }
}

/// Aggregate view of one audit pass.
#[derive(Debug)]
pub struct AuditSummary<'a> {
    pub total: usize,
    pub strong: usize,
    pub medium: usize,
    pub weak: usize,
    /// Integer part of the mean score, 0 for an empty batch.
    pub security_score: u8,
    pub status: CertificationStatus,
    /// First weak records in input order, at most [`WEAK_SAMPLE_SIZE`].
    pub weak_sample: Vec<WeakEntry<'a>>,
}

impl<'a> AuditSummary<'a> {
    pub fn from_records(records: &'a [AuditRecord]) -> Self {
        let count = |strength: PasswordStrength| {
            records.iter().filter(|r| r.strength() == strength).count()
        };
        let strong = count(PasswordStrength::Strong);
        let medium = count(PasswordStrength::Medium);
        let weak = count(PasswordStrength::Weak);

        let security_score = if records.is_empty() {
            0
        } else {
            let sum: usize = records.iter().map(|r| r.score().value() as usize).sum();
            (sum / records.len()) as u8
        };

        let weak_sample = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.strength() == PasswordStrength::Weak)
            .map(|(position, record)| WeakEntry { position, record })
            .take(WEAK_SAMPLE_SIZE)
            .collect();

        Self {
            total: records.len(),
            strong,
            medium,
            weak,
            security_score,
            status: CertificationStatus::from_weak_count(weak),
            weak_sample,
        }
    }

    pub fn count(&self, strength: PasswordStrength) -> usize {
        match strength {
            PasswordStrength::Strong => self.strong,
            PasswordStrength::Medium => self.medium,
            PasswordStrength::Weak => self.weak,
        }
    }

    /// Share of the batch in the given band, as a percentage.
    pub fn percentage(&self, strength: PasswordStrength) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(strength) as f64 / self.total as f64 * 100.0
    }
}
