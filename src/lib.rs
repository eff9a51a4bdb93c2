//! Password batch auditing library
//!
//! Generates batches of random passwords and audits them: each candidate
//! gets a score in `0..=100`, a strength band and a list of detected
//! weaknesses. Batches can be reduced to an [`AuditSummary`] with a
//! certification verdict.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable and channel-streaming audits
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_AUDIT_PATTERNS_PATH`: Path to a file of extra predictable
//!   patterns (default: `./assets/patterns.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_audit::{AuditSummary, PasswordStrength, audit_password, run_audit, generate_passwords};
//! use secrecy::SecretString;
//!
//! let record = audit_password(SecretString::new("Aa1!aaaa".to_string().into()));
//! assert_eq!(record.score().value(), 92);
//! assert_eq!(record.strength(), PasswordStrength::Strong);
//!
//! let records = run_audit(generate_passwords(50));
//! let summary = AuditSummary::from_records(&records);
//! println!("Security score: {}/100 ({})", summary.security_score, summary.status);
//! ```

mod auditor;
mod charset;
mod evaluator;
mod generator;
mod patterns;
mod sections;
mod summary;
mod timing;
mod types;

// Public API
pub use auditor::{audit_random_batch, run_audit};
pub use evaluator::{audit_password, classify_score, score_password};
pub use generator::{
    MIXED_ALPHABET, MIXED_LENGTH, WEAK_ALPHABET, WEAK_LENGTH, WEAK_PROBABILITY,
    generate_passwords, generate_passwords_with_rng,
};
pub use patterns::{
    COMMON_PATTERNS, PatternsError, contains_common_pattern, get_patterns_path, init_patterns,
    init_patterns_from_path,
};
pub use sections::detect_vulnerabilities;
pub use summary::{AuditSummary, CertificationStatus, WEAK_SAMPLE_SIZE, WeakEntry};
pub use timing::timed;
pub use types::{AuditRecord, MAX_SCORE, PasswordScore, PasswordStrength, Vulnerability};

#[cfg(feature = "async")]
pub use auditor::{run_audit_cancellable, run_audit_tx};
