//! Batch audit: runs the evaluator over a list of candidates.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::audit_password;
use crate::generator::generate_passwords;
use crate::timing::timed;
use crate::types::AuditRecord;

/// Audits every candidate, returning one record per password in input order.
pub fn run_audit<I>(passwords: I) -> Vec<AuditRecord>
where
    I: IntoIterator<Item = SecretString>,
{
    let records: Vec<AuditRecord> = passwords.into_iter().map(audit_password).collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("audited {} passwords", records.len());

    records
}

/// Generates `count` random passwords and audits them, logging the elapsed time.
pub fn audit_random_batch(count: usize) -> Vec<AuditRecord> {
    timed("password audit", || run_audit(generate_passwords(count)))
}

/// Audits candidates until done or until the token is cancelled.
///
/// On cancellation the records completed so far are returned; they are
/// always a prefix of the input order.
#[cfg(feature = "async")]
pub fn run_audit_cancellable<I>(passwords: I, token: &CancellationToken) -> Vec<AuditRecord>
where
    I: IntoIterator<Item = SecretString>,
{
    let mut records = Vec::new();
    for password in passwords {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::warn!("audit cancelled after {} passwords", records.len());
            break;
        }
        records.push(audit_password(password));
    }
    records
}

/// Async version that streams each audit record through a channel.
///
/// Stops early if the token is cancelled or the receiver goes away.
#[cfg(feature = "async")]
pub async fn run_audit_tx<I>(passwords: I, token: CancellationToken, tx: mpsc::Sender<AuditRecord>)
where
    I: IntoIterator<Item = SecretString>,
{
    #[cfg(feature = "tracing")]
    tracing::info!("streaming audit is about to start...");

    for password in passwords {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::warn!("streaming audit cancelled");
            return;
        }

        let record = audit_password(password);
        if let Err(_e) = tx.send(record).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send audit record: {}", _e);
            return;
        }
    }
}
