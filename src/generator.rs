//! Random password batch generation.

use std::ops::RangeInclusive;

use rand::Rng;
use secrecy::SecretString;

/// ASCII letters, digits and punctuation.
pub const MIXED_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Lowercase letters and digits, used for deliberately weak candidates.
pub const WEAK_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub const MIXED_LENGTH: RangeInclusive<usize> = 6..=16;
pub const WEAK_LENGTH: RangeInclusive<usize> = 4..=8;

/// Probability that a candidate is drawn from the weak alphabet.
pub const WEAK_PROBABILITY: f64 = 0.2;

/// Generates `count` random passwords using the thread-local RNG.
pub fn generate_passwords(count: usize) -> Vec<SecretString> {
    generate_passwords_with_rng(&mut rand::thread_rng(), count)
}

/// Generates `count` random passwords from the given RNG.
///
/// About one candidate in five is deliberately weak (4 to 8 lowercase
/// letters and digits); the rest are 6 to 16 characters from the mixed
/// alphabet. Pass a seeded RNG for reproducible batches.
pub fn generate_passwords_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Vec<SecretString> {
    #[cfg(feature = "tracing")]
    tracing::debug!("generating {} random passwords", count);

    (0..count)
        .map(|_| {
            let candidate = if rng.gen_bool(WEAK_PROBABILITY) {
                let length = rng.gen_range(WEAK_LENGTH);
                sample(rng, WEAK_ALPHABET, length)
            } else {
                let length = rng.gen_range(MIXED_LENGTH);
                sample(rng, MIXED_ALPHABET, length)
            };
            SecretString::new(candidate.into())
        })
        .collect()
}

fn sample<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}
