//! Error taxonomy for the proof-generation path.

use crate::cid::CidError;
use crate::timestamp::TimestampError;
use thiserror::Error;

/// Supplied signing-key material is unusable.
///
/// Always fatal: an operator who supplied key material intended to use a
/// real key, so a decoding mistake must surface instead of silently
/// degrading to an ephemeral keypair.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("signing key material is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("key material must be a base64-encoded 32-byte seed or 64-byte secret key, got {0} bytes")]
    InvalidLength(usize),
}

/// The signing primitive rejected its inputs.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("signing primitive rejected the key material: {0}")]
    InvalidKey(#[from] ed25519_dalek::SignatureError),

    #[error("system randomness unavailable: {0}")]
    Randomness(#[from] getrandom::Error),
}

/// Everything that can abort proof generation.
///
/// No partial proof is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum ProofError {
    #[error(transparent)]
    Cid(#[from] CidError),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
