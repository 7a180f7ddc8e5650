//! Proof-of-provenance envelopes for pinned JSON records.
//!
//! A proof binds a content identifier and a UTC timestamp to a detached
//! Ed25519 signature, so a downstream verifier holding the signer's
//! public key can confirm that a pinned record was produced by a trusted
//! signer at the claimed time.
//!
//! The signable message is the canonical JSON serialization of the
//! payload (compact, `cid` before `timestamp`, millisecond-`Z`
//! timestamps); signing and verification share one canonicalization
//! function, so proofs are reproducible byte for byte.
//!
//! # Example
//!
//! ```
//! use fl_proof::{generate_proof, verify_proof};
//!
//! let proof = generate_proof(
//!     "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
//!     "2024-01-01T00:00:00.000Z",
//!     None, // no configured key: sign with an ephemeral keypair
//! )?;
//!
//! assert!(verify_proof(&proof, None).is_ok());
//! # Ok::<(), fl_proof::ProofError>(())
//! ```

mod cid;
mod error;
mod keys;
mod sign;
mod timestamp;
mod types;
mod verify;

pub use cid::{Cid, CidError, DEFAULT_GATEWAY};
pub use error::{ConfigurationError, CryptoError, ProofError};
pub use keys::{keygen, SignerKey};
pub use sign::{generate_proof, generate_proof_with_key, sign_payload};
pub use timestamp::{Timestamp, TimestampError};
pub use types::{Proof, ProofPayload, PROOF_ALGO};
pub use verify::{verify_proof, VerificationError};
