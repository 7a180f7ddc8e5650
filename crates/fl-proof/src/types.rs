//! Proof data structures.

use crate::cid::Cid;
use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Algorithm tag carried by every proof this crate produces.
pub const PROOF_ALGO: &str = "ed25519+base64";

/// The signed content of a proof.
///
/// Field order is fixed at declaration: `cid`, then `timestamp`. The
/// canonical serialization of this struct is the exact byte sequence fed
/// to the signing and verification primitives, so the order must never
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofPayload {
    /// Content identifier of the pinned record.
    pub cid: Cid,

    /// Instant the record was pinned, in canonical millisecond-`Z` form.
    pub timestamp: Timestamp,
}

impl ProofPayload {
    /// Canonical signing message: compact JSON, declaration-order keys,
    /// no whitespace.
    ///
    /// Both signing and verification call this; they must recompute
    /// identical bytes or every proof breaks.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("payload serialization failed")
    }
}

/// A proof of provenance for one pinned record.
///
/// `signature` is a detached Ed25519 signature over the UTF-8 bytes of
/// the canonical serialization of `payload`, verifiable against
/// `signer_public_key`. Created once per successful upload and never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Proof {
    /// The signed payload.
    pub payload: ProofPayload,

    /// Detached Ed25519 signature, base64-encoded.
    pub signature: String,

    /// Public key the signature verifies against, base64-encoded.
    pub signer_public_key: String,

    /// Always [`PROOF_ALGO`].
    pub algo: String,
}
