//! Proof generation.

use crate::cid::Cid;
use crate::error::ProofError;
use crate::keys::SignerKey;
use crate::timestamp::Timestamp;
use crate::types::{Proof, ProofPayload, PROOF_ALGO};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::Signer;

/// Sign an already-validated payload.
///
/// Total over valid inputs: signs the canonical payload bytes and wraps
/// the detached signature with the signer's public key and algorithm tag.
pub fn sign_payload(payload: &ProofPayload, key: &SignerKey) -> Proof {
    let message = payload.canonical_bytes();
    let signature = key.signing_key().sign(&message);

    Proof {
        payload: payload.clone(),
        signature: BASE64.encode(signature.to_bytes()),
        signer_public_key: key.public_key_b64(),
        algo: PROOF_ALGO.to_string(),
    }
}

/// Produce a proof of provenance for a pinned content identifier.
///
/// `key_material_b64` is an optional base64-encoded 32-byte seed or
/// 64-byte secret key; absent material signs with a one-shot ephemeral
/// keypair (see [`SignerKey::resolve`]).
pub fn generate_proof(
    cid: &str,
    timestamp: &str,
    key_material_b64: Option<&str>,
) -> Result<Proof, ProofError> {
    let key = SignerKey::resolve(key_material_b64)?;
    generate_proof_with_key(cid, timestamp, &key)
}

/// As [`generate_proof`], for callers that resolved a key once per process.
pub fn generate_proof_with_key(
    cid: &str,
    timestamp: &str,
    key: &SignerKey,
) -> Result<Proof, ProofError> {
    let payload = ProofPayload {
        cid: Cid::parse(cid)?,
        timestamp: Timestamp::parse(timestamp)?,
    };
    Ok(sign_payload(&payload, key))
}
