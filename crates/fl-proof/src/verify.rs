//! Proof verification.

use crate::types::{Proof, PROOF_ALGO};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::{Signature, Verifier, VerifyingKey, SIGNATURE_LENGTH};
use thiserror::Error;

/// Structured negative outcomes of proof verification.
///
/// An invalid proof is an expected result a verifier must handle, so
/// every failure mode here is a normal error value. Verification never
/// panics on malformed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("unsupported proof algorithm {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("signer public key is not valid base64-encoded Ed25519 material")]
    MalformedPublicKey,

    #[error("signature is not valid base64-encoded Ed25519 material")]
    MalformedSignature,

    #[error("expected public key is not valid base64-encoded Ed25519 material")]
    MalformedExpectedKey,

    #[error("proof signer does not match the expected public key")]
    UntrustedSigner,

    #[error("signature does not match the proof payload")]
    SignatureMismatch,
}

/// Verify a proof against the canonical message recomputed from its payload.
///
/// Uses the same canonicalization as signing, so any byte-level drift in
/// the payload shows up as a [`VerificationError::SignatureMismatch`].
/// When `expected_public_key_b64` is supplied, the proof's signer must
/// additionally equal it byte for byte after decoding; a valid signature
/// from any other key is rejected as untrusted.
pub fn verify_proof(
    proof: &Proof,
    expected_public_key_b64: Option<&str>,
) -> Result<(), VerificationError> {
    if proof.algo != PROOF_ALGO {
        return Err(VerificationError::UnsupportedAlgorithm(proof.algo.clone()));
    }

    let signer_bytes =
        decode_key(&proof.signer_public_key).ok_or(VerificationError::MalformedPublicKey)?;
    let verifying_key = VerifyingKey::from_bytes(&signer_bytes)
        .map_err(|_| VerificationError::MalformedPublicKey)?;

    if let Some(expected) = expected_public_key_b64 {
        let expected_bytes =
            decode_key(expected).ok_or(VerificationError::MalformedExpectedKey)?;
        if expected_bytes != signer_bytes {
            return Err(VerificationError::UntrustedSigner);
        }
    }

    let sig_bytes: [u8; SIGNATURE_LENGTH] = BASE64
        .decode(&proof.signature)
        .ok()
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(VerificationError::MalformedSignature)?;
    let signature = Signature::from_bytes(&sig_bytes);

    let message = proof.payload.canonical_bytes();
    verifying_key
        .verify(&message, &signature)
        .map_err(|_| VerificationError::SignatureMismatch)
}

fn decode_key(b64: &str) -> Option<[u8; 32]> {
    BASE64.decode(b64).ok()?.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::SignerKey;
    use crate::sign::generate_proof_with_key;

    const TEST_CID: &str = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";
    const TEST_TIMESTAMP: &str = "2024-01-01T00:00:00.000Z";

    fn signer(byte: u8) -> SignerKey {
        SignerKey::resolve(Some(&BASE64.encode([byte; 32]))).unwrap()
    }

    fn make_proof(key: &SignerKey) -> Proof {
        generate_proof_with_key(TEST_CID, TEST_TIMESTAMP, key).unwrap()
    }

    #[test]
    fn test_verify_accepts_generated_proof() {
        let proof = make_proof(&signer(7));
        assert_eq!(verify_proof(&proof, None), Ok(()));
    }

    #[test]
    fn test_verify_accepts_matching_pinned_signer() {
        let key = signer(7);
        let proof = make_proof(&key);
        assert_eq!(verify_proof(&proof, Some(&key.public_key_b64())), Ok(()));
    }

    #[test]
    fn test_verify_rejects_mismatched_pinned_signer() {
        let proof = make_proof(&signer(7));
        let other = signer(8).public_key_b64();
        assert_eq!(
            verify_proof(&proof, Some(&other)),
            Err(VerificationError::UntrustedSigner)
        );
    }

    #[test]
    fn test_verify_rejects_malformed_pinned_signer() {
        let proof = make_proof(&signer(7));
        assert_eq!(
            verify_proof(&proof, Some("***")),
            Err(VerificationError::MalformedExpectedKey)
        );
    }

    #[test]
    fn test_verify_rejects_unknown_algorithm() {
        let mut proof = make_proof(&signer(7));
        proof.algo = "rsa+hex".to_string();
        assert_eq!(
            verify_proof(&proof, None),
            Err(VerificationError::UnsupportedAlgorithm("rsa+hex".to_string()))
        );
    }

    #[test]
    fn test_verify_rejects_malformed_signer_key() {
        let mut proof = make_proof(&signer(7));
        proof.signer_public_key = "c2hvcnQ=".to_string();
        assert_eq!(
            verify_proof(&proof, None),
            Err(VerificationError::MalformedPublicKey)
        );
    }

    #[test]
    fn test_verify_rejects_malformed_signature() {
        let mut proof = make_proof(&signer(7));
        proof.signature = "c2hvcnQ=".to_string();
        assert_eq!(
            verify_proof(&proof, None),
            Err(VerificationError::MalformedSignature)
        );
    }

    #[test]
    fn test_verify_rejects_signature_from_other_key() {
        let mut proof = make_proof(&signer(7));
        proof.signer_public_key = signer(8).public_key_b64();
        assert_eq!(
            verify_proof(&proof, None),
            Err(VerificationError::SignatureMismatch)
        );
    }
}
