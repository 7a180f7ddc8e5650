//! Signing-key resolution and generation.

use crate::error::{ConfigurationError, CryptoError, ProofError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH};
use tracing::warn;

/// The resolved signing identity for a proof-generation call.
///
/// The two variants make the resolution outcome observable: callers and
/// tests can assert whether operator-supplied material was used or a
/// one-shot ephemeral keypair was minted.
#[derive(Debug, Clone)]
pub enum SignerKey {
    /// Keypair derived from operator-supplied key material.
    Configured(SigningKey),

    /// Fresh keypair with no persisted private half. Proofs signed this
    /// way cannot be re-verified against a known public key later.
    Ephemeral(SigningKey),
}

impl SignerKey {
    /// Resolve optional base64 key material into a usable keypair.
    ///
    /// 32 decoded bytes are an Ed25519 seed; 64 decoded bytes are a full
    /// secret key whose trailing half must equal the derived public key.
    /// Any other length is a [`ConfigurationError`]: ephemeral generation
    /// is never a fallback for malformed material.
    pub fn resolve(material_b64: Option<&str>) -> Result<Self, ProofError> {
        match material_b64 {
            Some(material) => {
                let bytes = BASE64
                    .decode(material)
                    .map_err(ConfigurationError::InvalidEncoding)?;
                Self::from_material(&bytes)
            }
            None => Ok(Self::ephemeral()?),
        }
    }

    fn from_material(bytes: &[u8]) -> Result<Self, ProofError> {
        match bytes.len() {
            SECRET_KEY_LENGTH => {
                let mut seed = [0u8; SECRET_KEY_LENGTH];
                seed.copy_from_slice(bytes);
                Ok(Self::Configured(SigningKey::from_bytes(&seed)))
            }
            KEYPAIR_LENGTH => {
                let mut keypair = [0u8; KEYPAIR_LENGTH];
                keypair.copy_from_slice(bytes);
                let key =
                    SigningKey::from_keypair_bytes(&keypair).map_err(CryptoError::InvalidKey)?;
                Ok(Self::Configured(key))
            }
            other => Err(ConfigurationError::InvalidLength(other).into()),
        }
    }

    /// Generate a one-shot keypair from OS randomness.
    ///
    /// Logs the derived public key so an operator can at least capture it
    /// after the fact.
    pub fn ephemeral() -> Result<Self, CryptoError> {
        let mut seed = [0u8; SECRET_KEY_LENGTH];
        getrandom::fill(&mut seed)?;
        let key = SigningKey::from_bytes(&seed);
        warn!(
            public_key = %BASE64.encode(key.verifying_key().to_bytes()),
            "no signing key configured; using an ephemeral keypair"
        );
        Ok(Self::Ephemeral(key))
    }

    pub fn signing_key(&self) -> &SigningKey {
        match self {
            Self::Configured(key) | Self::Ephemeral(key) => key,
        }
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key().verifying_key()
    }

    /// Base64 form of the public key, as embedded in emitted proofs.
    pub fn public_key_b64(&self) -> String {
        BASE64.encode(self.verifying_key().to_bytes())
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Ephemeral(_))
    }
}

/// Generate a new Ed25519 keypair.
///
/// Returns (seed_bytes, public_key_bytes); the seed is the value an
/// operator stores as signing-key configuration.
pub fn keygen() -> Result<([u8; 32], [u8; 32]), CryptoError> {
    let mut seed = [0u8; 32];
    getrandom::fill(&mut seed)?;
    let signing_key = SigningKey::from_bytes(&seed);
    Ok((seed, signing_key.verifying_key().to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absent_material_is_ephemeral() {
        let key = SignerKey::resolve(None).unwrap();
        assert!(key.is_ephemeral());
    }

    #[test]
    fn test_resolve_seed_is_deterministic() {
        let seed_b64 = BASE64.encode([7u8; 32]);
        let a = SignerKey::resolve(Some(&seed_b64)).unwrap();
        let b = SignerKey::resolve(Some(&seed_b64)).unwrap();
        assert!(!a.is_ephemeral());
        assert_eq!(a.public_key_b64(), b.public_key_b64());
    }

    #[test]
    fn test_resolve_keypair_bytes_matches_seed_derivation() {
        let seed = [7u8; 32];
        let from_seed = SignerKey::resolve(Some(&BASE64.encode(seed))).unwrap();

        let keypair_bytes = SigningKey::from_bytes(&seed).to_keypair_bytes();
        let from_keypair = SignerKey::resolve(Some(&BASE64.encode(keypair_bytes))).unwrap();

        assert_eq!(from_seed.public_key_b64(), from_keypair.public_key_b64());
    }

    #[test]
    fn test_resolve_rejects_invalid_lengths() {
        for len in [31, 33, 63, 65] {
            let material = BASE64.encode(vec![1u8; len]);
            let err = SignerKey::resolve(Some(&material)).unwrap_err();
            assert!(
                matches!(
                    err,
                    ProofError::Configuration(ConfigurationError::InvalidLength(n)) if n == len
                ),
                "length {len} resolved to {err:?}"
            );
        }
    }

    #[test]
    fn test_resolve_rejects_invalid_base64() {
        let err = SignerKey::resolve(Some("not base64!!!")).unwrap_err();
        assert!(matches!(
            err,
            ProofError::Configuration(ConfigurationError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_mismatched_keypair_halves() {
        let mut keypair_bytes = SigningKey::from_bytes(&[7u8; 32]).to_keypair_bytes();
        keypair_bytes[63] ^= 0xff;
        let err = SignerKey::resolve(Some(&BASE64.encode(keypair_bytes))).unwrap_err();
        assert!(matches!(err, ProofError::Crypto(CryptoError::InvalidKey(_))));
    }

    #[test]
    fn test_ephemeral_keys_are_distinct() {
        let a = SignerKey::ephemeral().unwrap();
        let b = SignerKey::ephemeral().unwrap();
        assert_ne!(a.public_key_b64(), b.public_key_b64());
    }

    #[test]
    fn test_keygen_round_trips_through_resolve() {
        let (seed, public_key) = keygen().unwrap();
        let resolved = SignerKey::resolve(Some(&BASE64.encode(seed))).unwrap();
        assert_eq!(resolved.public_key_b64(), BASE64.encode(public_key));
    }
}
