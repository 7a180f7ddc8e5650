//! Validated content identifiers.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Default public gateway used to build shareable URLs for pinned content.
pub const DEFAULT_GATEWAY: &str = "https://gateway.pinata.cloud";

/// Errors that can occur when parsing a content identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CidError {
    #[error("content identifier must be 46-59 characters, got {0}")]
    InvalidLength(usize),

    #[error("content identifier contains non-alphanumeric character {0:?}")]
    InvalidCharacter(char),
}

/// A content identifier for a pinned JSON record.
///
/// Accepts the textual forms handed back by the pinning gateway: 46 to 59
/// ASCII alphanumeric characters. Anything else is rejected at parse time,
/// including through `Deserialize`, so a proof carrying a structurally
/// invalid CID never gets as far as signature checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cid(String);

impl Cid {
    /// Parse and validate a content identifier.
    pub fn parse(input: &str) -> Result<Self, CidError> {
        if !(46..=59).contains(&input.len()) {
            return Err(CidError::InvalidLength(input.len()));
        }
        if let Some(ch) = input.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(CidError::InvalidCharacter(ch));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public gateway URL for the pinned content.
    pub fn gateway_url(&self) -> String {
        self.gateway_url_at(DEFAULT_GATEWAY)
    }

    /// Gateway URL against a caller-supplied gateway base.
    pub fn gateway_url_at(&self, base: &str) -> String {
        format!("{}/ipfs/{}", base.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Cid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Cid::parse(&raw).map_err(de::Error::custom)
    }
}
