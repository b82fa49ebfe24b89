//! SHA256 fingerprints of canonical config bytes

use super::bytes::canonical_bytes;
use crate::config::Config;
use crate::error::Result;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex-encoded SHA256 of a config's canonical bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of raw bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("{:x}", hash))
    }

    /// Compute the fingerprint of a config
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::from_bytes(&canonical_bytes(Some(config))?))
    }

    /// Get the hex string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a config has this fingerprint
    pub fn matches(&self, config: &Config) -> Result<bool> {
        Ok(Self::from_config(config)? == *self)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Fingerprint {
    fn from(s: String) -> Self {
        Self(s)
    }
}
