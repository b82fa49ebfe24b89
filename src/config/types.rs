//! Configuration types for the breaking change check.
//!
//! This module defines the schema version enum, the per-version field tables,
//! and the `IdPaths` entry shared by every ordered representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version string of the `v1beta1` external schema.
pub const V1BETA1_VERSION: &str = "v1beta1";

/// Version string of the `v1` external schema.
pub const V1_VERSION: &str = "v1";

/// A user-facing schema version of the breaking config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfigVersion {
    /// The original beta schema.
    #[serde(rename = "v1beta1")]
    V1Beta1,
    /// The stable schema.
    #[serde(rename = "v1")]
    V1,
}

impl ConfigVersion {
    /// All known versions, oldest first.
    pub const ALL: [ConfigVersion; 2] = [ConfigVersion::V1Beta1, ConfigVersion::V1];

    /// Parse a version from its textual form.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            V1BETA1_VERSION => Some(Self::V1Beta1),
            V1_VERSION => Some(Self::V1),
            _ => None,
        }
    }

    /// The textual form stamped into `Config::version`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1Beta1 => V1BETA1_VERSION,
            Self::V1 => V1_VERSION,
        }
    }

    /// Fields of the external breaking section accepted by this version.
    ///
    /// Both versions share the same shape today; they are listed separately
    /// so a future version can add or retire fields without a new adapter.
    pub fn fields(&self) -> &'static [ExternalField] {
        match self {
            Self::V1Beta1 => V1BETA1_FIELDS,
            Self::V1 => V1_FIELDS,
        }
    }

    /// Whether this version carries the given field.
    pub fn supports(&self, field: ExternalField) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of the external (textual) breaking section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalField {
    Use,
    Except,
    Ignore,
    IgnoreOnly,
    IgnoreUnstablePackages,
}

impl ExternalField {
    /// The key used in YAML/JSON documents.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Use => "use",
            Self::Except => "except",
            Self::Ignore => "ignore",
            Self::IgnoreOnly => "ignore_only",
            Self::IgnoreUnstablePackages => "ignore_unstable_packages",
        }
    }

    /// Look up a field by its document key.
    pub fn from_key(key: &str) -> Option<Self> {
        ALL_FIELDS.iter().copied().find(|field| field.key() == key)
    }
}

const ALL_FIELDS: &[ExternalField] = &[
    ExternalField::Use,
    ExternalField::Except,
    ExternalField::Ignore,
    ExternalField::IgnoreOnly,
    ExternalField::IgnoreUnstablePackages,
];

const V1BETA1_FIELDS: &[ExternalField] = ALL_FIELDS;
const V1_FIELDS: &[ExternalField] = ALL_FIELDS;

/// A rule or category ID together with the root paths ignored for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdPaths {
    /// Rule or category identifier.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Paths relative to the module root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

impl IdPaths {
    pub fn new<I, S>(id: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}
