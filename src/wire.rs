//! Wire-level breaking config exchanged with remote services.
//!
//! Field names follow the transport message (`useIds`, `ignoreIdPaths`, ...).
//! Every field is optional on the wire; absent collections read as empty.

use crate::config::{Config, IdPaths, IgnoreIdPaths};
use serde::{Deserialize, Serialize};

/// Transport form of the breaking config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireConfig {
    /// Rule and/or category IDs to include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub use_ids: Vec<String>,
    /// Rule and/or category IDs to exclude.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub except_ids: Vec<String>,
    /// Root paths ignored for every rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_paths: Vec<String>,
    /// Root paths ignored per rule or category.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore_id_paths: Vec<WireIdPaths>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignore_unstable_packages: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// One repeated `ignoreIdPaths` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireIdPaths {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
}

/// Build a `Config` from a wire message.
///
/// Repeated IDs in `ignore_id_paths` collapse with the last entry winning.
pub fn config_from_wire(wire: &WireConfig) -> Config {
    Config {
        use_ids: wire.use_ids.clone(),
        except_ids: wire.except_ids.clone(),
        ignore_root_paths: wire.ignore_paths.clone(),
        ignore_id_or_category_to_root_paths: IgnoreIdPaths::from_pairs(
            wire.ignore_id_paths.iter().map(|entry| IdPaths {
                id: entry.id.clone(),
                paths: entry.paths.clone(),
            }),
        ),
        ignore_unstable_packages: wire.ignore_unstable_packages,
        version: wire.version.clone(),
    }
}

/// Build the wire message for a `Config`.
///
/// `ignore_id_paths` follows the config's declaration order.
pub fn wire_from_config(config: &Config) -> WireConfig {
    WireConfig {
        use_ids: config.use_ids.clone(),
        except_ids: config.except_ids.clone(),
        ignore_paths: config.ignore_root_paths.clone(),
        ignore_id_paths: config
            .ignore_id_or_category_to_root_paths
            .iter()
            .map(|entry| WireIdPaths {
                id: entry.id.clone(),
                paths: entry.paths.clone(),
            })
            .collect(),
        ignore_unstable_packages: config.ignore_unstable_packages,
        version: config.version.clone(),
    }
}

impl From<&WireConfig> for Config {
    fn from(wire: &WireConfig) -> Self {
        config_from_wire(wire)
    }
}

impl From<&Config> for WireConfig {
    fn from(config: &Config) -> Self {
        wire_from_config(config)
    }
}
