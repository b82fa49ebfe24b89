//! External (textual) breaking config and its conversions to `Config`.

use crate::config::{Config, ConfigVersion, ExternalField, IgnoreIdPaths};
use crate::ignore_only::IgnoreOnly;
use serde::{Deserialize, Serialize};

/// The `breaking` section as users write it.
///
/// The same struct serves every schema version; which fields a version
/// accepts is described by `ConfigVersion::fields`. Deserializing skips
/// unknown keys; the document layer checks them against the detected
/// version before reading the section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalConfig {
    /// Rule and/or category IDs to include.
    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub use_ids: Vec<String>,

    /// Rule and/or category IDs to exclude.
    #[serde(rename = "except", skip_serializing_if = "Vec::is_empty")]
    pub except_ids: Vec<String>,

    /// Root paths ignored for every rule.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    /// Root paths ignored per rule or category, in declaration order.
    #[serde(skip_serializing_if = "IgnoreOnly::is_omitted")]
    pub ignore_only: IgnoreOnly,

    /// Ignore packages with an unstable version suffix.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignore_unstable_packages: bool,
}

/// Build a `Config` from an external config of the given version.
///
/// Fields the version does not carry are left empty. Repeated `ignore_only`
/// IDs collapse with the last declaration winning.
pub fn config_from_external(version: ConfigVersion, external: ExternalConfig) -> Config {
    let ExternalConfig {
        use_ids,
        except_ids,
        ignore,
        ignore_only,
        ignore_unstable_packages,
    } = external;

    let mut config = Config::new(version);
    if version.supports(ExternalField::Use) {
        config.use_ids = use_ids;
    }
    if version.supports(ExternalField::Except) {
        config.except_ids = except_ids;
    }
    if version.supports(ExternalField::Ignore) {
        config.ignore_root_paths = ignore;
    }
    if version.supports(ExternalField::IgnoreOnly) {
        config.ignore_id_or_category_to_root_paths =
            IgnoreIdPaths::from_pairs(ignore_only.id_to_paths);
    }
    if version.supports(ExternalField::IgnoreUnstablePackages) {
        config.ignore_unstable_packages = ignore_unstable_packages;
    }
    config
}

/// Render a `Config` as an external config of the given version.
///
/// `ignore_only` keeps the order in which IDs were first declared.
pub fn external_from_config(version: ConfigVersion, config: &Config) -> ExternalConfig {
    let mut external = ExternalConfig::default();
    for &field in version.fields() {
        match field {
            ExternalField::Use => external.use_ids = config.use_ids.clone(),
            ExternalField::Except => external.except_ids = config.except_ids.clone(),
            ExternalField::Ignore => external.ignore = config.ignore_root_paths.clone(),
            ExternalField::IgnoreOnly => {
                external.ignore_only =
                    IgnoreOnly::new(config.ignore_id_or_category_to_root_paths.to_pairs())
            }
            ExternalField::IgnoreUnstablePackages => {
                external.ignore_unstable_packages = config.ignore_unstable_packages
            }
        }
    }
    external
}

/// Move a config to another schema version.
///
/// The config is rendered with its own version's field table (or the target's
/// when its version is unknown) and rebuilt under the target version.
pub fn migrate(config: &Config, target: ConfigVersion) -> Config {
    let source = config.schema_version().unwrap_or(target);
    let external = external_from_config(source, config);
    for &field in source.fields() {
        if !target.supports(field) {
            tracing::warn!(
                field = field.key(),
                from = %source,
                to = %target,
                "field dropped during migration"
            );
        }
    }
    config_from_external(target, external)
}
