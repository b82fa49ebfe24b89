//! Version detection and rendering of textual configuration documents.
//!
//! A document carries a top-level `version` key and a `breaking` section:
//!
//! ```yaml
//! version: v1
//! breaking:
//!   use:
//!     - FILE
//!   ignore_only:
//!     FIELD_SAME_JSON_NAME:
//!       - foo/bar.proto
//! ```
//!
//! Other top-level sections (`lint`, `build`, `deps`, ...) belong to other
//! consumers and are ignored here.

use super::adapter::{ExternalConfig, config_from_external, external_from_config};
use crate::config::{Config, ConfigVersion, ExternalField};
use crate::error::{ConfigError, Result};
use crate::ignore_only::{IgnoreOnly, Node};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML, as users write it.
    #[default]
    Text,
    /// Two-space indented JSON.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct VersionProbe {
    version: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct SectionKeys {
    breaking: Option<BTreeMap<String, IgnoredAny>>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct Sections {
    breaking: Option<BreakingSection>,
}

/// The `breaking` section as read from text. `ignore_only` stays a `Node`
/// until the serde pass is over, so its decode errors surface as `Schema`.
#[derive(Default, Deserialize)]
#[serde(default)]
struct BreakingSection {
    #[serde(rename = "use")]
    use_ids: Vec<String>,
    #[serde(rename = "except")]
    except_ids: Vec<String>,
    ignore: Vec<String>,
    ignore_only: Option<Node>,
    ignore_unstable_packages: bool,
}

impl BreakingSection {
    fn into_external(self) -> Result<ExternalConfig> {
        let ignore_only = match &self.ignore_only {
            Some(node) => IgnoreOnly::from_node(node)?,
            None => IgnoreOnly::default(),
        };
        Ok(ExternalConfig {
            use_ids: self.use_ids,
            except_ids: self.except_ids,
            ignore: self.ignore,
            ignore_only,
            ignore_unstable_packages: self.ignore_unstable_packages,
        })
    }
}

#[derive(Serialize)]
struct RenderedDocument {
    version: ConfigVersion,
    breaking: ExternalConfig,
}

/// Detect the schema version of a YAML (or JSON) document.
///
/// The value must match a known version exactly.
pub fn detect_version(text: &str) -> Result<ConfigVersion> {
    let probe: VersionProbe = serde_yaml::from_str(text)?;
    let version = probe.version.unwrap_or_default();
    ConfigVersion::from_str(&version).ok_or(ConfigError::UnsupportedVersion(version))
}

/// Parse the `breaking` section of a document into a `Config`.
///
/// Fails with `UnsupportedVersion` when the version is missing or unknown,
/// and with `Schema` when the section holds keys the version does not define
/// or an `ignore_only` value that is not a map.
pub fn parse_document(text: &str) -> Result<Config> {
    let version = detect_version(text)?;
    let keys: SectionKeys = serde_yaml::from_str(text)?;
    if let Some(breaking) = &keys.breaking {
        check_fields(version, breaking.keys())?;
    }
    let sections: Sections = serde_yaml::from_str(text)?;
    let external = sections.breaking.unwrap_or_default().into_external()?;
    tracing::debug!(%version, "parsed breaking config document");
    Ok(config_from_external(version, external))
}

fn check_fields<'a>(
    version: ConfigVersion,
    keys: impl IntoIterator<Item = &'a String>,
) -> Result<()> {
    for key in keys {
        let known = ExternalField::from_key(key).is_some_and(|field| version.supports(field));
        if !known {
            return Err(ConfigError::Schema(format!(
                "unknown field '{}' in {} breaking config",
                key, version
            )));
        }
    }
    Ok(())
}

/// Render a config back into a document of its own version.
pub fn render(config: &Config, format: OutputFormat) -> Result<String> {
    let version = config
        .schema_version()
        .ok_or_else(|| ConfigError::UnsupportedVersion(config.version.clone()))?;
    let document = RenderedDocument {
        version,
        breaking: external_from_config(version, config),
    };
    match format {
        OutputFormat::Text => Ok(serde_yaml::to_string(&document)?),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&document)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render a config as a YAML document.
pub fn render_document(config: &Config) -> Result<String> {
    render(config, OutputFormat::Text)
}
