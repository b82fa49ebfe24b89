//! Deterministic byte encoding of a `Config`.

use crate::config::{Config, IdPaths};
use crate::error::Result;
use serde::Serialize;

/// Sorted working copy of a config; field order here is the output order.
#[derive(Serialize)]
struct CanonicalConfig<'a> {
    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    use_ids: Vec<&'a str>,
    #[serde(rename = "except", skip_serializing_if = "Vec::is_empty")]
    except_ids: Vec<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignore_root_paths: Vec<&'a str>,
    #[serde(rename = "ignore_id_to_root_paths", skip_serializing_if = "Vec::is_empty")]
    ignore_id_paths: Vec<IdPaths>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    ignore_unstable_packages: bool,
    #[serde(skip_serializing_if = "str::is_empty")]
    version: &'a str,
}

impl<'a> CanonicalConfig<'a> {
    fn new(config: &'a Config) -> Self {
        Self {
            use_ids: sorted(&config.use_ids),
            except_ids: sorted(&config.except_ids),
            ignore_root_paths: sorted(&config.ignore_root_paths),
            ignore_id_paths: config.ignore_id_or_category_to_root_paths.canonical_entries(),
            ignore_unstable_packages: config.ignore_unstable_packages,
            version: &config.version,
        }
    }
}

fn sorted(values: &[String]) -> Vec<&str> {
    let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
    values.sort_unstable();
    values
}

/// Encode a config into bytes that only depend on its content, not on the
/// order lists or ignore entries were built in.
///
/// Lists and ignore entries are sorted byte-wise, empty fields are omitted,
/// and the result is compact JSON. `None` yields an empty vector.
pub fn canonical_bytes(config: Option<&Config>) -> Result<Vec<u8>> {
    let Some(config) = config else {
        return Ok(Vec::new());
    };
    Ok(serde_json::to_vec(&CanonicalConfig::new(config))?)
}

/// Whether two configs have the same canonical bytes.
pub fn canonical_eq(a: &Config, b: &Config) -> Result<bool> {
    Ok(canonical_bytes(Some(a))? == canonical_bytes(Some(b))?)
}
