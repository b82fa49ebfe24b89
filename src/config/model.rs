//! Config struct definition and the ordered ignore-by-ID container.

use super::types::{ConfigVersion, IdPaths};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Configuration for the breaking change check.
///
/// This is the canonical in-memory value every other representation converts
/// to and from. Field order inside the lists is kept exactly as constructed;
/// use `crate::canonical` for an order-independent view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Rule and/or category IDs included in the check.
    pub use_ids: Vec<String>,

    /// Rule and/or category IDs excluded from the check.
    pub except_ids: Vec<String>,

    /// Directories and/or files ignored by every rule, relative to the module root.
    pub ignore_root_paths: Vec<String>,

    /// Rule and/or category IDs mapped to the root paths ignored for them.
    pub ignore_id_or_category_to_root_paths: IgnoreIdPaths,

    /// Ignore packages whose last component is an unstable version suffix
    /// (`v1alpha1`, `v1test`, `v1p1beta1`, ...). Matching is done by the rule engine.
    pub ignore_unstable_packages: bool,

    /// Version of the rule and category IDs this config was written against.
    pub version: String,
}

impl Config {
    /// Create an empty config stamped with the given version.
    pub fn new(version: ConfigVersion) -> Self {
        Self {
            version: version.as_str().to_string(),
            ..Self::default()
        }
    }

    /// The schema version named by `version`, if it is a known one.
    pub fn schema_version(&self) -> Option<ConfigVersion> {
        ConfigVersion::from_str(&self.version)
    }
}

/// Key-unique association from rule/category ID to ignored root paths.
///
/// Entries keep the position at which their ID was first declared, so a
/// textual config renders back in the order it was written. Inserting an
/// existing ID replaces its paths in place (last write wins).
#[derive(Clone, Default)]
pub struct IgnoreIdPaths {
    entries: Vec<IdPaths>,
    /// Position of each ID in `entries`.
    index: HashMap<String, usize>,
}

impl IgnoreIdPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ordered pairs, collapsing repeated IDs onto their first slot.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = IdPaths>,
    {
        let mut map = Self::new();
        for IdPaths { id, paths } in pairs {
            if map.insert(id.clone(), paths).is_some() {
                tracing::warn!(id = %id, "duplicate ignore_only ID, keeping the last declaration");
            }
        }
        map
    }

    /// Insert or replace the paths for `id`, returning the previous paths.
    pub fn insert(&mut self, id: impl Into<String>, paths: Vec<String>) -> Option<Vec<String>> {
        let id = id.into();
        match self.index.get(&id) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].paths, paths)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push(IdPaths { id, paths });
                None
            }
        }
    }

    /// Paths ignored for `id`.
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.index
            .get(id)
            .map(|&slot| self.entries[slot].paths.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, IdPaths> {
        self.entries.iter()
    }

    /// Ordered-pairs form, in declaration order.
    pub fn to_pairs(&self) -> Vec<IdPaths> {
        self.entries.clone()
    }

    /// Map form; order is the map's key order.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|entry| (entry.id.clone(), entry.paths.clone()))
            .collect()
    }

    /// Entries sorted by ID, each with its paths sorted.
    pub fn canonical_entries(&self) -> Vec<IdPaths> {
        let mut entries = self.entries.clone();
        for entry in &mut entries {
            entry.paths.sort();
        }
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }
}

// The index is derived from `entries`, so only the entries are compared.
impl PartialEq for IgnoreIdPaths {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for IgnoreIdPaths {}

impl fmt::Debug for IgnoreIdPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|entry| (&entry.id, &entry.paths)))
            .finish()
    }
}

impl FromIterator<IdPaths> for IgnoreIdPaths {
    fn from_iter<I: IntoIterator<Item = IdPaths>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl FromIterator<(String, Vec<String>)> for IgnoreIdPaths {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().map(|(id, paths)| IdPaths { id, paths }))
    }
}

impl From<BTreeMap<String, Vec<String>>> for IgnoreIdPaths {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a IgnoreIdPaths {
    type Item = &'a IdPaths;
    type IntoIter = std::slice::Iter<'a, IdPaths>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
