//! Encoding and decoding of the ordered `ignore_only` structure.

use super::node::{Node, NodeKind, NodeStyle};
use crate::config::IdPaths;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The `ignore_only` section of an external config in declaration order.
///
/// A native map would lose the order the IDs were written in, so this keeps
/// the pairs as a list and converts through `Node` instead. Repeated IDs are
/// kept as separate entries; collapsing them is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreOnly {
    pub id_to_paths: Vec<IdPaths>,
}

impl IgnoreOnly {
    pub fn new(id_to_paths: Vec<IdPaths>) -> Self {
        Self { id_to_paths }
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_paths.is_empty()
    }

    /// True when encoding would emit nothing worth writing: either no pairs at
    /// all, or only pairs without paths.
    pub fn is_omitted(&self) -> bool {
        self.id_to_paths.iter().all(|entry| entry.paths.is_empty())
    }

    /// Encode as a literal-style mapping node.
    ///
    /// Returns `None` for an empty list. IDs with no paths are dropped, so a
    /// list made only of such IDs encodes to a mapping with no children.
    pub fn to_node(&self) -> Option<Node> {
        if self.id_to_paths.is_empty() {
            return None;
        }
        let mut content = Vec::with_capacity(self.id_to_paths.len() * 2);
        for entry in &self.id_to_paths {
            if entry.paths.is_empty() {
                continue;
            }
            content.push(Node::scalar(entry.id.as_str()));
            content.push(Node::Sequence(
                entry.paths.iter().map(|path| Node::scalar(path.as_str())).collect(),
            ));
        }
        Some(Node::Mapping {
            style: NodeStyle::Literal,
            content,
        })
    }

    /// Decode from a mapping node, preserving pair order and repeated IDs.
    ///
    /// A node without children decodes to an empty list whatever its kind.
    pub fn from_node(node: &Node) -> Result<Self> {
        let children = node.children();
        if children.is_empty() {
            return Ok(Self::default());
        }
        if node.kind() != NodeKind::Mapping {
            return Err(ConfigError::Schema(format!(
                "ignore_only must be a YAML map, instead is {}",
                node.kind()
            )));
        }
        if children.len() % 2 != 0 {
            return Err(ConfigError::Schema(format!(
                "ignore_only mapping has {} children, expected key/value pairs",
                children.len()
            )));
        }

        let mut id_to_paths = Vec::with_capacity(children.len() / 2);
        for pair in children.chunks_exact(2) {
            let id = pair[0].decode_string()?;
            let paths = pair[1].decode_strings()?;
            id_to_paths.push(IdPaths { id, paths });
        }
        tracing::debug!(entries = id_to_paths.len(), "decoded ignore_only");
        Ok(Self { id_to_paths })
    }
}

impl From<Vec<IdPaths>> for IgnoreOnly {
    fn from(id_to_paths: Vec<IdPaths>) -> Self {
        Self::new(id_to_paths)
    }
}

impl Serialize for IgnoreOnly {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.to_node() {
            Some(node) => node.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for IgnoreOnly {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let node = Node::deserialize(deserializer)?;
        Self::from_node(&node).map_err(serde::de::Error::custom)
    }
}
