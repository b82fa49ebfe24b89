//! Structured-text node tree.
//!
//! `Node` mirrors a YAML document model: a mapping keeps its key/value
//! children as one flat, alternating list, so declaration order and repeated
//! keys survive a parse. It implements serde both ways and can therefore be
//! read from and written to YAML or JSON text.
//!
//! When read from text, mapping keys and sequence items must be scalars and
//! keep their text verbatim, so `1.10` stays `1.10` rather than becoming a
//! float. YAML tags are dropped.

use crate::error::{ConfigError, Result};
use serde::de::{
    self, Deserialize, DeserializeSeed, Deserializer, EnumAccess, MapAccess, SeqAccess,
    VariantAccess, Visitor,
};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Kind of a `Node`, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Scalar,
    Sequence,
    Mapping,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Null => write!(f, "null"),
            NodeKind::Scalar => write!(f, "scalar"),
            NodeKind::Sequence => write!(f, "sequence"),
            NodeKind::Mapping => write!(f, "mapping"),
        }
    }
}

/// Display hint for a mapping. Carries no meaning for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStyle {
    #[default]
    Plain,
    Literal,
}

/// A node of a structured-text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An explicit or implicit null (`~`, `null`, or an empty value).
    Null,
    /// Scalar text, exactly as written.
    Scalar(String),
    /// An ordered sequence.
    Sequence(Vec<Node>),
    /// Alternating key/value children, in document order.
    Mapping { style: NodeStyle, content: Vec<Node> },
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(value.into())
    }

    /// A plain mapping built from key/value pairs.
    pub fn mapping<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Node, Node)>,
    {
        let content = pairs
            .into_iter()
            .flat_map(|(key, value)| [key, value])
            .collect();
        Node::Mapping {
            style: NodeStyle::Plain,
            content,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Mapping { .. } => NodeKind::Mapping,
        }
    }

    pub fn style(&self) -> NodeStyle {
        match self {
            Node::Mapping { style, .. } => *style,
            _ => NodeStyle::Plain,
        }
    }

    /// Child nodes; empty for null and scalars.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Null | Node::Scalar(_) => &[],
            Node::Sequence(items) => items,
            Node::Mapping { content, .. } => content,
        }
    }

    /// Decode this node as a string. Null decodes to the empty string.
    pub fn decode_string(&self) -> Result<String> {
        match self {
            Node::Scalar(value) => Ok(value.clone()),
            Node::Null => Ok(String::new()),
            Node::Sequence(_) | Node::Mapping { .. } => Err(ConfigError::Schema(format!(
                "cannot decode {} node into a string",
                self.kind()
            ))),
        }
    }

    /// Decode this node as a list of strings. Null decodes to an empty list.
    pub fn decode_strings(&self) -> Result<Vec<String>> {
        match self {
            Node::Sequence(items) => items.iter().map(Node::decode_string).collect(),
            Node::Null => Ok(Vec::new()),
            Node::Scalar(_) | Node::Mapping { .. } => Err(ConfigError::Schema(format!(
                "cannot decode {} node into a list of strings",
                self.kind()
            ))),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Scalar(value) => serializer.serialize_str(value),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping { content, .. } => {
                let mut map = serializer.serialize_map(Some(content.len() / 2))?;
                for pair in content.chunks(2) {
                    match pair {
                        [key, value] => map.serialize_entry(key, value)?,
                        [key] => map.serialize_entry(key, &Node::Null)?,
                        _ => {}
                    }
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

// Mapping keys and sequence items are read as strings so YAML hands over the
// scalar exactly as written (`1.10`, `0x10`) instead of a resolved number.
struct TextSeed;

impl<'de> DeserializeSeed<'de> for TextSeed {
    type Value = Node;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TextVisitor)
    }
}

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::Null)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a scalar, sequence or mapping")
    }

    // Bare scalars only reach these when they stand alone, where no text is
    // decoded from them.
    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Node, E> {
        Ok(Node::Scalar(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Node, D::Error> {
        Node::deserialize(d)
    }

    /// YAML reports a tagged node (`!custom value`) as an enum; the tag is
    /// dropped and the tagged content kept.
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> std::result::Result<Node, A::Error> {
        let (_tag, content) = data.variant::<String>()?;
        content.newtype_variant::<Node>()
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(TextSeed)? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Node, A::Error> {
        // Entries are taken straight from the access, so repeated keys are kept.
        let mut content = Vec::with_capacity(map.size_hint().unwrap_or(0) * 2);
        while let Some(key) = map.next_key_seed(TextSeed)? {
            let value = map.next_value::<Node>()?;
            content.push(key);
            content.push(value);
        }
        Ok(Node::Mapping {
            style: NodeStyle::Plain,
            content,
        })
    }
}
