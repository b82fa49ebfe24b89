//! Ordered codec for the `ignore_only` section.
//!
//! `ignore_only` maps rule/category IDs to the paths they ignore. Users expect
//! the IDs to come back in the order they wrote them, which a key-unique map
//! cannot promise. This module goes through an explicit node tree instead:
//! - `Node` is the structured-text document model (null, scalar, sequence,
//!   mapping with alternating key/value children)
//! - `IgnoreOnly` is the ordered-pairs form and its encode/decode rules

mod codec;
mod node;


// Re-export public API
pub use codec::IgnoreOnly;
pub use node::{Node, NodeKind, NodeStyle};
