//! Canonical, order-independent encoding of configs.
//!
//! Two configs that differ only in the order of their lists, of their
//! ignore-by-ID entries, or of the paths inside an entry encode to the same
//! bytes. Callers use these bytes (or their `Fingerprint`) for caching and
//! equality checks.
//!
//! # Format
//!
//! Compact JSON with fields in this order, each omitted when empty or false:
//! `use`, `except`, `ignore_root_paths`, `ignore_id_to_root_paths`
//! (`{"id", "paths"}` entries), `ignore_unstable_packages`, `version`.

mod bytes;
mod fingerprint;


// Re-export public API
pub use bytes::{canonical_bytes, canonical_eq};
pub use fingerprint::Fingerprint;
