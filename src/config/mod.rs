//! Configuration model for the breaking change check.
//!
//! This module defines the canonical `Config` value that every other
//! representation (external YAML schemas, the wire message, the canonical
//! bytes) converts to and from, along with the version enum and the ordered
//! ignore-by-ID container.

mod model;
pub mod types;


// Re-export public API
pub use model::{Config, IgnoreIdPaths};
pub use types::{ConfigVersion, ExternalField, IdPaths, V1_VERSION, V1BETA1_VERSION};
