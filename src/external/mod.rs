//! External schema adapters.
//!
//! Users write the breaking config in a versioned YAML schema (`v1beta1` or
//! `v1`). This module converts between that textual form and `Config`:
//! - `adapter`: the shared `ExternalConfig` struct, the two-way conversion
//!   parameterised by `ConfigVersion`, and version migration
//! - `document`: version detection, strict parsing and rendering of whole
//!   documents

mod adapter;
pub mod document;

#[cfg(test)]
mod tests;

// Re-export public API
pub use adapter::{ExternalConfig, config_from_external, external_from_config, migrate};
pub use document::{OutputFormat, detect_version, parse_document, render, render_document};
