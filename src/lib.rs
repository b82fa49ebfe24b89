//! breaking-config: the breaking change check configuration model.
//!
//! A breaking config exists in several shapes. Users write it in a versioned
//! YAML schema, remote services exchange it as a wire message, and caches
//! compare it through a canonical byte form. This crate converts between
//! them, with `Config` as the hub:
//!
//! ```text
//! YAML document ──document──▶ ExternalConfig ──adapter──▶ Config ──▶ canonical bytes / Fingerprint
//!                                   ▲                        │
//!                                   └──────── adapter ───────┤
//!                                                            └──▶ WireConfig
//! ```
//!
//! The `ignore_only` section keeps the order users declared IDs in through
//! an explicit node tree (`ignore_only::Node`), while the canonical form is
//! fully sorted and independent of construction order.
//!
//! # Usage
//!
//! ```
//! use breaking_config::{Fingerprint, parse_document, render_document};
//!
//! let config = parse_document(
//!     "version: v1\nbreaking:\n  use: [FILE]\n  ignore_only:\n    WIRE: [a.proto]\n",
//! )?;
//! let fingerprint = Fingerprint::from_config(&config)?;
//! assert_eq!(fingerprint.as_str().len(), 64);
//! assert!(render_document(&config)?.contains("WIRE"));
//! # Ok::<(), breaking_config::ConfigError>(())
//! ```

pub mod canonical;
pub mod config;
pub mod error;
pub mod external;
pub mod ignore_only;
pub mod wire;

pub use canonical::{Fingerprint, canonical_bytes, canonical_eq};
pub use config::{Config, ConfigVersion, IdPaths, IgnoreIdPaths};
pub use error::{ConfigError, Result};
pub use external::{
    ExternalConfig, OutputFormat, config_from_external, external_from_config, migrate,
    parse_document, render, render_document,
};
pub use wire::{WireConfig, WireIdPaths, config_from_wire, wire_from_config};
