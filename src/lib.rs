//! # opsmgr-config
//!
//! Value types describing configuration entries of a monitoring management pack.
//!
//! - [`AlertConfiguration`](config::AlertConfiguration): string resource, language pack,
//!   name and description of an alert.
//! - [`ModuleConfiguration`](config::ModuleConfiguration): module type, opaque configuration
//!   blob, member module name and Run As references of a workflow module.
//!
//! Both start with every field unset and are populated field by field. The one
//! validation rule lives in [`LanguagePackId`](config::LanguagePackId): a language pack
//! identifier is exactly three characters, so a rejected value never reaches storage.
//!
//! ```
//! use opsmgr_config::config::{AlertConfiguration, ConfigError};
//!
//! let mut alert = AlertConfiguration::new();
//! alert.set_language_pack_id("ENU").unwrap();
//!
//! let err = alert.set_language_pack_id("EN").unwrap_err();
//! assert!(matches!(err, ConfigError::InvalidArgument { .. }));
//! assert_eq!(alert.language_pack_id(), Some("ENU"));
//! ```
//!
//! ## Serialization
//!
//! Both types serialize with serde using the PascalCase field names consumers
//! expect (`StringResourceName`, `LanguagePackID`, `RunAsMPName`, ...). Unset
//! fields are omitted.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod config;
pub mod lifecycle;
