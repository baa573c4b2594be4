//! Configuration value types for alerts and workflow modules.
//!
//! - [`AlertConfiguration`]: display text and metadata of an alert.
//! - [`ModuleConfiguration`]: configuration payload of a workflow module.
//! - [`LanguagePackId`]: validated 3-character language code.
//! - [`ConfigEntity`] / [`apply_update`]: partial updates via DTOs.

pub mod alert;
pub mod entity;
pub mod error;
pub mod language_pack;
pub mod module;

pub use alert::*;
pub use entity::*;
pub use error::*;
pub use language_pack::*;
pub use module::*;
