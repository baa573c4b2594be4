//! Partial updates for configuration values.
//!
//! Each configuration type implements [`ConfigEntity`], pairing it with an
//! update DTO. [`apply_update`] is the logged entry point that callers use to
//! populate a configuration from an external payload.

use std::fmt::Debug;

use tracing::{debug, info_span, warn};

use super::alert::{AlertConfiguration, AlertUpdate};
use super::error::ConfigError;
use super::language_pack::LanguagePackId;
use super::module::{ModuleConfiguration, ModuleUpdate};

/// A configuration value that accepts partial updates.
pub trait ConfigEntity: Debug {
    /// Short name used in log records.
    const KIND: &'static str;

    /// Partial update payload. Absent fields are left untouched.
    type Update: Debug;

    /// Applies `update`.
    ///
    /// On error the configuration is left exactly as it was.
    fn on_update(&mut self, update: Self::Update) -> Result<(), ConfigError>;
}

impl ConfigEntity for AlertConfiguration {
    const KIND: &'static str = "alert";
    type Update = AlertUpdate;

    fn on_update(&mut self, update: AlertUpdate) -> Result<(), ConfigError> {
        // Validate before the first write.
        let language_pack = update.language_pack_id.map(LanguagePackId::new).transpose()?;

        if let Some(name) = update.string_resource_name {
            self.set_string_resource_name(name);
        }
        if let Some(id) = language_pack {
            self.set_language_pack(id);
        }
        if let Some(name) = update.alert_name {
            self.set_alert_name(name);
        }
        if let Some(description) = update.alert_description {
            self.set_alert_description(description);
        }
        Ok(())
    }
}

impl ConfigEntity for ModuleConfiguration {
    const KIND: &'static str = "module";
    type Update = ModuleUpdate;

    fn on_update(&mut self, update: ModuleUpdate) -> Result<(), ConfigError> {
        if let Some(name) = update.module_type_name {
            self.module_type_name = Some(name);
        }
        if let Some(config) = update.configuration {
            self.configuration = Some(config);
        }
        if let Some(name) = update.member_module_name {
            self.member_module_name = Some(name);
        }
        if let Some(mp) = update.run_as_mp_name {
            self.run_as_mp_name = Some(mp);
        }
        if let Some(name) = update.run_as_name {
            self.run_as_name = Some(name);
        }
        Ok(())
    }
}

/// Applies `update` to `entity` inside a span named after the entity kind.
pub fn apply_update<T: ConfigEntity>(entity: &mut T, update: T::Update) -> Result<(), ConfigError> {
    let span = info_span!("apply_update", kind = T::KIND);
    let _guard = span.enter();

    debug!(?update, "Update");
    match entity.on_update(update) {
        Ok(()) => {
            debug!(?entity, "Update ok");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, field = e.field(), "Update rejected");
            Err(e)
        }
    }
}
