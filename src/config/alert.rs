use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::language_pack::LanguagePackId;

/// Display text and metadata for a monitoring alert.
///
/// Every field starts unset. Callers populate it one field at a time, either
/// through the setters or the chainable `with_*` builders.
///
/// `StringResourceName` and `StringResource` are two names for the same
/// value: [`string_resource`](Self::string_resource) and
/// [`set_string_resource`](Self::set_string_resource) are aliases that read
/// and write the single `string_resource_name` field.
///
/// The same holds for serde input: `StringResource` is accepted in place of
/// `StringResourceName`, but a document carrying both is rejected as a
/// duplicate field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlertConfiguration {
    #[serde(default, alias = "StringResource", skip_serializing_if = "Option::is_none")]
    string_resource_name: Option<String>,
    #[serde(default, rename = "LanguagePackID", skip_serializing_if = "Option::is_none")]
    language_pack_id: Option<LanguagePackId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alert_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alert_description: Option<String>,
}

impl AlertConfiguration {
    /// Creates an alert configuration with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string_resource_name(&self) -> Option<&str> {
        self.string_resource_name.as_deref()
    }

    pub fn set_string_resource_name(&mut self, value: impl Into<String>) {
        self.string_resource_name = Some(value.into());
    }

    pub fn clear_string_resource_name(&mut self) {
        self.string_resource_name = None;
    }

    /// Alias of [`string_resource_name`](Self::string_resource_name).
    pub fn string_resource(&self) -> Option<&str> {
        self.string_resource_name()
    }

    /// Alias of [`set_string_resource_name`](Self::set_string_resource_name).
    pub fn set_string_resource(&mut self, value: impl Into<String>) {
        self.set_string_resource_name(value);
    }

    pub fn language_pack_id(&self) -> Option<&str> {
        self.language_pack_id.as_ref().map(LanguagePackId::as_str)
    }

    pub fn language_pack(&self) -> Option<&LanguagePackId> {
        self.language_pack_id.as_ref()
    }

    /// Validates and stores a language pack identifier.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidArgument`] when `value` is not exactly
    /// three characters long. The previously stored identifier is kept.
    pub fn set_language_pack_id(&mut self, value: impl Into<String>) -> Result<(), ConfigError> {
        self.language_pack_id = Some(LanguagePackId::new(value)?);
        Ok(())
    }

    pub fn set_language_pack(&mut self, id: LanguagePackId) {
        self.language_pack_id = Some(id);
    }

    pub fn clear_language_pack_id(&mut self) {
        self.language_pack_id = None;
    }

    pub fn alert_name(&self) -> Option<&str> {
        self.alert_name.as_deref()
    }

    pub fn set_alert_name(&mut self, value: impl Into<String>) {
        self.alert_name = Some(value.into());
    }

    pub fn clear_alert_name(&mut self) {
        self.alert_name = None;
    }

    pub fn alert_description(&self) -> Option<&str> {
        self.alert_description.as_deref()
    }

    pub fn set_alert_description(&mut self, value: impl Into<String>) {
        self.alert_description = Some(value.into());
    }

    pub fn clear_alert_description(&mut self) {
        self.alert_description = None;
    }

    pub fn with_string_resource_name(mut self, value: impl Into<String>) -> Self {
        self.set_string_resource_name(value);
        self
    }

    /// Builder form of [`set_language_pack_id`](Self::set_language_pack_id).
    pub fn with_language_pack_id(mut self, value: impl Into<String>) -> Result<Self, ConfigError> {
        self.set_language_pack_id(value)?;
        Ok(self)
    }

    pub fn with_alert_name(mut self, value: impl Into<String>) -> Self {
        self.set_alert_name(value);
        self
    }

    pub fn with_alert_description(mut self, value: impl Into<String>) -> Self {
        self.set_alert_description(value);
        self
    }
}

/// Payload for a partial update of an [`AlertConfiguration`].
///
/// Only the `Some` fields are written. Field names on the wire match
/// [`AlertConfiguration`]; unknown names are rejected. The language pack id is
/// carried unvalidated and checked when the update is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AlertUpdate {
    #[serde(default, alias = "StringResource", skip_serializing_if = "Option::is_none")]
    pub string_resource_name: Option<String>,
    #[serde(default, rename = "LanguagePackID", skip_serializing_if = "Option::is_none")]
    pub language_pack_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let alert = AlertConfiguration::new();
        assert_eq!(alert.string_resource_name(), None);
        assert_eq!(alert.string_resource(), None);
        assert_eq!(alert.language_pack_id(), None);
        assert_eq!(alert.alert_name(), None);
        assert_eq!(alert.alert_description(), None);
    }

    #[test]
    fn string_resource_aliases_share_storage() {
        let mut alert = AlertConfiguration::new();
        alert.set_string_resource("x");
        assert_eq!(alert.string_resource_name(), Some("x"));

        alert.set_string_resource_name("y");
        assert_eq!(alert.string_resource(), Some("y"));

        alert.clear_string_resource_name();
        assert_eq!(alert.string_resource(), None);
    }

    #[test]
    fn rejected_language_pack_keeps_previous_value() {
        let mut alert = AlertConfiguration::new();
        alert.set_language_pack_id("ENU").unwrap();
        assert_eq!(alert.language_pack_id(), Some("ENU"));

        let err = alert.set_language_pack_id("EN").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument { .. }));
        assert_eq!(alert.language_pack_id(), Some("ENU"));
    }

    #[test]
    fn rejected_language_pack_on_unset_stays_unset() {
        let mut alert = AlertConfiguration::new();
        assert!(alert.set_language_pack_id("").is_err());
        assert!(alert.set_language_pack_id("ENUS").is_err());
        assert_eq!(alert.language_pack_id(), None);
    }

    #[test]
    fn empty_string_is_distinct_from_unset() {
        let mut alert = AlertConfiguration::new();
        alert.set_alert_name("");
        assert_eq!(alert.alert_name(), Some(""));
        alert.clear_alert_name();
        assert_eq!(alert.alert_name(), None);
    }

    #[test]
    fn builder_chain() {
        let alert = AlertConfiguration::new()
            .with_string_resource_name("Contoso.Alert.Resource")
            .with_alert_name("Disk full")
            .with_alert_description("Free space on {0} dropped below {1}%")
            .with_language_pack_id("ENU")
            .unwrap();

        assert_eq!(alert.string_resource(), Some("Contoso.Alert.Resource"));
        assert_eq!(alert.alert_name(), Some("Disk full"));
        assert_eq!(
            alert.alert_description(),
            Some("Free space on {0} dropped below {1}%")
        );
        assert_eq!(alert.language_pack().map(|id| id.as_str()), Some("ENU"));
    }
}
