use serde::{Deserialize, Serialize};

/// Configuration payload for a monitoring workflow module.
///
/// A plain value holder: every field is public, optional and unvalidated.
/// `configuration` is an opaque blob (usually an XML fragment) handed to the
/// module type as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_module_name: Option<String>,
    /// Management pack holding the Run As profile.
    #[serde(default, rename = "RunAsMPName", skip_serializing_if = "Option::is_none")]
    pub run_as_mp_name: Option<String>,
    /// Run As profile the module executes under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as_name: Option<String>,
}

impl ModuleConfiguration {
    /// Creates a module configuration with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module_type_name(&self) -> Option<&str> {
        self.module_type_name.as_deref()
    }

    pub fn set_module_type_name(&mut self, value: impl Into<String>) {
        self.module_type_name = Some(value.into());
    }

    pub fn clear_module_type_name(&mut self) {
        self.module_type_name = None;
    }

    pub fn configuration(&self) -> Option<&str> {
        self.configuration.as_deref()
    }

    pub fn set_configuration(&mut self, value: impl Into<String>) {
        self.configuration = Some(value.into());
    }

    pub fn clear_configuration(&mut self) {
        self.configuration = None;
    }

    pub fn member_module_name(&self) -> Option<&str> {
        self.member_module_name.as_deref()
    }

    pub fn set_member_module_name(&mut self, value: impl Into<String>) {
        self.member_module_name = Some(value.into());
    }

    pub fn clear_member_module_name(&mut self) {
        self.member_module_name = None;
    }

    pub fn run_as_mp_name(&self) -> Option<&str> {
        self.run_as_mp_name.as_deref()
    }

    pub fn set_run_as_mp_name(&mut self, value: impl Into<String>) {
        self.run_as_mp_name = Some(value.into());
    }

    pub fn clear_run_as_mp_name(&mut self) {
        self.run_as_mp_name = None;
    }

    pub fn run_as_name(&self) -> Option<&str> {
        self.run_as_name.as_deref()
    }

    pub fn set_run_as_name(&mut self, value: impl Into<String>) {
        self.run_as_name = Some(value.into());
    }

    pub fn clear_run_as_name(&mut self) {
        self.run_as_name = None;
    }

    pub fn with_module_type_name(mut self, value: impl Into<String>) -> Self {
        self.set_module_type_name(value);
        self
    }

    pub fn with_configuration(mut self, value: impl Into<String>) -> Self {
        self.set_configuration(value);
        self
    }

    pub fn with_member_module_name(mut self, value: impl Into<String>) -> Self {
        self.set_member_module_name(value);
        self
    }

    pub fn with_run_as_mp_name(mut self, value: impl Into<String>) -> Self {
        self.set_run_as_mp_name(value);
        self
    }

    pub fn with_run_as_name(mut self, value: impl Into<String>) -> Self {
        self.set_run_as_name(value);
        self
    }
}

/// Payload for a partial update of a [`ModuleConfiguration`].
///
/// Uses the same field names as [`ModuleConfiguration`]; unknown names are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ModuleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_module_name: Option<String>,
    #[serde(default, rename = "RunAsMPName", skip_serializing_if = "Option::is_none")]
    pub run_as_mp_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as_name: Option<String>,
}
