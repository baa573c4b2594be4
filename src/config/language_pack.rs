//! The 3-character language pack identifier.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Required length of a language pack identifier, in UTF-16 code units.
pub const LANGUAGE_PACK_ID_LEN: usize = 3;

/// A language pack identifier such as `ENU` or `DEU`.
///
/// The only way to obtain one is through a validating constructor, so any
/// `LanguagePackId` in hand is exactly [`LANGUAGE_PACK_ID_LEN`] characters long.
/// Length is counted in UTF-16 code units, so a character outside the Basic
/// Multilingual Plane (an emoji, say) counts as two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguagePackId(String);

impl LanguagePackId {
    /// Validates and wraps `value`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidArgument`] when `value` is not exactly
    /// three characters long.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.encode_utf16().count() != LANGUAGE_PACK_ID_LEN {
            return Err(ConfigError::invalid_argument(
                "LanguagePackID",
                "The Language Pack Id must be exactly 3 characters in length",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LanguagePackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguagePackId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for LanguagePackId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LanguagePackId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguagePackId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LanguagePackId {
    type Error = ConfigError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguagePackId> for String {
    fn from(id: LanguagePackId) -> Self {
        id.0
    }
}
