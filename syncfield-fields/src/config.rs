//! Builder configuration using Figment
//!
//! Sources are merged in precedence order (later overrides earlier):
//! 1. Default values
//! 2. An optional configuration file (TOML, YAML or JSON by extension)
//! 3. Environment variables prefixed with `SYNCFIELD_`; nested keys use `__`,
//!    e.g. `SYNCFIELD_DEFAULTS__LISTED=true`

use std::path::Path;

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::FieldDefaults;
use crate::error::{FieldsError, Result};
use crate::field_type;

/// Settings applied by [`FieldsBuilder::from_config`](crate::FieldsBuilder::from_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Language whose variants keep their plain id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    /// Types accepted by `multilang`.
    pub multilang_types: Vec<String>,
    /// Attribute values new drafts start from.
    pub defaults: FieldDefaults,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            default_language: None,
            multilang_types: field_type::MULTILANG.iter().map(|t| t.to_string()).collect(),
            defaults: FieldDefaults::new(),
        }
    }
}

impl FieldsConfig {
    pub const ENV_PREFIX: &'static str = "SYNCFIELD_";

    /// Load from defaults and environment.
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment())
    }

    /// Load from defaults, the file at `path`, then environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading fields configuration");
        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => Figment::from(Toml::file(path)),
        };
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Self::env());
        Self::extract(figment)
    }

    /// Reject settings the builder would ignore.
    pub fn validate(&self) -> Result<()> {
        if let Some(code) = &self.default_language {
            if code.chars().count() < 2 {
                return Err(FieldsError::InvalidDefaultLanguage { code: code.clone() });
            }
        }
        Ok(())
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Self::env())
    }

    fn env() -> Env {
        Env::prefixed(Self::ENV_PREFIX).split("__")
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        debug!(
            default_language = ?config.default_language,
            multilang_types = config.multilang_types.len(),
            "fields configuration loaded"
        );
        Ok(config)
    }
}
