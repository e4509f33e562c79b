//! Configuration for the user discriminator.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::error::ConfigurationError;

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "USER_DISCRIMINATOR__";

/// Module configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserDiscriminatorConfig {
    /// Supported user kinds. The first entry is the default kind.
    pub classes: Vec<ClassParameters>,
}

impl UserDiscriminatorConfig {
    /// Load configuration from a YAML file, overridden by `USER_DISCRIMINATOR__*`
    /// environment variables.
    ///
    /// A missing file yields an empty configuration, which the builder rejects.
    ///
    /// `USER_DISCRIMINATOR__CLASSES` replaces the whole class list, written in
    /// figment's inline syntax, e.g. `[{entity=Vendor,factory=VendorFactory}]`.
    /// Single records cannot be overridden by index.
    ///
    /// # Errors
    ///
    /// `ConfigurationError::Load` if a source cannot be parsed or does not
    /// match the expected shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let cfg: Self = Figment::new()
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        tracing::info!(
            path = %path.as_ref().display(),
            class_count = cfg.classes.len(),
            "Loaded discriminator configuration"
        );
        Ok(cfg)
    }
}

/// Raw parameters of one user kind, as written in configuration.
///
/// Names are resolved against the type registry when the discriminator
/// configuration is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassParameters {
    /// Kind identifier, e.g. `Customer`.
    pub entity: String,

    /// Registration form type name.
    #[serde(default)]
    pub registration: Option<String>,

    /// Profile form type name.
    #[serde(default)]
    pub profile: Option<String>,

    /// User factory name. Empty or absent selects the builtin factory.
    #[serde(default)]
    pub factory: Option<String>,

    #[serde(default)]
    pub registration_options: Option<FormOptionsParameters>,

    #[serde(default)]
    pub profile_options: Option<FormOptionsParameters>,
}

impl ClassParameters {
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            registration: None,
            profile: None,
            factory: None,
            registration_options: None,
            profile_options: None,
        }
    }

    #[must_use]
    pub fn with_registration(mut self, form_type: impl Into<String>) -> Self {
        self.registration = Some(form_type.into());
        self
    }

    #[must_use]
    pub fn with_profile(mut self, form_type: impl Into<String>) -> Self {
        self.profile = Some(form_type.into());
        self
    }

    #[must_use]
    pub fn with_factory(mut self, factory: impl Into<String>) -> Self {
        self.factory = Some(factory.into());
        self
    }

    #[must_use]
    pub fn with_registration_options(mut self, options: FormOptionsParameters) -> Self {
        self.registration_options = Some(options);
        self
    }

    #[must_use]
    pub fn with_profile_options(mut self, options: FormOptionsParameters) -> Self {
        self.profile_options = Some(options);
        self
    }
}

/// Raw form options. Without `validation_groups` the whole record is
/// replaced by the defaults of its form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormOptionsParameters {
    #[serde(default)]
    pub validation_groups: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
