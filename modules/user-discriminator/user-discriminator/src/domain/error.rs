//! Configuration errors raised while building the discriminator.

use thiserror::Error;

/// Fatal startup errors. A failed build leaves no partial configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A configured name does not resolve in the type registry.
    #[error("cannot build discriminator configuration: {field} '{value}' not found")]
    UnresolvableType { field: &'static str, value: String },

    /// The entities list is empty, so there is no default kind.
    #[error("cannot build discriminator configuration: no entities configured")]
    NoEntities,

    /// The same entity appears more than once.
    #[error("cannot build discriminator configuration: entity '{entity}' is configured twice")]
    DuplicateEntity { entity: String },

    /// Configuration sources could not be read or deserialized.
    #[error("failed to load discriminator configuration: {0}")]
    Load(Box<figment::Error>),
}

impl ConfigurationError {
    #[must_use]
    pub fn unresolvable(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnresolvableType {
            field,
            value: value.into(),
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(e: figment::Error) -> Self {
        Self::Load(Box::new(e))
    }
}
