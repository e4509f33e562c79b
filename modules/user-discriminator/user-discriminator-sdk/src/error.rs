//! Error types for the user discriminator.

use thiserror::Error;

use crate::models::{EntityKind, FormKind};

/// Errors returned by runtime discriminator operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscriminatorError {
    /// The requested kind is not one of the configured entities.
    #[error("user kind '{kind}' is not present in the configured entities list")]
    InvalidKind { kind: EntityKind },

    /// The current kind has no form type bound for the requested form.
    #[error("no {form} form type configured for user kind '{kind}'")]
    FormNotConfigured { kind: EntityKind, form: FormKind },

    /// The host form factory refused to build the form.
    #[error("failed to build {form} form for user kind '{kind}': {reason}")]
    FormBuild {
        kind: EntityKind,
        form: FormKind,
        reason: String,
    },
}

impl DiscriminatorError {
    #[must_use]
    pub fn invalid_kind(kind: impl Into<EntityKind>) -> Self {
        Self::InvalidKind { kind: kind.into() }
    }

    #[must_use]
    pub fn form_not_configured(kind: EntityKind, form: FormKind) -> Self {
        Self::FormNotConfigured { kind, form }
    }

    #[must_use]
    pub fn form_build(kind: EntityKind, form: FormKind, reason: impl Into<String>) -> Self {
        Self::FormBuild {
            kind,
            form,
            reason: reason.into(),
        }
    }
}
