//! Collaborator traits implemented by the host framework.
//!
//! The discriminator never talks to a session backend, form library or user
//! model directly; it goes through these seams instead.

use std::fmt::Display;

use serde_json::Value;

use crate::error::DiscriminatorError;
use crate::events::{InteractiveLoginEvent, ManualLoginEvent};
use crate::models::{EntityKind, FormOptions, KindTagged, User};

/// Session key under which the selected user kind is persisted.
pub const SESSION_KEY: &str = "nmn_user.user_discriminator.class";

/// Key-value session storage shared by all requests of one session.
///
/// Last write wins; the discriminator performs no compare-and-swap.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String);
}

/// Builds fresh, empty users of a given kind.
pub trait UserFactory: Send + Sync {
    /// Produce a new user instance tagged with `kind`.
    fn build(&self, kind: &EntityKind) -> User;
}

/// A registration or profile form type bound to one or more user kinds.
pub trait FormType: Send + Sync {
    /// Name under which forms of this type are created.
    fn name(&self) -> &str;
}

/// Host form-building service.
///
/// `Form` is whatever handle the host form library returns; the discriminator
/// only stores and hands it back.
pub trait FormFactory: Send + Sync {
    type Form;
    type Error: Display;

    /// Create a named form of `form_type` for a user of `kind`.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the form cannot be built; the discriminator
    /// reports it as [`DiscriminatorError::FormBuild`].
    fn create_named(
        &self,
        name: &str,
        form_type: &dyn FormType,
        kind: &EntityKind,
        initial_data: Option<&Value>,
        options: &FormOptions,
    ) -> Result<Self::Form, Self::Error>;
}

/// Receiver of login events.
///
/// The host event bus dispatches both login flavours here; a user whose kind
/// is not configured aborts the login handling chain with an error.
pub trait LoginListener {
    /// # Errors
    ///
    /// `InvalidKind` if the user's kind is not configured.
    fn on_interactive_login<U: KindTagged>(
        &mut self,
        event: &InteractiveLoginEvent<U>,
    ) -> Result<(), DiscriminatorError>;

    /// # Errors
    ///
    /// `InvalidKind` if the user's kind is not configured.
    fn on_manual_login<U: KindTagged>(
        &mut self,
        event: &ManualLoginEvent<U>,
    ) -> Result<(), DiscriminatorError>;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn session_key_is_namespaced_under_the_user_bundle() {
        assert_eq!(SESSION_KEY, "nmn_user.user_discriminator.class");
    }
}
