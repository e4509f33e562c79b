//! Login events consumed by the discriminator.
//!
//! Both events carry the authenticated user; the user's kind tag decides
//! which kind becomes current for the session.

use crate::models::{EntityKind, KindTagged};

/// Raised after a user logged in through an interactive flow (login form,
/// SSO redirect and so on).
#[derive(Debug, Clone)]
pub struct InteractiveLoginEvent<U> {
    user: U,
}

impl<U: KindTagged> InteractiveLoginEvent<U> {
    #[must_use]
    pub fn new(user: U) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> &U {
        &self.user
    }

    #[must_use]
    pub fn kind(&self) -> &EntityKind {
        self.user.kind()
    }
}

/// Raised when the host logs a user in programmatically, e.g. right after
/// registration.
#[derive(Debug, Clone)]
pub struct ManualLoginEvent<U> {
    user: U,
}

impl<U: KindTagged> ManualLoginEvent<U> {
    #[must_use]
    pub fn new(user: U) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> &U {
        &self.user
    }

    #[must_use]
    pub fn kind(&self) -> &EntityKind {
        self.user.kind()
    }
}
