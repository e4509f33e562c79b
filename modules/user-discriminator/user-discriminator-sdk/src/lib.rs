//! User Discriminator SDK
//!
//! Public contract of the `user_discriminator` module:
//!
//! - [`EntityKind`], [`FormOptions`], [`User`] - models
//! - [`SessionStore`], [`UserFactory`], [`FormType`], [`FormFactory`] - collaborator traits the host implements
//! - [`LoginListener`], [`InteractiveLoginEvent`], [`ManualLoginEvent`] - login event wiring
//! - [`DiscriminatorError`] - runtime errors
//!
//! ## Usage
//!
//! ```ignore
//! use user_discriminator_sdk::{InteractiveLoginEvent, LoginListener};
//!
//! // `user` carries its kind tag, e.g. "Vendor"
//! discriminator.on_interactive_login(&InteractiveLoginEvent::new(user))?;
//! let form = discriminator.registration_form()?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod events;
pub mod models;

// Re-export main types at crate root
pub use api::{FormFactory, FormType, LoginListener, SESSION_KEY, SessionStore, UserFactory};
pub use error::DiscriminatorError;
pub use events::{InteractiveLoginEvent, ManualLoginEvent};
pub use models::{EntityKind, FormKind, FormOptions, KindTagged, User};
