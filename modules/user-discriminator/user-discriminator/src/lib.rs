//! User Discriminator Module
//!
//! Lets one authentication subsystem serve several user kinds (say
//! `Customer` and `Vendor`). For every request it decides which kind is
//! current and hands out that kind's registration form, profile form and
//! user factory.
//!
//! ## Selection
//!
//! The current kind resolves, first hit wins, from:
//! 1. the request-local selection,
//! 2. the kind persisted in the session,
//! 3. the first configured kind.
//!
//! Login events persist the logged-in user's kind to the session.
//!
//! ## Configuration
//!
//! ```yaml
//! classes:
//!   - entity: Customer
//!     registration: CustomerRegistrationForm
//!     profile: CustomerProfileForm
//!   - entity: Vendor
//!     registration: VendorRegistrationForm
//!     profile: VendorProfileForm
//!     factory: VendorFactory
//!     registration_options:
//!       validation_groups: [VendorRegistration, Default]
//! ```
//!
//! Every name must be registered in the [`TypeRegistry`] before
//! [`DiscriminatorConfig::build`] is called.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod infra;

#[cfg(test)]
mod test_support;

pub use config::{ClassParameters, FormOptionsParameters, UserDiscriminatorConfig};
pub use domain::{
    BUILTIN_USER_FACTORY, ConfigurationError, DefaultUserFactory, DiscriminatorConfig,
    TypeRegistry, UserDiscriminator,
};
pub use infra::InMemorySessionStore;
