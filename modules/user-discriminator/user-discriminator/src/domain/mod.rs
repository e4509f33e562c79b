//! Domain layer for the user discriminator.

pub mod builder;
pub mod error;
pub mod events;
pub mod factory;
pub mod registry;
pub mod selection;
pub mod service;

pub use builder::{ConfiguredKind, DiscriminatorConfig, KindConfig, Resolved};
pub use error::ConfigurationError;
pub use factory::{BUILTIN_USER_FACTORY, DefaultUserFactory};
pub use registry::TypeRegistry;
pub use selection::{SelectionState, resolve_current_kind, select_kind};
pub use service::UserDiscriminator;
