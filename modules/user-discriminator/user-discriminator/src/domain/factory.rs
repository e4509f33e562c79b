//! Builtin user factory.

use user_discriminator_sdk::{EntityKind, User, UserFactory};

/// Registry name of the builtin factory, used when a class configures none.
pub const BUILTIN_USER_FACTORY: &str = "user_discriminator.default_user_factory";

/// Builds an empty [`User`] tagged with the requested kind.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultUserFactory;

impl UserFactory for DefaultUserFactory {
    fn build(&self, kind: &EntityKind) -> User {
        User::new(kind.clone())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use user_discriminator_sdk::KindTagged;

    use super::*;

    #[test]
    fn builds_fresh_user_per_call() {
        let factory = DefaultUserFactory;
        let kind = EntityKind::new("Vendor");

        let mut first = factory.build(&kind);
        first.set_attribute("name", serde_json::json!("acme"));
        let second = factory.build(&kind);

        assert_eq!(second.kind(), "Vendor");
        assert!(second.attributes().is_empty());
    }
}
