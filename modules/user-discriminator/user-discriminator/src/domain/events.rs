//! Login event handling.

use tracing::{error, info};
use user_discriminator_sdk::{
    DiscriminatorError, EntityKind, FormFactory, InteractiveLoginEvent, KindTagged,
    LoginListener, ManualLoginEvent,
};

use super::service::UserDiscriminator;

impl<F: FormFactory> LoginListener for UserDiscriminator<F> {
    fn on_interactive_login<U: KindTagged>(
        &mut self,
        event: &InteractiveLoginEvent<U>,
    ) -> Result<(), DiscriminatorError> {
        self.select_logged_in(event.kind(), "interactive")
    }

    fn on_manual_login<U: KindTagged>(
        &mut self,
        event: &ManualLoginEvent<U>,
    ) -> Result<(), DiscriminatorError> {
        self.select_logged_in(event.kind(), "manual")
    }
}

impl<F: FormFactory> UserDiscriminator<F> {
    fn select_logged_in(&mut self, kind: &EntityKind, login: &str) -> Result<(), DiscriminatorError> {
        self.set_class(kind.as_str(), true).inspect_err(|e| {
            error!(%kind, login, error = %e, "Authenticated user has an unconfigured kind");
        })?;
        info!(%kind, login, "User kind selected on login");
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use user_discriminator_sdk::{SESSION_KEY, SessionStore, User};

    use super::*;
    use crate::infra::InMemorySessionStore;
    use crate::test_support::{CUSTOMER, RecordingFormFactory, VENDOR, customer_and_vendor_config};

    fn discriminator(
        session: &Arc<InMemorySessionStore>,
    ) -> UserDiscriminator<RecordingFormFactory> {
        UserDiscriminator::new(
            Arc::new(customer_and_vendor_config()),
            session.clone(),
            Arc::new(RecordingFormFactory::default()),
        )
    }

    #[test]
    fn interactive_login_selects_and_persists_kind() {
        let session = Arc::new(InMemorySessionStore::new());
        let mut d = discriminator(&session);

        let event = InteractiveLoginEvent::new(User::new(EntityKind::new(VENDOR)));
        d.on_interactive_login(&event).unwrap();

        assert_eq!(d.get_class(), VENDOR);
        assert_eq!(session.get(SESSION_KEY).as_deref(), Some(VENDOR));
    }

    #[test]
    fn manual_login_selects_and_persists_kind() {
        let session = Arc::new(InMemorySessionStore::new());
        let mut d = discriminator(&session);
        d.set_class(VENDOR, false).unwrap();

        let event = ManualLoginEvent::new(User::new(EntityKind::new(CUSTOMER)));
        d.on_manual_login(&event).unwrap();

        assert_eq!(d.get_class(), CUSTOMER);
        assert_eq!(session.get(SESSION_KEY).as_deref(), Some(CUSTOMER));
    }

    #[test]
    fn login_of_unconfigured_kind_fails() {
        let session = Arc::new(InMemorySessionStore::new());
        let mut d = discriminator(&session);

        let event = InteractiveLoginEvent::new(User::new(EntityKind::new("Admin")));
        let err = d.on_interactive_login(&event).unwrap_err();

        assert_eq!(err, DiscriminatorError::invalid_kind("Admin"));
        assert_eq!(session.get(SESSION_KEY), None);
        assert_eq!(d.get_class(), CUSTOMER);
    }

    #[test]
    fn login_accepts_any_kind_tagged_user() {
        struct Principal {
            kind: EntityKind,
        }

        impl KindTagged for Principal {
            fn kind(&self) -> &EntityKind {
                &self.kind
            }
        }

        let session = Arc::new(InMemorySessionStore::new());
        let mut d = discriminator(&session);

        let event = ManualLoginEvent::new(Principal {
            kind: EntityKind::new(VENDOR),
        });
        d.on_manual_login(&event).unwrap();

        assert_eq!(d.get_class(), VENDOR);
    }
}
