//! Request-scoped user discriminator.

use std::sync::Arc;

use tracing::debug;
use user_discriminator_sdk::{
    DiscriminatorError, EntityKind, FormFactory, FormKind, SessionStore, User,
};

use super::builder::{ConfiguredKind, DiscriminatorConfig};
use super::selection::{SelectionState, resolve_current_kind, select_kind};

/// Selects the user kind a request operates on and binds its forms and
/// factory.
///
/// One instance per request. The configuration and the session store are
/// shared; the selection and the form caches belong to this instance.
/// Forms are built at most once per selected kind: changing the kind through
/// [`Self::set_class`] drops the cached forms.
pub struct UserDiscriminator<F: FormFactory> {
    config: Arc<DiscriminatorConfig>,
    session: Arc<dyn SessionStore>,
    forms: Arc<F>,
    selection: SelectionState,
    registration_form: Option<F::Form>,
    profile_form: Option<F::Form>,
}

impl<F: FormFactory> UserDiscriminator<F> {
    #[must_use]
    pub fn new(
        config: Arc<DiscriminatorConfig>,
        session: Arc<dyn SessionStore>,
        forms: Arc<F>,
    ) -> Self {
        Self {
            config,
            session,
            forms,
            selection: SelectionState::new(),
            registration_form: None,
            profile_form: None,
        }
    }

    /// All configured kinds, default first.
    #[must_use]
    pub fn classes(&self) -> &[EntityKind] {
        self.config.entities()
    }

    /// Make `kind` current, persisting it to the session when `persist` is set.
    ///
    /// # Errors
    ///
    /// `InvalidKind` if `kind` is not configured. The previous selection,
    /// the session and the cached forms are left as they were.
    pub fn set_class(&mut self, kind: &str, persist: bool) -> Result<(), DiscriminatorError> {
        let changed = select_kind(
            &self.config,
            &mut self.selection,
            self.session.as_ref(),
            kind,
            persist,
        )?;

        if changed && (self.registration_form.is_some() || self.profile_form.is_some()) {
            debug!(kind, "User kind changed, dropping cached forms");
            self.registration_form = None;
            self.profile_form = None;
        }
        Ok(())
    }

    /// The current kind: cached selection, else the session value, else the
    /// first configured kind.
    pub fn get_class(&mut self) -> &EntityKind {
        self.current().kind
    }

    /// Build a fresh user of the current kind through its factory.
    pub fn create_user(&mut self) -> User {
        let current = self.current();
        current.config.factory.handle().build(current.kind)
    }

    /// Registration form of the current kind, built on first use.
    ///
    /// # Errors
    ///
    /// - `FormNotConfigured` if the current kind has no registration form type
    /// - `FormBuild` if the form factory fails
    pub fn registration_form(&mut self) -> Result<&F::Form, DiscriminatorError> {
        let current = resolve_current_kind(&self.config, &mut self.selection, self.session.as_ref());
        cached_form(&mut self.registration_form, || {
            build_form(self.forms.as_ref(), current, FormKind::Registration)
        })
    }

    /// Profile form of the current kind, built on first use.
    ///
    /// # Errors
    ///
    /// - `FormNotConfigured` if the current kind has no profile form type
    /// - `FormBuild` if the form factory fails
    pub fn profile_form(&mut self) -> Result<&F::Form, DiscriminatorError> {
        let current = resolve_current_kind(&self.config, &mut self.selection, self.session.as_ref());
        cached_form(&mut self.profile_form, || {
            build_form(self.forms.as_ref(), current, FormKind::Profile)
        })
    }

    fn current(&mut self) -> ConfiguredKind<'_> {
        resolve_current_kind(&self.config, &mut self.selection, self.session.as_ref())
    }
}

fn cached_form<T>(
    slot: &mut Option<T>,
    build: impl FnOnce() -> Result<T, DiscriminatorError>,
) -> Result<&T, DiscriminatorError> {
    match slot {
        Some(form) => Ok(form),
        None => Ok(slot.insert(build()?)),
    }
}

fn build_form<F: FormFactory>(
    forms: &F,
    current: ConfiguredKind<'_>,
    form: FormKind,
) -> Result<F::Form, DiscriminatorError> {
    let form_type = current
        .config
        .form_type(form)
        .ok_or_else(|| DiscriminatorError::form_not_configured(current.kind.clone(), form))?;

    debug!(kind = %current.kind, %form, form_type = form_type.name(), "Building form");
    forms
        .create_named(
            form_type.handle().name(),
            form_type.handle(),
            current.kind,
            None,
            current.config.form_options(form),
        )
        .map_err(|e| DiscriminatorError::form_build(current.kind.clone(), form, e.to_string()))
}
