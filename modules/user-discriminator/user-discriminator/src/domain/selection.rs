//! Current-kind selection.
//!
//! The current kind resolves through three tiers, first hit wins:
//! the request-local [`SelectionState`], the session value under
//! [`SESSION_KEY`], and the first configured kind.

use tracing::{debug, warn};
use user_discriminator_sdk::{DiscriminatorError, EntityKind, SESSION_KEY, SessionStore};

use super::builder::{ConfiguredKind, DiscriminatorConfig};

/// Request-local selection. Starts unset; once resolved it only changes
/// through [`select_kind`].
///
/// Holds the kind itself, so a state checked against a configuration that no
/// longer lists it just resolves again.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<EntityKind>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected kind, if resolved yet.
    #[must_use]
    pub fn current(&self) -> Option<&EntityKind> {
        self.current.as_ref()
    }
}

/// Resolve the current kind, caching the result in `state`. Never fails.
pub fn resolve_current_kind<'c>(
    config: &'c DiscriminatorConfig,
    state: &mut SelectionState,
    session: &dyn SessionStore,
) -> ConfiguredKind<'c> {
    if let Some(cached) = state.current.as_ref() {
        if let Some(configured) = config.kind(cached.as_str()) {
            return configured;
        }
        warn!(cached_kind = %cached, "Dropping selected user kind that is not configured");
    }

    let configured = stored_selection(config, session).unwrap_or_else(|| {
        debug!(kind = %config.default_kind(), "No stored user kind, using default");
        config.default_configured()
    });
    state.current = Some(configured.kind.clone());
    configured
}

fn stored_selection<'c>(
    config: &'c DiscriminatorConfig,
    session: &dyn SessionStore,
) -> Option<ConfiguredKind<'c>> {
    let stored = session.get(SESSION_KEY).filter(|s| !s.is_empty())?;
    let configured = config.kind(&stored);
    if configured.is_none() {
        warn!(stored_kind = %stored, "Ignoring stored user kind that is not configured");
    }
    configured
}

/// Make `kind` the current kind, writing it to the session when `persist`
/// is set. Returns whether the selection changed.
///
/// # Errors
///
/// `InvalidKind` if `kind` is not configured; `state` and `session` are left
/// untouched.
pub fn select_kind(
    config: &DiscriminatorConfig,
    state: &mut SelectionState,
    session: &dyn SessionStore,
    kind: &str,
    persist: bool,
) -> Result<bool, DiscriminatorError> {
    let configured = config
        .kind(kind)
        .ok_or_else(|| DiscriminatorError::invalid_kind(kind))?;

    if persist {
        session.set(SESSION_KEY, kind.to_owned());
    }

    let changed = state.current.as_ref() != Some(configured.kind);
    if changed {
        state.current = Some(configured.kind.clone());
    }
    debug!(kind, persist, changed, "Selected user kind");
    Ok(changed)
}
