//! Builds the immutable discriminator configuration from raw class parameters.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};
use user_discriminator_sdk::{EntityKind, FormKind, FormOptions, FormType, UserFactory};

use super::error::ConfigurationError;
use super::factory::BUILTIN_USER_FACTORY;
use super::registry::TypeRegistry;
use crate::config::{ClassParameters, FormOptionsParameters};

/// A configured name together with the handle it resolved to.
pub struct Resolved<T: ?Sized> {
    name: String,
    handle: Arc<T>,
}

impl<T: ?Sized> Resolved<T> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn handle(&self) -> &T {
        &self.handle
    }
}

impl<T: ?Sized> Clone for Resolved<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            handle: Arc::clone(&self.handle),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Everything bound to one user kind.
#[derive(Debug, Clone)]
pub struct KindConfig {
    pub registration_form: Option<Resolved<dyn FormType>>,
    pub profile_form: Option<Resolved<dyn FormType>>,
    pub factory: Resolved<dyn UserFactory>,
    pub registration_options: FormOptions,
    pub profile_options: FormOptions,
}

impl KindConfig {
    #[must_use]
    pub fn form_type(&self, form: FormKind) -> Option<&Resolved<dyn FormType>> {
        match form {
            FormKind::Registration => self.registration_form.as_ref(),
            FormKind::Profile => self.profile_form.as_ref(),
        }
    }

    #[must_use]
    pub fn form_options(&self, form: FormKind) -> &FormOptions {
        match form {
            FormKind::Registration => &self.registration_options,
            FormKind::Profile => &self.profile_options,
        }
    }
}

/// A configured kind and its bindings, borrowed from [`DiscriminatorConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredKind<'c> {
    pub kind: &'c EntityKind,
    pub config: &'c KindConfig,
}

#[derive(Debug)]
struct KindEntry {
    kind: EntityKind,
    config: KindConfig,
}

impl KindEntry {
    fn as_configured(&self) -> ConfiguredKind<'_> {
        ConfiguredKind {
            kind: &self.kind,
            config: &self.config,
        }
    }
}

/// Ordered, validated set of supported user kinds.
///
/// Never empty: the first configured kind is held apart as the default
/// selection.
#[derive(Debug)]
pub struct DiscriminatorConfig {
    entities: Vec<EntityKind>,
    default: KindEntry,
    others: Vec<KindEntry>,
}

impl DiscriminatorConfig {
    /// Validate `classes` against `registry` and build the configuration.
    ///
    /// All or nothing: the first invalid record aborts the build.
    ///
    /// # Errors
    ///
    /// - `NoEntities` if `classes` is empty
    /// - `UnresolvableType` if an entity, form type or factory name is not registered
    /// - `DuplicateEntity` if an entity is listed twice
    pub fn build(
        classes: &[ClassParameters],
        registry: &TypeRegistry,
    ) -> Result<Self, ConfigurationError> {
        let mut entities: Vec<EntityKind> = Vec::with_capacity(classes.len());
        let mut entries = Vec::with_capacity(classes.len());

        for class in classes {
            check_resolvable(class, registry)?;
            if !registry.has_entity(&class.entity) {
                return Err(ConfigurationError::unresolvable("entity", &class.entity));
            }
            if entities.iter().any(|e| *e == class.entity.as_str()) {
                return Err(ConfigurationError::DuplicateEntity {
                    entity: class.entity.clone(),
                });
            }

            let config = build_kind(class, registry)?;
            debug!(
                entity = %class.entity,
                factory = config.factory.name(),
                "Configured user kind"
            );
            let kind = EntityKind::new(class.entity.as_str());
            entities.push(kind.clone());
            entries.push(KindEntry { kind, config });
        }

        let mut entries = entries.into_iter();
        let Some(default) = entries.next() else {
            return Err(ConfigurationError::NoEntities);
        };

        let cfg = Self {
            entities,
            default,
            others: entries.collect(),
        };
        info!(
            kind_count = cfg.entities.len(),
            default_kind = %cfg.default_kind(),
            "Built user discriminator configuration"
        );
        Ok(cfg)
    }

    /// Configured kinds in configuration order.
    #[must_use]
    pub fn entities(&self) -> &[EntityKind] {
        &self.entities
    }

    /// The first configured kind.
    #[must_use]
    pub fn default_kind(&self) -> &EntityKind {
        &self.default.kind
    }

    /// The first configured kind with its bindings.
    #[must_use]
    pub fn default_configured(&self) -> ConfiguredKind<'_> {
        self.default.as_configured()
    }

    /// Position of `kind` in the configuration, if configured.
    #[must_use]
    pub fn position(&self, kind: &str) -> Option<usize> {
        self.entities.iter().position(|e| *e == kind)
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.position(kind).is_some()
    }

    /// Bindings of `kind`, if configured.
    #[must_use]
    pub fn kind(&self, kind: &str) -> Option<ConfiguredKind<'_>> {
        std::iter::once(&self.default)
            .chain(&self.others)
            .find(|entry| entry.kind == kind)
            .map(KindEntry::as_configured)
    }
}

/// Every non-empty name of a record must be known to the registry at all.
/// Whether it names the right category is checked while binding.
fn check_resolvable(
    class: &ClassParameters,
    registry: &TypeRegistry,
) -> Result<(), ConfigurationError> {
    let names = [
        ("entity", Some(class.entity.as_str())),
        ("registration", class.registration.as_deref()),
        ("profile", class.profile.as_deref()),
        ("factory", class.factory.as_deref()),
    ];
    for (field, name) in names {
        if let Some(name) = name.filter(|n| !n.is_empty())
            && !registry.resolves(name)
        {
            return Err(ConfigurationError::unresolvable(field, name));
        }
    }
    Ok(())
}

fn build_kind(
    class: &ClassParameters,
    registry: &TypeRegistry,
) -> Result<KindConfig, ConfigurationError> {
    let factory_name = match class.factory.as_deref() {
        None | Some("") => BUILTIN_USER_FACTORY,
        Some(name) => name,
    };
    let factory = registry
        .factory(factory_name)
        .map(|handle| Resolved {
            name: factory_name.to_owned(),
            handle,
        })
        .ok_or_else(|| ConfigurationError::unresolvable("factory", factory_name))?;

    Ok(KindConfig {
        registration_form: resolve_form_type("registration", class.registration.as_deref(), registry)?,
        profile_form: resolve_form_type("profile", class.profile.as_deref(), registry)?,
        factory,
        registration_options: form_options(class.registration_options.as_ref(), FormKind::Registration),
        profile_options: form_options(class.profile_options.as_ref(), FormKind::Profile),
    })
}

fn resolve_form_type(
    field: &'static str,
    name: Option<&str>,
    registry: &TypeRegistry,
) -> Result<Option<Resolved<dyn FormType>>, ConfigurationError> {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return Ok(None);
    };
    registry
        .form_type(name)
        .map(|handle| {
            Some(Resolved {
                name: name.to_owned(),
                handle,
            })
        })
        .ok_or_else(|| ConfigurationError::unresolvable(field, name))
}

/// Options without `validation_groups` fall back to the form defaults as a
/// whole; extra keys are dropped in that case.
fn form_options(raw: Option<&FormOptionsParameters>, form: FormKind) -> FormOptions {
    match raw {
        Some(FormOptionsParameters {
            validation_groups: Some(groups),
            extra,
        }) => FormOptions {
            validation_groups: groups.clone(),
            extra: extra.clone(),
        },
        _ => FormOptions::default_for(form),
    }
}
