//! Registry of the names configuration may refer to.
//!
//! The host registers every user kind, form type and user factory it
//! supports before the discriminator configuration is built. Building
//! resolves each configured name here once; nothing is looked up by name
//! afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use user_discriminator_sdk::{FormType, UserFactory};

use super::factory::{BUILTIN_USER_FACTORY, DefaultUserFactory};

pub struct TypeRegistry {
    entities: HashSet<String>,
    form_types: HashMap<String, Arc<dyn FormType>>,
    factories: HashMap<String, Arc<dyn UserFactory>>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry that already knows the builtin user factory.
    #[must_use]
    pub fn new() -> Self {
        let mut factories: HashMap<String, Arc<dyn UserFactory>> = HashMap::new();
        factories.insert(BUILTIN_USER_FACTORY.to_owned(), Arc::new(DefaultUserFactory));

        Self {
            entities: HashSet::new(),
            form_types: HashMap::new(),
            factories,
        }
    }

    #[must_use]
    pub fn with_entity(mut self, kind: impl Into<String>) -> Self {
        self.entities.insert(kind.into());
        self
    }

    #[must_use]
    pub fn with_form_type(mut self, name: impl Into<String>, form_type: Arc<dyn FormType>) -> Self {
        self.form_types.insert(name.into(), form_type);
        self
    }

    /// Register a factory. Registering under [`BUILTIN_USER_FACTORY`]
    /// replaces the builtin one.
    #[must_use]
    pub fn with_factory(mut self, name: impl Into<String>, factory: Arc<dyn UserFactory>) -> Self {
        self.factories.insert(name.into(), factory);
        self
    }

    /// Whether `name` refers to anything registered.
    #[must_use]
    pub fn resolves(&self, name: &str) -> bool {
        self.entities.contains(name)
            || self.form_types.contains_key(name)
            || self.factories.contains_key(name)
    }

    #[must_use]
    pub fn has_entity(&self, kind: &str) -> bool {
        self.entities.contains(kind)
    }

    #[must_use]
    pub fn form_type(&self, name: &str) -> Option<Arc<dyn FormType>> {
        self.form_types.get(name).cloned()
    }

    #[must_use]
    pub fn factory(&self, name: &str) -> Option<Arc<dyn UserFactory>> {
        self.factories.get(name).cloned()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("entities", &self.entities)
            .field("form_types", &self.form_types.keys().collect::<Vec<_>>())
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
