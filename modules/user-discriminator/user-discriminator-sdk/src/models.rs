//! Domain models shared between the discriminator and its host.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validation groups applied to a registration form when none are configured.
pub const DEFAULT_REGISTRATION_VALIDATION_GROUPS: &[&str] = &["Registration", "Default"];

/// Validation groups applied to a profile form when none are configured.
pub const DEFAULT_PROFILE_VALIDATION_GROUPS: &[&str] = &["Profile", "Default"];

/// Identifier of one supported user kind (e.g. `Customer`, `Vendor`).
///
/// Opaque to the discriminator: two kinds are the same kind iff their
/// identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKind(String);

impl EntityKind {
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityKind {
    fn from(kind: &str) -> Self {
        Self(kind.to_owned())
    }
}

impl From<String> for EntityKind {
    fn from(kind: String) -> Self {
        Self(kind)
    }
}

impl AsRef<str> for EntityKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityKind {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EntityKind {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntityKind {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The two forms bound to every user kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Registration,
    Profile,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registration => f.write_str("registration"),
            Self::Profile => f.write_str("profile"),
        }
    }
}

/// Options handed to the form factory when a form is created.
///
/// Only `validation_groups` is interpreted here; every other key is passed
/// through to the host form layer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormOptions {
    pub validation_groups: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormOptions {
    #[must_use]
    pub fn with_validation_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            validation_groups: groups.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }

    /// Options used for a registration form without configured validation groups.
    #[must_use]
    pub fn registration_default() -> Self {
        Self::with_validation_groups(DEFAULT_REGISTRATION_VALIDATION_GROUPS.iter().copied())
    }

    /// Options used for a profile form without configured validation groups.
    #[must_use]
    pub fn profile_default() -> Self {
        Self::with_validation_groups(DEFAULT_PROFILE_VALIDATION_GROUPS.iter().copied())
    }

    /// Default options for the given form.
    #[must_use]
    pub fn default_for(form: FormKind) -> Self {
        match form {
            FormKind::Registration => Self::registration_default(),
            FormKind::Profile => Self::profile_default(),
        }
    }
}

/// Anything that carries an explicit user-kind tag.
///
/// The authentication layer tags every authenticated user with its kind so
/// the discriminator never has to inspect concrete types.
pub trait KindTagged {
    fn kind(&self) -> &EntityKind;
}

/// A freshly built, not yet persisted user of some kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    kind: EntityKind,
    #[serde(default)]
    attributes: Map<String, Value>,
}

impl User {
    /// Create an empty user of the given kind.
    #[must_use]
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute, returning the previous value if there was one.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.attributes.insert(name.into(), value)
    }
}

impl KindTagged for User {
    fn kind(&self) -> &EntityKind {
        &self.kind
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;

    #[test]
    fn entity_kind_looks_up_by_str() {
        let mut map = HashMap::new();
        map.insert(EntityKind::from("Customer"), 1);

        assert_eq!(map.get("Customer"), Some(&1));
        assert_eq!(map.get("Vendor"), None);
    }

    #[test]
    fn entity_kind_serializes_as_plain_string() {
        let kind = EntityKind::new("Vendor");
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("Vendor"));
        assert_eq!(kind.to_string(), "Vendor");
    }

    #[test]
    fn default_options_per_form() {
        assert_eq!(
            FormOptions::default_for(FormKind::Registration).validation_groups,
            ["Registration", "Default"]
        );
        assert_eq!(
            FormOptions::default_for(FormKind::Profile).validation_groups,
            ["Profile", "Default"]
        );
        assert!(FormOptions::profile_default().extra.is_empty());
    }

    #[test]
    fn form_options_keep_extra_keys() {
        let opts: FormOptions = serde_json::from_value(json!({
            "validation_groups": ["Strict"],
            "csrf_protection": false
        }))
        .unwrap();

        assert_eq!(opts.validation_groups, ["Strict"]);
        assert_eq!(opts.extra.get("csrf_protection"), Some(&json!(false)));
    }

    #[test]
    fn new_user_is_empty_and_tagged() {
        let mut user = User::new(EntityKind::new("Customer"));
        assert_eq!(user.kind(), "Customer");
        assert!(user.attributes().is_empty());

        assert_eq!(user.set_attribute("email", json!("a@b.c")), None);
        assert_eq!(user.attribute("email"), Some(&json!("a@b.c")));
    }
}
