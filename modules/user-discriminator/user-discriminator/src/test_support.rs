#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};
use user_discriminator_sdk::{EntityKind, FormFactory, FormOptions, FormType, User, UserFactory};

use crate::config::{ClassParameters, FormOptionsParameters};
use crate::domain::builder::DiscriminatorConfig;
use crate::domain::registry::TypeRegistry;

pub const CUSTOMER: &str = "Customer";
pub const VENDOR: &str = "Vendor";

pub struct NamedFormType(pub &'static str);

impl NamedFormType {
    pub fn arc(name: &'static str) -> Arc<dyn FormType> {
        Arc::new(Self(name))
    }
}

impl FormType for NamedFormType {
    fn name(&self) -> &str {
        self.0
    }
}

/// Marks every user it builds with `"vendor": true`.
pub struct VendorFactory;

impl UserFactory for VendorFactory {
    fn build(&self, kind: &EntityKind) -> User {
        let mut user = User::new(kind.clone());
        user.set_attribute("vendor", json!(true));
        user
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestForm {
    pub name: String,
    pub kind: EntityKind,
    pub options: FormOptions,
}

#[derive(Default)]
pub struct RecordingFormFactory {
    builds: AtomicUsize,
}

impl RecordingFormFactory {
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl FormFactory for RecordingFormFactory {
    type Form = TestForm;
    type Error = String;

    fn create_named(
        &self,
        name: &str,
        _form_type: &dyn FormType,
        kind: &EntityKind,
        _initial_data: Option<&Value>,
        options: &FormOptions,
    ) -> Result<TestForm, String> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        Ok(TestForm {
            name: name.to_owned(),
            kind: kind.clone(),
            options: options.clone(),
        })
    }
}

#[derive(Default)]
pub struct FailingFormFactory {
    attempts: AtomicUsize,
}

impl FailingFormFactory {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl FormFactory for FailingFormFactory {
    type Form = TestForm;
    type Error = String;

    fn create_named(
        &self,
        _name: &str,
        _form_type: &dyn FormType,
        _kind: &EntityKind,
        _initial_data: Option<&Value>,
        _options: &FormOptions,
    ) -> Result<TestForm, String> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err("form library offline".to_owned())
    }
}

pub fn registry() -> TypeRegistry {
    TypeRegistry::new()
        .with_entity(CUSTOMER)
        .with_entity(VENDOR)
        .with_form_type("CustomerRegistrationForm", NamedFormType::arc("customer_registration"))
        .with_form_type("CustomerProfileForm", NamedFormType::arc("customer_profile"))
        .with_form_type("VendorRegistrationForm", NamedFormType::arc("vendor_registration"))
        .with_form_type("VendorProfileForm", NamedFormType::arc("vendor_profile"))
        .with_factory("VendorFactory", Arc::new(VendorFactory))
}

pub fn customer_and_vendor() -> Vec<ClassParameters> {
    vec![
        ClassParameters::new(CUSTOMER)
            .with_registration("CustomerRegistrationForm")
            .with_profile("CustomerProfileForm"),
        ClassParameters::new(VENDOR)
            .with_registration("VendorRegistrationForm")
            .with_profile("VendorProfileForm")
            .with_factory("VendorFactory")
            .with_profile_options(FormOptionsParameters {
                validation_groups: Some(vec!["VendorProfile".to_owned()]),
                ..Default::default()
            }),
    ]
}

pub fn customer_and_vendor_config() -> DiscriminatorConfig {
    DiscriminatorConfig::build(&customer_and_vendor(), &registry()).unwrap()
}
