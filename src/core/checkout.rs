//! Checkout form state and validation
//!
//! The form keeps its own field→error map in sync: every mutation re-runs
//! validation synchronously, so the map is never stale. Validation results
//! are ordinary values intended for inline display, not errors to
//! propagate.

use std::collections::HashMap;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PAYMENT_DETAILS: &str = "payment_details";

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";

/// A three-field contact/payment form with continuously maintained
/// validation state.
///
/// A freshly constructed form is pristine: fields empty and no errors
/// recorded. The error map only reflects fields once they have been
/// edited through [`CheckoutForm::set_field`].
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub payment_details: String,
    errors: HashMap<String, String>,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutates one field and synchronously re-runs validation. Unknown
    /// field names leave the form untouched.
    pub fn set_field(&mut self, field: &str, value: &str) {
        match field {
            FIELD_NAME => self.name = value.to_string(),
            FIELD_EMAIL => self.email = value.to_string(),
            FIELD_PAYMENT_DETAILS => self.payment_details = value.to_string(),
            _ => return,
        }
        self.errors = CheckoutValidator::validate(self);
    }

    /// The current field→message map. Empty means no recorded failures.
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether the form would pass validation as it stands. Computed
    /// fresh so a pristine (never edited) empty form reports false.
    pub fn is_submittable(&self) -> bool {
        CheckoutValidator::validate(self).is_empty()
    }
}

/// Stateless validation rules for the checkout form.
pub struct CheckoutValidator;

impl CheckoutValidator {
    /// Validates every field independently, returning one message per
    /// failed field. An empty map means the form is submittable.
    pub fn validate(form: &CheckoutForm) -> HashMap<String, String> {
        let mut errors = HashMap::new();

        if form.name.is_empty() {
            errors.insert(FIELD_NAME.to_string(), MSG_REQUIRED.to_string());
        }

        if form.email.is_empty() {
            errors.insert(FIELD_EMAIL.to_string(), MSG_REQUIRED.to_string());
        } else if !is_well_formed_email(&form.email) {
            errors.insert(FIELD_EMAIL.to_string(), MSG_INVALID_EMAIL.to_string());
        }

        if form.payment_details.is_empty() {
            errors.insert(FIELD_PAYMENT_DETAILS.to_string(), MSG_REQUIRED.to_string());
        }

        errors
    }
}

/// Structural email check: exactly one `@`, a non-empty local part, and a
/// domain with an interior dot. No whitespace anywhere.
pub fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
