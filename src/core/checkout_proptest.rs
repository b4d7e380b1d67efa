//! Property-based tests for checkout validation
//!
//! These verify the per-field independence of the rules and the
//! continuous re-validation contract of the form.

#[cfg(test)]
mod tests {
    use crate::core::checkout::{
        is_well_formed_email, CheckoutForm, CheckoutValidator, FIELD_EMAIL, FIELD_NAME,
        FIELD_PAYMENT_DETAILS, MSG_INVALID_EMAIL, MSG_REQUIRED,
    };
    use proptest::prelude::*;

    prop_compose! {
        fn valid_email()(
            local in "[a-z][a-z0-9.]{0,8}",
            host in "[a-z][a-z0-9]{0,8}",
            tld in prop::sample::select(vec!["com", "org", "io"]),
        ) -> String {
            format!("{local}@{host}.{tld}")
        }
    }

    prop_compose! {
        fn arb_form()(
            name in "[A-Za-z ]{0,12}",
            email in prop_oneof![
                valid_email(),
                "[a-z]{0,10}",
                Just(String::new()),
            ],
            payment in "[0-9 ]{0,12}",
        ) -> CheckoutForm {
            let mut form = CheckoutForm::new();
            form.set_field(FIELD_NAME, &name);
            form.set_field(FIELD_EMAIL, &email);
            form.set_field(FIELD_PAYMENT_DETAILS, &payment);
            form
        }
    }

    proptest! {
        #[test]
        fn prop_errors_only_use_known_fields_and_messages(form in arb_form()) {
            let errors = CheckoutValidator::validate(&form);
            for (field, message) in &errors {
                prop_assert!(
                    [FIELD_NAME, FIELD_EMAIL, FIELD_PAYMENT_DETAILS]
                        .contains(&field.as_str())
                );
                prop_assert!([MSG_REQUIRED, MSG_INVALID_EMAIL].contains(&message.as_str()));
            }
        }

        #[test]
        fn prop_field_rules_are_independent(form in arb_form()) {
            let errors = CheckoutValidator::validate(&form);
            prop_assert_eq!(errors.contains_key(FIELD_NAME), form.name.is_empty());
            prop_assert_eq!(
                errors.contains_key(FIELD_PAYMENT_DETAILS),
                form.payment_details.is_empty()
            );
            let expected_email_error = if form.email.is_empty() {
                Some(MSG_REQUIRED)
            } else if !is_well_formed_email(&form.email) {
                Some(MSG_INVALID_EMAIL)
            } else {
                None
            };
            prop_assert_eq!(
                errors.get(FIELD_EMAIL).map(String::as_str),
                expected_email_error
            );
        }

        #[test]
        fn prop_form_errors_never_stale(form in arb_form()) {
            // After any sequence of edits the recorded map equals a fresh run.
            prop_assert_eq!(form.errors(), &CheckoutValidator::validate(&form));
        }

        #[test]
        fn prop_generated_valid_emails_pass(email in valid_email()) {
            prop_assert!(is_well_formed_email(&email));
        }

        #[test]
        fn prop_whitespace_emails_fail(
            prefix in "[a-z]{1,5}",
            suffix in "[a-z]{1,5}",
        ) {
            let email = format!("{prefix} {suffix}@example.com");
            prop_assert!(!is_well_formed_email(&email));
        }

        #[test]
        fn prop_submittable_iff_no_errors(form in arb_form()) {
            prop_assert_eq!(
                form.is_submittable(),
                CheckoutValidator::validate(&form).is_empty()
            );
        }
    }
}
