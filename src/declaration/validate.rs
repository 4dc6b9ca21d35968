//! Submit-time validation of the declaration form
//!
//! The attestation is a hard gate checked before anything else. Past the
//! gate every rule runs, so the user sees all problems at once.

use crate::declaration::form::{CounterField, DeclarationForm, field};
use crate::error::ValidationErrors;
use serde::Serialize;
use tracing::debug;

pub const ATTESTATION_REQUIRED: &str =
    "You must accept the sworn declaration to continue";
pub const SAG_DETAIL_REQUIRED: &str =
    "Please detail the plant or animal products you are bringing";
pub const CUSTOMS_DETAIL_REQUIRED: &str = "Please detail the goods you are declaring";
pub const MINORS_REQUIRED: &str =
    "Please enter the number of male or female minors, or 0 if there are none";
pub const COUNT_INVALID: &str = "Must be a whole number, 0 or greater";

/// Outcome of validating a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub ok: bool,
    #[serde(serialize_with = "serialize_errors")]
    pub field_errors: ValidationErrors,
}

impl ValidationReport {
    fn from_errors(field_errors: ValidationErrors) -> Self {
        Self {
            ok: field_errors.is_empty(),
            field_errors,
        }
    }

    /// Whether the attestation gate stopped validation
    pub fn is_blocked(&self) -> bool {
        self.field_errors.contains(field::ATTESTATION)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        self.field_errors.into_result()
    }
}

fn serialize_errors<S>(errors: &ValidationErrors, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(errors.iter())
}

/// Validate a declaration form
pub fn validate(form: &DeclarationForm) -> ValidationReport {
    let mut errors = ValidationErrors::new();

    if !form.attestation() {
        errors.add(field::ATTESTATION, ATTESTATION_REQUIRED);
        debug!("Declaration blocked: attestation not accepted");
        return ValidationReport::from_errors(errors);
    }

    if form.sag_products() && form.sag_detail().is_blank() {
        errors.add(field::SAG_DETAIL, SAG_DETAIL_REQUIRED);
    }

    if form.customs_goods() && form.customs_detail().is_blank() {
        errors.add(field::CUSTOMS_DETAIL, CUSTOMS_DETAIL_REQUIRED);
    }

    if form.includes_minors() {
        let male = form.male_minors();
        let female = form.female_minors();

        if !male.is_provided() && !female.is_provided() {
            errors.add(field::MALE_MINORS, MINORS_REQUIRED);
        } else {
            check_count(male, field::MALE_MINORS, &mut errors);
            check_count(female, field::FEMALE_MINORS, &mut errors);
        }
    }

    debug!(errors = errors.len(), "Validated declaration");
    ValidationReport::from_errors(errors)
}

fn check_count(counter: &CounterField, name: &'static str, errors: &mut ValidationErrors) {
    if counter.is_provided() && counter.count().is_none() {
        errors.add(name, COUNT_INVALID);
    }
}
