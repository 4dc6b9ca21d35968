//! Declaration form state
//!
//! Holds the values of the joint SAG/customs declaration and keeps the
//! checkbox-gated fields consistent: unchecking a gate clears its dependent
//! fields and locks them, checking it unlocks them again.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Stable field names used in validation errors
pub mod field {
    pub const ATTESTATION: &str = "attestation";
    pub const CUSTOMS_DETAIL: &str = "customs_detail";
    pub const SAG_DETAIL: &str = "sag_detail";
    pub const MALE_MINORS: &str = "male_minors";
    pub const FEMALE_MINORS: &str = "female_minors";
}

/// Placeholder shown in a locked detail field
pub const NOT_APPLICABLE: &str = "No aplica";
pub const SAG_DETAIL_HINT: &str = "Ej: 2 manzanas, un poco de miel, queso.";
pub const CUSTOMS_DETAIL_HINT: &str = "Ej: 1 Tablet nueva, regalos por valor de US$400, etc.";
pub const MALE_MINORS_HINT: &str = "Número de hombres menores";
pub const FEMALE_MINORS_HINT: &str = "Número de mujeres menores";
/// Placeholder shown in a disabled counter
pub const COUNTER_PLACEHOLDER: &str = "#";

/// Free-text field gated by a checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    value: String,
    placeholder: &'static str,
    read_only: bool,
    hint: &'static str,
}

impl DetailField {
    /// A field whose gate starts unchecked
    fn gated(hint: &'static str) -> Self {
        Self {
            value: String::new(),
            placeholder: NOT_APPLICABLE,
            read_only: true,
            hint,
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.read_only = false;
            self.placeholder = self.hint;
        } else {
            self.value.clear();
            self.placeholder = NOT_APPLICABLE;
            self.read_only = true;
        }
    }

    /// Set the text. Ignored while read-only; returns whether it was applied.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if self.read_only {
            return false;
        }
        self.value = value.into();
        true
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Whether the text is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Numeric counter gated by the minors checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterField {
    value: String,
    placeholder: &'static str,
    enabled: bool,
    hint: &'static str,
}

impl CounterField {
    fn gated(hint: &'static str) -> Self {
        Self {
            value: String::new(),
            placeholder: COUNTER_PLACEHOLDER,
            enabled: false,
            hint,
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.placeholder = self.hint;
        } else {
            self.value.clear();
            self.placeholder = COUNTER_PLACEHOLDER;
        }
    }

    /// Set the raw input. Ignored while disabled; returns whether it was applied.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if !self.enabled {
            return false;
        }
        self.value = value.into();
        true
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether anything was entered. An explicit "0" counts.
    pub fn is_provided(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Parsed count, if a valid non-negative integer was entered
    pub fn count(&self) -> Option<u32> {
        self.value.trim().parse().ok()
    }
}

/// Traveller identity fields; all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub given_names: String,
    pub surnames: String,
    pub gender: String,
    pub nationality: String,
    pub origin_country: String,
    pub address_in_chile: String,
    pub document_type: String,
    pub document_number: String,
    pub rut: String,
    pub entry_point: String,
    pub transport: String,
}

/// Raw form input, as read from a file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeclarationInput {
    pub identity: Identity,
    pub attestation: bool,
    pub customs_goods: bool,
    pub customs_detail: String,
    pub foreign_currency: bool,
    pub sag_products: bool,
    pub sag_detail: String,
    pub includes_minors: bool,
    pub male_minors: String,
    pub female_minors: String,
}

/// Declaration form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationForm {
    pub identity: Identity,
    attestation: bool,
    customs_goods: bool,
    customs_detail: DetailField,
    foreign_currency: bool,
    sag_products: bool,
    sag_detail: DetailField,
    includes_minors: bool,
    male_minors: CounterField,
    female_minors: CounterField,
}

impl Default for DeclarationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationForm {
    /// A blank form with every gate unchecked
    pub fn new() -> Self {
        Self {
            identity: Identity::default(),
            attestation: false,
            customs_goods: false,
            customs_detail: DetailField::gated(CUSTOMS_DETAIL_HINT),
            foreign_currency: false,
            sag_products: false,
            sag_detail: DetailField::gated(SAG_DETAIL_HINT),
            includes_minors: false,
            male_minors: CounterField::gated(MALE_MINORS_HINT),
            female_minors: CounterField::gated(FEMALE_MINORS_HINT),
        }
    }

    /// Fill a blank form the way a user would: gates first, then the
    /// fields they unlock. Values for locked fields are dropped.
    pub fn from_input(input: &DeclarationInput) -> Self {
        let mut form = Self::new();
        form.identity = input.identity.clone();
        form.set_attestation(input.attestation);
        form.set_foreign_currency(input.foreign_currency);

        form.set_customs_goods(input.customs_goods);
        form.customs_detail.set_value(input.customs_detail.as_str());

        form.set_sag_products(input.sag_products);
        form.sag_detail.set_value(input.sag_detail.as_str());

        form.set_includes_minors(input.includes_minors);
        form.male_minors.set_value(input.male_minors.as_str());
        form.female_minors.set_value(input.female_minors.as_str());

        form
    }

    pub fn set_attestation(&mut self, checked: bool) {
        self.attestation = checked;
    }

    pub fn set_foreign_currency(&mut self, checked: bool) {
        self.foreign_currency = checked;
    }

    pub fn set_customs_goods(&mut self, checked: bool) {
        trace!(checked, "Toggled customs goods");
        self.customs_goods = checked;
        self.customs_detail.set_enabled(checked);
    }

    pub fn set_sag_products(&mut self, checked: bool) {
        trace!(checked, "Toggled SAG products");
        self.sag_products = checked;
        self.sag_detail.set_enabled(checked);
    }

    pub fn set_includes_minors(&mut self, checked: bool) {
        trace!(checked, "Toggled minors");
        self.includes_minors = checked;
        self.male_minors.set_enabled(checked);
        self.female_minors.set_enabled(checked);
    }

    pub fn attestation(&self) -> bool {
        self.attestation
    }

    pub fn foreign_currency(&self) -> bool {
        self.foreign_currency
    }

    pub fn customs_goods(&self) -> bool {
        self.customs_goods
    }

    pub fn sag_products(&self) -> bool {
        self.sag_products
    }

    pub fn includes_minors(&self) -> bool {
        self.includes_minors
    }

    pub fn customs_detail(&self) -> &DetailField {
        &self.customs_detail
    }

    pub fn customs_detail_mut(&mut self) -> &mut DetailField {
        &mut self.customs_detail
    }

    pub fn sag_detail(&self) -> &DetailField {
        &self.sag_detail
    }

    pub fn sag_detail_mut(&mut self) -> &mut DetailField {
        &mut self.sag_detail
    }

    pub fn male_minors(&self) -> &CounterField {
        &self.male_minors
    }

    pub fn male_minors_mut(&mut self) -> &mut CounterField {
        &mut self.male_minors
    }

    pub fn female_minors(&self) -> &CounterField {
        &self.female_minors
    }

    pub fn female_minors_mut(&mut self) -> &mut CounterField {
        &mut self.female_minors
    }
}
