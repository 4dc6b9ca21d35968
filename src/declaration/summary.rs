//! Review summary
//!
//! The read-only record shown after a successful submit. Empty identity
//! fields become `#`, flags become `Sí`/`No`, gated details fall back to a
//! fixed text and missing minor counts to `0`.

use crate::declaration::form::{CounterField, DeclarationForm, DetailField};
use crate::declaration::id::DeclarationId;
use serde::Serialize;

pub const EMPTY_FIELD: &str = "#";
pub const DETAIL_NOT_GIVEN: &str = "No aplica / No especificado";

/// Review summary of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationSummary {
    pub form_id: DeclarationId,
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
    pub customs_goods: String,
    pub customs_detail: String,
    pub foreign_currency: String,
    pub sag_products: String,
    pub sag_detail: String,
    pub includes_minors: String,
    pub male_minors: String,
    pub female_minors: String,
}

impl DeclarationSummary {
    /// Compose the summary from validated form values
    pub fn compose(form: &DeclarationForm, form_id: &DeclarationId) -> Self {
        let id = &form.identity;

        Self {
            form_id: form_id.clone(),
            given_names: or_placeholder(&id.given_names),
            surnames: or_placeholder(&id.surnames),
            gender: or_placeholder(&id.gender),
            nationality: or_placeholder(&id.nationality),
            origin_country: or_placeholder(&id.origin_country),
            address_in_chile: or_placeholder(&id.address_in_chile),
            document_type: or_placeholder(&id.document_type),
            document_number: or_placeholder(&id.document_number),
            rut: or_placeholder(&id.rut),
            entry_point: or_placeholder(&id.entry_point),
            transport: or_placeholder(&id.transport),
            customs_goods: yes_no(form.customs_goods()),
            customs_detail: detail(form.customs_goods(), form.customs_detail()),
            foreign_currency: yes_no(form.foreign_currency()),
            sag_products: yes_no(form.sag_products()),
            sag_detail: detail(form.sag_products(), form.sag_detail()),
            includes_minors: yes_no(form.includes_minors()),
            male_minors: count(form.includes_minors(), form.male_minors()),
            female_minors: count(form.includes_minors(), form.female_minors()),
        }
    }

    /// Labelled rows, in form order
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("ID de Formulario", self.form_id.as_str()),
            ("Nombres", self.given_names.as_str()),
            ("Apellidos", self.surnames.as_str()),
            ("Género", self.gender.as_str()),
            ("Nacionalidad", self.nationality.as_str()),
            ("País de procedencia", self.origin_country.as_str()),
            ("Dirección en Chile", self.address_in_chile.as_str()),
            ("Tipo de documento", self.document_type.as_str()),
            ("Número de documento", self.document_number.as_str()),
            ("RUT", self.rut.as_str()),
            ("Lugar de ingreso", self.entry_point.as_str()),
            ("Medio de transporte", self.transport.as_str()),
            ("Mercancías afectas a declaración", self.customs_goods.as_str()),
            ("Detalle de mercancías", self.customs_detail.as_str()),
            ("Moneda extranjera", self.foreign_currency.as_str()),
            ("Productos SAG", self.sag_products.as_str()),
            ("Detalle SAG", self.sag_detail.as_str()),
            ("Incluye menores", self.includes_minors.as_str()),
            ("Hombres menores", self.male_minors.as_str()),
            ("Mujeres menores", self.female_minors.as_str()),
        ]
    }

    /// Plain-text rendering, one `label: value` row per line
    pub fn render(&self) -> String {
        self.rows()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}\n"))
            .collect()
    }
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        value.to_string()
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Sí" } else { "No" }.to_string()
}

fn detail(checked: bool, field: &DetailField) -> String {
    if checked && !field.is_blank() {
        field.value().to_string()
    } else {
        DETAIL_NOT_GIVEN.to_string()
    }
}

fn count(checked: bool, counter: &CounterField) -> String {
    if checked && counter.is_provided() {
        counter.value().trim().to_string()
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> DeclarationId {
        DeclarationId::parse("DEC-ADU-SAG-250101-ABC123").unwrap()
    }

    #[test]
    fn test_blank_form_uses_placeholders() {
        let summary = DeclarationSummary::compose(&DeclarationForm::new(), &id());
        assert_eq!(summary.given_names, EMPTY_FIELD);
        assert_eq!(summary.rut, EMPTY_FIELD);
        assert_eq!(summary.sag_products, "No");
        assert_eq!(summary.sag_detail, DETAIL_NOT_GIVEN);
        assert_eq!(summary.male_minors, "0");
        assert_eq!(summary.female_minors, "0");
    }

    #[test]
    fn test_checked_values_carried_over() {
        let mut form = DeclarationForm::new();
        form.identity.given_names = "Ana".to_string();
        form.set_foreign_currency(true);
        form.set_sag_products(true);
        form.sag_detail_mut().set_value("miel");
        form.set_includes_minors(true);
        form.male_minors_mut().set_value("0");

        let summary = DeclarationSummary::compose(&form, &id());
        assert_eq!(summary.given_names, "Ana");
        assert_eq!(summary.foreign_currency, "Sí");
        assert_eq!(summary.sag_products, "Sí");
        assert_eq!(summary.sag_detail, "miel");
        assert_eq!(summary.includes_minors, "Sí");
        assert_eq!(summary.male_minors, "0");
        assert_eq!(summary.female_minors, "0");
    }

    #[test]
    fn test_render_lists_every_row() {
        let summary = DeclarationSummary::compose(&DeclarationForm::new(), &id());
        let text = summary.render();
        assert!(text.starts_with("ID de Formulario: DEC-ADU-SAG-250101-ABC123\n"));
        assert_eq!(text.lines().count(), summary.rows().len());
    }
}
