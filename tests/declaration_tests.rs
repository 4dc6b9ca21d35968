//! Declaration form integration tests
//!
//! Covers conditional field toggling, submit-time validation, the review
//! summary and identifier generation.

use kuhub::declaration::form::{
    COUNTER_PLACEHOLDER, MALE_MINORS_HINT, NOT_APPLICABLE, SAG_DETAIL_HINT,
};
use kuhub::declaration::validate::{
    ATTESTATION_REQUIRED, COUNT_INVALID, CUSTOMS_DETAIL_REQUIRED, MINORS_REQUIRED,
    SAG_DETAIL_REQUIRED,
};
use kuhub::declaration::{
    DeclarationForm, DeclarationId, DeclarationInput, DeclarationSession, FormState, field,
    validate,
};
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Test Helpers
// =============================================================================

fn attested() -> DeclarationForm {
    let mut form = DeclarationForm::new();
    form.set_attestation(true);
    form
}

fn with_minors(male: &str, female: &str) -> DeclarationForm {
    let mut form = attested();
    form.set_includes_minors(true);
    form.male_minors_mut().set_value(male);
    form.female_minors_mut().set_value(female);
    form
}

// =============================================================================
// 1. Field toggling
// =============================================================================

mod toggling {
    use super::*;

    #[test]
    fn test_gated_fields_start_locked() {
        let form = DeclarationForm::new();
        assert!(form.sag_detail().is_read_only());
        assert!(form.customs_detail().is_read_only());
        assert_eq!(form.sag_detail().placeholder(), NOT_APPLICABLE);
        assert!(!form.male_minors().is_enabled());
        assert_eq!(form.male_minors().placeholder(), COUNTER_PLACEHOLDER);
    }

    #[test]
    fn test_uncheck_clears_and_recheck_restores_placeholder() {
        let mut form = DeclarationForm::new();

        for _ in 0..3 {
            form.set_sag_products(true);
            assert!(!form.sag_detail().is_read_only());
            assert_eq!(form.sag_detail().placeholder(), SAG_DETAIL_HINT);
            assert!(form.sag_detail_mut().set_value("queso de cabra"));

            form.set_sag_products(false);
            assert!(form.sag_detail().is_read_only());
            assert_eq!(form.sag_detail().value(), "");
            assert_eq!(form.sag_detail().placeholder(), NOT_APPLICABLE);
        }
    }

    #[test]
    fn test_locked_detail_ignores_input() {
        let mut form = DeclarationForm::new();
        assert!(!form.customs_detail_mut().set_value("tablet"));
        assert_eq!(form.customs_detail().value(), "");
    }

    #[test]
    fn test_minors_toggle_clears_both_counters() {
        let mut form = with_minors("2", "1");
        assert_eq!(form.male_minors().placeholder(), MALE_MINORS_HINT);

        form.set_includes_minors(false);
        assert_eq!(form.male_minors().value(), "");
        assert_eq!(form.female_minors().value(), "");
        assert!(!form.female_minors().is_enabled());
        assert_eq!(form.female_minors().placeholder(), COUNTER_PLACEHOLDER);
    }

    #[test]
    fn test_from_input_drops_values_behind_unchecked_gates() {
        let input = DeclarationInput {
            attestation: true,
            customs_goods: false,
            customs_detail: "perfume".to_string(),
            sag_products: true,
            sag_detail: "miel".to_string(),
            ..Default::default()
        };

        let form = DeclarationForm::from_input(&input);
        assert_eq!(form.customs_detail().value(), "");
        assert_eq!(form.sag_detail().value(), "miel");
    }
}

// =============================================================================
// 2. Validation
// =============================================================================

mod validation {
    use super::*;

    #[test]
    fn test_attestation_gate_stops_everything() {
        let mut form = DeclarationForm::new();
        form.set_sag_products(true);
        form.set_includes_minors(true);

        let report = validate(&form);
        assert!(!report.ok);
        assert!(report.is_blocked());
        assert_eq!(report.field_errors.len(), 1);
        assert_eq!(
            report.field_errors.get(field::ATTESTATION),
            Some(ATTESTATION_REQUIRED)
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_customs_detail_errors_only_on_that_field(#[case] detail: &str) {
        let mut form = attested();
        form.set_customs_goods(true);
        form.customs_detail_mut().set_value(detail);

        let report = validate(&form);
        assert!(!report.ok);
        assert_eq!(report.field_errors.len(), 1);
        assert_eq!(
            report.field_errors.get(field::CUSTOMS_DETAIL),
            Some(CUSTOMS_DETAIL_REQUIRED)
        );
    }

    #[test]
    fn test_blank_sag_detail_errors_only_on_that_field() {
        let mut form = attested();
        form.set_sag_products(true);
        form.sag_detail_mut().set_value("  ");

        let report = validate(&form);
        assert_eq!(report.field_errors.len(), 1);
        assert_eq!(
            report.field_errors.get(field::SAG_DETAIL),
            Some(SAG_DETAIL_REQUIRED)
        );
    }

    #[test]
    fn test_all_violations_reported_together() {
        let mut form = attested();
        form.set_sag_products(true);
        form.set_customs_goods(true);
        form.set_includes_minors(true);

        let report = validate(&form);
        assert_eq!(report.field_errors.len(), 3);
        assert!(report.field_errors.contains(field::SAG_DETAIL));
        assert!(report.field_errors.contains(field::CUSTOMS_DETAIL));
        assert_eq!(
            report.field_errors.get(field::MALE_MINORS),
            Some(MINORS_REQUIRED)
        );
    }

    #[rstest]
    #[case("0", "")]
    #[case("", "0")]
    #[case("2", "1")]
    #[case(" 3 ", "")]
    fn test_minors_with_one_count_pass(#[case] male: &str, #[case] female: &str) {
        assert!(validate(&with_minors(male, female)).ok);
    }

    #[rstest]
    #[case("-1", "", field::MALE_MINORS)]
    #[case("", "dos", field::FEMALE_MINORS)]
    #[case("1.5", "0", field::MALE_MINORS)]
    fn test_invalid_counts_rejected(
        #[case] male: &str,
        #[case] female: &str,
        #[case] field_name: &str,
    ) {
        let report = validate(&with_minors(male, female));
        assert_eq!(report.field_errors.get(field_name), Some(COUNT_INVALID));
    }

    #[test]
    fn test_unchecked_gates_are_not_validated() {
        let form = attested();
        assert!(validate(&form).ok);
    }

    #[test]
    fn test_report_serializes_field_map() {
        let mut form = attested();
        form.set_sag_products(true);

        let json = serde_json::to_value(validate(&form)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["field_errors"]["sag_detail"], SAG_DETAIL_REQUIRED);
    }
}

// =============================================================================
// 3. Submit and review
// =============================================================================

mod review {
    use super::*;

    #[test]
    fn test_unattested_submit_never_reviews() {
        let mut session = DeclarationSession::new();
        for _ in 0..2 {
            assert!(session.submit().is_err());
            assert_eq!(session.state(), FormState::Editing);
        }
    }

    #[test]
    fn test_minors_summary_defaults_missing_count_to_zero() {
        let id = DeclarationId::generate();
        let mut session = DeclarationSession::with_form(id, with_minors("0", ""));

        let summary = session.submit().unwrap();
        assert_eq!(summary.includes_minors, "Sí");
        assert_eq!(summary.male_minors, "0");
        assert_eq!(summary.female_minors, "0");
    }

    #[test]
    fn test_full_summary() {
        let mut form = attested();
        form.identity.given_names = "María José".to_string();
        form.identity.surnames = "Pérez Soto".to_string();
        form.identity.rut = "12.345.678-5".to_string();
        form.set_customs_goods(true);
        form.customs_detail_mut().set_value("1 notebook");
        form.set_foreign_currency(true);

        let id = DeclarationId::parse("DEC-ADU-SAG-261018-QWERTY").unwrap();
        let mut session = DeclarationSession::with_form(id, form);
        let summary = session.submit().unwrap().clone();

        assert_eq!(summary.form_id.as_str(), "DEC-ADU-SAG-261018-QWERTY");
        assert_eq!(summary.given_names, "María José");
        assert_eq!(summary.nationality, "#");
        assert_eq!(summary.customs_goods, "Sí");
        assert_eq!(summary.customs_detail, "1 notebook");
        assert_eq!(summary.foreign_currency, "Sí");
        assert_eq!(summary.sag_products, "No");
        assert_eq!(summary.sag_detail, "No aplica / No especificado");

        let doc = session.export().unwrap();
        assert_eq!(
            doc.file_name(),
            "Declaracion_Conjunta_SAG_Aduanas_DEC-ADU-SAG-261018-QWERTY.txt"
        );
        assert!(doc.content().contains("Nombres: María José"));
    }

    #[test]
    fn test_close_returns_to_editing_with_values_kept() {
        let mut form = attested();
        form.identity.nationality = "Chilena".to_string();
        let mut session = DeclarationSession::with_form(DeclarationId::generate(), form);

        session.submit().unwrap();
        session.close();

        assert!(!session.is_reviewing());
        assert_eq!(session.form().identity.nationality, "Chilena");
        assert!(session.export().is_none());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = DeclarationSession::with_form(DeclarationId::generate(), attested());
        session.submit().unwrap();

        let path = session.export().unwrap().write_to(dir.path()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(session.id().as_str()));
    }
}

// =============================================================================
// 4. Identifiers
// =============================================================================

mod identifiers {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_ids_are_well_formed_and_distinct() {
        let ids: Vec<DeclarationId> = (0..50).map(|_| DeclarationId::generate()).collect();

        for id in &ids {
            assert!(DeclarationId::is_well_formed(id.as_str()), "{id}");
        }

        let unique: HashSet<&DeclarationId> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_date_component() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let id = DeclarationId::generate_for(date, &mut rng);
        assert!(id.as_str().starts_with("DEC-ADU-SAG-250309-"));
        assert!(DeclarationId::is_well_formed(id.as_str()));
    }

    #[rstest]
    #[case("DEC-ADU-SAG-250309-abc123")]
    #[case("DEC-ADU-SAG-2503-ABC123")]
    #[case("DEC-SAG-250309-ABC123")]
    #[case("DEC-ADU-SAG-250309-ABC1234")]
    fn test_malformed_ids_rejected(#[case] raw: &str) {
        assert!(DeclarationId::parse(raw).is_none());
    }
}
