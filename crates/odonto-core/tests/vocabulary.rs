use odonto_core::models::chart::ChartState;
use odonto_core::models::surface::Surface;
use odonto_core::models::tooth::{Dentition, ToothNumber};
use odonto_core::models::treatment::Treatment;
use odonto_core::storage_keys;
use odonto_core::vocabulary::Vocabulary;

fn numbers(dentition: Dentition) -> Vec<u8> {
    dentition.teeth().into_iter().map(ToothNumber::get).collect()
}

#[test]
fn permanent_dentition_in_odontogram_order() {
    let expected: Vec<u8> = [
        18, 17, 16, 15, 14, 13, 12, 11, 21, 22, 23, 24, 25, 26, 27, 28, 48, 47, 46, 45, 44, 43,
        42, 41, 31, 32, 33, 34, 35, 36, 37, 38,
    ]
    .to_vec();
    assert_eq!(numbers(Dentition::Permanent), expected);
}

#[test]
fn primary_dentition_in_odontogram_order() {
    let expected: Vec<u8> = [
        55, 54, 53, 52, 51, 61, 62, 63, 64, 65, 85, 84, 83, 82, 81, 71, 72, 73, 74, 75,
    ]
    .to_vec();
    assert_eq!(numbers(Dentition::Primary), expected);
}

#[test]
fn tooth_number_rejects_non_fdi_values() {
    for n in [0, 10, 19, 29, 39, 49, 50, 56, 66, 90, 100, 255, -11] {
        assert!(ToothNumber::new(n).is_err(), "{n} should not be a tooth");
    }
}

#[test]
fn tooth_number_reports_quadrant_position_and_dentition() {
    let tooth = ToothNumber::new(36).unwrap();
    assert_eq!(tooth.quadrant(), 3);
    assert_eq!(tooth.position(), 6);
    assert_eq!(tooth.dentition(), Dentition::Permanent);

    let primary = ToothNumber::new(74).unwrap();
    assert_eq!(primary.dentition(), Dentition::Primary);
}

#[test]
fn tooth_number_deserialization_checks_fdi() {
    let tooth: ToothNumber = serde_json::from_str("15").unwrap();
    assert_eq!(tooth.get(), 15);
    assert_eq!(serde_json::to_string(&tooth).unwrap(), "15");

    for raw in ["99", "0", "-11", "300"] {
        assert!(serde_json::from_str::<ToothNumber>(raw).is_err(), "{raw} accepted");
    }
}

#[test]
fn stored_chart_with_non_fdi_tooth_is_rejected() {
    let bad_key = r#"{"teeth":{"99":{"number":99,"procedures":[]}}}"#;
    assert!(serde_json::from_str::<ChartState>(bad_key).is_err());

    let bad_number = r#"{"teeth":{"15":{"number":99,"procedures":[]}}}"#;
    assert!(serde_json::from_str::<ChartState>(bad_number).is_err());

    let good = r#"{"teeth":{"15":{"number":15,"procedures":[]}}}"#;
    let chart: ChartState = serde_json::from_str(good).unwrap();
    assert!(chart.tooth(ToothNumber::new(15).unwrap()).is_some());
}

#[test]
fn every_treatment_has_a_distinct_label() {
    let labels: std::collections::BTreeSet<&str> =
        Treatment::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels.len(), Treatment::ALL.len());
    assert_eq!(Treatment::Obturacion.label(), "Obturación");
    assert_eq!(Treatment::Fluor.label(), "Flúor");
}

#[test]
fn codes_round_trip_through_from_str() {
    for treatment in Treatment::ALL {
        assert_eq!(treatment.code().parse::<Treatment>().unwrap(), treatment);
    }
    for surface in Surface::ALL {
        assert_eq!(surface.code().parse::<Surface>().unwrap(), surface);
    }
    assert!("Obturación".parse::<Treatment>().is_err());
    assert!("palatino".parse::<Surface>().is_err());
}

#[test]
fn serde_uses_wire_codes() {
    let json = serde_json::to_string(&Treatment::Obturacion).unwrap();
    assert_eq!(json, "\"obturacion\"");
    let json = serde_json::to_string(&Dentition::Primary).unwrap();
    assert_eq!(json, "\"primary\"");
}

#[test]
fn from_wire_drops_entries_outside_the_closed_sets() {
    let vocabulary = Vocabulary::from_wire(
        &["limpieza".to_string(), "masaje".to_string()],
        &[11, 99, 55],
    );
    assert_eq!(vocabulary.treatment_codes(), vec!["limpieza".to_string()]);
    assert_eq!(vocabulary.tooth_numbers(), vec![11, 55]);
}

#[test]
fn dentition_vocabulary_offers_every_treatment() {
    let vocabulary = Vocabulary::for_dentition(Dentition::Primary);
    assert_eq!(vocabulary.treatment_codes().len(), 21);
    assert_eq!(vocabulary.tooth_numbers().len(), 20);
}

#[test]
fn chart_key_layout() {
    let id = uuid::Uuid::nil();
    assert_eq!(
        storage_keys::chart(id),
        "charts/00000000-0000-0000-0000-000000000000.json"
    );
}
