use super::*;
use crate::test_fixtures::{caravan, freight};

#[test]
fn test_passenger_weight_resolves_once() {
    let standard: PassengerData = serde_json::from_str(
        r#"{"id": "p1", "destination": "Kiana", "baggageWeightKg": 12.0}"#,
    )
    .unwrap();
    let null_weight: PassengerData =
        serde_json::from_str(r#"{"id": "p2", "destination": "Kiana", "weightKg": null}"#).unwrap();
    let weighed: PassengerData = serde_json::from_str(
        r#"{"id": "p3", "destination": "Kiana", "weightKg": 71.5, "priority": "MEDICAL"}"#,
    )
    .unwrap();

    assert_eq!(standard.weight, PassengerWeight::Standard);
    assert_eq!(null_weight.weight, PassengerWeight::Standard);
    assert_eq!(weighed.weight, PassengerWeight::Actual(71.5));
    assert_eq!(standard.effective_weight(88.0), 88.0);
    assert_eq!(weighed.effective_weight(88.0), 71.5);
    assert_eq!(weighed.priority, PassengerPriority::Medical);
    assert_eq!(standard.priority, PassengerPriority::Normal);

    let round = serde_json::to_value(&weighed).unwrap();
    assert_eq!(round["weightKg"], serde_json::json!(71.5));
}

#[test]
fn test_priority_ordering() {
    let mut pax = vec![
        PassengerPriority::Normal,
        PassengerPriority::FirstClass,
        PassengerPriority::Evac,
        PassengerPriority::Medical,
    ];
    pax.sort();
    assert_eq!(pax, vec![
        PassengerPriority::Evac,
        PassengerPriority::Medical,
        PassengerPriority::FirstClass,
        PassengerPriority::Normal
    ]);
    assert!(CargoPriority::Bypass < CargoPriority::Priority);
    assert!(CargoPriority::Priority < CargoPriority::Standard);
    assert_eq!(PassengerPriority::FirstClass.to_string(), "FIRST_CLASS");
    assert_eq!(DiagnosticCode::CgOutOfEnvelope.to_string(), "CG_OUT_OF_ENVELOPE");
}

#[test]
fn test_destination_matching_ignores_case() {
    assert!(destinations_match("Kotzebue", "KOTZEBUE"));
    assert!(destinations_match(" noatak", "Noatak "));
    assert!(!destinations_match("Noatak", "Noorvik"));
}

#[test]
fn test_mail_deserializes_village_and_converts_pounds() {
    let mail: MailData = serde_json::from_str(
        r#"{"id": "m1", "weightKg": 10.0, "village": "Selawik", "priority": "BYPASS"}"#,
    )
    .unwrap();
    assert_eq!(mail.destination(), "Selawik");
    assert_eq!(mail.category(), ItemCategory::Mail);
    assert!((mail.weight_lbs() - 22.0462).abs() < 1e-9);
}

#[test]
fn test_aircraft_validation() {
    let ok = caravan();
    assert_eq!(ok.validate(), Ok(()));

    let mut no_bins = caravan();
    no_bins.compartments.clear();
    assert_eq!(no_bins.validate(), Err(AircraftConfigError::NoCompartments));

    let mut inverted = caravan();
    inverted.cg_min = inverted.cg_max + 0.1;
    assert_eq!(inverted.validate(), Err(AircraftConfigError::InvalidCgEnvelope));

    let mut miscounted = caravan();
    miscounted.seat_count += 1;
    assert_eq!(miscounted.validate(), Err(AircraftConfigError::SeatCountMismatch));

    let mut no_mtow = caravan();
    no_mtow.mtow_kg = 0.0;
    assert_eq!(no_mtow.validate(), Err(AircraftConfigError::NonPositiveMtow));
}

#[test]
fn test_cargo_item_view() {
    let f = freight("f1", 42.0, "Ambler");
    assert_eq!(f.weight_kg(), 42.0);
    assert_eq!(f.priority(), CargoPriority::Standard);
    assert_eq!(f.compartment(), None);
    assert_eq!(f.category(), ItemCategory::Freight);

    let item = WeightItem::new("f1", ItemCategory::Freight, 42.0, 2.5).in_compartment("aft");
    assert!((item.moment - 105.0).abs() < 1e-9);
    assert_eq!(item.compartment.as_deref(), Some("aft"));
}
