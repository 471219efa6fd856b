mod common;

use rxcheck::core::recommend::recommend_dosages;
use rxcheck::models::analysis::{ELDERLY_CAUTION, ESCALATION, PEDIATRIC_CAUTION};
use rxcheck::models::drug::DrugEntry;
use rxcheck::models::knowledge::AgeBand;

#[test]
fn adult_without_overdose_has_no_warnings() {
    let kb = common::kb();
    let p = common::profile(40, vec![common::drug("paracetamol", "500mg", "every 6 hours")]);
    let recs = recommend_dosages(&kb, &p);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].drug_name, "paracetamol");
    assert_eq!(recs[0].age_group, AgeBand::Adult);
    assert_eq!(recs[0].recommended_dosage, "500-1000mg every 4-6 hours");
    assert!(recs[0].warnings.is_empty());
}

#[test]
fn elderly_patient_gets_monitoring_caution() {
    let kb = common::kb();
    let p = common::profile(70, vec![DrugEntry::new("Ibuprofen")]);
    let recs = recommend_dosages(&kb, &p);
    assert_eq!(recs[0].age_group, AgeBand::Elderly);
    assert_eq!(recs[0].recommended_dosage, "200mg every 8 hours");
    assert_eq!(recs[0].warnings, vec![ELDERLY_CAUTION.to_string()]);
}

#[test]
fn age_65_is_adult_band_with_elderly_caution() {
    let kb = common::kb();
    let p = common::profile(65, vec![DrugEntry::new("aspirin")]);
    let recs = recommend_dosages(&kb, &p);
    assert_eq!(recs[0].age_group, AgeBand::Adult);
    assert_eq!(recs[0].recommended_dosage, "75-325mg daily");
    assert_eq!(recs[0].warnings, vec![ELDERLY_CAUTION.to_string()]);
}

#[test]
fn child_gets_pediatric_caution() {
    let kb = common::kb();
    let p = common::profile(10, vec![DrugEntry::new("aspirin")]);
    let recs = recommend_dosages(&kb, &p);
    assert_eq!(recs[0].age_group, AgeBand::Pediatric);
    assert_eq!(recs[0].recommended_dosage, "Not recommended");
    assert_eq!(recs[0].warnings, vec![PEDIATRIC_CAUTION.to_string()]);
}

#[test]
fn overdose_warnings_come_first() {
    let kb = common::kb();
    let p = common::profile(80, vec![common::drug("paracetamol", "1500mg", "every 4 hours")]);
    let recs = recommend_dosages(&kb, &p);
    assert_eq!(
        recs[0].warnings,
        vec![
            "OVERDOSE: 9000.0mg/day exceeds 4000mg/day".to_string(),
            ESCALATION.to_string(),
            ELDERLY_CAUTION.to_string(),
        ]
    );
}

#[test]
fn untabulated_drugs_are_skipped() {
    let kb = common::kb();
    let p = common::profile(
        30,
        vec![
            DrugEntry::new("warfarin"),
            DrugEntry::new("Aspirin"),
            DrugEntry::new("metformin"),
        ],
    );
    let recs = recommend_dosages(&kb, &p);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].drug_name, "aspirin");
}

#[test]
fn recommendations_keep_input_order() {
    let kb = common::kb();
    let p = common::profile(
        30,
        vec![
            DrugEntry::new("ibuprofen"),
            DrugEntry::new("aspirin"),
            DrugEntry::new("paracetamol"),
        ],
    );
    let names: Vec<_> = recommend_dosages(&kb, &p)
        .into_iter()
        .map(|r| r.drug_name)
        .collect();
    assert_eq!(names, vec!["ibuprofen", "aspirin", "paracetamol"]);
}
