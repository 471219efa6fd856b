mod common;

use rxcheck::core::alternative::suggest_alternatives;
use rxcheck::models::analysis::{CONSULT_PHYSICIAN, OVERDOSE_DETECTED_PREFIX};
use rxcheck::models::drug::DrugEntry;

#[test]
fn overdosed_source_prefixes_reason() {
    let kb = common::kb();
    let p = common::profile(35, vec![common::drug("paracetamol", "1500mg", "every 4 hours")]);
    let alts = suggest_alternatives(&kb, &p);
    assert_eq!(alts.len(), 1);
    assert_eq!(alts[0].name, "ibuprofen");
    assert_eq!(alts[0].reason, "OVERDOSE DETECTED - Anti-inflammatory effect");
    assert!(alts[0].flags_overdose());
    assert_eq!(alts[0].dosage, "200-400mg every 6-8 hours");
}

#[test]
fn safe_source_keeps_plain_reason() {
    let kb = common::kb();
    let p = common::profile(35, vec![common::drug("paracetamol", "500mg", "every 6 hours")]);
    let alts = suggest_alternatives(&kb, &p);
    assert_eq!(alts[0].reason, "Anti-inflammatory effect");
    assert!(!alts[0].reason.starts_with(OVERDOSE_DETECTED_PREFIX));
}

#[test]
fn dosage_uses_alternative_rule_for_patient_band() {
    let kb = common::kb();
    let p = common::profile(8, vec![DrugEntry::new("Aspirin")]);
    let alts = suggest_alternatives(&kb, &p);
    assert_eq!(alts[0].name, "paracetamol");
    assert_eq!(alts[0].dosage, "10-15mg/kg every 4-6 hours");
}

#[test]
fn untabulated_alternative_falls_back_to_physician() {
    let mut kb = common::kb();
    kb.add_alternative("warfarin", "apixaban", "Fewer dietary interactions");
    let p = common::profile(50, vec![DrugEntry::new("warfarin")]);
    let alts = suggest_alternatives(&kb, &p);
    assert_eq!(alts.len(), 1);
    assert_eq!(alts[0].dosage, CONSULT_PHYSICIAN);
}

#[test]
fn drugs_without_alternatives_contribute_nothing() {
    let kb = common::kb();
    let p = common::profile(50, vec![DrugEntry::new("metformin"), DrugEntry::new("alcohol")]);
    assert!(suggest_alternatives(&kb, &p).is_empty());
}

#[test]
fn alternatives_keep_registration_then_input_order() {
    let mut kb = common::kb();
    kb.add_alternative("ibuprofen", "naproxen", "Longer acting");
    let p = common::profile(
        30,
        vec![DrugEntry::new("ibuprofen"), DrugEntry::new("aspirin")],
    );
    let names: Vec<_> = suggest_alternatives(&kb, &p)
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["paracetamol", "naproxen", "paracetamol"]);
}
