mod common;

use rxcheck::core::interaction::{analyze_interactions, find_interactions};
use rxcheck::models::knowledge::Severity;

#[test]
fn known_pair_is_reported() {
    let kb = common::kb();
    let findings = find_interactions(&kb, &["warfarin", "aspirin"]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::High);
    assert_eq!(findings[0].description, "Increased bleeding risk");
    assert_eq!(findings[0].drugs_involved, ["warfarin".to_string(), "aspirin".to_string()]);
}

#[test]
fn pair_order_and_case_do_not_matter() {
    let kb = common::kb();
    let a = find_interactions(&kb, &["Warfarin", "ASPIRIN"]);
    let b = find_interactions(&kb, &["aspirin", "warfarin"]);
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(a[0].severity, b[0].severity);
    assert_eq!(a[0].description, b[0].description);
    // names are reported lower-cased, in input order
    assert_eq!(b[0].drugs_involved, ["aspirin".to_string(), "warfarin".to_string()]);
}

#[test]
fn unknown_pairs_produce_nothing() {
    let kb = common::kb();
    assert!(find_interactions(&kb, &["paracetamol", "ibuprofen"]).is_empty());
    assert!(find_interactions(&kb, &["aspirin"]).is_empty());
    assert!(find_interactions::<&str>(&kb, &[]).is_empty());
}

#[test]
fn findings_follow_pair_generation_order() {
    let kb = common::kb();
    let findings = find_interactions(&kb, &["alcohol", "aspirin", "metformin", "ibuprofen", "paracetamol"]);
    let pairs: Vec<_> = findings
        .iter()
        .map(|f| f.drugs_involved.clone())
        .collect();
    assert_eq!(
        pairs,
        vec![
            ["alcohol".to_string(), "metformin".to_string()],
            ["alcohol".to_string(), "paracetamol".to_string()],
            ["aspirin".to_string(), "ibuprofen".to_string()],
        ]
    );
}

#[test]
fn duplicate_names_are_not_collapsed() {
    let kb = common::kb();
    let findings = find_interactions(&kb, &["aspirin", "warfarin", "aspirin"]);
    // (0,1) and (1,2) both hit; (0,2) is aspirin with itself
    assert_eq!(findings.len(), 2);
}

#[test]
fn self_pairs_are_never_checked() {
    let mut kb = common::kb();
    kb.add_interaction("aspirin", "aspirin", Severity::Low, "self");
    assert!(find_interactions(&kb, &["aspirin"]).is_empty());
}

#[test]
fn finding_pair_looks_up_the_same_rule() {
    let kb = common::kb();
    let findings = find_interactions(&kb, &["metformin", "alcohol"]);
    let [a, b] = &findings[0].drugs_involved;
    let forward = find_interactions(&kb, &[a.as_str(), b.as_str()]);
    let backward = find_interactions(&kb, &[b.as_str(), a.as_str()]);
    assert_eq!(forward[0].description, findings[0].description);
    assert_eq!(backward[0].severity, findings[0].severity);
}

#[test]
fn profile_wrapper_uses_entry_names() {
    let kb = common::kb();
    let p = common::profile(
        30,
        vec![
            common::drug("Paracetamol", "500mg", "every 6 hours"),
            common::drug("Alcohol", "", ""),
        ],
    );
    let findings = analyze_interactions(&kb, &p);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].description, "Liver toxicity risk");
}
