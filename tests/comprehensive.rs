mod common;

use rxcheck::core::analyze::comprehensive_analysis;
use rxcheck::models::analysis::ESCALATION;
use rxcheck::models::drug::DrugEntry;
use rxcheck::models::knowledge::KnowledgeBase;

#[test]
fn report_combines_every_check() {
    let kb = common::kb();
    let p = common::profile(
        35,
        vec![
            common::drug("paracetamol", "1500mg", "every 4 hours"),
            common::drug("ibuprofen", "800mg", "every 6 hours"),
            DrugEntry::new("alcohol"),
        ],
    );
    let report = comprehensive_analysis(&kb, &p);

    assert_eq!(report.patient_age, 35);
    assert_eq!(report.analyzed_drugs, 3);

    assert_eq!(report.overdose_warnings.len(), 2);
    assert_eq!(report.overdose_warnings[0].drug, "paracetamol");
    assert_eq!(report.overdose_warnings[0].estimated_daily, 9000.0);
    assert_eq!(report.overdose_warnings[1].drug, "ibuprofen");
    assert_eq!(report.overdose_warnings[1].max_safe, 1200.0);

    assert_eq!(report.interactions.len(), 1);
    assert_eq!(report.interactions[0].description, "Liver toxicity risk");

    assert_eq!(report.dosage_recommendations.len(), 2);
    assert!(report.dosage_recommendations[0]
        .warnings
        .contains(&ESCALATION.to_string()));

    assert_eq!(report.alternative_medications.len(), 2);
    assert!(report.alternative_medications.iter().all(|a| a.flags_overdose()));
}

#[test]
fn empty_profile_keeps_every_field() {
    let kb = common::kb();
    let report = comprehensive_analysis(&kb, &common::profile(20, vec![]));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["patient_age"], 20);
    assert_eq!(json["analyzed_drugs"], 0);
    for key in [
        "overdose_warnings",
        "interactions",
        "dosage_recommendations",
        "alternative_medications",
    ] {
        assert!(json[key].as_array().unwrap().is_empty(), "{key}");
    }
    assert!(json["analysis_timestamp"].is_string());
}

#[test]
fn report_json_field_shapes() {
    let kb = common::kb();
    let p = common::profile(70, vec![common::drug("aspirin", "400mg", ""), DrugEntry::new("warfarin")]);
    let json = serde_json::to_value(comprehensive_analysis(&kb, &p)).unwrap();

    assert_eq!(json["interactions"][0]["severity"], "HIGH");
    assert_eq!(json["interactions"][0]["drugs_involved"][0], "aspirin");
    assert_eq!(json["dosage_recommendations"][0]["age_group"], "65+");
    assert_eq!(
        json["overdose_warnings"][0]["warning"],
        "OVERDOSE: 400.0mg/day exceeds 325mg/day"
    );
    assert_eq!(
        json["alternative_medications"][0]["reason"],
        "OVERDOSE DETECTED - Safer for pain relief"
    );
}

#[test]
fn shared_knowledge_base_across_threads() {
    let kb = &KnowledgeBase::builtin();
    let profiles: Vec<_> = (0..4)
        .map(|i| {
            common::profile(
                30 + i,
                vec![common::drug("paracetamol", "1500mg", "every 4 hours")],
            )
        })
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = profiles
            .iter()
            .map(|p| s.spawn(move || comprehensive_analysis(kb, p)))
            .collect();
        for h in handles {
            let report = h.join().unwrap();
            assert_eq!(report.overdose_warnings.len(), 1);
        }
    });
}
