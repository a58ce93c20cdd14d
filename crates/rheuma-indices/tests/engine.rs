use rheuma_indices::classify::Severity;
use rheuma_indices::{FailureReason, IndexId, Mode, RawInputs, ScoringEngine, ValidationError};

fn engine() -> ScoringEngine {
    ScoringEngine::new()
}

#[test]
fn das28_esr_fixture_falls_in_remission() {
    let inputs = RawInputs::new()
        .with("tjc", 0)
        .with("sjc", 0)
        .with("esr", 20)
        .with("gh", 0);

    let result = engine().compute("das28", Some("ESR"), &inputs).unwrap();
    assert_eq!(result.index_id, IndexId::Das28);
    assert_eq!(result.mode, Some(Mode::Esr));
    assert_eq!(result.score, 2.1);
    assert_eq!(result.label, "Remisyon");
    assert_eq!(result.tier, 0);
    assert_eq!(result.severity, Severity::Remission);
}

#[test]
fn das28_esr_rejects_zero_esr() {
    let inputs = RawInputs::new()
        .with("tjc", 0)
        .with("sjc", 0)
        .with("gh", 0)
        .with("esr", 0);

    let err = engine().compute("das28", Some("ESR"), &inputs).unwrap_err();
    assert_eq!(err, ValidationError::out_of_domain("esr"));

    let inputs = inputs.with("esr", 1);
    let result = engine().compute("das28", Some("ESR"), &inputs).unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.tier, 0);
}

#[test]
fn das28_esr_high_activity() {
    let inputs = RawInputs::new()
        .with("tjc", 16)
        .with("sjc", 9)
        .with("esr", 50)
        .with("gh", 80);

    let result = engine().compute("das28", Some("esr"), &inputs).unwrap();
    assert_eq!(result.score, 6.94);
    assert_eq!(result.severity, Severity::High);
    assert_eq!(result.tier, 3);
}

#[test]
fn das28_crp_accepts_zero_crp_and_scores_moderate() {
    let inputs = RawInputs::new()
        .with("tjc", 4)
        .with("sjc", 1)
        .with("crp", 10)
        .with("gh", 50);

    let result = engine().compute("das28", Some("CRP"), &inputs).unwrap();
    assert_eq!(result.mode, Some(Mode::Crp));
    assert_eq!(result.score, 3.92);
    assert_eq!(result.severity, Severity::Moderate);

    let zero = RawInputs::new()
        .with("tjc", 0)
        .with("sjc", 0)
        .with("crp", 0)
        .with("gh", 0);
    let result = engine().compute("das28", Some("CRP"), &zero).unwrap();
    assert_eq!(result.score, 0.96);
    assert_eq!(result.severity, Severity::Remission);
}

#[test]
fn asdas_crp_high_activity() {
    let inputs = RawInputs::new()
        .with("back_pain", 5)
        .with("morning_stiffness", 5)
        .with("patient_global", 5)
        .with("peripheral_pain", 5)
        .with("crp", 9);

    let result = engine().compute("asdas_crp", None, &inputs).unwrap();
    assert_eq!(result.score, 3.14);
    assert_eq!(result.label, "Yüksek hastalık aktivitesi");
    assert_eq!(result.tier, 2);
}

#[test]
fn basdai_fixture_is_high() {
    let inputs: RawInputs = [
        "fatigue",
        "spinal_pain",
        "joint_pain",
        "enthesitis",
        "stiffness_severity",
        "stiffness_duration",
    ]
    .into_iter()
    .map(|id| (id, 5))
    .collect();

    let result = engine().compute("basdai", None, &inputs).unwrap();
    assert_eq!(result.score, 5.0);
    assert_eq!(result.severity, Severity::High);
    assert_eq!(result.tier, 1);
}

#[test]
fn basdai_averages_stiffness_items() {
    let inputs = RawInputs::new()
        .with("fatigue", 0)
        .with("spinal_pain", 0)
        .with("joint_pain", 0)
        .with("enthesitis", 0)
        .with("stiffness_severity", 10)
        .with("stiffness_duration", 0);

    let result = engine().compute("basdai", None, &inputs).unwrap();
    assert_eq!(result.score, 1.0);
    assert_eq!(result.severity, Severity::Low);
}

#[test]
fn basfi_threshold_of_seven_is_high() {
    let definition = rheuma_indices::get_index(IndexId::Basfi, None).unwrap();
    let inputs: RawInputs = definition
        .fields
        .iter()
        .map(|f| (f.id.clone(), 7))
        .collect();

    let result = engine().compute("basfi", None, &inputs).unwrap();
    assert_eq!(result.score, 7.0);
    assert_eq!(result.severity, Severity::High);
}

#[test]
fn cdai_fixture_is_moderate() {
    let inputs = RawInputs::new()
        .with("tjc", 5)
        .with("sjc", 3)
        .with("patient_global", 4)
        .with("evaluator_global", 3);

    let result = engine().compute("cdai", None, &inputs).unwrap();
    assert_eq!(result.score, 15.0);
    assert_eq!(result.label, "Orta hastalık aktivitesi");
    assert_eq!(result.tier, 2);
}

#[test]
fn sdai_inclusive_remission_bound() {
    let inputs = RawInputs::new()
        .with("tjc", 1)
        .with("sjc", 1)
        .with("patient_global", 0.5)
        .with("evaluator_global", 0.5)
        .with("crp", 0.3);

    let result = engine().compute("sdai", None, &inputs).unwrap();
    assert_eq!(result.score, 3.3);
    assert_eq!(result.severity, Severity::Remission);
}

#[test]
fn dapsa_uses_extended_joint_counts() {
    let inputs = RawInputs::new()
        .with("tjc", 68)
        .with("sjc", 66)
        .with("patient_global", 0)
        .with("patient_pain", 0)
        .with("crp", 0);
    assert!(engine().compute("dapsa", None, &inputs).is_ok());

    let inputs = RawInputs::new()
        .with("tjc", 10)
        .with("sjc", 5)
        .with("patient_global", 6)
        .with("patient_pain", 7)
        .with("crp", 2.5);
    let result = engine().compute("dapsa", None, &inputs).unwrap();
    assert_eq!(result.score, 30.5);
    assert_eq!(result.severity, Severity::High);
}

#[test]
fn essdai_fixture_is_moderate() {
    let inputs = RawInputs::new().with("pulmonary", 2).with("articular", 1);

    let result = engine().compute("essdai", None, &inputs).unwrap();
    assert_eq!(result.score, 12.0);
    assert_eq!(result.severity, Severity::Moderate);
    assert_eq!(result.tier, 1);
}

#[test]
fn sledai_fixture_is_moderate() {
    let inputs = RawInputs::new().with("seizure", true).with("fever", "yes");

    let result = engine().compute("sledai", None, &inputs).unwrap();
    assert_eq!(result.score, 9.0);
    assert_eq!(result.label, "Orta aktivite");
    assert_eq!(result.tier, 2);
}

#[test]
fn sledai_empty_checklist_scores_zero() {
    let result = engine().compute("sledai", None, &RawInputs::new()).unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.severity, Severity::None);
}

#[test]
fn sledai_every_finding_is_very_high() {
    let definition = rheuma_indices::get_index(IndexId::Sledai, None).unwrap();
    let inputs: RawInputs = definition
        .fields
        .iter()
        .map(|f| (f.id.clone(), true))
        .collect();

    let result = engine().compute("sledai", None, &inputs).unwrap();
    assert_eq!(result.score, 105.0);
    assert_eq!(result.severity, Severity::VeryHigh);
    assert_eq!(result.tier, 4);
}

#[test]
fn identical_inputs_give_identical_results() {
    let inputs = RawInputs::new()
        .with("tjc", 3)
        .with("sjc", 2)
        .with("esr", 37)
        .with("gh", 45.5);

    let first = engine().compute("das28", Some("ESR"), &inputs).unwrap();
    let second = engine().compute("das28", Some("ESR"), &inputs).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
}

#[test]
fn unresolvable_index_fails_before_validation() {
    let err = engine().compute("haq", None, &RawInputs::new()).unwrap_err();
    assert_eq!(err.field, None);
    assert_eq!(err.reason, FailureReason::UnknownMode);
}

#[test]
fn moded_index_requires_mode() {
    let inputs = RawInputs::new()
        .with("tjc", 0)
        .with("sjc", 0)
        .with("esr", 20)
        .with("gh", 0);

    for mode in [None, Some(""), Some("ALT")] {
        let err = engine().compute("das28", mode, &inputs).unwrap_err();
        assert_eq!(err, ValidationError::unknown_mode());
    }
}

#[test]
fn non_moded_index_rejects_mode() {
    let err = engine()
        .compute("cdai", Some("CRP"), &RawInputs::new())
        .unwrap_err();
    assert_eq!(err.reason, FailureReason::UnknownMode);
}

#[test]
fn ids_are_case_and_separator_insensitive() {
    let engine = engine();
    assert!(engine.resolve("ASDAS-CRP", None).is_ok());
    assert!(engine.resolve("Das28", Some(" crp ")).is_ok());
    assert!(engine.resolve("cdai", Some("  ")).is_ok());
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = engine();
    let inputs = RawInputs::new()
        .with("tjc", 5)
        .with("sjc", 3)
        .with("patient_global", 4)
        .with("evaluator_global", 3);

    let scores: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.compute("cdai", None, &inputs).unwrap().score))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(scores.iter().all(|&s| s == 15.0));
}

#[test]
fn result_serializes_with_snake_case_ids() {
    let inputs = RawInputs::new()
        .with("tjc", 0)
        .with("sjc", 0)
        .with("esr", 20)
        .with("gh", 0);
    let result = engine().compute("das28", Some("ESR"), &inputs).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["index_id"], "das28");
    assert_eq!(json["mode"], "ESR");
    assert_eq!(json["score"], 2.1);
    assert_eq!(json["severity"], "remission");

    let cdai = engine()
        .compute(
            "cdai",
            None,
            &RawInputs::new()
                .with("tjc", 0)
                .with("sjc", 0)
                .with("patient_global", 0)
                .with("evaluator_global", 0),
        )
        .unwrap();
    let json = serde_json::to_value(&cdai).unwrap();
    assert!(json.get("mode").is_none());
}
