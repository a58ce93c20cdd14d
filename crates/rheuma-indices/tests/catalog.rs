use rheuma_indices::catalog::{IndexSchema, index_summaries};
use rheuma_indices::scoring::FieldKind;
use rheuma_indices::summary::render_summary;
use rheuma_indices::validate::validate;
use rheuma_indices::{IndexId, Mode, RawInputs, all_indices, get_index};

#[test]
fn registry_has_ten_configurations() {
    assert_eq!(all_indices().len(), 10);
    let summaries = index_summaries();
    assert_eq!(summaries.len(), 10);
    assert_eq!(summaries[0].name, "DAS28-ESR");
    assert_eq!(summaries[1].name, "DAS28-CRP");
}

#[test]
fn every_index_id_resolves() {
    for id in IndexId::ALL {
        let found = all_indices().iter().any(|d| d.id == id);
        assert!(found, "{id}");
    }
}

#[test]
fn mode_lookup_rules() {
    assert!(get_index(IndexId::Das28, None).is_none());
    assert!(get_index(IndexId::Das28, Some(Mode::Crp)).is_some());
    assert!(get_index(IndexId::Cdai, Some(Mode::Esr)).is_none());
    assert!(get_index(IndexId::Cdai, None).is_some());
}

#[test]
fn field_ids_are_unique_per_definition() {
    for definition in all_indices() {
        let mut ids: Vec<_> = definition.fields.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before, "{}", definition.name);
    }
}

#[test]
fn precision_per_index() {
    let precision = |id, mode| get_index(id, mode).unwrap().precision;
    assert_eq!(precision(IndexId::Das28, Some(Mode::Esr)), 2);
    assert_eq!(precision(IndexId::AsdasCrp, None), 2);
    assert_eq!(precision(IndexId::Cdai, None), 1);
    assert_eq!(precision(IndexId::Dapsa, None), 1);
    assert_eq!(precision(IndexId::Essdai, None), 0);
    assert_eq!(precision(IndexId::Sledai, None), 0);
}

#[test]
fn essdai_schema_exposes_weights_and_levels() {
    let schema = IndexSchema::from(get_index(IndexId::Essdai, None).unwrap());
    assert_eq!(schema.fields.len(), 12);
    assert!(schema.fields.iter().all(|f| f.kind == FieldKind::Level && !f.required));

    let weights: Vec<f64> = schema.fields.iter().filter_map(|f| f.weight).collect();
    assert_eq!(
        weights,
        [3.0, 4.0, 2.0, 2.0, 3.0, 5.0, 5.0, 6.0, 5.0, 5.0, 2.0, 1.0]
    );

    let constitutional = &schema.fields[0];
    assert_eq!(constitutional.range.max, Some(2.0));
}

#[test]
fn sledai_schema_has_twenty_four_weighted_flags() {
    let schema = IndexSchema::from(get_index(IndexId::Sledai, None).unwrap());
    assert_eq!(schema.fields.len(), 24);
    assert!(schema.fields.iter().all(|f| f.kind == FieldKind::Flag));
    let total: f64 = schema.fields.iter().filter_map(|f| f.weight).sum();
    assert_eq!(total, 105.0);
    assert_eq!(schema.bands.len(), 5);
}

#[test]
fn schema_serializes_units_and_bounds() {
    let schema = IndexSchema::from(get_index(IndexId::Das28, Some(Mode::Esr)).unwrap());
    let json = serde_json::to_value(&schema).unwrap();

    assert_eq!(json["id"], "das28");
    assert_eq!(json["mode"], "ESR");
    let esr = &json["fields"][2];
    assert_eq!(esr["id"], "esr");
    assert_eq!(esr["unit"], "mm/h");
    assert_eq!(esr["range"]["min_exclusive"], true);
    assert_eq!(json["bands"][0]["bound"], serde_json::json!({"kind": "below", "value": 2.6}));
    assert_eq!(json["bands"][3]["bound"], serde_json::json!({"kind": "unbounded"}));
}

#[test]
fn summary_lists_inputs_and_score() {
    let definition = get_index(IndexId::Das28, Some(Mode::Esr)).unwrap();
    let inputs = RawInputs::new()
        .with("tjc", 0)
        .with("sjc", 0)
        .with("esr", 20)
        .with("gh", 0);
    let validated = validate(definition, &inputs).unwrap();
    let result = rheuma_indices::engine::compute_with(definition, &inputs).unwrap();

    let text = render_summary(definition, &validated, &result);
    assert!(text.starts_with("## DAS28-ESR\n"));
    assert!(text.contains("- Erythrocyte sedimentation rate (mm/h): 20 mm/h\n"));
    assert!(text.contains("- Tender joint count (0-28): 0\n"));
    assert!(text.ends_with("**Score:** 2.10 (Remisyon)\n"));
}

#[test]
fn summary_lists_only_selected_checklist_items() {
    let definition = get_index(IndexId::Sledai, None).unwrap();
    let inputs = RawInputs::new().with("seizure", true).with("fever", true);
    let validated = validate(definition, &inputs).unwrap();
    let result = rheuma_indices::engine::compute_with(definition, &inputs).unwrap();

    let text = render_summary(definition, &validated, &result);
    assert!(text.contains("- Seizure\n"));
    assert!(text.contains("- Fever\n"));
    assert!(!text.contains("Psychosis"));
    assert!(text.ends_with("**Score:** 9 (Orta aktivite)\n"));
}
