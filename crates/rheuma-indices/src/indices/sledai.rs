use crate::classify::{BandScale, Bound, Severity};
use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::{InputField, ValidatedInputs};

/// (id, name, weight)
const ITEMS: [(&str, &str, f64); 24] = [
    ("seizure", "Seizure", 8.0),
    ("psychosis", "Psychosis", 8.0),
    ("organic_brain_syndrome", "Organic brain syndrome", 8.0),
    ("visual_disturbance", "Visual disturbance", 8.0),
    ("cranial_nerve_disorder", "Cranial nerve disorder", 8.0),
    ("lupus_headache", "Lupus headache", 8.0),
    ("cerebrovascular_accident", "Cerebrovascular accident", 8.0),
    ("vasculitis", "Vasculitis", 8.0),
    ("arthritis", "Arthritis", 4.0),
    ("myositis", "Myositis", 4.0),
    ("urinary_casts", "Urinary casts", 4.0),
    ("hematuria", "Hematuria", 4.0),
    ("proteinuria", "Proteinuria", 4.0),
    ("pyuria", "Pyuria", 4.0),
    ("rash", "Rash", 2.0),
    ("alopecia", "Alopecia", 2.0),
    ("mucosal_ulcers", "Mucosal ulcers", 2.0),
    ("pleurisy", "Pleurisy", 2.0),
    ("pericarditis", "Pericarditis", 2.0),
    ("low_complement", "Low complement", 2.0),
    ("increased_dna_binding", "Increased DNA binding", 2.0),
    ("fever", "Fever", 1.0),
    ("thrombocytopenia", "Thrombocytopenia", 1.0),
    ("leukopenia", "Leukopenia", 1.0),
];

/// SLEDAI: Systemic Lupus Erythematosus Disease Activity Index checklist.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Sledai,
        mode: None,
        name: "SLEDAI".to_string(),
        fields: ITEMS
            .iter()
            .map(|(id, name, weight)| InputField::flag(id, name, *weight))
            .collect(),
        precision: 0,
        bands: BandScale::new(
            &[
                (Bound::AtMost(0.0), Severity::None, "Aktivite yok"),
                (Bound::AtMost(5.0), Severity::Mild, "Hafif aktivite"),
                (Bound::AtMost(10.0), Severity::Moderate, "Orta aktivite"),
                (Bound::AtMost(19.0), Severity::High, "Yüksek aktivite"),
            ],
            (Severity::VeryHigh, "Çok yüksek aktivite"),
        ),
        evaluate,
    }
}

fn evaluate(inputs: &ValidatedInputs) -> f64 {
    ITEMS
        .iter()
        .filter(|(id, _, _)| inputs.is_set(id))
        .map(|(_, _, weight)| weight)
        .sum()
}
