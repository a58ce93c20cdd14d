use crate::classify::{BandScale, Bound, Severity};
use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::{InputField, ValidatedInputs};

use super::{HIGH_ACTIVITY, LOW_ACTIVITY};

const QUESTIONS: [(&str, &str); 6] = [
    ("fatigue", "Fatigue"),
    ("spinal_pain", "Neck, back or hip pain"),
    ("joint_pain", "Pain or swelling in other joints"),
    ("enthesitis", "Discomfort from areas tender to touch"),
    ("stiffness_severity", "Severity of morning stiffness"),
    ("stiffness_duration", "Duration of morning stiffness"),
];

/// BASDAI: Bath Ankylosing Spondylitis Disease Activity Index.
/// Six items on 0–10; the two morning-stiffness items are averaged.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Basdai,
        mode: None,
        name: "BASDAI".to_string(),
        fields: QUESTIONS
            .iter()
            .map(|(id, name)| InputField::continuous(id, &format!("{name} (0-10)"), 10.0))
            .collect(),
        precision: 2,
        bands: BandScale::new(
            &[(Bound::Below(4.0), Severity::Low, LOW_ACTIVITY)],
            (Severity::High, HIGH_ACTIVITY),
        ),
        evaluate,
    }
}

fn evaluate(inputs: &ValidatedInputs) -> f64 {
    let first_four: f64 = QUESTIONS[..4].iter().map(|(id, _)| inputs.get(id)).sum();
    let stiffness = (inputs.get("stiffness_severity") + inputs.get("stiffness_duration")) / 2.0;
    (first_four + stiffness) / 5.0
}
