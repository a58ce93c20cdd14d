use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::{InputField, ValidatedInputs};

use super::{crp, inclusive_activity_bands, patient_global, swollen_joints, tender_joints};

/// DAPSA: Disease Activity in Psoriatic Arthritis, 68/66 joint counts and CRP in mg/dL.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Dapsa,
        mode: None,
        name: "DAPSA".to_string(),
        fields: vec![
            tender_joints(68),
            swollen_joints(66),
            patient_global(),
            InputField::continuous("patient_pain", "Patient pain (0-10)", 10.0),
            crp("mg/dL"),
        ],
        precision: 1,
        bands: inclusive_activity_bands(4.0, 14.0, 28.0),
        evaluate,
    }
}

fn evaluate(inputs: &ValidatedInputs) -> f64 {
    inputs.get("tjc")
        + inputs.get("sjc")
        + inputs.get("patient_global")
        + inputs.get("patient_pain")
        + inputs.get("crp")
}
