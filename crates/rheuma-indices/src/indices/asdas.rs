use crate::classify::{BandScale, Bound, Severity};
use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::{InputField, ValidatedInputs};

use super::{HIGH_ACTIVITY, LOW_ACTIVITY, VERY_HIGH_ACTIVITY, crp, patient_global};

/// ASDAS-CRP: Ankylosing Spondylitis Disease Activity Score, CRP in mg/L.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::AsdasCrp,
        mode: None,
        name: "ASDAS-CRP".to_string(),
        fields: vec![
            InputField::continuous("back_pain", "Back pain (0-10)", 10.0),
            InputField::continuous("morning_stiffness", "Duration of morning stiffness (0-10)", 10.0),
            patient_global(),
            InputField::continuous("peripheral_pain", "Peripheral pain/swelling (0-10)", 10.0),
            crp("mg/L"),
        ],
        precision: 2,
        bands: BandScale::new(
            &[
                (Bound::Below(1.3), Severity::Inactive, "İnaktif hastalık"),
                (Bound::Below(2.1), Severity::Low, LOW_ACTIVITY),
                (Bound::Below(3.5), Severity::High, HIGH_ACTIVITY),
            ],
            (Severity::VeryHigh, VERY_HIGH_ACTIVITY),
        ),
        evaluate,
    }
}

fn evaluate(inputs: &ValidatedInputs) -> f64 {
    0.121 * inputs.get("back_pain")
        + 0.058 * inputs.get("morning_stiffness")
        + 0.110 * inputs.get("patient_global")
        + 0.073 * inputs.get("peripheral_pain")
        + 0.579 * (inputs.get("crp") + 1.0).ln()
}
