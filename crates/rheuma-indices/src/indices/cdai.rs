use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::ValidatedInputs;

use super::{
    evaluator_global, inclusive_activity_bands, patient_global, swollen_joints, tender_joints,
};

/// CDAI: Clinical Disease Activity Index.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Cdai,
        mode: None,
        name: "CDAI".to_string(),
        fields: vec![
            tender_joints(28),
            swollen_joints(28),
            patient_global(),
            evaluator_global(),
        ],
        precision: 1,
        bands: inclusive_activity_bands(2.8, 10.0, 22.0),
        evaluate,
    }
}

pub(super) fn evaluate(inputs: &ValidatedInputs) -> f64 {
    inputs.get("tjc")
        + inputs.get("sjc")
        + inputs.get("patient_global")
        + inputs.get("evaluator_global")
}
