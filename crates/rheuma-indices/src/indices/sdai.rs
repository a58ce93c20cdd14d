use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::ValidatedInputs;

use super::{
    crp, evaluator_global, inclusive_activity_bands, patient_global, swollen_joints, tender_joints,
};

/// SDAI: Simplified Disease Activity Index, CDAI plus CRP in mg/dL.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Sdai,
        mode: None,
        name: "SDAI".to_string(),
        fields: vec![
            tender_joints(28),
            swollen_joints(28),
            patient_global(),
            evaluator_global(),
            crp("mg/dL"),
        ],
        precision: 1,
        bands: inclusive_activity_bands(3.3, 11.0, 26.0),
        evaluate,
    }
}

fn evaluate(inputs: &ValidatedInputs) -> f64 {
    super::cdai::evaluate(inputs) + inputs.get("crp")
}
