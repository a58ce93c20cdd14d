use crate::classify::{BandScale, Bound, Severity};
use crate::definition::{IndexDefinition, IndexId, Mode};
use crate::scoring::{InputField, ValidatedInputs};

use super::{
    HIGH_ACTIVITY, LOW_ACTIVITY, MODERATE_ACTIVITY, REMISSION, crp, swollen_joints, tender_joints,
};

/// DAS28 with erythrocyte sedimentation rate.
/// ESR enters as a bare logarithm, so it must be strictly positive.
pub fn esr_definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Das28,
        mode: Some(Mode::Esr),
        name: "DAS28-ESR".to_string(),
        fields: vec![
            tender_joints(28),
            swollen_joints(28),
            InputField::lab("esr", "Erythrocyte sedimentation rate (mm/h)", "mm/h")
                .strictly_positive(),
            general_health(),
        ],
        precision: 2,
        bands: bands(),
        evaluate: evaluate_esr,
    }
}

/// DAS28 with C-reactive protein (mg/L).
pub fn crp_definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Das28,
        mode: Some(Mode::Crp),
        name: "DAS28-CRP".to_string(),
        fields: vec![
            tender_joints(28),
            swollen_joints(28),
            crp("mg/L"),
            general_health(),
        ],
        precision: 2,
        bands: bands(),
        evaluate: evaluate_crp,
    }
}

fn general_health() -> InputField {
    InputField::continuous("gh", "Patient global health (0-100)", 100.0)
}

fn bands() -> BandScale {
    BandScale::new(
        &[
            (Bound::Below(2.6), Severity::Remission, REMISSION),
            (Bound::AtMost(3.2), Severity::Low, LOW_ACTIVITY),
            (Bound::AtMost(5.1), Severity::Moderate, MODERATE_ACTIVITY),
        ],
        (Severity::High, HIGH_ACTIVITY),
    )
}

fn joints(inputs: &ValidatedInputs) -> f64 {
    0.56 * inputs.get("tjc").sqrt() + 0.28 * inputs.get("sjc").sqrt()
}

fn evaluate_esr(inputs: &ValidatedInputs) -> f64 {
    joints(inputs) + 0.70 * inputs.get("esr").ln() + 0.014 * inputs.get("gh")
}

fn evaluate_crp(inputs: &ValidatedInputs) -> f64 {
    joints(inputs) + 0.36 * (inputs.get("crp") + 1.0).ln() + 0.014 * inputs.get("gh") + 0.96
}
