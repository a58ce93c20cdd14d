//! Per-index field sets, formulas and bands.

pub mod asdas;
pub mod basdai;
pub mod basfi;
pub mod cdai;
pub mod dapsa;
pub mod das28;
pub mod essdai;
pub mod sdai;
pub mod sledai;

use crate::classify::{BandScale, Bound, Severity};
use crate::scoring::InputField;

const REMISSION: &str = "Remisyon";
const LOW_ACTIVITY: &str = "Düşük hastalık aktivitesi";
const MODERATE_ACTIVITY: &str = "Orta hastalık aktivitesi";
const HIGH_ACTIVITY: &str = "Yüksek hastalık aktivitesi";
const VERY_HIGH_ACTIVITY: &str = "Çok yüksek hastalık aktivitesi";

/// Remission / low / moderate / high, all bounds inclusive (CDAI, SDAI, DAPSA).
fn inclusive_activity_bands(remission: f64, low: f64, moderate: f64) -> BandScale {
    BandScale::new(
        &[
            (Bound::AtMost(remission), Severity::Remission, REMISSION),
            (Bound::AtMost(low), Severity::Low, LOW_ACTIVITY),
            (Bound::AtMost(moderate), Severity::Moderate, MODERATE_ACTIVITY),
        ],
        (Severity::High, HIGH_ACTIVITY),
    )
}

fn tender_joints(max: u32) -> InputField {
    InputField::count("tjc", &format!("Tender joint count (0-{max})"), max)
}

fn swollen_joints(max: u32) -> InputField {
    InputField::count("sjc", &format!("Swollen joint count (0-{max})"), max)
}

fn patient_global() -> InputField {
    InputField::continuous("patient_global", "Patient global assessment (0-10)", 10.0)
}

fn evaluator_global() -> InputField {
    InputField::continuous("evaluator_global", "Evaluator global assessment (0-10)", 10.0)
}

/// CRP entering additively or through `ln(CRP + 1)`; zero is allowed.
fn crp(unit: &str) -> InputField {
    InputField::lab("crp", &format!("C-reactive protein ({unit})"), unit)
}
