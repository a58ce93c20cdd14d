use crate::classify::{BandScale, Bound, Severity};
use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::{InputField, ValidatedInputs};

const UP_TO_MODERATE: &[u8] = &[0, 1, 2];
const UP_TO_HIGH: &[u8] = &[0, 1, 2, 3];
/// The CNS domain has no low activity level.
const CNS_LEVELS: &[u8] = &[0, 2, 3];

/// (id, name, weight, selectable levels)
const DOMAINS: [(&str, &str, f64, &[u8]); 12] = [
    ("constitutional", "Constitutional", 3.0, UP_TO_MODERATE),
    ("lymphadenopathy", "Lymphadenopathy and lymphoma", 4.0, UP_TO_HIGH),
    ("glandular", "Glandular", 2.0, UP_TO_MODERATE),
    ("articular", "Articular", 2.0, UP_TO_HIGH),
    ("cutaneous", "Cutaneous", 3.0, UP_TO_HIGH),
    ("pulmonary", "Pulmonary", 5.0, UP_TO_HIGH),
    ("renal", "Renal", 5.0, UP_TO_HIGH),
    ("muscular", "Muscular", 6.0, UP_TO_HIGH),
    ("peripheral_nervous", "Peripheral nervous system", 5.0, UP_TO_HIGH),
    ("central_nervous", "Central nervous system", 5.0, CNS_LEVELS),
    ("hematological", "Hematological", 2.0, UP_TO_HIGH),
    ("biological", "Biological", 1.0, UP_TO_MODERATE),
];

/// ESSDAI: EULAR Sjögren's Syndrome Disease Activity Index.
/// Each domain contributes its selected level times its weight.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Essdai,
        mode: None,
        name: "ESSDAI".to_string(),
        fields: DOMAINS
            .iter()
            .map(|(id, name, weight, levels)| InputField::level(id, name, levels, *weight))
            .collect(),
        precision: 0,
        bands: BandScale::new(
            &[
                (Bound::Below(5.0), Severity::Low, "Düşük aktivite"),
                (Bound::AtMost(13.0), Severity::Moderate, "Orta aktivite"),
            ],
            (Severity::High, "Yüksek aktivite"),
        ),
        evaluate,
    }
}

fn evaluate(inputs: &ValidatedInputs) -> f64 {
    DOMAINS
        .iter()
        .map(|(id, _, weight, _)| inputs.get(id) * weight)
        .sum()
}
