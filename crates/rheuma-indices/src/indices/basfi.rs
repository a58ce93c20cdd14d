use crate::classify::{BandScale, Bound, Severity};
use crate::definition::{IndexDefinition, IndexId};
use crate::scoring::{InputField, ValidatedInputs};

const ITEMS: [(&str, &str); 10] = [
    ("socks", "Putting on socks or tights without help"),
    ("bend_forward", "Bending forward to pick up a pen from the floor"),
    ("reach_shelf", "Reaching up to a high shelf"),
    ("rise_from_chair", "Getting up from an armless chair"),
    ("rise_from_floor", "Getting up off the floor from lying on the back"),
    ("stand_unsupported", "Standing unsupported for 10 minutes"),
    ("climb_steps", "Climbing 12-15 steps without a handrail"),
    ("look_over_shoulder", "Looking over the shoulder without turning the body"),
    ("demanding_activities", "Physically demanding activities"),
    ("full_day", "A full day's activities at home or work"),
];

/// BASFI: Bath Ankylosing Spondylitis Functional Index, mean of ten 0–10 items.
pub fn definition() -> IndexDefinition {
    IndexDefinition {
        id: IndexId::Basfi,
        mode: None,
        name: "BASFI".to_string(),
        fields: ITEMS
            .iter()
            .map(|(id, name)| InputField::continuous(id, &format!("{name} (0-10)"), 10.0))
            .collect(),
        precision: 2,
        bands: BandScale::new(
            &[
                (Bound::Below(4.0), Severity::Low, "Düşük fonksiyonel kısıtlılık"),
                (Bound::Below(7.0), Severity::Moderate, "Orta fonksiyonel kısıtlılık"),
            ],
            (Severity::High, "Yüksek fonksiyonel kısıtlılık"),
        ),
        evaluate,
    }
}

fn evaluate(inputs: &ValidatedInputs) -> f64 {
    ITEMS.iter().map(|(id, _)| inputs.get(id)).sum::<f64>() / 10.0
}
