use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classify::{Band, BandScale};
use crate::scoring::{InputField, ValidatedInputs};

/// Identity of a clinical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IndexId {
    Das28,
    AsdasCrp,
    Basdai,
    Basfi,
    Cdai,
    Sdai,
    Dapsa,
    Essdai,
    Sledai,
}

impl IndexId {
    pub const ALL: [IndexId; 9] = [
        IndexId::Das28,
        IndexId::AsdasCrp,
        IndexId::Basdai,
        IndexId::Basfi,
        IndexId::Cdai,
        IndexId::Sdai,
        IndexId::Dapsa,
        IndexId::Essdai,
        IndexId::Sledai,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IndexId::Das28 => "das28",
            IndexId::AsdasCrp => "asdas_crp",
            IndexId::Basdai => "basdai",
            IndexId::Basfi => "basfi",
            IndexId::Cdai => "cdai",
            IndexId::Sdai => "sdai",
            IndexId::Dapsa => "dapsa",
            IndexId::Essdai => "essdai",
            IndexId::Sledai => "sledai",
        }
    }

    /// Parse an id case-insensitively; `-` is accepted in place of `_`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|id| id.as_str() == normalized)
    }
}

impl fmt::Display for IndexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named variant of a moded index (DAS28).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Mode {
    Esr,
    Crp,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Esr => "ESR",
            Mode::Crp => "CRP",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ESR" => Some(Mode::Esr),
            "CRP" => Some(Mode::Crp),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw-score formula. Assumes every declared field has been validated.
pub type Evaluator = fn(&ValidatedInputs) -> f64;

/// Immutable description of one computable configuration: an index, or one
/// mode of a moded index.
#[derive(Debug, Clone)]
pub struct IndexDefinition {
    pub id: IndexId,
    pub mode: Option<Mode>,
    pub name: String,
    pub fields: Vec<InputField>,
    /// Decimal places the raw score is rounded to before classification.
    pub precision: u32,
    pub bands: BandScale,
    pub evaluate: Evaluator,
}

impl IndexDefinition {
    pub fn field(&self, id: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn round(&self, raw: f64) -> f64 {
        round_half_away_from_zero(raw, self.precision)
    }

    pub fn classify(&self, score: f64) -> &Band {
        self.bands.classify(score)
    }
}

/// Digits kept when reading a binary score back as a decimal. Scores are
/// sums of a few decimal terms, so their binary error sits far below this.
const DECIMAL_DIGITS: u32 = 12;

/// Round to `precision` decimal places, halves away from zero.
///
/// Rounds the decimal value the inputs describe: `9.1 + 1.95` is stored as
/// `11.0499…` in binary but rounds to `11.1` at one place.
pub fn round_half_away_from_zero(value: f64, precision: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = exact
        .round_dp_with_strategy(DECIMAL_DIGITS, RoundingStrategy::MidpointNearestEven)
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32)
}
