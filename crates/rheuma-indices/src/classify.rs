//! Classification bands: ordered score ranges mapped to severity labels.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::definition::IndexDefinition;

/// Machine-stable severity category of a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    None,
    Inactive,
    Remission,
    Mild,
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Upper edge of a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Bound {
    /// Scores strictly below the value.
    Below(f64),
    /// Scores at or below the value.
    AtMost(f64),
    /// Every remaining score.
    Unbounded,
}

impl Bound {
    pub fn admits(self, score: f64) -> bool {
        match self {
            Bound::Below(limit) => score < limit,
            Bound::AtMost(limit) => score <= limit,
            Bound::Unbounded => true,
        }
    }

    fn limit(self) -> Option<f64> {
        match self {
            Bound::Below(limit) | Bound::AtMost(limit) => Some(limit),
            Bound::Unbounded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub bound: Bound,
    pub label: String,
    pub severity: Severity,
    /// Rank within the index, 0 for the least active band.
    pub tier: u8,
}

/// Ordered bands of one index. The terminal band is always unbounded, so
/// every score (including NaN, which no finite bound admits) classifies.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    bounded: Vec<Band>,
    top: Band,
}

impl BandScale {
    /// Build a scale from ascending bounded bands plus the open-ended top band.
    /// Tiers are assigned in order.
    pub fn new(bounded: &[(Bound, Severity, &str)], top: (Severity, &str)) -> Self {
        debug_assert!(
            bounded
                .windows(2)
                .all(|w| w[0].0.limit() <= w[1].0.limit()),
            "band bounds must ascend"
        );
        debug_assert!(bounded.iter().all(|(b, _, _)| b.limit().is_some()));

        let bounded: Vec<Band> = bounded
            .iter()
            .enumerate()
            .map(|(tier, (bound, severity, label))| Band {
                bound: *bound,
                label: label.to_string(),
                severity: *severity,
                tier: tier as u8,
            })
            .collect();
        let top = Band {
            bound: Bound::Unbounded,
            label: top.1.to_string(),
            severity: top.0,
            tier: bounded.len() as u8,
        };
        Self { bounded, top }
    }

    /// First band, low to high, whose bound admits `score`.
    pub fn classify(&self, score: f64) -> &Band {
        self.bounded
            .iter()
            .find(|band| band.bound.admits(score))
            .unwrap_or(&self.top)
    }

    pub fn bands(&self) -> impl Iterator<Item = &Band> {
        self.bounded.iter().chain(std::iter::once(&self.top))
    }
}

/// Map an already-rounded score to its band.
pub fn classify(definition: &IndexDefinition, score: f64) -> &Band {
    definition.bands.classify(score)
}
