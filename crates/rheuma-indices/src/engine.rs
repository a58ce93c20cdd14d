//! Scoring façade: resolve → validate → evaluate → round → classify.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classify::Severity;
use crate::definition::{IndexDefinition, IndexId, Mode};
use crate::error::ValidationError;
use crate::scoring::RawInputs;
use crate::validate::validate;

/// Outcome of a successful computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComputationResult {
    pub index_id: IndexId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mode: Option<Mode>,
    /// Raw score rounded to the index's precision.
    pub score: f64,
    pub label: String,
    pub tier: u8,
    pub severity: Severity,
}

/// Stateless scoring engine over a read-only registry. `Copy`, so it can be
/// handed to any number of concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    registry: &'static [IndexDefinition],
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            registry: crate::all_indices(),
        }
    }

    /// Find the definition for an index id and optional mode selector.
    ///
    /// Unknown ids, unknown modes, a mode on a non-moded index and a missing
    /// mode on a moded index all fail with `unknown_mode`. A blank mode
    /// string counts as no mode.
    pub fn resolve(
        &self,
        index_id: &str,
        mode: Option<&str>,
    ) -> Result<&'static IndexDefinition, ValidationError> {
        let id = IndexId::parse(index_id).ok_or_else(ValidationError::unknown_mode)?;
        let mode = match mode.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => Some(Mode::parse(m).ok_or_else(ValidationError::unknown_mode)?),
            None => None,
        };
        self.registry
            .iter()
            .find(|d| d.id == id && d.mode == mode)
            .ok_or_else(ValidationError::unknown_mode)
    }

    pub fn compute(
        &self,
        index_id: &str,
        mode: Option<&str>,
        inputs: &RawInputs,
    ) -> Result<ComputationResult, ValidationError> {
        let definition = self.resolve(index_id, mode).inspect_err(|_| {
            tracing::debug!(index = index_id, mode = ?mode, "unresolved index");
        })?;
        compute_with(definition, inputs)
    }
}

/// Run the pipeline against an already resolved definition.
pub fn compute_with(
    definition: &IndexDefinition,
    inputs: &RawInputs,
) -> Result<ComputationResult, ValidationError> {
    let validated = validate(definition, inputs).inspect_err(|e| {
        tracing::debug!(
            index = %definition.id,
            mode = ?definition.mode,
            field = ?e.field,
            reason = e.reason.as_str(),
            "rejected input"
        );
    })?;

    let score = definition.round((definition.evaluate)(&validated));
    let band = definition.classify(score);

    tracing::debug!(
        index = %definition.id,
        mode = ?definition.mode,
        score,
        tier = band.tier,
        "computed score"
    );

    Ok(ComputationResult {
        index_id: definition.id,
        mode: definition.mode,
        score,
        label: band.label.clone(),
        tier: band.tier,
        severity: band.severity,
    })
}
