//! rheuma-indices
//!
//! Clinical disease-activity indices for rheumatology. Pure computation — no
//! I/O. Each index is a data-described definition (fields, formula, rounding
//! precision, classification bands) run through one generic engine.

pub mod catalog;
pub mod classify;
pub mod definition;
pub mod engine;
pub mod error;
pub mod indices;
pub mod scoring;
pub mod summary;
pub mod validate;

use std::sync::LazyLock;

pub use definition::{IndexDefinition, IndexId, Mode};
pub use engine::{ComputationResult, ScoringEngine};
pub use error::{FailureReason, ValidationError};
pub use scoring::{RawInputs, RawValue};

static REGISTRY: LazyLock<Vec<IndexDefinition>> = LazyLock::new(|| {
    vec![
        indices::das28::esr_definition(),
        indices::das28::crp_definition(),
        indices::asdas::definition(),
        indices::basdai::definition(),
        indices::basfi::definition(),
        indices::cdai::definition(),
        indices::sdai::definition(),
        indices::dapsa::definition(),
        indices::essdai::definition(),
        indices::sledai::definition(),
    ]
});

/// Return every computable configuration. DAS28 appears once per mode.
pub fn all_indices() -> &'static [IndexDefinition] {
    &REGISTRY
}

/// Look up a definition by id and mode.
///
/// Returns `None` for a mode on a non-moded index or a missing mode on a
/// moded one.
pub fn get_index(id: IndexId, mode: Option<Mode>) -> Option<&'static IndexDefinition> {
    all_indices()
        .iter()
        .find(|d| d.id == id && d.mode == mode)
}
