//! Serializable views of the registry for input widgets and listings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classify::Band;
use crate::definition::{IndexDefinition, IndexId, Mode};
use crate::scoring::InputField;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndexSummary {
    pub id: IndexId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mode: Option<Mode>,
    pub name: String,
}

/// Everything needed to render an index's input form and explain its result.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndexSchema {
    pub id: IndexId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mode: Option<Mode>,
    pub name: String,
    pub precision: u32,
    pub fields: Vec<InputField>,
    pub bands: Vec<Band>,
}

impl From<&IndexDefinition> for IndexSummary {
    fn from(definition: &IndexDefinition) -> Self {
        Self {
            id: definition.id,
            mode: definition.mode,
            name: definition.name.clone(),
        }
    }
}

impl From<&IndexDefinition> for IndexSchema {
    fn from(definition: &IndexDefinition) -> Self {
        Self {
            id: definition.id,
            mode: definition.mode,
            name: definition.name.clone(),
            precision: definition.precision,
            fields: definition.fields.clone(),
            bands: definition.bands.bands().cloned().collect(),
        }
    }
}

/// One row per computable configuration, in registry order.
pub fn index_summaries() -> Vec<IndexSummary> {
    crate::all_indices().iter().map(IndexSummary::from).collect()
}
