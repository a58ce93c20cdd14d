use crate::definition::IndexDefinition;
use crate::engine::ComputationResult;
use crate::scoring::{FieldKind, ValidatedInputs};

/// Format a validated input set and its result as a Markdown block for
/// clinical notes.
///
/// Checklist entries (levels and flags) are listed only when selected.
pub fn render_summary(
    definition: &IndexDefinition,
    inputs: &ValidatedInputs,
    result: &ComputationResult,
) -> String {
    let mut output = format!("## {}\n\n", definition.name);
    for field in &definition.fields {
        let value = inputs.get(&field.id);
        match field.kind {
            FieldKind::Flag | FieldKind::Level if value == 0.0 => {}
            FieldKind::Flag => output.push_str(&format!("- {}\n", field.name)),
            _ => {
                let unit = field
                    .unit
                    .as_deref()
                    .map(|u| format!(" {u}"))
                    .unwrap_or_default();
                output.push_str(&format!("- {}: {value}{unit}\n", field.name));
            }
        }
    }
    output.push_str(&format!(
        "\n**Score:** {:.*} ({})\n",
        definition.precision as usize, result.score, result.label
    ));
    output
}
