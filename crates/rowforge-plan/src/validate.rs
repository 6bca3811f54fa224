use std::collections::HashSet;

use rowforge_core::{Error, Result};

use crate::model::ComposedPlan;

/// Checks a composed plan for structural faults before execution.
///
/// Plans are machine-built, so any failure here is a planner bug rather
/// than bad user input.
pub fn validate_plan(plan: &ComposedPlan) -> Result<()> {
    if plan.calls.is_empty() {
        return Err(Error::Internal(
            "composed plan has no generator calls".to_string(),
        ));
    }
    if plan.outputs.is_empty() {
        return Err(Error::Internal(
            "composed plan has no output columns".to_string(),
        ));
    }

    let mut aliases = HashSet::new();
    for call in &plan.calls {
        if call.function.is_empty() || call.alias.is_empty() {
            return Err(Error::Internal(
                "composed plan call is missing a function name or alias".to_string(),
            ));
        }
        if !aliases.insert(call.alias.as_str()) {
            return Err(Error::Internal(format!(
                "composed plan reuses binding alias '{}'",
                call.alias
            )));
        }
    }

    let mut names = HashSet::new();
    for output in &plan.outputs {
        if output.call >= plan.calls.len() {
            return Err(Error::Internal(format!(
                "output column '{}' references call {} but the plan has {}",
                output.name,
                output.call,
                plan.calls.len()
            )));
        }
        if output.name.is_empty() || !names.insert(output.name.as_str()) {
            return Err(Error::Internal(format!(
                "composed plan output column name '{}' is empty or duplicated",
                output.name
            )));
        }
    }

    Ok(())
}
