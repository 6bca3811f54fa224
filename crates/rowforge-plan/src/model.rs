use std::fmt;

use rowforge_core::LogicalType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One parameterless generator invocation within a composed plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratorCall {
    /// Registered table function to invoke.
    pub function: String,
    /// Binding alias for the call, unique within the plan.
    pub alias: String,
}

/// One projected column of a composed plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputColumn {
    /// Index into [`ComposedPlan::calls`] providing this column's values.
    pub call: usize,
    /// Output column name.
    pub name: String,
    /// Logical type the source call produces.
    pub column_type: LogicalType,
}

/// A positional composition of scalar generator calls.
///
/// Each call contributes one value column; the calls advance in lockstep and
/// the outputs project one aliased column per source column. The `Display`
/// rendering spells the equivalent SQL, which only appears in logs and
/// messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComposedPlan {
    pub calls: Vec<GeneratorCall>,
    pub outputs: Vec<OutputColumn>,
}

impl fmt::Display for ComposedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        for (idx, output) in self.outputs.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            let alias = self
                .calls
                .get(output.call)
                .map(|call| call.alias.as_str())
                .unwrap_or("?");
            write!(f, "{alias}.value AS {}", output.name)?;
        }
        f.write_str(" FROM ")?;
        for (idx, call) in self.calls.iter().enumerate() {
            if idx > 0 {
                f.write_str(" POSITIONAL JOIN ")?;
            }
            write!(f, "{}() AS {}", call.function, call.alias)?;
        }
        Ok(())
    }
}
