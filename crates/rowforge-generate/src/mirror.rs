use tracing::debug;

use rowforge_core::{Error, LogicalType, Result, TableDef};
use rowforge_engine::{BindContext, Binding, ParamKind, ParamSpec, TableFunction};
use rowforge_plan::{ComposedPlan, GeneratorCall, OutputColumn};

const RANDOM_DATA_PARAMS: &[ParamSpec] =
    &[ParamSpec::new("schema_source", ParamKind::String, true)];

/// Table function that mirrors a cataloged table's shape with random data.
///
/// Binding resolves the source table and rewrites the call into a composed
/// plan with one scalar generator per column; this function never scans rows
/// itself.
pub struct RandomData;

impl TableFunction for RandomData {
    fn name(&self) -> &'static str {
        "random_data"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        RANDOM_DATA_PARAMS
    }

    fn bind(&self, ctx: &BindContext<'_>) -> Result<Binding> {
        let source = ctx.params.get_str("schema_source").ok_or_else(|| {
            Error::InvalidInput("random_data: missing required param 'schema_source'".to_string())
        })?;
        let table = ctx.catalog.resolve(source)?;
        let plan = compose_mirror_plan(table)?;
        debug!(
            source,
            columns = plan.outputs.len(),
            plan = %plan,
            "rewrote random_data call"
        );
        Ok(Binding::Rewrite(plan))
    }
}

/// The generator able to fill one source column type, with its output type.
fn generator_for(column_type: LogicalType) -> Result<(&'static str, LogicalType)> {
    match column_type {
        LogicalType::Boolean => Ok(("random_bool", LogicalType::Boolean)),
        LogicalType::TinyInt | LogicalType::SmallInt | LogicalType::Integer => {
            Ok(("random_int", LogicalType::Integer))
        }
        LogicalType::Varchar => Ok(("random_string", LogicalType::Varchar)),
        other => Err(Error::NotImplemented(format!(
            "random data generation is not implemented for type: {other}"
        ))),
    }
}

fn compose_mirror_plan(table: &TableDef) -> Result<ComposedPlan> {
    if table.columns.is_empty() {
        return Err(Error::InvalidInput(format!(
            "table '{}' has no columns to mirror",
            table.name
        )));
    }
    if table.has_generated_columns() {
        return Err(Error::NotImplemented(
            "tables with generated columns are not supported as schema_source yet".to_string(),
        ));
    }
    if !table.constraints.is_empty() {
        return Err(Error::NotImplemented(
            "tables with constraints are not supported as schema_source yet".to_string(),
        ));
    }

    if table.columns.iter().any(|column| column.default.is_some()) {
        return Err(Error::NotImplemented(
            "tables with default values are not supported as schema_source yet".to_string(),
        ));
    }

    let mut calls = Vec::with_capacity(table.columns.len());
    let mut outputs = Vec::with_capacity(table.columns.len());
    for (index, column) in table.columns.iter().enumerate() {
        let (function, column_type) = generator_for(column.column_type)?;
        calls.push(GeneratorCall {
            function: function.to_string(),
            alias: format!("tf{index}"),
        });
        outputs.push(OutputColumn {
            call: index,
            name: column.name.clone(),
            column_type,
        });
    }

    Ok(ComposedPlan { calls, outputs })
}
