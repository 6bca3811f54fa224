use std::collections::HashMap;

use rand::RngCore;
use rowforge_core::{Catalog, ColumnData, LogicalType, Result};
use rowforge_plan::ComposedPlan;

use crate::params::{ParamMap, ParamSpec};

/// Name of the value column every generator scan produces.
pub const VALUE_COLUMN: &str = "value";

/// Everything a table function may consult while binding.
pub struct BindContext<'a> {
    /// Validated named arguments for the call.
    pub params: ParamMap<'a>,
    /// Catalog visible to the invocation.
    pub catalog: &'a Catalog,
}

/// What binding a table function produced.
///
/// A scalar generator binds to a scan the engine pulls batches from. A
/// schema-mirroring function instead rewrites itself into a composed plan
/// and never scans; keeping the two shapes apart means a plan-producing
/// function cannot be driven down the scan path by mistake.
pub enum Binding {
    Scan(ScanSource),
    Rewrite(ComposedPlan),
}

impl Binding {
    /// A single value column scan backed by the given generator.
    pub fn scan(column_type: LogicalType, generator: Box<dyn RowGenerator>) -> Self {
        Binding::Scan(ScanSource {
            column_name: VALUE_COLUMN.to_string(),
            column_type,
            generator,
        })
    }
}

/// A bound generator scan: one value column plus the virtual rowid.
pub struct ScanSource {
    /// Name of the produced value column.
    pub column_name: String,
    /// Logical type of the produced value column.
    pub column_type: LogicalType,
    /// Bound draw configuration.
    pub generator: Box<dyn RowGenerator>,
}

/// A bound, stateless draw configuration.
///
/// A generator holds everything decided at bind time and nothing else; all
/// progress state lives in the engine's cursor. That split is what makes
/// streams resumable and row identity purely positional.
pub trait RowGenerator {
    /// Fills a buffer with `count` freshly drawn values.
    fn fill(&self, count: usize, rng: &mut dyn RngCore) -> ColumnData;
}

/// A named row-generator table function.
pub trait TableFunction {
    fn name(&self) -> &'static str;

    /// Named parameters the function accepts.
    fn parameters(&self) -> &'static [ParamSpec];

    /// Validates argument semantics and produces a binding.
    fn bind(&self, ctx: &BindContext<'_>) -> Result<Binding>;
}

/// Registry of table functions keyed by name.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, Box<dyn TableFunction>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        FunctionRegistry::default()
    }

    pub fn register(&mut self, function: Box<dyn TableFunction>) {
        self.functions.insert(function.name(), function);
    }

    pub fn get(&self, name: &str) -> Option<&dyn TableFunction> {
        self.functions.get(name).map(|function| function.as_ref())
    }

    /// Registered function names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
