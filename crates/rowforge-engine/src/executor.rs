use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::{debug, info};

use rowforge_core::{Catalog, ColumnData, Error, LogicalType, Result, RowBatch, ScalarValue};
use rowforge_plan::{validate_plan, ComposedPlan};

use crate::cursor::BatchCursor;
use crate::function::{BindContext, Binding, FunctionRegistry, ScanSource};
use crate::params::validate_params;
use crate::projection::{ColumnProjection, ScanColumn};
use crate::rowid::{fill_rowid_column, ROWID_COLUMN};

/// Comparison operator for rowid predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// A pushed-down predicate on the virtual rowid column.
#[derive(Debug, Clone, Copy)]
pub struct RowIdFilter {
    pub op: CmpOp,
    pub value: i64,
}

impl RowIdFilter {
    pub fn new(op: CmpOp, value: i64) -> Self {
        RowIdFilter { op, value }
    }

    pub fn eq(value: i64) -> Self {
        RowIdFilter::new(CmpOp::Eq, value)
    }

    pub fn matches(&self, rowid: i64) -> bool {
        match self.op {
            CmpOp::Eq => rowid == self.value,
            CmpOp::Lt => rowid < self.value,
            CmpOp::LtEq => rowid <= self.value,
            CmpOp::Gt => rowid > self.value,
            CmpOp::GtEq => rowid >= self.value,
        }
    }
}

/// One query against a registered table function.
///
/// Stands in for the host's scan operator: it carries the projected columns,
/// pushed-down rowid predicates, and the offset and limit clauses that shape
/// what the invocation returns.
#[derive(Debug, Clone)]
pub struct Query {
    function: String,
    args: Option<Value>,
    columns: Vec<ScanColumn>,
    rowid_filters: Vec<RowIdFilter>,
    offset: u64,
    limit: Option<u64>,
}

impl Query {
    pub fn new(function: impl Into<String>) -> Self {
        Query {
            function: function.into(),
            args: None,
            columns: vec![ScanColumn::Value],
            rowid_filters: Vec::new(),
            offset: 0,
            limit: None,
        }
    }

    /// Named arguments for the call, as a JSON object.
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }

    /// Output columns to produce, in order. Functions that rewrite into a
    /// composed plan ignore this and project every plan output.
    pub fn select(mut self, columns: &[ScanColumn]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    pub fn filter_rowid(mut self, filter: RowIdFilter) -> Self {
        self.rowid_filters.push(filter);
        self
    }

    /// Rows to skip after filtering.
    pub fn offset(mut self, rows: u64) -> Self {
        self.offset = rows;
        self
    }

    /// Maximum rows to return after filtering and the offset.
    pub fn limit(mut self, rows: u64) -> Self {
        self.limit = Some(rows);
        self
    }
}

/// Name and type of one result column.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultColumn {
    pub name: String,
    pub column_type: LogicalType,
}

/// Fully materialized result of one query.
#[derive(Debug, Clone)]
pub struct MaterializedRows {
    pub columns: Vec<ResultColumn>,
    pub rows: Vec<Vec<ScalarValue>>,
}

impl MaterializedRows {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }
}

/// Single-threaded pull executor over a function registry and catalog.
///
/// The executor owns the random stream for every invocation it runs;
/// [`Executor::with_seed`] pins it for reproducible runs.
pub struct Executor {
    registry: FunctionRegistry,
    catalog: Catalog,
    rng: ChaCha8Rng,
}

impl Executor {
    pub fn new(registry: FunctionRegistry, catalog: Catalog) -> Self {
        let rng = ChaCha8Rng::from_rng(&mut rand::rng());
        Executor {
            registry,
            catalog,
            rng,
        }
    }

    pub fn with_seed(registry: FunctionRegistry, catalog: Catalog, seed: u64) -> Self {
        Executor {
            registry,
            catalog,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Binds and runs one query to completion.
    pub fn run(&mut self, query: &Query) -> Result<MaterializedRows> {
        let binding = {
            let function = self.registry.get(&query.function).ok_or_else(|| {
                Error::Catalog(format!(
                    "table function '{}' does not exist",
                    query.function
                ))
            })?;
            let params =
                validate_params(query.args.as_ref(), function.parameters(), function.name())?;
            function.bind(&BindContext {
                params,
                catalog: &self.catalog,
            })?
        };

        info!(
            function = %query.function,
            offset = query.offset,
            limit = query.limit,
            "query started"
        );

        let result = match binding {
            Binding::Scan(scan) => run_scan(query, &scan, &mut self.rng)?,
            Binding::Rewrite(plan) => {
                run_composed(query, &plan, &self.registry, &self.catalog, &mut self.rng)?
            }
        };

        info!(
            function = %query.function,
            rows = result.rows.len(),
            "query completed"
        );
        Ok(result)
    }
}

fn limit_reached(limit: Option<u64>, produced: usize) -> bool {
    limit.is_some_and(|limit| produced as u64 >= limit)
}

fn run_scan(query: &Query, scan: &ScanSource, rng: &mut ChaCha8Rng) -> Result<MaterializedRows> {
    let projection = ColumnProjection::resolve(&query.columns);
    let columns = query
        .columns
        .iter()
        .map(|column| match column {
            ScanColumn::Value => ResultColumn {
                name: scan.column_name.clone(),
                column_type: scan.column_type,
            },
            ScanColumn::RowId => ResultColumn {
                name: ROWID_COLUMN.to_string(),
                column_type: LogicalType::BigInt,
            },
        })
        .collect();

    let mut cursor = BatchCursor::default();
    let mut rows: Vec<Vec<ScalarValue>> = Vec::new();
    let mut skipped = 0_u64;

    'stream: loop {
        if limit_reached(query.limit, rows.len()) {
            break;
        }
        let count = cursor.next_batch_size();
        if count == 0 {
            break;
        }
        let start = cursor.rows_generated();

        let mut slots: Vec<Option<ColumnData>> = vec![None; projection.column_count()];
        if let Some(index) = projection.value_index() {
            slots[index] = Some(scan.generator.fill(count, rng));
        }
        if let Some(index) = projection.rowid_index() {
            slots[index] = Some(fill_rowid_column(start, count)?);
        }
        let batch = RowBatch::new(slots.into_iter().flatten().collect());
        cursor.advance(count);
        debug!(start, rows = batch.row_count(), "pulled batch");

        for row in 0..batch.row_count() {
            let rowid = (start + row as u64) as i64;
            if !query
                .rowid_filters
                .iter()
                .all(|filter| filter.matches(rowid))
            {
                continue;
            }
            if skipped < query.offset {
                skipped += 1;
                continue;
            }
            if limit_reached(query.limit, rows.len()) {
                break 'stream;
            }
            rows.push(
                (0..batch.column_count())
                    .map(|column| batch.column(column).value_at(row))
                    .collect(),
            );
        }
    }

    Ok(MaterializedRows { columns, rows })
}

struct ChildScan {
    scan: ScanSource,
    cursor: BatchCursor,
}

fn run_composed(
    query: &Query,
    plan: &ComposedPlan,
    registry: &FunctionRegistry,
    catalog: &Catalog,
    rng: &mut ChaCha8Rng,
) -> Result<MaterializedRows> {
    validate_plan(plan)?;
    if !query.rowid_filters.is_empty() {
        return Err(Error::InvalidInput(format!(
            "function '{}' does not expose a rowid column",
            query.function
        )));
    }
    debug!(plan = %plan, "executing composed plan");

    let mut children = Vec::with_capacity(plan.calls.len());
    for call in &plan.calls {
        let function = registry.get(&call.function).ok_or_else(|| {
            Error::Internal(format!(
                "composed plan references unknown function '{}'",
                call.function
            ))
        })?;
        let params = validate_params(None, function.parameters(), function.name())?;
        match function.bind(&BindContext { params, catalog })? {
            Binding::Scan(scan) => children.push(ChildScan {
                scan,
                cursor: BatchCursor::default(),
            }),
            Binding::Rewrite(_) => {
                return Err(Error::Internal(format!(
                    "composed plan call '{}' is not a scannable generator",
                    call.function
                )));
            }
        }
    }

    let columns: Vec<ResultColumn> = plan
        .outputs
        .iter()
        .map(|output| {
            debug_assert_eq!(
                output.column_type, children[output.call].scan.column_type,
                "plan output type disagrees with its generator"
            );
            ResultColumn {
                name: output.name.clone(),
                column_type: output.column_type,
            }
        })
        .collect();

    let mut rows: Vec<Vec<ScalarValue>> = Vec::new();
    let mut skipped = 0_u64;

    'stream: loop {
        if limit_reached(query.limit, rows.len()) {
            break;
        }
        let count = children[0].cursor.next_batch_size();
        debug_assert!(
            children
                .iter()
                .all(|child| child.cursor.next_batch_size() == count),
            "composed plan children advance in lockstep"
        );
        if count == 0 {
            break;
        }
        let start = children[0].cursor.rows_generated();

        let mut buffers = Vec::with_capacity(children.len());
        for child in &mut children {
            buffers.push(child.scan.generator.fill(count, rng));
            child.cursor.advance(count);
        }
        debug!(start, rows = count, "pulled composed batch");

        for row in 0..count {
            if skipped < query.offset {
                skipped += 1;
                continue;
            }
            if limit_reached(query.limit, rows.len()) {
                break 'stream;
            }
            rows.push(
                plan.outputs
                    .iter()
                    .map(|output| buffers[output.call].value_at(row))
                    .collect(),
            );
        }
    }

    Ok(MaterializedRows { columns, rows })
}
