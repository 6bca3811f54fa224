//! Host-side execution of row-generator table functions.
//!
//! The engine owns the protocol between a host query and a registered
//! generator: bind-time parameter validation, the forward-only batch cursor,
//! output column projection, the virtual rowid column, and a single-threaded
//! pull executor that stands in for the host's scan operator.

pub mod cursor;
pub mod executor;
pub mod function;
pub mod params;
pub mod projection;
pub mod rowid;

pub use cursor::{BatchCursor, DEFAULT_MAX_GENERATED_ROWS, STANDARD_BATCH_WIDTH};
pub use executor::{CmpOp, Executor, MaterializedRows, Query, ResultColumn, RowIdFilter};
pub use function::{
    BindContext, Binding, FunctionRegistry, RowGenerator, ScanSource, TableFunction, VALUE_COLUMN,
};
pub use params::{validate_params, ParamKind, ParamMap, ParamSpec};
pub use projection::{ColumnProjection, ScanColumn};
pub use rowid::{fill_rowid_column, ROWID_COLUMN};
