use crate::types::LogicalType;
use crate::value::ScalarValue;

/// One column's values for a single batch, stored as a typed buffer.
///
/// Generators write whole buffers at a time; consumers read cells back out
/// through [`ColumnData::value_at`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Bool(Vec<bool>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Text(Vec<String>),
}

impl ColumnData {
    /// The logical type stored in this buffer.
    pub fn column_type(&self) -> LogicalType {
        match self {
            ColumnData::Bool(_) => LogicalType::Boolean,
            ColumnData::Int32(_) => LogicalType::Integer,
            ColumnData::Int64(_) => LogicalType::BigInt,
            ColumnData::Text(_) => LogicalType::Varchar,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Bool(values) => values.len(),
            ColumnData::Int32(values) => values.len(),
            ColumnData::Int64(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads one cell, cloning text values out of the buffer.
    pub fn value_at(&self, row: usize) -> ScalarValue {
        match self {
            ColumnData::Bool(values) => ScalarValue::Bool(values[row]),
            ColumnData::Int32(values) => ScalarValue::Int32(values[row]),
            ColumnData::Int64(values) => ScalarValue::Int64(values[row]),
            ColumnData::Text(values) => ScalarValue::Text(values[row].clone()),
        }
    }
}

/// A batch of rows in columnar form.
///
/// Every column holds exactly `row_count` values. The batch width is decided
/// by the cursor before the columns are filled, so mismatched buffers are a
/// bug in the caller.
#[derive(Debug, Clone)]
pub struct RowBatch {
    columns: Vec<ColumnData>,
    row_count: usize,
}

impl RowBatch {
    pub fn new(columns: Vec<ColumnData>) -> Self {
        debug_assert!(!columns.is_empty(), "a batch carries at least one column");
        let row_count = columns.first().map_or(0, |column| column.len());
        debug_assert!(
            columns.iter().all(|column| column.len() == row_count),
            "all columns in a batch hold the same number of rows"
        );
        RowBatch { columns, row_count }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> &ColumnData {
        &self.columns[index]
    }

    pub fn columns(&self) -> &[ColumnData] {
        &self.columns
    }
}
