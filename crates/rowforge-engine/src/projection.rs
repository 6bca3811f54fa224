/// Columns a generator scan can be asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanColumn {
    /// The generated value column.
    Value,
    /// The virtual row identifier column.
    RowId,
}

/// Where each requested column lands in the output batch.
///
/// Resolved once per invocation. Each column appears at most once and at
/// least one column is requested; the engine never issues a scan that needs
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnProjection {
    value_index: Option<usize>,
    rowid_index: Option<usize>,
}

impl ColumnProjection {
    pub fn resolve(columns: &[ScanColumn]) -> Self {
        debug_assert!(!columns.is_empty(), "a scan requests at least one column");
        let mut projection = ColumnProjection::default();
        for (index, column) in columns.iter().enumerate() {
            match column {
                ScanColumn::Value => {
                    debug_assert!(
                        projection.value_index.is_none(),
                        "value column requested twice"
                    );
                    projection.value_index = Some(index);
                }
                ScanColumn::RowId => {
                    debug_assert!(
                        projection.rowid_index.is_none(),
                        "rowid column requested twice"
                    );
                    projection.rowid_index = Some(index);
                }
            }
        }
        projection
    }

    /// Output slot of the value column, when requested.
    pub fn value_index(&self) -> Option<usize> {
        self.value_index
    }

    /// Output slot of the rowid column, when requested.
    pub fn rowid_index(&self) -> Option<usize> {
        self.rowid_index
    }

    pub fn column_count(&self) -> usize {
        usize::from(self.value_index.is_some()) + usize::from(self.rowid_index.is_some())
    }
}
