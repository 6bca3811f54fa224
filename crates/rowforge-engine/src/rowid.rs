use rowforge_core::{ColumnData, Error, Result};

/// Name of the virtual row identifier column.
pub const ROWID_COLUMN: &str = "rowid";

/// Fills a rowid buffer for a batch starting at the given stream offset.
///
/// Row identifiers are a pure function of position: row `i` of a batch
/// starting at offset `start` gets rowid `start + i`, regardless of any
/// filtering applied downstream. Offsets past `i64::MAX` have no
/// representation and fail instead of wrapping.
pub fn fill_rowid_column(start: u64, count: usize) -> Result<ColumnData> {
    let count = count as u64;
    if count > 0 && start > i64::MAX as u64 - (count - 1) {
        return Err(Error::OutOfRange(
            "rowid overflow: cannot generate row ids beyond i64::MAX".to_string(),
        ));
    }
    let mut values = Vec::with_capacity(count as usize);
    for offset in 0..count {
        values.push((start + offset) as i64);
    }
    Ok(ColumnData::Int64(values))
}
