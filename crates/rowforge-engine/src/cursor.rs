/// Rows delivered per batch, matching the host engine's vector width.
pub const STANDARD_BATCH_WIDTH: usize = 2048;

/// Default cap on rows a single invocation will generate.
pub const DEFAULT_MAX_GENERATED_ROWS: u64 = STANDARD_BATCH_WIDTH as u64 * 64;

/// Tracks how far an invocation has progressed toward its row cap.
///
/// The cursor only moves forward. Callers ask for the next batch size, fill
/// that many rows, and advance; a zero-sized batch means the stream is
/// exhausted, not that an error occurred.
#[derive(Debug, Clone)]
pub struct BatchCursor {
    rows_generated: u64,
    max_rows: u64,
}

impl BatchCursor {
    pub fn new(max_rows: u64) -> Self {
        BatchCursor {
            rows_generated: 0,
            max_rows,
        }
    }

    /// Absolute offset of the next row in the unfiltered stream.
    pub fn rows_generated(&self) -> u64 {
        self.rows_generated
    }

    pub fn remaining(&self) -> u64 {
        debug_assert!(
            self.rows_generated <= self.max_rows,
            "cursor advanced past its row cap"
        );
        self.max_rows - self.rows_generated
    }

    /// Number of rows the next batch should hold. Zero means exhausted.
    pub fn next_batch_size(&self) -> usize {
        self.remaining().min(STANDARD_BATCH_WIDTH as u64) as usize
    }

    pub fn advance(&mut self, rows: usize) {
        self.rows_generated += rows as u64;
        debug_assert!(
            self.rows_generated <= self.max_rows,
            "cursor advanced past its row cap"
        );
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl Default for BatchCursor {
    fn default() -> Self {
        BatchCursor::new(DEFAULT_MAX_GENERATED_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_is_a_whole_number_of_batches() {
        assert_eq!(DEFAULT_MAX_GENERATED_ROWS, 131_072);
        assert_eq!(DEFAULT_MAX_GENERATED_ROWS % STANDARD_BATCH_WIDTH as u64, 0);
    }

    #[test]
    fn serves_full_batches_until_the_cap() {
        let mut cursor = BatchCursor::default();
        let mut total = 0_u64;
        let mut batches = 0;
        loop {
            let size = cursor.next_batch_size();
            if size == 0 {
                break;
            }
            assert_eq!(size, STANDARD_BATCH_WIDTH);
            cursor.advance(size);
            total += size as u64;
            batches += 1;
        }
        assert_eq!(total, DEFAULT_MAX_GENERATED_ROWS);
        assert_eq!(batches, 64);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn truncates_the_final_batch_to_the_cap() {
        let mut cursor = BatchCursor::new(STANDARD_BATCH_WIDTH as u64 + 10);
        assert_eq!(cursor.next_batch_size(), STANDARD_BATCH_WIDTH);
        cursor.advance(STANDARD_BATCH_WIDTH);
        assert_eq!(cursor.next_batch_size(), 10);
        cursor.advance(10);
        assert_eq!(cursor.next_batch_size(), 0);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn reports_progress_as_an_absolute_offset() {
        let mut cursor = BatchCursor::new(100);
        assert_eq!(cursor.rows_generated(), 0);
        cursor.advance(40);
        assert_eq!(cursor.rows_generated(), 40);
        assert_eq!(cursor.remaining(), 60);
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn a_zero_cap_is_exhausted_from_the_start() {
        let cursor = BatchCursor::new(0);
        assert_eq!(cursor.next_batch_size(), 0);
        assert!(cursor.is_exhausted());
    }
}
