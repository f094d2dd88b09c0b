//! Incremental inspection of raw trip records.

use crate::types::{Dataset, TripRecord};

/// Default number of records returned by [`RecordPager::peek`].
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Stateful cursor over one filtered [`Dataset`].
///
/// The pager never errors: windows past the end of the dataset are empty, and
/// exhaustion is observable via [`RecordPager::is_exhausted`] without having
/// to peek. The caller decides when to stop.
#[derive(Debug)]
pub struct RecordPager<'a> {
    dataset: &'a Dataset,
    cursor: usize,
    page_size: usize,
}

impl<'a> RecordPager<'a> {
    /// Create a pager over `dataset` with the default page size.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::with_page_size(dataset, DEFAULT_PAGE_SIZE)
    }

    /// Create a pager with a custom page size.
    ///
    /// # Panics
    ///
    /// Panics if `page_size == 0`.
    pub fn with_page_size(dataset: &'a Dataset, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be > 0");
        Self {
            dataset,
            cursor: 0,
            page_size,
        }
    }

    /// Records in `[cursor, cursor + page_size)`, clipped to dataset bounds.
    ///
    /// May return fewer than `page_size` records, or an empty slice once the
    /// cursor is at or past the end. Does not move the cursor.
    pub fn peek(&self) -> &'a [TripRecord] {
        let len = self.dataset.record_count();
        let start = self.cursor.min(len);
        let end = (start + self.page_size).min(len);
        &self.dataset.records[start..end]
    }

    /// Move the cursor forward by `n` records.
    ///
    /// `n` is caller-supplied and need not equal the page size. The cursor may
    /// move past the end of the dataset; subsequent peeks are then empty.
    pub fn advance(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Page size used by [`Self::peek`].
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records at or past the cursor.
    pub fn remaining(&self) -> usize {
        self.dataset.record_count().saturating_sub(self.cursor)
    }

    /// Whether the cursor is at or past the end of the dataset.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.dataset.record_count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::RecordPager;
    use crate::types::{City, Dataset, OptionalColumns, TripRecord};

    fn dataset_of(n: usize) -> Dataset {
        let records = (0..n)
            .map(|i| {
                let start = NaiveDate::from_ymd_opt(2017, 1, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap();
                TripRecord::new(start, None, 60, format!("start-{i}"), "end", "Subscriber")
            })
            .collect();
        Dataset::new(City::Washington, OptionalColumns::default(), records)
    }

    #[test]
    fn peek_clips_to_bounds() {
        let ds = dataset_of(3);
        let pager = RecordPager::new(&ds);
        assert_eq!(pager.peek().len(), 3);
    }

    #[test]
    fn peek_on_empty_dataset_is_empty() {
        let ds = dataset_of(0);
        let pager = RecordPager::new(&ds);
        assert!(pager.peek().is_empty());
        assert!(pager.is_exhausted());
    }

    #[test]
    fn advance_past_end_is_not_an_error() {
        let ds = dataset_of(3);
        let mut pager = RecordPager::new(&ds);
        pager.advance(100);
        assert!(pager.peek().is_empty());
        assert_eq!(pager.remaining(), 0);
        pager.advance(usize::MAX);
        assert!(pager.peek().is_empty());
    }

    #[test]
    #[should_panic(expected = "page_size must be > 0")]
    fn zero_page_size_panics() {
        let ds = dataset_of(1);
        let _ = RecordPager::with_page_size(&ds, 0);
    }
}
