//! Comparison & Counting.

use crate::{Context, contract, error::Error, search::strategy::Searcher};

/// Outcome of [`Context::compare`]. Equality only; there is no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareResult {
    /// The compared bytes are identical.
    Equal,
    /// The compared bytes differ (or, for a full compare, differ in length).
    NonEqual,
}

impl From<bool> for CompareResult {
    fn from(equal: bool) -> Self {
        if equal { Self::Equal } else { Self::NonEqual }
    }
}

impl Context {
    /// Compares `data` from `left_pos` with `items`.
    ///
    /// With `partial` set, only `data[left_pos..left_pos + items.len()]` is
    /// compared. Otherwise the whole tail `data[left_pos..]` must equal
    /// `items`.
    ///
    /// # Errors
    ///
    /// - [`Error::License`] if the context is unlicensed.
    /// - [`Error::Size`] if `data` is empty.
    /// - [`Error::ZeroCount`] if `items` is empty.
    /// - [`Error::BigLeft`] if `left_pos >= data.len()`.
    /// - [`Error::BigCount`] if `left_pos + items.len() > data.len()`.
    pub fn compare(
        &self,
        data: &[u8],
        left_pos: usize,
        items: &[u8],
        partial: bool,
    ) -> Result<CompareResult, Error> {
        const CALL: &str = "compare";
        let size = data.len();
        self.check_license(CALL)?;
        contract::ensure(CALL, size != 0, Error::Size)?;
        contract::items(CALL, items)?;
        contract::ensure(CALL, left_pos < size, Error::BigLeft)?;
        contract::ensure(CALL, items.len() <= size - left_pos, Error::BigCount)?;

        let tail = &data[left_pos..];
        let equal = if partial {
            &tail[..items.len()] == items
        } else {
            tail == items
        };
        Ok(equal.into())
    }

    /// Number of occurrences of `items` inside `data[left_pos..=right_pos]`.
    ///
    /// With `allow_overlapped` the scan resumes one byte after each match,
    /// otherwise right after its end.
    ///
    /// # Errors
    ///
    /// Same as [`Context::find`].
    pub fn count(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
        allow_overlapped: bool,
    ) -> Result<usize, Error> {
        const CALL: &str = "count";
        let hay = self.pattern_window(CALL, data, left_pos, right_pos, items)?;
        let step = if allow_overlapped { 1 } else { items.len() };
        let searcher = Searcher::new(self.options().strategy, items);

        let mut total = 0;
        let mut from = 0;
        while let Some(hit) = searcher.find(&hay[from..]) {
            total += 1;
            from += hit + step;
        }
        Ok(total)
    }
}
