//! Search Engine: single-byte and substring search, forward and reverse,
//! restricted to an inclusive `[left_pos, right_pos]` window.
//!
//! Substring search runs one of four interchangeable strategies selected by
//! [`SearchStrategy`](crate::SearchStrategy). They differ only in speed: for
//! the same data, window and pattern they return the same offset.
//!
//! Results are `Ok(Some(offset))` for a match (offsets are relative to the
//! start of `data`, not the window), `Ok(None)` when nothing matches, and
//! `Err(_)` when the arguments break the buffer contract.

mod bmh;
mod brute;
mod library;
mod monotone;
#[cfg(feature = "fuzzing")]
pub mod strategy;
#[cfg(not(feature = "fuzzing"))]
pub(crate) mod strategy;

#[cfg(test)]
mod tests;

use crate::{Context, contract, error::Error};

impl Context {
    /// First offset of `item` in `data[left_pos..=right_pos]`.
    ///
    /// # Errors
    ///
    /// - [`Error::License`] if the context is unlicensed.
    /// - [`Error::BigRight`] if `right_pos` is `usize::MAX` or not below
    ///   `data.len()`.
    /// - [`Error::BigLeft`] if `left_pos > right_pos`.
    pub fn find_single(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        item: u8,
    ) -> Result<Option<usize>, Error> {
        const CALL: &str = "find_single";
        self.check_license(CALL)?;
        contract::window(CALL, data.len(), left_pos, right_pos)?;

        let hay = &data[left_pos..=right_pos];
        Ok(strategy::find_byte(self.options().strategy, hay, item).map(|p| p + left_pos))
    }

    /// Last offset of `item` in `data[left_pos..=right_pos]`.
    ///
    /// # Errors
    ///
    /// Same as [`Context::find_single`].
    pub fn rfind_single(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        item: u8,
    ) -> Result<Option<usize>, Error> {
        const CALL: &str = "rfind_single";
        self.check_license(CALL)?;
        contract::window(CALL, data.len(), left_pos, right_pos)?;

        let hay = &data[left_pos..=right_pos];
        Ok(strategy::rfind_byte(self.options().strategy, hay, item).map(|p| p + left_pos))
    }

    /// First offset at which `items` occurs entirely inside
    /// `data[left_pos..=right_pos]`.
    ///
    /// # Errors
    ///
    /// - [`Error::License`] if the context is unlicensed.
    /// - [`Error::ZeroCount`] if `items` is empty.
    /// - [`Error::BigRight`] / [`Error::BigLeft`] for an invalid window.
    /// - [`Error::BigCount`] if `items` is longer than the window.
    pub fn find(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<Option<usize>, Error> {
        const CALL: &str = "find";
        let hay = self.pattern_window(CALL, data, left_pos, right_pos, items)?;
        Ok(strategy::find(self.options().strategy, hay, items).map(|p| p + left_pos))
    }

    /// Last offset at which `items` occurs entirely inside
    /// `data[left_pos..=right_pos]`.
    ///
    /// # Errors
    ///
    /// Same as [`Context::find`].
    pub fn rfind(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<Option<usize>, Error> {
        const CALL: &str = "rfind";
        let hay = self.pattern_window(CALL, data, left_pos, right_pos, items)?;
        Ok(strategy::rfind(self.options().strategy, hay, items).map(|p| p + left_pos))
    }

    /// Validates a pattern search and returns the window it covers.
    pub(crate) fn pattern_window<'d>(
        &self,
        call: &'static str,
        data: &'d [u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<&'d [u8], Error> {
        self.check_license(call)?;
        contract::items(call, items)?;
        contract::window(call, data.len(), left_pos, right_pos)?;
        contract::fits(call, items.len(), left_pos, right_pos)?;
        Ok(&data[left_pos..=right_pos])
    }
}
