//! Classification Search: first/last byte in a window that is (or is not) a
//! member of an item set.
//!
//! `items` is an unordered set, not a substring; duplicates are harmless.

use crate::{Context, byte_set::ByteSet, contract, error::Error};

impl Context {
    /// First offset in `data[left_pos..=right_pos]` whose byte is in `items`.
    ///
    /// # Errors
    ///
    /// - [`Error::License`] if the context is unlicensed.
    /// - [`Error::ZeroCount`] if `items` is empty.
    /// - [`Error::BigRight`] / [`Error::BigLeft`] for an invalid window.
    pub fn first_of(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<Option<usize>, Error> {
        let (hay, set) = self.class_window("first_of", data, left_pos, right_pos, items)?;
        Ok(hay.iter().position(|&b| set.contains(b)).map(|p| p + left_pos))
    }

    /// First offset in `data[left_pos..=right_pos]` whose byte is not in
    /// `items`.
    ///
    /// # Errors
    ///
    /// Same as [`Context::first_of`].
    pub fn first_not_of(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<Option<usize>, Error> {
        let (hay, set) = self.class_window("first_not_of", data, left_pos, right_pos, items)?;
        Ok(hay.iter().position(|&b| !set.contains(b)).map(|p| p + left_pos))
    }

    /// Last offset in `data[left_pos..=right_pos]` whose byte is in `items`.
    ///
    /// # Errors
    ///
    /// Same as [`Context::first_of`].
    pub fn last_of(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<Option<usize>, Error> {
        let (hay, set) = self.class_window("last_of", data, left_pos, right_pos, items)?;
        Ok(hay.iter().rposition(|&b| set.contains(b)).map(|p| p + left_pos))
    }

    /// Last offset in `data[left_pos..=right_pos]` whose byte is not in
    /// `items`.
    ///
    /// # Errors
    ///
    /// Same as [`Context::first_of`].
    pub fn last_not_of(
        &self,
        data: &[u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<Option<usize>, Error> {
        let (hay, set) = self.class_window("last_not_of", data, left_pos, right_pos, items)?;
        Ok(hay.iter().rposition(|&b| !set.contains(b)).map(|p| p + left_pos))
    }

    fn class_window<'d>(
        &self,
        call: &'static str,
        data: &'d [u8],
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<(&'d [u8], ByteSet), Error> {
        self.check_license(call)?;
        contract::items(call, items)?;
        contract::window(call, data.len(), left_pos, right_pos)?;
        Ok((&data[left_pos..=right_pos], ByteSet::new(items)))
    }
}
