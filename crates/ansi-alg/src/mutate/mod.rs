//! Mutation Engine: in-place insert, positional remove, pattern remove and
//! trimming.
//!
//! These are the only calls that change `size`. Each one validates every
//! argument first; on failure neither `data` nor `size` is written. On
//! success the terminator is rewritten at the new `size` and nothing past it
//! is touched.

#[cfg(test)]
mod tests;

use crate::{
    Context, TERMINATOR, byte_set::ByteSet, contract, error::Error, search::strategy::Searcher,
};

/// Which ends of the window [`Context::trim_window`] strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ends {
    Left,
    Right,
    Both,
}

impl Context {
    /// Inserts `items` at `left_pos`, shifting `data[left_pos..size]` right.
    ///
    /// `left_pos == *size` appends. `data` must hold at least `capacity + 1`
    /// bytes.
    ///
    /// # Errors
    ///
    /// In checking order:
    /// - [`Error::License`] if the context is unlicensed.
    /// - [`Error::Data`] if `data` is empty.
    /// - [`Error::Capacity`] if `capacity` is `0`, `usize::MAX`, or does not
    ///   fit in `data`.
    /// - [`Error::BigSize`] if `*size > capacity`.
    /// - [`Error::Terminator`] if `data[*size]` is not `0`.
    /// - [`Error::ZeroCount`] if `items` is empty.
    /// - [`Error::BigLeft`] if `left_pos > *size`.
    /// - [`Error::BigCount`] if `*size + items.len() > capacity`.
    pub fn insert(
        &self,
        data: &mut [u8],
        size: &mut usize,
        capacity: usize,
        left_pos: usize,
        items: &[u8],
    ) -> Result<(), Error> {
        const CALL: &str = "insert";
        let len = *size;
        self.check_license(CALL)?;
        contract::capacity(CALL, data, capacity, len)?;
        contract::items(CALL, items)?;
        contract::ensure(CALL, left_pos <= len, Error::BigLeft)?;
        let count = items.len();
        let fits = len.checked_add(count).is_some_and(|n| n <= capacity);
        contract::ensure(CALL, fits, Error::BigCount)?;

        let new_len = len + count;
        data.copy_within(left_pos..len, left_pos + count);
        data[left_pos..left_pos + count].copy_from_slice(items);
        data[new_len] = TERMINATOR;
        *size = new_len;
        Ok(())
    }

    /// Removes `count` bytes starting at `left_pos`.
    ///
    /// # Errors
    ///
    /// In checking order:
    /// - [`Error::License`] if the context is unlicensed.
    /// - [`Error::Data`] if `data` is empty.
    /// - [`Error::ZeroSize`] if `*size == 0`.
    /// - [`Error::BigSize`] if `data` has no byte at offset `*size`.
    /// - [`Error::Terminator`] if `data[*size]` is not `0`.
    /// - [`Error::ZeroCount`] if `count == 0`.
    /// - [`Error::BigLeft`] if `left_pos >= *size`.
    /// - [`Error::BigCount`] if `left_pos + count > *size`.
    pub fn remove_from(
        &self,
        data: &mut [u8],
        size: &mut usize,
        left_pos: usize,
        count: usize,
    ) -> Result<(), Error> {
        const CALL: &str = "remove_from";
        let len = *size;
        self.check_license(CALL)?;
        contract::storage(CALL, data, len, true)?;
        contract::ensure(CALL, count != 0, Error::ZeroCount)?;
        contract::ensure(CALL, left_pos < len, Error::BigLeft)?;
        contract::ensure(CALL, count <= len - left_pos, Error::BigCount)?;

        data.copy_within(left_pos + count..len, left_pos);
        let new_len = len - count;
        data[new_len] = TERMINATOR;
        *size = new_len;
        Ok(())
    }

    /// Removes every non-overlapping occurrence of `items` lying entirely
    /// inside `data[left_pos..=right_pos]`.
    ///
    /// Occurrences are found left to right, each search starting just after
    /// the previous match, and survivors are compacted leftwards in the same
    /// pass.
    ///
    /// # Errors
    ///
    /// In checking order:
    /// - [`Error::License`] if the context is unlicensed.
    /// - [`Error::Data`], [`Error::ZeroSize`], [`Error::BigSize`],
    ///   [`Error::Terminator`] as for [`Context::remove_from`].
    /// - [`Error::ZeroCount`] if `items` is empty.
    /// - [`Error::BigRight`] if `right_pos >= *size`.
    /// - [`Error::BigLeft`] if `left_pos > right_pos`.
    /// - [`Error::BigCount`] if `items` is longer than the window.
    pub fn remove(
        &self,
        data: &mut [u8],
        size: &mut usize,
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<(), Error> {
        const CALL: &str = "remove";
        let len = *size;
        self.mutable_window(CALL, data, len, left_pos, right_pos, items)?;
        contract::fits(CALL, items.len(), left_pos, right_pos)?;

        let m = items.len();
        let searcher = Searcher::new(self.options().strategy, items);
        let end = right_pos + 1;
        let mut read = left_pos;
        let mut write = left_pos;
        while end - read >= m {
            let Some(offset) = searcher.find(&data[read..end]) else {
                break;
            };
            let hit = read + offset;
            data.copy_within(read..hit, write);
            write += offset;
            read = hit + m;
        }

        if read != write {
            data.copy_within(read..len, write);
            let new_len = len - (read - write);
            data[new_len] = TERMINATOR;
            *size = new_len;
        }
        Ok(())
    }

    /// Strips bytes found in `items` from the left end of
    /// `data[left_pos..=right_pos]`, stopping at the first byte not in the
    /// set.
    ///
    /// # Errors
    ///
    /// As [`Context::remove`], except that there is no [`Error::BigCount`]:
    /// the item set may be larger than the window.
    pub fn trim_left(
        &self,
        data: &mut [u8],
        size: &mut usize,
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<(), Error> {
        self.trim_window("trim_left", Ends::Left, data, size, left_pos, right_pos, items)
    }

    /// Strips bytes found in `items` from the right end of
    /// `data[left_pos..=right_pos]`, stopping at the first byte not in the
    /// set.
    ///
    /// # Errors
    ///
    /// Same as [`Context::trim_left`].
    pub fn trim_right(
        &self,
        data: &mut [u8],
        size: &mut usize,
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<(), Error> {
        self.trim_window("trim_right", Ends::Right, data, size, left_pos, right_pos, items)
    }

    /// [`Context::trim_left`] then [`Context::trim_right`] over the same
    /// window, validated once.
    ///
    /// # Errors
    ///
    /// Same as [`Context::trim_left`].
    pub fn trim(
        &self,
        data: &mut [u8],
        size: &mut usize,
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<(), Error> {
        self.trim_window("trim", Ends::Both, data, size, left_pos, right_pos, items)
    }

    #[allow(clippy::too_many_arguments)]
    fn trim_window(
        &self,
        call: &'static str,
        ends: Ends,
        data: &mut [u8],
        size: &mut usize,
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<(), Error> {
        let len = *size;
        self.mutable_window(call, data, len, left_pos, right_pos, items)?;
        let set = ByteSet::new(items);

        // Bytes to drop from each end; the window is `[left_pos, right_pos]`.
        let mut head = 0;
        if matches!(ends, Ends::Left | Ends::Both) {
            head = data[left_pos..=right_pos]
                .iter()
                .position(|&b| !set.contains(b))
                .unwrap_or(right_pos - left_pos + 1);
        }
        let mut tail = 0;
        if matches!(ends, Ends::Right | Ends::Both) && left_pos + head <= right_pos {
            let keep = &data[left_pos + head..=right_pos];
            tail = keep.len() - keep.iter().rposition(|&b| !set.contains(b)).map_or(0, |p| p + 1);
        }
        if head == 0 && tail == 0 {
            return Ok(());
        }

        // Close the gap at the right end first, then the one at the left.
        let kept_end = right_pos + 1 - tail;
        data.copy_within(right_pos + 1..len, kept_end);
        data.copy_within(left_pos + head..len - tail, left_pos);
        let new_len = len - head - tail;
        data[new_len] = TERMINATOR;
        *size = new_len;
        Ok(())
    }

    /// Shared checks for window-based mutations.
    fn mutable_window(
        &self,
        call: &'static str,
        data: &[u8],
        len: usize,
        left_pos: usize,
        right_pos: usize,
        items: &[u8],
    ) -> Result<(), Error> {
        self.check_license(call)?;
        contract::storage(call, data, len, true)?;
        contract::items(call, items)?;
        contract::window(call, len, left_pos, right_pos)
    }
}
