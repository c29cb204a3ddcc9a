//! Buffer contract checks shared by every entry point.
//!
//! Each helper either passes or returns the first violated rule. Entry points
//! chain them with `?` in a fixed order and only then touch the buffer, so a
//! rejected call never writes anything.

use crate::{TERMINATOR, error::Error};

#[inline]
fn reject(call: &'static str, err: Error) -> Error {
    log::trace!("{call}: rejected: {err}");
    err
}

#[inline]
pub(crate) fn ensure(call: &'static str, ok: bool, err: Error) -> Result<(), Error> {
    if ok { Ok(()) } else { Err(reject(call, err)) }
}

/// Storage of a mutable buffer holding `size` bytes plus the terminator.
///
/// Checks, in order: storage present, non-empty content (if `need_content`),
/// terminator slot inside storage, terminator value.
pub(crate) fn storage(
    call: &'static str,
    data: &[u8],
    size: usize,
    need_content: bool,
) -> Result<(), Error> {
    ensure(call, !data.is_empty(), Error::Data)?;
    ensure(call, !(need_content && size == 0), Error::ZeroSize)?;
    ensure(call, size < data.len(), Error::BigSize)?;
    ensure(call, data[size] == TERMINATOR, Error::Terminator)
}

/// `capacity` must leave room for the terminator and fit in `data`.
pub(crate) fn capacity(
    call: &'static str,
    data: &[u8],
    capacity: usize,
    size: usize,
) -> Result<(), Error> {
    ensure(call, !data.is_empty(), Error::Data)?;
    ensure(
        call,
        capacity != 0 && capacity != usize::MAX && capacity < data.len(),
        Error::Capacity,
    )?;
    ensure(call, size <= capacity, Error::BigSize)?;
    ensure(call, data[size] == TERMINATOR, Error::Terminator)
}

/// A pattern or item set must not be empty.
#[inline]
pub(crate) fn items(call: &'static str, items: &[u8]) -> Result<(), Error> {
    ensure(call, !items.is_empty(), Error::ZeroCount)
}

/// Inclusive `[left, right]` window inside `len` bytes.
#[inline]
pub(crate) fn window(
    call: &'static str,
    len: usize,
    left: usize,
    right: usize,
) -> Result<(), Error> {
    ensure(call, right != usize::MAX && right < len, Error::BigRight)?;
    ensure(call, left <= right, Error::BigLeft)
}

/// `count` bytes must fit inside an already validated window.
#[inline]
pub(crate) fn fits(
    call: &'static str,
    count: usize,
    left: usize,
    right: usize,
) -> Result<(), Error> {
    ensure(call, count <= right - left + 1, Error::BigCount)
}
