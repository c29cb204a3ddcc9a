//! C-ABI entry points.
//!
//! These mirror the safe [`Context`] methods with raw pointers, a sentinel
//! return value, and an [`AlgError`] out-parameter. Null pointers and
//! aliasing between `data` and `items`, which safe Rust rules out by
//! construction, are detected here before any slice is formed:
//!
//! 1. a null or unlicensed context yields [`AlgError::License`];
//! 2. null `data`, `size` and `items` yield `Data`, `Size` and `Items`;
//! 3. mutating calls reject `items` overlapping the bytes they borrow
//!    (`size + count + 1` for insert, `size + 1` otherwise) with `Overlap`;
//! 4. everything else is checked by the safe method, in its order.
//!
//! With the `ffi` feature the functions are exported unmangled.

use core::{ptr, slice};

use crate::{CompareResult, Context, error::Error};

/// Error code written by the C-ABI entry points. `None` means success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgError {
    /// Success.
    None = 0,
    /// See [`Error::License`].
    License = 1,
    /// See [`Error::Data`].
    Data = 2,
    /// See [`Error::Size`].
    Size = 3,
    /// See [`Error::Capacity`].
    Capacity = 4,
    /// See [`Error::ZeroSize`].
    ZeroSize = 5,
    /// See [`Error::BigSize`].
    BigSize = 6,
    /// See [`Error::ZeroCount`].
    ZeroCount = 7,
    /// See [`Error::BigCount`].
    BigCount = 8,
    /// See [`Error::BigLeft`].
    BigLeft = 9,
    /// See [`Error::BigRight`].
    BigRight = 10,
    /// See [`Error::Items`].
    Items = 11,
    /// See [`Error::Terminator`].
    Terminator = 12,
    /// See [`Error::Overlap`].
    Overlap = 13,
}

impl From<Error> for AlgError {
    fn from(err: Error) -> Self {
        match err {
            Error::License => Self::License,
            Error::Data => Self::Data,
            Error::Size => Self::Size,
            Error::Capacity => Self::Capacity,
            Error::ZeroSize => Self::ZeroSize,
            Error::BigSize => Self::BigSize,
            Error::ZeroCount => Self::ZeroCount,
            Error::BigCount => Self::BigCount,
            Error::BigLeft => Self::BigLeft,
            Error::BigRight => Self::BigRight,
            Error::Items => Self::Items,
            Error::Terminator => Self::Terminator,
            Error::Overlap => Self::Overlap,
        }
    }
}

impl<T> From<&Result<T, Error>> for AlgError {
    fn from(result: &Result<T, Error>) -> Self {
        match result {
            Ok(_) => Self::None,
            Err(err) => (*err).into(),
        }
    }
}

/// Compare verdict returned across the C ABI.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgCompare {
    /// The compared bytes are identical.
    Equal = 0,
    /// The compared bytes differ, or an error occurred.
    NonEqual = 1,
}

impl From<CompareResult> for AlgCompare {
    fn from(result: CompareResult) -> Self {
        match result {
            CompareResult::Equal => Self::Equal,
            CompareResult::NonEqual => Self::NonEqual,
        }
    }
}

/// Returned by searches and `count` for "not found" and on error.
pub const NOT_FOUND: usize = usize::MAX;

fn report(out: *mut AlgError, value: AlgError) {
    if !out.is_null() {
        // SAFETY: a non-null out-parameter points to writable storage per
        // the calling convention of every entry point.
        unsafe { out.write(value) };
    }
}

fn position(result: Result<Option<usize>, Error>, out: *mut AlgError) -> usize {
    report(out, AlgError::from(&result));
    result.ok().flatten().unwrap_or(NOT_FOUND)
}

/// # Safety
///
/// `ctx` is null or points to a live [`Context`].
unsafe fn context<'a>(ctx: *const Context) -> Result<&'a Context, Error> {
    // SAFETY: upheld by the caller.
    unsafe { ctx.as_ref() }.ok_or(Error::License)
}

fn overlaps(a: *const u8, a_len: usize, b: *const u8, b_len: usize) -> bool {
    let (a, b) = (a.addr(), b.addr());
    a_len != 0 && b_len != 0 && a < b.saturating_add(b_len) && b < a.saturating_add(a_len)
}

/// Borrows `len` bytes at `items`, or reports a null pointer.
///
/// # Safety
///
/// A non-null `items` must be readable for `len` bytes.
unsafe fn items_slice<'a>(items: *const u8, len: usize) -> Result<&'a [u8], Error> {
    if items.is_null() {
        return Err(Error::Items);
    }
    // SAFETY: upheld by the caller.
    Ok(unsafe { slice::from_raw_parts(items, len) })
}

/// Read-only call over `data[..=right_pos]` and `items[..count]`.
///
/// # Safety
///
/// See the `# Safety` section of the public search functions.
unsafe fn read_only<T>(
    ctx: *const Context,
    data: *const u8,
    right_pos: usize,
    items: *const u8,
    count: usize,
    call: impl FnOnce(&Context, &[u8], &[u8]) -> Result<T, Error>,
) -> Result<T, Error> {
    // SAFETY: upheld by the caller.
    let ctx = unsafe { context(ctx) }?;
    if data.is_null() {
        return Err(Error::Data);
    }
    // SAFETY: upheld by the caller.
    let items = unsafe { items_slice(items, count) }?;
    // An unrepresentable window is left to the safe checks to report.
    let data: &[u8] = match right_pos.checked_add(1) {
        // SAFETY: upheld by the caller.
        Some(len) => unsafe { slice::from_raw_parts(data, len) },
        None => &[],
    };
    call(ctx, data, items)
}

/// Mutating call over `data[..=*size]` and `items[..count]`.
///
/// # Safety
///
/// See the `# Safety` section of the public mutating functions.
unsafe fn in_place(
    ctx: *const Context,
    data: *mut u8,
    size: *mut usize,
    items: *const u8,
    count: usize,
    call: impl FnOnce(&Context, &mut [u8], &mut usize, &[u8]) -> Result<(), Error>,
) -> Result<(), Error> {
    // SAFETY: upheld by the caller.
    let ctx = unsafe { context(ctx) }?;
    if data.is_null() {
        return Err(Error::Data);
    }
    // SAFETY: upheld by the caller.
    let Some(size) = (unsafe { size.as_mut() }) else {
        return Err(Error::Size);
    };
    let storage = size.checked_add(1).ok_or(Error::BigSize)?;
    if items.is_null() {
        return Err(Error::Items);
    }
    if overlaps(data, storage, items, count) {
        return Err(Error::Overlap);
    }
    // SAFETY: upheld by the caller; the two regions are disjoint.
    let (data, items) = unsafe {
        (
            slice::from_raw_parts_mut(data, storage),
            slice::from_raw_parts(items, count),
        )
    };
    call(ctx, data, size, items)
}

/// Inserts `count` bytes from `items` into `data` at `left_pos`.
///
/// # Safety
///
/// - `ctx` is null or points to a live [`Context`].
/// - A non-null `data` is writable for `capacity + 1` bytes.
/// - A non-null `size` is readable and writable.
/// - A non-null `items` is readable for `count` bytes.
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
pub unsafe extern "C" fn ansi_alg_insert(
    ctx: *const Context,
    data: *mut u8,
    size: *mut usize,
    capacity: usize,
    left_pos: usize,
    items: *const u8,
    count: usize,
) -> AlgError {
    let run = || {
        // SAFETY: upheld by the caller.
        let ctx = unsafe { context(ctx) }?;
        if data.is_null() {
            return Err(Error::Data);
        }
        // SAFETY: upheld by the caller.
        let Some(size) = (unsafe { size.as_mut() }) else {
            return Err(Error::Size);
        };
        if capacity == 0 || capacity == usize::MAX {
            return Err(Error::Capacity);
        }
        if items.is_null() {
            return Err(Error::Items);
        }
        // Only the current content, the inserted bytes and the terminator
        // are borrowed; items may live in the spare tail past them. The
        // safe call sees that prefix as its capacity, capped at the real
        // one so `BigSize` and `BigCount` are still reported against it.
        let end = size.saturating_add(count.max(1)).min(capacity);
        if overlaps(data, end + 1, items, count) {
            return Err(Error::Overlap);
        }
        // SAFETY: upheld by the caller; the two regions are disjoint.
        let (data, items) = unsafe {
            (
                slice::from_raw_parts_mut(data, end + 1),
                slice::from_raw_parts(items, count),
            )
        };
        ctx.insert(data, size, end, left_pos, items)
    };
    AlgError::from(&run())
}

/// Removes `count` bytes of `data` starting at `left_pos`.
///
/// # Safety
///
/// - `ctx` is null or points to a live [`Context`].
/// - A non-null `size` is readable and writable.
/// - A non-null `data` is writable for `*size + 1` bytes.
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
pub unsafe extern "C" fn ansi_alg_remove_from(
    ctx: *const Context,
    data: *mut u8,
    size: *mut usize,
    left_pos: usize,
    count: usize,
) -> AlgError {
    // No items: point the item slice at an empty, non-overlapping region.
    let items = ptr::NonNull::<u8>::dangling().as_ptr();
    // SAFETY: upheld by the caller; a dangling pointer is valid for 0 bytes.
    let result = unsafe {
        in_place(ctx, data, size, items, 0, |ctx, data, size, _| {
            ctx.remove_from(data, size, left_pos, count)
        })
    };
    AlgError::from(&result)
}

macro_rules! window_mutation {
    ($(#[$doc:meta])* $name:ident => $method:ident) => {
        $(#[$doc])*
        ///
        /// # Safety
        ///
        /// - `ctx` is null or points to a live [`Context`].
        /// - A non-null `size` is readable and writable.
        /// - A non-null `data` is writable for `*size + 1` bytes.
        /// - A non-null `items` is readable for `count` bytes.
        #[cfg_attr(feature = "ffi", unsafe(no_mangle))]
        pub unsafe extern "C" fn $name(
            ctx: *const Context,
            data: *mut u8,
            size: *mut usize,
            left_pos: usize,
            right_pos: usize,
            items: *const u8,
            count: usize,
        ) -> AlgError {
            // SAFETY: upheld by the caller.
            let result = unsafe {
                in_place(ctx, data, size, items, count, |ctx, data, size, items| {
                    ctx.$method(data, size, left_pos, right_pos, items)
                })
            };
            AlgError::from(&result)
        }
    };
}

window_mutation!(
    /// Removes every non-overlapping occurrence of `items` in the window.
    ansi_alg_remove => remove
);
window_mutation!(
    /// Strips bytes in `items` from the left end of the window.
    ansi_alg_trim_left => trim_left
);
window_mutation!(
    /// Strips bytes in `items` from the right end of the window.
    ansi_alg_trim_right => trim_right
);
window_mutation!(
    /// Strips bytes in `items` from both ends of the window.
    ansi_alg_trim => trim
);

macro_rules! single_search {
    ($(#[$doc:meta])* $name:ident => $method:ident) => {
        $(#[$doc])*
        /// Returns [`NOT_FOUND`] when absent or on error.
        ///
        /// # Safety
        ///
        /// - `ctx` is null or points to a live [`Context`].
        /// - A non-null `data` is readable for `right_pos + 1` bytes.
        /// - A non-null `error` is writable.
        #[cfg_attr(feature = "ffi", unsafe(no_mangle))]
        pub unsafe extern "C" fn $name(
            ctx: *const Context,
            data: *const u8,
            left_pos: usize,
            right_pos: usize,
            item: u8,
            error: *mut AlgError,
        ) -> usize {
            // No items: a dangling pointer is valid for 0 bytes.
            let items = ptr::NonNull::<u8>::dangling().as_ptr();
            // SAFETY: upheld by the caller.
            let result = unsafe {
                read_only(ctx, data, right_pos, items, 0, |ctx, data, _| {
                    ctx.$method(data, left_pos, right_pos, item)
                })
            };
            position(result, error)
        }
    };
}

single_search!(
    /// First offset of `item` in the window.
    ansi_alg_find_single => find_single
);
single_search!(
    /// Last offset of `item` in the window.
    ansi_alg_rfind_single => rfind_single
);

macro_rules! items_search {
    ($(#[$doc:meta])* $name:ident => $method:ident) => {
        $(#[$doc])*
        /// Returns [`NOT_FOUND`] when absent or on error.
        ///
        /// # Safety
        ///
        /// - `ctx` is null or points to a live [`Context`].
        /// - A non-null `data` is readable for `right_pos + 1` bytes.
        /// - A non-null `items` is readable for `count` bytes.
        /// - A non-null `error` is writable.
        #[cfg_attr(feature = "ffi", unsafe(no_mangle))]
        pub unsafe extern "C" fn $name(
            ctx: *const Context,
            data: *const u8,
            left_pos: usize,
            right_pos: usize,
            items: *const u8,
            count: usize,
            error: *mut AlgError,
        ) -> usize {
            // SAFETY: upheld by the caller.
            let result = unsafe {
                read_only(ctx, data, right_pos, items, count, |ctx, data, items| {
                    ctx.$method(data, left_pos, right_pos, items)
                })
            };
            position(result, error)
        }
    };
}

items_search!(
    /// First occurrence of `items` in the window.
    ansi_alg_find => find
);
items_search!(
    /// Last occurrence of `items` in the window.
    ansi_alg_rfind => rfind
);
items_search!(
    /// First byte of the window that is in `items`.
    ansi_alg_first_of => first_of
);
items_search!(
    /// First byte of the window that is not in `items`.
    ansi_alg_first_not_of => first_not_of
);
items_search!(
    /// Last byte of the window that is in `items`.
    ansi_alg_last_of => last_of
);
items_search!(
    /// Last byte of the window that is not in `items`.
    ansi_alg_last_not_of => last_not_of
);

/// Compares `data` from `left_pos` with `items`; `data` holds `size` bytes.
///
/// Returns [`AlgCompare::NonEqual`] on error.
///
/// # Safety
///
/// - `ctx` is null or points to a live [`Context`].
/// - A non-null `data` is readable for `size` bytes.
/// - A non-null `items` is readable for `count` bytes.
/// - A non-null `error` is writable.
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ansi_alg_compare(
    ctx: *const Context,
    data: *const u8,
    size: usize,
    left_pos: usize,
    items: *const u8,
    count: usize,
    partial: bool,
    error: *mut AlgError,
) -> AlgCompare {
    // `data[..size]` is `data[..=size - 1]`; a zero size maps to an empty
    // slice and is reported by the safe checks.
    let run = || {
        // SAFETY: upheld by the caller.
        let ctx = unsafe { context(ctx) }?;
        if data.is_null() {
            return Err(Error::Data);
        }
        // SAFETY: upheld by the caller.
        let items = unsafe { items_slice(items, count) }?;
        // SAFETY: upheld by the caller.
        let data = unsafe { slice::from_raw_parts(data, size) };
        ctx.compare(data, left_pos, items, partial)
    };
    let result = run();
    report(error, AlgError::from(&result));
    result.map_or(AlgCompare::NonEqual, Into::into)
}

/// Counts occurrences of `items` in the window.
///
/// Returns [`NOT_FOUND`] on error.
///
/// # Safety
///
/// - `ctx` is null or points to a live [`Context`].
/// - A non-null `data` is readable for `right_pos + 1` bytes.
/// - A non-null `items` is readable for `count` bytes.
/// - A non-null `error` is writable.
#[cfg_attr(feature = "ffi", unsafe(no_mangle))]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ansi_alg_count(
    ctx: *const Context,
    data: *const u8,
    left_pos: usize,
    right_pos: usize,
    items: *const u8,
    count: usize,
    allow_overlapped: bool,
    error: *mut AlgError,
) -> usize {
    // SAFETY: upheld by the caller.
    let result = unsafe {
        read_only(ctx, data, right_pos, items, count, |ctx, data, items| {
            ctx.count(data, left_pos, right_pos, items, allow_overlapped)
        })
    };
    report(error, AlgError::from(&result));
    result.unwrap_or(NOT_FOUND)
}
