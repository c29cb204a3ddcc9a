use thiserror::Error;

/// Reason a call was rejected.
///
/// Success is expressed as `Ok(_)`, so there is no "no error" variant here;
/// the C-ABI mirror [`crate::ffi::AlgError`] adds it back as `None = 0`.
/// Variant order follows the stable numeric codes returned by
/// [`Error::code`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The context was not initialized with a valid license.
    #[error("license is not initialized or invalid")]
    License,
    /// The data buffer is missing or has no storage at all.
    #[error("data buffer is missing")]
    Data,
    /// The size out-parameter is missing, or a compared string is empty.
    #[error("size is missing or zero")]
    Size,
    /// Capacity is zero, leaves no room for the terminator, or exceeds the
    /// storage.
    #[error("invalid capacity")]
    Capacity,
    /// The buffer is empty but the operation needs content.
    #[error("size is zero")]
    ZeroSize,
    /// Size exceeds what the storage (or capacity) can represent.
    #[error("size exceeds storage")]
    BigSize,
    /// No items were supplied.
    #[error("item count is zero")]
    ZeroCount,
    /// Item count exceeds the area it is applied to.
    #[error("item count exceeds the valid area")]
    BigCount,
    /// Left bound is past the right bound or the size.
    #[error("left position is out of range")]
    BigLeft,
    /// Right bound is past the data or equals the maximum sentinel.
    #[error("right position is out of range")]
    BigRight,
    /// The items pointer is missing.
    #[error("items are missing")]
    Items,
    /// The byte at offset `size` is not the terminator.
    #[error("no terminator at the size offset")]
    Terminator,
    /// Items overlap the region of data the call writes.
    #[error("data and items overlap")]
    Overlap,
}

/// Coarse grouping of [`Error`] kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Missing or invalid references and initialization.
    Structural,
    /// Bounds or count violations.
    Range,
    /// Missing terminator or aliasing: the buffer may be corrupt.
    Safety,
}

impl Error {
    /// Stable numeric code of this error, as used across the C ABI.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::License => 1,
            Self::Data => 2,
            Self::Size => 3,
            Self::Capacity => 4,
            Self::ZeroSize => 5,
            Self::BigSize => 6,
            Self::ZeroCount => 7,
            Self::BigCount => 8,
            Self::BigLeft => 9,
            Self::BigRight => 10,
            Self::Items => 11,
            Self::Terminator => 12,
            Self::Overlap => 13,
        }
    }

    /// Inverse of [`Error::code`]. Returns `None` for `0` and unknown codes.
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            1 => Self::License,
            2 => Self::Data,
            3 => Self::Size,
            4 => Self::Capacity,
            5 => Self::ZeroSize,
            6 => Self::BigSize,
            7 => Self::ZeroCount,
            8 => Self::BigCount,
            9 => Self::BigLeft,
            10 => Self::BigRight,
            11 => Self::Items,
            12 => Self::Terminator,
            13 => Self::Overlap,
            _ => return None,
        })
    }

    /// Which class of contract violation this error reports.
    #[must_use]
    pub const fn class(self) -> ErrorClass {
        match self {
            Self::License | Self::Data | Self::Size | Self::Items | Self::Capacity => {
                ErrorClass::Structural
            }
            Self::ZeroSize
            | Self::BigSize
            | Self::ZeroCount
            | Self::BigCount
            | Self::BigLeft
            | Self::BigRight => ErrorClass::Range,
            Self::Terminator | Self::Overlap => ErrorClass::Safety,
        }
    }
}
