//! Allocation-free algorithms over a caller-owned, fixed-capacity,
//! single-byte string.
//!
//! The caller owns a contiguous byte buffer, its logical `size` and its
//! `capacity`. The buffer ends with a `0` terminator at offset `size`, so the
//! storage must hold at least `capacity + 1` bytes. Bytes before `size` may
//! themselves be `0`; only the byte *at* `size` is the terminator.
//!
//! Every entry point is a method on [`Context`], which carries the license
//! verdict and the default [`SearchStrategy`]. Each call validates its
//! arguments completely before touching the buffer, so a failed call never
//! leaves a partial effect behind.
//!
//! ```rust
//! use ansi_alg::{Context, SearchStrategy};
//!
//! let ctx = Context::validated();
//!
//! let mut data = [0u8; 21];
//! data[..10].copy_from_slice(b"0123456789");
//! let mut size = 10;
//!
//! ctx.insert(&mut data, &mut size, 20, 10, b"9876543210").unwrap();
//! assert_eq!(size, 20);
//! assert_eq!(&data[..size], b"01234567899876543210");
//! assert_eq!(data[size], 0);
//!
//! let found = ctx.find(&data[..size], 0, size - 1, b"99").unwrap();
//! assert_eq!(found, Some(9));
//!
//! let brute = ctx.with_strategy(SearchStrategy::Brute);
//! assert_eq!(brute.find(&data[..size], 0, size - 1, b"99").unwrap(), found);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod byte_set;
mod classify;
mod compare;
mod context;
mod contract;
mod error;
pub mod ffi;
mod mutate;
mod options;
mod search;

#[cfg(test)]
mod tests;

pub use compare::CompareResult;
pub use context::{Context, LicenseGate, LicenseKey};
pub use error::{Error, ErrorClass};
pub use options::{AlgOptions, SearchStrategy};
#[cfg(feature = "fuzzing")]
pub use search::strategy;

/// Value of the terminator byte expected at offset `size`.
pub const TERMINATOR: u8 = 0;
