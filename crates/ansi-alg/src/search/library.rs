//! Baseline backed by `bstr`, which delegates to memchr's vectorized
//! `memmem`/`memchr` routines.

use bstr::ByteSlice;

pub(super) fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.find(needle)
}

pub(super) fn rfind(hay: &[u8], needle: &[u8]) -> Option<usize> {
    hay.rfind(needle)
}

pub(super) fn find_byte(hay: &[u8], item: u8) -> Option<usize> {
    hay.find_byte(item)
}

pub(super) fn rfind_byte(hay: &[u8], item: u8) -> Option<usize> {
    hay.rfind_byte(item)
}
