//! Search tuned for repetitive needles.
//!
//! A needle made of a single repeated byte is found by tracking the length
//! of the current run of that byte: every haystack byte is read once and a
//! mismatch resets the run, so the scan never backs up. Any other needle is
//! filtered on its last and first bytes before the middle is compared, and
//! a boundary byte that does not occur in the needle at all skips the whole
//! needle length.

use crate::byte_set::ByteSet;

/// Needle shape and membership table, built once per needle.
pub(super) struct Monotone<'n> {
    needle: &'n [u8],
    run: bool,
    present: ByteSet,
}

impl<'n> Monotone<'n> {
    pub(super) fn new(needle: &'n [u8]) -> Self {
        Self {
            needle,
            run: needle.iter().all(|&b| b == needle[0]),
            present: ByteSet::new(needle),
        }
    }

    pub(super) fn find(&self, hay: &[u8]) -> Option<usize> {
        let needle = self.needle;
        let m = needle.len();
        let first = needle[0];

        if self.run {
            let mut run = 0;
            for (i, &b) in hay.iter().enumerate() {
                if b == first {
                    run += 1;
                    if run == m {
                        return Some(i + 1 - m);
                    }
                } else {
                    run = 0;
                }
            }
            return None;
        }

        let last = needle[m - 1];
        let middle = &needle[1..m - 1];
        let mut i = 0;
        while i + m <= hay.len() {
            let tail = hay[i + m - 1];
            if !self.present.contains(tail) {
                i += m;
                continue;
            }
            if tail == last && hay[i] == first && &hay[i + 1..i + m - 1] == middle {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    pub(super) fn rfind(&self, hay: &[u8]) -> Option<usize> {
        let needle = self.needle;
        let m = needle.len();
        let first = needle[0];

        if self.run {
            let mut run = 0;
            for (i, &b) in hay.iter().enumerate().rev() {
                if b == first {
                    run += 1;
                    if run == m {
                        return Some(i);
                    }
                } else {
                    run = 0;
                }
            }
            return None;
        }

        let last = needle[m - 1];
        let middle = &needle[1..m - 1];
        let mut i = hay.len().checked_sub(m)?;
        loop {
            let head = hay[i];
            if !self.present.contains(head) {
                i = i.checked_sub(m)?;
                continue;
            }
            if head == first && hay[i + m - 1] == last && &hay[i + 1..i + m - 1] == middle {
                return Some(i);
            }
            i = i.checked_sub(1)?;
        }
    }
}

pub(super) fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    Monotone::new(needle).find(hay)
}

pub(super) fn rfind(hay: &[u8], needle: &[u8]) -> Option<usize> {
    Monotone::new(needle).rfind(hay)
}
