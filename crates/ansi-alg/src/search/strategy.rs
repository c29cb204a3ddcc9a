//! Strategy dispatch over plain slices.
//!
//! These functions skip the buffer contract; callers pass the window itself
//! as `hay`. An empty needle or one longer than `hay` finds nothing.

use bstr::Finder;

use super::{bmh, brute, library, monotone};
use crate::options::SearchStrategy;

enum Prepared<'n> {
    Brute,
    Library(Finder<'n>),
    Bmh(bmh::Forward<'n>),
    Monotone(monotone::Monotone<'n>),
}

/// Forward search state for one needle.
///
/// Shift and membership tables are built once in [`Searcher::new`] and
/// reused by every [`Searcher::find`], so scans that resume after each match
/// pay for them once per call rather than once per match.
pub struct Searcher<'n> {
    needle: &'n [u8],
    prepared: Prepared<'n>,
}

impl<'n> Searcher<'n> {
    /// Prepares `strategy` for `needle`.
    #[must_use]
    pub fn new(strategy: SearchStrategy, needle: &'n [u8]) -> Self {
        let prepared = if needle.is_empty() {
            Prepared::Brute
        } else {
            match strategy {
                SearchStrategy::Brute => Prepared::Brute,
                SearchStrategy::Library => Prepared::Library(Finder::new(needle)),
                SearchStrategy::Bmh => Prepared::Bmh(bmh::Forward::new(needle)),
                SearchStrategy::Monotone => Prepared::Monotone(monotone::Monotone::new(needle)),
            }
        };
        Self { needle, prepared }
    }

    /// First offset of the needle in `hay`.
    #[must_use]
    pub fn find(&self, hay: &[u8]) -> Option<usize> {
        let needle = self.needle;
        if needle.is_empty() || needle.len() > hay.len() {
            return None;
        }
        match &self.prepared {
            Prepared::Brute => brute::find(hay, needle),
            Prepared::Library(finder) => finder.find(hay),
            Prepared::Bmh(forward) => forward.find(hay),
            Prepared::Monotone(monotone) => monotone.find(hay),
        }
    }
}

/// First offset of `needle` in `hay`.
#[must_use]
pub fn find(strategy: SearchStrategy, hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    match strategy {
        SearchStrategy::Brute => brute::find(hay, needle),
        SearchStrategy::Library => library::find(hay, needle),
        SearchStrategy::Bmh => bmh::find(hay, needle),
        SearchStrategy::Monotone => monotone::find(hay, needle),
    }
}

/// Last offset of `needle` in `hay`.
#[must_use]
pub fn rfind(strategy: SearchStrategy, hay: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    match strategy {
        SearchStrategy::Brute => brute::rfind(hay, needle),
        SearchStrategy::Library => library::rfind(hay, needle),
        SearchStrategy::Bmh => bmh::rfind(hay, needle),
        SearchStrategy::Monotone => monotone::rfind(hay, needle),
    }
}

/// First offset of `item` in `hay`.
#[must_use]
pub fn find_byte(strategy: SearchStrategy, hay: &[u8], item: u8) -> Option<usize> {
    match strategy {
        SearchStrategy::Library => library::find_byte(hay, item),
        SearchStrategy::Brute | SearchStrategy::Bmh | SearchStrategy::Monotone => {
            brute::find_byte(hay, item)
        }
    }
}

/// Last offset of `item` in `hay`.
#[must_use]
pub fn rfind_byte(strategy: SearchStrategy, hay: &[u8], item: u8) -> Option<usize> {
    match strategy {
        SearchStrategy::Library => library::rfind_byte(hay, item),
        SearchStrategy::Brute | SearchStrategy::Bmh | SearchStrategy::Monotone => {
            brute::rfind_byte(hay, item)
        }
    }
}
