/// Substring search algorithm.
///
/// Every strategy returns the same position for the same input; the choice
/// only affects speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchStrategy {
    /// Compare the pattern at every candidate offset. O(n·m) worst case.
    Brute,
    /// Delegate to the memchr-backed routines of [`bstr`]. Mostly useful as
    /// a performance baseline.
    Library,
    /// Boyer-Moore-Horspool with a 256-entry bad-character shift table.
    #[default]
    Bmh,
    /// Tuned for patterns made of long runs of one byte; degrades towards
    /// `Brute` with first/last byte filtering for varied patterns.
    Monotone,
}

impl SearchStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [Self; 4] = [Self::Brute, Self::Library, Self::Bmh, Self::Monotone];
}

/// Configuration for a [`crate::Context`].
///
/// # Examples
///
/// ```rust
/// use ansi_alg::{AlgOptions, Context, SearchStrategy};
///
/// let ctx = Context::validated().with_options(AlgOptions {
///     strategy: SearchStrategy::Monotone,
/// });
/// assert_eq!(ctx.options().strategy, SearchStrategy::Monotone);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlgOptions {
    /// Algorithm used by `find`, `rfind`, `remove` and `count`.
    ///
    /// # Default
    ///
    /// [`SearchStrategy::Bmh`]
    pub strategy: SearchStrategy,
}
