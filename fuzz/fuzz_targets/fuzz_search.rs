#![no_main]

use ansi_alg::{
    SearchStrategy,
    strategy::{self, Searcher},
};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    needle: &'a [u8],
    hay: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let Input { needle, hay } = input;

    let first = strategy::find(SearchStrategy::Brute, hay, needle);
    let last = strategy::rfind(SearchStrategy::Brute, hay, needle);
    if let Some(at) = first {
        assert_eq!(&hay[at..at + needle.len()], needle);
        assert!(last.is_some_and(|end| end >= at));
    }

    for s in SearchStrategy::ALL {
        assert_eq!(strategy::find(s, hay, needle), first, "{s:?} find");
        assert_eq!(Searcher::new(s, needle).find(hay), first, "{s:?} searcher");
        assert_eq!(strategy::rfind(s, hay, needle), last, "{s:?} rfind");
        if let Some(&b) = needle.first() {
            assert_eq!(
                strategy::find_byte(s, hay, b),
                hay.iter().position(|&h| h == b),
                "{s:?} find_byte"
            );
            assert_eq!(
                strategy::rfind_byte(s, hay, b),
                hay.iter().rposition(|&h| h == b),
                "{s:?} rfind_byte"
            );
        }
    }
});
