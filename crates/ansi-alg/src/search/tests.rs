use rstest::rstest;

use crate::{Context, Error, SearchStrategy};

const DATA: &[u8] = b"01234567899876543210";

fn ctx(strategy: SearchStrategy) -> Context {
    Context::validated().with_strategy(strategy)
}

#[rstest]
fn find_in_full_window(
    #[values(
        SearchStrategy::Brute,
        SearchStrategy::Library,
        SearchStrategy::Bmh,
        SearchStrategy::Monotone
    )]
    strategy: SearchStrategy,
    #[values(
        (&b"99"[..], Some(9), Some(9)),
        (&b"0"[..], Some(0), Some(19)),
        (&b"10"[..], Some(18), Some(18)),
        (&b"01"[..], Some(0), Some(0)),
        (&b"345"[..], Some(3), Some(3)),
        (&b"543"[..], Some(14), Some(14)),
        (&b"a"[..], None, None),
        (&b"0123456789987654321"[..], Some(0), Some(0)),
        (&b"01234567899876543210"[..], Some(0), Some(0))
    )]
    case: (&[u8], Option<usize>, Option<usize>),
) {
    let (needle, first, last) = case;
    let ctx = ctx(strategy);
    assert_eq!(ctx.find(DATA, 0, DATA.len() - 1, needle), Ok(first));
    assert_eq!(ctx.rfind(DATA, 0, DATA.len() - 1, needle), Ok(last));
}

#[rstest]
fn window_restricts_matches(
    #[values(
        SearchStrategy::Brute,
        SearchStrategy::Library,
        SearchStrategy::Bmh,
        SearchStrategy::Monotone
    )]
    strategy: SearchStrategy,
) {
    let ctx = ctx(strategy);
    // "99" straddles offsets 9..=10; a window ending at 9 must not see it.
    assert_eq!(ctx.find(DATA, 0, 9, b"99"), Ok(None));
    assert_eq!(ctx.find(DATA, 9, 10, b"99"), Ok(Some(9)));
    assert_eq!(ctx.rfind(DATA, 10, 19, b"99"), Ok(None));
    assert_eq!(ctx.find(DATA, 1, 19, b"0"), Ok(Some(19)));
    assert_eq!(ctx.rfind(DATA, 0, 18, b"0"), Ok(Some(0)));
    assert_eq!(ctx.find_single(DATA, 1, 19, b'0'), Ok(Some(19)));
    assert_eq!(ctx.rfind_single(DATA, 0, 18, b'0'), Ok(Some(0)));
    assert_eq!(ctx.find_single(DATA, 5, 5, b'5'), Ok(Some(5)));
    assert_eq!(ctx.rfind_single(DATA, 6, 13, b'5'), Ok(None));
}

#[rstest]
fn monotone_data(
    #[values(
        SearchStrategy::Brute,
        SearchStrategy::Library,
        SearchStrategy::Bmh,
        SearchStrategy::Monotone
    )]
    strategy: SearchStrategy,
) {
    let mut data = [b'a'; 64];
    data[40] = b'b';
    let ctx = ctx(strategy);
    assert_eq!(ctx.find(&data, 0, 63, &[b'a'; 32]), Ok(Some(0)));
    assert_eq!(ctx.find(&data, 10, 63, &[b'a'; 30]), Ok(Some(10)));
    assert_eq!(ctx.find(&data, 10, 63, &[b'a'; 31]), Ok(None));
    assert_eq!(ctx.rfind(&data, 0, 63, &[b'a'; 23]), Ok(Some(41)));
    assert_eq!(ctx.rfind(&data, 0, 63, &[b'a'; 24]), Ok(Some(16)));
    assert_eq!(ctx.find(&data, 0, 63, b"aab"), Ok(Some(38)));
    assert_eq!(ctx.rfind(&data, 0, 63, b"baa"), Ok(Some(40)));
}

#[test]
fn embedded_terminators_are_content() {
    let ctx = Context::validated();
    let data = b"ab\0cd\0ef";
    assert_eq!(ctx.find(data, 0, 7, b"\0e"), Ok(Some(5)));
    assert_eq!(ctx.rfind_single(data, 0, 7, 0), Ok(Some(5)));
    assert_eq!(ctx.find_single(data, 0, 7, 0), Ok(Some(2)));
}

#[test]
fn validation_errors() {
    let ctx = Context::validated();
    assert_eq!(ctx.find(DATA, 0, 19, b""), Err(Error::ZeroCount));
    assert_eq!(ctx.find(DATA, 0, usize::MAX, b"1"), Err(Error::BigRight));
    assert_eq!(ctx.find(DATA, 0, 20, b"1"), Err(Error::BigRight));
    assert_eq!(ctx.find(DATA, 5, 4, b"1"), Err(Error::BigLeft));
    assert_eq!(ctx.find(DATA, 4, 5, b"123"), Err(Error::BigCount));
    assert_eq!(ctx.rfind(DATA, 4, 5, b"123"), Err(Error::BigCount));
    // zero count is reported before the window
    assert_eq!(ctx.rfind(DATA, 5, 4, b""), Err(Error::ZeroCount));

    assert_eq!(ctx.find_single(DATA, 0, 20, b'1'), Err(Error::BigRight));
    assert_eq!(ctx.rfind_single(DATA, 3, 2, b'1'), Err(Error::BigLeft));
    assert_eq!(ctx.find_single(b"", 0, 0, b'1'), Err(Error::BigRight));

    let unlicensed = Context::default();
    assert_eq!(unlicensed.find(DATA, 0, 19, b"1"), Err(Error::License));
    assert_eq!(unlicensed.find_single(DATA, 0, 19, b'1'), Err(Error::License));
}
