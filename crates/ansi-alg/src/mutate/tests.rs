use rstest::rstest;

use crate::{Context, Error, SearchStrategy};

/// Storage of `N` bytes holding `content` followed by the terminator.
fn buffer<const N: usize>(content: &[u8]) -> ([u8; N], usize) {
    let mut data = [0xAA; N];
    data[..content.len()].copy_from_slice(content);
    data[content.len()] = 0;
    (data, content.len())
}

fn ctx() -> Context {
    Context::validated()
}

#[test]
fn insert_appends_at_size() {
    let (mut data, mut size) = buffer::<21>(b"0123456789");
    ctx().insert(&mut data, &mut size, 20, 10, b"9876543210").unwrap();
    assert_eq!(size, 20);
    assert_eq!(&data[..size], b"01234567899876543210");
    assert_eq!(data[size], 0);
}

#[test]
fn insert_shifts_suffix() {
    let (mut data, mut size) = buffer::<16>(b"abef");
    ctx().insert(&mut data, &mut size, 15, 2, b"cd").unwrap();
    assert_eq!(&data[..=size], b"abcdef\0");
    ctx().insert(&mut data, &mut size, 15, 0, b">").unwrap();
    assert_eq!(&data[..=size], b">abcdef\0");
    // bytes past the terminator are untouched
    assert_eq!(data[size + 1], 0xAA);
}

#[test]
fn insert_into_empty_buffer() {
    let (mut data, mut size) = buffer::<4>(b"");
    ctx().insert(&mut data, &mut size, 3, 0, b"xyz").unwrap();
    assert_eq!(&data, b"xyz\0");
    assert_eq!(size, 3);
}

#[rstest]
#[case::unlicensed(Context::default(), 10, 5, 3, &b"1"[..], Error::License)]
#[case::zero_capacity(ctx(), 0, 5, 3, &b"1"[..], Error::Capacity)]
#[case::max_capacity(ctx(), usize::MAX, 5, 3, &b"1"[..], Error::Capacity)]
#[case::capacity_beyond_storage(ctx(), 11, 5, 3, &b"1"[..], Error::Capacity)]
#[case::size_beyond_capacity(ctx(), 4, 5, 3, &b"1"[..], Error::BigSize)]
#[case::zero_count(ctx(), 10, 5, 3, &b""[..], Error::ZeroCount)]
#[case::left_past_size(ctx(), 10, 5, 6, &b"1"[..], Error::BigLeft)]
#[case::no_room(ctx(), 10, 5, 5, &b"123456"[..], Error::BigCount)]
fn insert_rejects(
    #[case] ctx: Context,
    #[case] capacity: usize,
    #[case] size: usize,
    #[case] left_pos: usize,
    #[case] items: &[u8],
    #[case] expected: Error,
) {
    let (mut data, mut len) = buffer::<11>(&b"abcdefgh"[..size]);
    let before = data;
    assert_eq!(
        ctx.insert(&mut data, &mut len, capacity, left_pos, items),
        Err(expected)
    );
    assert_eq!(data, before);
    assert_eq!(len, size);
}

#[test]
fn insert_rejects_missing_terminator_and_storage() {
    let mut data = *b"abcd";
    let mut size = 2;
    assert_eq!(
        ctx().insert(&mut data, &mut size, 3, 0, b"x"),
        Err(Error::Terminator)
    );
    assert_eq!(size, 2);
    assert_eq!(ctx().insert(&mut [], &mut size, 3, 0, b"x"), Err(Error::Data));
}

#[test]
fn insert_fills_to_capacity() {
    let (mut data, mut size) = buffer::<6>(b"ab");
    ctx().insert(&mut data, &mut size, 5, 1, b"xyz").unwrap();
    assert_eq!(&data, b"axyzb\0");
    assert_eq!(
        ctx().insert(&mut data, &mut size, 5, 5, b"!"),
        Err(Error::BigCount)
    );
}

#[test]
fn remove_from_then_insert_restores() {
    let (mut data, mut size) = buffer::<16>(b"hello, world");
    let original = data;
    ctx().remove_from(&mut data, &mut size, 5, 2).unwrap();
    assert_eq!(&data[..=size], b"helloworld\0");
    ctx().insert(&mut data, &mut size, 15, 5, b", ").unwrap();
    assert_eq!(size, 12);
    assert_eq!(&data[..=size], &original[..=12]);
}

#[test]
fn remove_from_edges() {
    let (mut data, mut size) = buffer::<8>(b"abcdef");
    ctx().remove_from(&mut data, &mut size, 5, 1).unwrap();
    assert_eq!(&data[..=size], b"abcde\0");
    ctx().remove_from(&mut data, &mut size, 0, 5).unwrap();
    assert_eq!(size, 0);
    assert_eq!(data[0], 0);
    assert_eq!(
        ctx().remove_from(&mut data, &mut size, 0, 1),
        Err(Error::ZeroSize)
    );
}

#[test]
fn remove_from_rejects() {
    let (mut data, mut size) = buffer::<8>(b"abcdef");
    let before = data;
    let ctx = ctx();
    assert_eq!(ctx.remove_from(&mut data, &mut size, 0, 0), Err(Error::ZeroCount));
    assert_eq!(ctx.remove_from(&mut data, &mut size, 6, 1), Err(Error::BigLeft));
    assert_eq!(ctx.remove_from(&mut data, &mut size, 4, 3), Err(Error::BigCount));
    assert_eq!(
        ctx.remove_from(&mut data, &mut 8, 4, 3),
        Err(Error::BigSize)
    );
    assert_eq!(
        ctx.remove_from(&mut data, &mut 5, 0, 1),
        Err(Error::Terminator)
    );
    assert_eq!(
        Context::default().remove_from(&mut data, &mut size, 0, 1),
        Err(Error::License)
    );
    assert_eq!(data, before);
    assert_eq!(size, 6);
}

#[rstest]
fn remove_pattern(
    #[values(
        SearchStrategy::Brute,
        SearchStrategy::Library,
        SearchStrategy::Bmh,
        SearchStrategy::Monotone
    )]
    strategy: SearchStrategy,
) {
    let ctx = ctx().with_strategy(strategy);

    let (mut data, mut size) = buffer::<20>(b"01567899876543210");
    let last = size - 1;
    ctx.remove(&mut data, &mut size, 0, last, b"99").unwrap();
    assert_eq!(&data[..=size], b"015678876543210\0");
    assert_eq!(size, 15);

    let (mut data, mut size) = buffer::<20>(b"xxaxxbxxcxx");
    let last = size - 1;
    ctx.remove(&mut data, &mut size, 0, last, b"xx").unwrap();
    assert_eq!(&data[..=size], b"abc\0");

    // only matches lying entirely inside the window are removed
    let (mut data, mut size) = buffer::<20>(b"xxaxxbxxcxx");
    ctx.remove(&mut data, &mut size, 1, 7, b"xx").unwrap();
    assert_eq!(&data[..=size], b"xxabcxx\0");

    // dense matches: one search state serves every restart
    let (mut data, mut size) = buffer::<1024>(&[b'a'; 1001]);
    ctx.remove(&mut data, &mut size, 0, 1000, b"aa").unwrap();
    assert_eq!(&data[..=size], b"a\0");
}

#[test]
fn remove_never_removes_overlapping_matches() {
    let ctx = ctx();
    let (mut data, mut size) = buffer::<8>(b"aaaaa");
    ctx.remove(&mut data, &mut size, 0, 4, b"aa").unwrap();
    // "aa" at 0, then at 2; the byte at 4 cannot start a new match
    assert_eq!(&data[..=size], b"a\0");

    let (mut data, mut size) = buffer::<8>(b"abababa");
    ctx.remove(&mut data, &mut size, 0, 6, b"aba").unwrap();
    assert_eq!(&data[..=size], b"b\0");
}

#[test]
fn remove_without_match_is_noop() {
    let (mut data, mut size) = buffer::<8>(b"abcdef");
    let before = data;
    ctx().remove(&mut data, &mut size, 0, 5, b"xy").unwrap();
    assert_eq!(data, before);
    assert_eq!(size, 6);
}

#[test]
fn remove_rejects() {
    let (mut data, mut size) = buffer::<8>(b"abcdef");
    let ctx = ctx();
    assert_eq!(ctx.remove(&mut data, &mut size, 0, 5, b""), Err(Error::ZeroCount));
    assert_eq!(ctx.remove(&mut data, &mut size, 0, 6, b"a"), Err(Error::BigRight));
    assert_eq!(ctx.remove(&mut data, &mut size, 3, 2, b"a"), Err(Error::BigLeft));
    assert_eq!(ctx.remove(&mut data, &mut size, 2, 3, b"cde"), Err(Error::BigCount));
    assert_eq!(ctx.remove(&mut data, &mut 0, 0, 0, b"a"), Err(Error::ZeroSize));
    assert_eq!(size, 6);
}

#[test]
fn trim_keeps_unmatched_boundaries() {
    let (mut data, mut size) = buffer::<8>(b"678876");
    ctx().trim(&mut data, &mut size, 0, 5, b"012345").unwrap();
    assert_eq!(size, 6);
    assert_eq!(&data[..=size], b"678876\0");
}

#[test]
fn trim_both_ends() {
    let (mut data, mut size) = buffer::<16>(b"  \tvalue \n ");
    let last = size - 1;
    ctx().trim(&mut data, &mut size, 0, last, b" \t\n").unwrap();
    assert_eq!(&data[..=size], b"value\0");
}

#[test]
fn trim_left_and_right_inside_window() {
    let ctx = ctx();
    let (mut data, mut size) = buffer::<16>(b"[..ab..]");
    ctx.trim_left(&mut data, &mut size, 1, 6, b".").unwrap();
    assert_eq!(&data[..=size], b"[ab..]\0");
    ctx.trim_right(&mut data, &mut size, 1, 4, b".").unwrap();
    assert_eq!(&data[..=size], b"[ab]\0");
}

#[test]
fn trim_whole_window() {
    let ctx = ctx();
    let (mut data, mut size) = buffer::<8>(b"xaaaay");
    ctx.trim(&mut data, &mut size, 1, 4, b"a").unwrap();
    assert_eq!(&data[..=size], b"xy\0");

    let (mut data, mut size) = buffer::<8>(b"aaaa");
    ctx.trim_right(&mut data, &mut size, 0, 3, b"a").unwrap();
    assert_eq!(size, 0);
    assert_eq!(data[0], 0);
}

#[test]
fn trim_rejects() {
    let (mut data, mut size) = buffer::<8>(b"abc");
    let ctx = ctx();
    assert_eq!(ctx.trim(&mut data, &mut size, 0, 2, b""), Err(Error::ZeroCount));
    assert_eq!(ctx.trim_left(&mut data, &mut size, 0, 3, b"a"), Err(Error::BigRight));
    assert_eq!(ctx.trim_right(&mut data, &mut size, 2, 1, b"a"), Err(Error::BigLeft));
    // a set larger than the window is fine
    ctx.trim_left(&mut data, &mut size, 0, 0, b"abc").unwrap();
    assert_eq!(&data[..=size], b"bc\0");
}
