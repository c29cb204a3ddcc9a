#![no_main]

use ansi_alg::{Context, SearchStrategy};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op<'a> {
    Insert { at: usize, items: &'a [u8] },
    RemoveFrom { at: usize, count: usize },
    Remove { left: usize, right: usize, items: &'a [u8] },
    TrimLeft { left: usize, right: usize, items: &'a [u8] },
    TrimRight { left: usize, right: usize, items: &'a [u8] },
    Trim { left: usize, right: usize, items: &'a [u8] },
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    strategy: u8,
    content: &'a [u8],
    spare: u8,
    ops: Vec<Op<'a>>,
}

const SENTINEL: u8 = 0xEE;

fuzz_target!(|input: Input<'_>| {
    let strategy = SearchStrategy::ALL[usize::from(input.strategy) % SearchStrategy::ALL.len()];
    let ctx = Context::validated().with_strategy(strategy);

    let content: Vec<u8> = input.content.iter().copied().filter(|&b| b != 0).collect();
    let capacity = content.len() + usize::from(input.spare);
    let mut data = vec![SENTINEL; capacity + 2];
    data[..content.len()].copy_from_slice(&content);
    data[content.len()] = 0;
    let mut size = content.len();

    for op in input.ops {
        let before = data.clone();
        let prior = size;
        let result = match op {
            Op::Insert { at, items } => ctx.insert(&mut data, &mut size, capacity, at, items),
            Op::RemoveFrom { at, count } => ctx.remove_from(&mut data, &mut size, at, count),
            Op::Remove { left, right, items } => {
                ctx.remove(&mut data, &mut size, left, right, items)
            }
            Op::TrimLeft { left, right, items } => {
                ctx.trim_left(&mut data, &mut size, left, right, items)
            }
            Op::TrimRight { left, right, items } => {
                ctx.trim_right(&mut data, &mut size, left, right, items)
            }
            Op::Trim { left, right, items } => ctx.trim(&mut data, &mut size, left, right, items),
        };

        if result.is_err() {
            assert_eq!(size, prior);
            assert_eq!(data, before);
        }
        assert!(size <= capacity);
        assert_eq!(data[size], 0);
        assert_eq!(data[capacity + 1], SENTINEL);
    }
});
