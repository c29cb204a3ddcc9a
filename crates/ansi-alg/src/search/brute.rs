//! Every candidate offset, full comparison.

pub(super) fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    let m = needle.len();
    (0..=hay.len() - m).find(|&i| &hay[i..i + m] == needle)
}

pub(super) fn rfind(hay: &[u8], needle: &[u8]) -> Option<usize> {
    let m = needle.len();
    (0..=hay.len() - m).rev().find(|&i| &hay[i..i + m] == needle)
}

pub(super) fn find_byte(hay: &[u8], item: u8) -> Option<usize> {
    hay.iter().position(|&b| b == item)
}

pub(super) fn rfind_byte(hay: &[u8], item: u8) -> Option<usize> {
    hay.iter().rposition(|&b| b == item)
}
