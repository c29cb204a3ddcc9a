//! Boyer-Moore-Horspool.
//!
//! Forward search keys the shift table on the byte under the window's last
//! position: `shift[b]` is the distance from the last occurrence of `b` in
//! `needle[..m - 1]` to the end of the needle, or `m` if absent.
//!
//! Reverse search is the mirror image: the table is keyed on the byte under
//! the window's first position, and `shift[b]` is the index of the first
//! occurrence of `b` in `needle[1..]`, or `m` if absent.
//!
//! Both tables are fixed 256-entry arrays on the stack.

type ShiftTable = [usize; 256];

fn forward_table(needle: &[u8]) -> ShiftTable {
    let m = needle.len();
    let last = m - 1;
    let mut shift = [m; 256];
    for (i, &b) in needle[..last].iter().enumerate() {
        shift[usize::from(b)] = last - i;
    }
    shift
}

fn reverse_table(needle: &[u8]) -> ShiftTable {
    let m = needle.len();
    let mut shift = [m; 256];
    for (i, &b) in needle.iter().enumerate().skip(1).rev() {
        shift[usize::from(b)] = i;
    }
    shift
}

/// Forward searcher with its shift table built once for `needle`.
pub(super) struct Forward<'n> {
    needle: &'n [u8],
    shift: ShiftTable,
}

impl<'n> Forward<'n> {
    pub(super) fn new(needle: &'n [u8]) -> Self {
        Self {
            needle,
            shift: forward_table(needle),
        }
    }

    pub(super) fn find(&self, hay: &[u8]) -> Option<usize> {
        let needle = self.needle;
        let m = needle.len();
        let last = m - 1;
        let tail_byte = needle[last];

        let mut pos = 0;
        while pos + m <= hay.len() {
            let tail = hay[pos + last];
            // Window compared right to left: the last byte first, then the rest.
            if tail == tail_byte && hay[pos..pos + last] == needle[..last] {
                return Some(pos);
            }
            pos += self.shift[usize::from(tail)];
        }
        None
    }
}

pub(super) fn find(hay: &[u8], needle: &[u8]) -> Option<usize> {
    Forward::new(needle).find(hay)
}

pub(super) fn rfind(hay: &[u8], needle: &[u8]) -> Option<usize> {
    let m = needle.len();
    let head_byte = needle[0];
    let shift = reverse_table(needle);

    let mut pos = hay.len() - m;
    loop {
        let head = hay[pos];
        if head == head_byte && hay[pos + 1..pos + m] == needle[1..] {
            return Some(pos);
        }
        pos = pos.checked_sub(shift[usize::from(head)])?;
    }
}
