/// Membership table over all 256 byte values.
///
/// Lives on the stack; building it is linear in the item count and lookups
/// are a single index.
#[derive(Clone)]
pub(crate) struct ByteSet([bool; 256]);

impl ByteSet {
    pub fn new(items: &[u8]) -> Self {
        let mut table = [false; 256];
        for &b in items {
            table[usize::from(b)] = true;
        }
        Self(table)
    }

    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.0[usize::from(b)]
    }
}
