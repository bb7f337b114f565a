use std::iter::FusedIterator;

use crate::shape::Shape;

/// Next larger value with the same number of set bits as `v`.
///
/// This is the "next bit permutation" trick: set the trailing zeros of `v`,
/// carry into the next zero above them, then refill the lowest bits with the
/// ones that were shifted out. `v` must be non-zero and the result must fit in
/// a `u64`.
#[inline]
pub fn next_permutation(v: u64) -> u64 {
    let t = v | v.wrapping_sub(1);
    // `trailing_zeros` of zero is the full width, which shifts everything out.
    let refill = (!t & t.wrapping_add(1)).wrapping_sub(1);
    t.wrapping_add(1) | refill.checked_shr(v.trailing_zeros() + 1).unwrap_or(0)
}

/// Every `n`-bit pattern with `k` set bits, in strictly ascending order.
///
/// The sequence starts at the `k` low-order bits and ends at the `k`
/// high-order bits. Clone it to restart from the current position, or build a
/// new one to start over.
#[derive(Clone, Debug)]
pub struct BitPermutations {
    next: Option<u64>,
    last: u64,
}

impl BitPermutations {
    pub fn new(shape: Shape) -> Self {
        Self {
            next: Some(shape.first()),
            last: shape.last(),
        }
    }
}

impl Iterator for BitPermutations {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = (current != self.last).then(|| next_permutation(current));
        Some(current)
    }
}

impl FusedIterator for BitPermutations {}
