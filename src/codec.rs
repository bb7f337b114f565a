use std::fmt;

use crate::binomial_table::BinomialTable;
use crate::shape::{low_bits, validate};

/// Maps bitmaps with a fixed number of set bits to their position in ascending
/// numeric order, and back.
///
/// Both directions walk Pascal's triangle from `(n, n - k)` towards the top,
/// one bit at a time from the most significant bit down. At each step the
/// entry `C(row, col - 1)` counts the patterns that leave the current bit
/// unset, which is exactly how many patterns are skipped when the bit is set.
#[derive(Clone, Copy, Debug)]
pub struct PermutationCodec<'t> {
    table: &'t BinomialTable,
}

impl<'t> PermutationCodec<'t> {
    pub fn new(table: &'t BinomialTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t BinomialTable {
        self.table
    }

    /// Position of `bitmap` among all `n`-bit patterns with `k` set bits.
    pub fn rank_of(&self, bitmap: u64, n: u32, k: u32) -> Result<u64, CodecError> {
        rank_of(bitmap, n, k, self.table)
    }

    /// The `n`-bit pattern with `k` set bits at position `rank`.
    pub fn unrank(&self, rank: u64, n: u32, k: u32) -> Result<u64, CodecError> {
        unrank(rank, n, k, self.table)
    }

    /// Number of valid ranks for `(n, k)`.
    pub fn count(&self, n: u32, k: u32) -> Result<u64, CodecError> {
        validate(n, k, self.table.max_bits())?;
        Ok(self.table.entry(n, k))
    }
}

impl PermutationCodec<'static> {
    /// Codec backed by the process-wide table.
    pub fn standard() -> Self {
        Self::new(BinomialTable::shared())
    }
}

impl Default for PermutationCodec<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Rank `bitmap` among all `n`-bit patterns with exactly `k` set bits.
///
/// # Errors
/// Rejects shapes the table cannot cover, bits set above bit `n - 1`, and
/// bitmaps whose population count is not `k`.
pub fn rank_of(bitmap: u64, n: u32, k: u32, table: &BinomialTable) -> Result<u64, CodecError> {
    validate(n, k, table.max_bits())?;
    if bitmap & !low_bits(n) != 0 {
        return Err(CodecError::BitsOutsideWidth { bitmap, n });
    }
    let set = bitmap.count_ones();
    if set != k {
        return Err(CodecError::WrongSetBitCount {
            bitmap,
            expected: k,
            actual: set,
        });
    }

    let mut total = 0;
    let mut row = n;
    let mut col = n - k;
    // A table entry of 1 means the remaining bits are forced.
    while table.entry(row, col) != 1 {
        row -= 1;
        if (bitmap >> row) & 1 == 1 {
            total += table.entry(row, col - 1);
        } else {
            col -= 1;
        }
    }

    Ok(total)
}

/// Reconstruct the `n`-bit pattern with `k` set bits at position `rank`.
///
/// # Errors
/// Rejects shapes the table cannot cover and ranks at or beyond `C(n, k)`.
pub fn unrank(rank: u64, n: u32, k: u32, table: &BinomialTable) -> Result<u64, CodecError> {
    validate(n, k, table.max_bits())?;
    let count = table.entry(n, k);
    if rank >= count {
        return Err(CodecError::RankOutOfRange { rank, count });
    }

    let mut bitmap = 0;
    let mut remaining = rank;
    let mut row = n;
    let mut col = n - k;
    while row > 0 {
        row -= 1;
        if col > 0 && remaining < table.entry(row, col - 1) {
            col -= 1;
        } else {
            if col > 0 {
                remaining -= table.entry(row, col - 1);
            }
            bitmap |= 1 << row;
        }
    }

    debug_assert_eq!(remaining, 0);
    Ok(bitmap)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// More set bits were requested than the width holds.
    SetBitsExceedWidth { n: u32, k: u32 },
    /// The width is beyond what the binomial table covers.
    WidthTooLarge { n: u32, max_bits: u32 },
    /// The bitmap has bits set at or above bit `n`.
    BitsOutsideWidth { bitmap: u64, n: u32 },
    /// The bitmap does not have exactly `expected` bits set.
    WrongSetBitCount {
        bitmap: u64,
        expected: u32,
        actual: u32,
    },
    /// The rank is not below `C(n, k)`.
    RankOutOfRange { rank: u64, count: u64 },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CodecError::SetBitsExceedWidth { n, k } => {
                write!(f, "{k} set bits do not fit in {n} bits")
            }
            CodecError::WidthTooLarge { n, max_bits } => {
                write!(f, "width of {n} bits exceeds the maximum of {max_bits}")
            }
            CodecError::BitsOutsideWidth { bitmap, n } => {
                write!(f, "bitmap {bitmap:#b} has bits set outside the low {n} bits")
            }
            CodecError::WrongSetBitCount {
                bitmap,
                expected,
                actual,
            } => write!(
                f,
                "bitmap {bitmap:#b} has {actual} set bits, expected {expected}"
            ),
            CodecError::RankOutOfRange { rank, count } => {
                write!(f, "rank {rank} is out of range (there are {count} patterns)")
            }
        }
    }
}

impl std::error::Error for CodecError {}
