use std::sync::OnceLock;

use crate::codec::CodecError;

/// Widest bit pattern supported by the codec.
pub const MAX_BITS: u32 = 32;

/// Pascal's triangle up to a fixed number of rows.
///
/// Row `i` holds `C(i, 0) ..= C(i, i)`. Entries are `u64` so that the widest
/// supported row (`C(32, 16) = 601_080_390`) leaves plenty of headroom.
/// The table never changes after it is built, so it can be shared freely
/// between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinomialTable {
    rows: Vec<Vec<u64>>,
}

impl BinomialTable {
    /// Build rows `0..=max_bits`.
    ///
    /// # Errors
    /// Returns [`CodecError::WidthTooLarge`] if `max_bits` exceeds [`MAX_BITS`].
    pub fn build(max_bits: u32) -> Result<Self, CodecError> {
        if max_bits > MAX_BITS {
            return Err(CodecError::WidthTooLarge {
                n: max_bits,
                max_bits: MAX_BITS,
            });
        }
        Ok(Self::triangle(max_bits))
    }

    fn triangle(max_bits: u32) -> Self {
        let mut rows: Vec<Vec<u64>> = Vec::with_capacity(max_bits as usize + 1);
        rows.push(vec![1]);
        for i in 1..=max_bits as usize {
            let prev = &rows[i - 1];
            let mut row = Vec::with_capacity(i + 1);
            row.push(1);
            // Each inner entry is the sum of the two entries above it.
            row.extend(prev.windows(2).map(|w| w[0] + w[1]));
            row.push(1);
            rows.push(row);
        }

        Self { rows }
    }

    /// Process-wide table covering every width up to [`MAX_BITS`].
    pub fn shared() -> &'static BinomialTable {
        static TABLE: OnceLock<BinomialTable> = OnceLock::new();
        TABLE.get_or_init(|| BinomialTable::triangle(MAX_BITS))
    }

    /// Largest `n` this table can answer for.
    pub fn max_bits(&self) -> u32 {
        (self.rows.len() - 1) as u32
    }

    pub fn row(&self, row: u32) -> Option<&[u64]> {
        self.rows.get(row as usize).map(Vec::as_slice)
    }

    pub fn get(&self, row: u32, col: u32) -> Option<u64> {
        self.row(row)?.get(col as usize).copied()
    }

    /// `C(n, k)`, which is `0` when `k > n`. Returns `None` if `n` is beyond
    /// [`Self::max_bits`].
    pub fn choose(&self, n: u32, k: u32) -> Option<u64> {
        let row = self.row(n)?;
        Some(row.get(k as usize).copied().unwrap_or(0))
    }

    /// Table with arbitrary rows, for exercising consumers against a broken
    /// triangle.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<u64>>) -> Self {
        assert!(
            rows.iter().enumerate().all(|(i, row)| row.len() == i + 1),
            "rows must be triangular"
        );
        Self { rows }
    }

    /// Unchecked lookup for the codec's inner loops, which validate their
    /// cursor bounds up front.
    #[inline]
    pub(crate) fn entry(&self, row: u32, col: u32) -> u64 {
        self.rows[row as usize][col as usize]
    }
}

/// Multiplicative binomial coefficient, independent of any table.
pub fn n_choose_k(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 1..=k {
        result = result * (n - (k - i)) / i;
    }
    result
}
