use std::{fmt, str::FromStr};

use winnow::ModalResult;
use winnow::ascii::dec_uint;
use winnow::combinator::{eof, separated_pair, terminated};
use winnow::prelude::*;

use crate::binomial_table::{BinomialTable, MAX_BITS};
use crate::codec::CodecError;

/// A validated `(n, k)` pair: `k` set bits out of `n` total bits, with
/// `k <= n <= MAX_BITS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    n: u32,
    k: u32,
}

impl Shape {
    pub fn new(n: u32, k: u32) -> Result<Self, CodecError> {
        validate(n, k, MAX_BITS)?;
        Ok(Self { n, k })
    }

    /// Parse a [`Shape`] from its textual representation.
    ///
    /// # Syntax
    /// The expected form is `<n>:<k>`, two decimal integers separated by a
    /// single colon, e.g. `8:5` for five set bits out of eight.
    ///
    /// # Errors
    /// Returns [`ShapeParseError::Malformed`] if the string does not follow the
    /// syntax, and [`ShapeParseError::Invalid`] if the numbers do not describe
    /// a supported shape.
    pub fn from_string(s: &str) -> Result<Self, ShapeParseError> {
        fn shape_literal(input: &mut &str) -> ModalResult<(u32, u32)> {
            terminated(separated_pair(dec_uint, ':', dec_uint), eof).parse_next(input)
        }

        let mut input = s;
        let (n, k) = shape_literal(&mut input).map_err(|_| ShapeParseError::Malformed)?;
        Self::new(n, k).map_err(ShapeParseError::Invalid)
    }

    /// Total number of bits.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Number of set bits.
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Mask covering the low `n` bits.
    pub fn width_mask(&self) -> u64 {
        low_bits(self.n)
    }

    /// Smallest bitmap of this shape: the `k` low-order bits set.
    pub fn first(&self) -> u64 {
        low_bits(self.k)
    }

    /// Largest bitmap of this shape: the `k` high-order bits set.
    pub fn last(&self) -> u64 {
        low_bits(self.k) << (self.n - self.k)
    }

    /// Number of bitmaps of this shape, `C(n, k)`.
    pub fn count(&self) -> u64 {
        BinomialTable::shared().entry(self.n, self.k)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.n, self.k)
    }
}

impl FromStr for Shape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeParseError {
    /// The text is not of the form `<n>:<k>`.
    Malformed,
    /// The numbers parsed but do not form a supported shape.
    Invalid(CodecError),
}

impl fmt::Display for ShapeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeParseError::Malformed => write!(f, "expected a shape of the form <n>:<k>"),
            ShapeParseError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ShapeParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeParseError::Malformed => None,
            ShapeParseError::Invalid(err) => Some(err),
        }
    }
}

pub(crate) fn validate(n: u32, k: u32, max_bits: u32) -> Result<(), CodecError> {
    if n > max_bits {
        return Err(CodecError::WidthTooLarge { n, max_bits });
    }
    if k > n {
        return Err(CodecError::SetBitsExceedWidth { n, k });
    }
    Ok(())
}

pub(crate) fn low_bits(count: u32) -> u64 {
    // Shapes never exceed MAX_BITS, so the shift cannot overflow.
    (1u64 << count) - 1
}
