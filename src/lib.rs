//! Ranking and unranking of fixed-width bit patterns with a fixed number of
//! set bits, using a table of binomial coefficients.
pub mod binomial_table;
pub mod codec;
pub mod enumerator;
pub mod shape;

pub use binomial_table::{BinomialTable, MAX_BITS};
pub use codec::{CodecError, PermutationCodec, rank_of, unrank};
pub use enumerator::BitPermutations;
pub use shape::Shape;
