use winnow::ModalResult;
use winnow::ascii::{dec_uint, hex_uint};
use winnow::combinator::{alt, eof, preceded, terminated};
use winnow::prelude::*;
use winnow::token::take_while;

/// Parse a bitmap literal: decimal, `0b` binary or `0x` hexadecimal.
pub(crate) fn parse_bitmap(s: &str) -> Result<u64, String> {
    fn binary(input: &mut &str) -> ModalResult<u64> {
        preceded("0b", take_while(1.., ['0', '1']))
            .try_map(|digits: &str| u64::from_str_radix(digits, 2))
            .parse_next(input)
    }

    fn literal(input: &mut &str) -> ModalResult<u64> {
        terminated(alt((binary, preceded("0x", hex_uint), dec_uint)), eof).parse_next(input)
    }

    let mut input = s;
    literal(&mut input).map_err(|_| format!("invalid bitmap literal: {s:?}"))
}
