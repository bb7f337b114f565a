use anyhow::Result;
use itertools::Itertools;

use bitperm::codec::PermutationCodec;
use bitperm::shape::Shape;

pub(crate) fn run_demo(shape: Shape, count: u64) -> Result<()> {
    let codec = PermutationCodec::standard();
    println!("{}", render_listing(&codec, shape, count)?);
    Ok(())
}

/// Header line followed by one 1-based line per permutation, at most `count`
/// of them.
fn render_listing(codec: &PermutationCodec<'_>, shape: Shape, count: u64) -> Result<String> {
    let (n, k) = (shape.n(), shape.k());
    let shown = count.min(codec.count(n, k)?);
    let width = n as usize;

    let lines = (0..shown)
        .map(|rank| -> Result<String> {
            let bitmap = codec.unrank(rank, n, k)?;
            Ok(format!("{:>5}: {bitmap:0width$b}", rank + 1))
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(format!(
        "The first {shown} binary permutations of {k} set bits out of {n} total bits are\n{}",
        lines.iter().join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn listing(shape: &str, count: u64) -> String {
        render_listing(
            &PermutationCodec::standard(),
            Shape::from_string(shape).unwrap(),
            count,
        )
        .unwrap()
    }

    #[test]
    fn first_twenty_of_eight_choose_five() {
        assert_snapshot!(listing("8:5", 20), @r"
        The first 20 binary permutations of 5 set bits out of 8 total bits are
            1: 00011111
            2: 00101111
            3: 00110111
            4: 00111011
            5: 00111101
            6: 00111110
            7: 01001111
            8: 01010111
            9: 01011011
           10: 01011101
           11: 01011110
           12: 01100111
           13: 01101011
           14: 01101101
           15: 01101110
           16: 01110011
           17: 01110101
           18: 01110110
           19: 01111001
           20: 01111010
        ");
    }

    #[test]
    fn clamps_to_available_permutations() {
        assert_snapshot!(listing("3:2", 10), @r"
        The first 3 binary permutations of 2 set bits out of 3 total bits are
            1: 011
            2: 101
            3: 110
        ");
    }
}
