use bitperm::{
    binomial_table::BinomialTable,
    codec::{PermutationCodec, rank_of, unrank},
    enumerator::BitPermutations,
    self_test::{self, check_shape},
    shape::Shape,
};

#[test]
fn every_pattern_up_to_twelve_bits() {
    let table = BinomialTable::build(12).unwrap();
    for n in 0..=12 {
        for k in 0..=n {
            let shape = Shape::new(n, k).unwrap();
            let mut count = 0;
            for (position, bitmap) in BitPermutations::new(shape).enumerate() {
                let position = position as u64;
                assert_eq!(rank_of(bitmap, n, k, &table), Ok(position), "{shape} {bitmap:b}");
                assert_eq!(unrank(position, n, k, &table), Ok(bitmap), "{shape} {position}");
                count += 1;
            }
            assert_eq!(Some(count), table.choose(n, k), "{shape}");
        }
    }
}

#[test]
fn every_value_has_exactly_one_shape() {
    // Each n-bit value is the rank-th pattern of the shape given by its
    // popcount, so ranking every value covers every shape bijectively.
    let codec = PermutationCodec::standard();
    let n = 10;
    let mut seen = vec![Vec::new(); n as usize + 1];
    for bitmap in 0..(1u64 << n) {
        let k = bitmap.count_ones();
        let rank = codec.rank_of(bitmap, n, k).unwrap();
        seen[k as usize].push(rank);
    }
    for (k, ranks) in seen.iter().enumerate() {
        let expected: Vec<u64> = (0..codec.count(n, k as u32).unwrap()).collect();
        assert_eq!(ranks, &expected, "{n}:{k}");
    }
}

#[test]
fn self_test_passes_up_to_twelve_bits() {
    let codec = PermutationCodec::standard();
    let report = self_test::run(&codec, 12).unwrap();
    assert_eq!(report.shapes, 13 * 14 / 2);
    assert_eq!(report.patterns, (1u64 << 13) - 1);
}

#[test]
#[ignore]
fn widest_balanced_shape() {
    let codec = PermutationCodec::standard();
    let count = check_shape(&codec, Shape::new(32, 16).unwrap()).unwrap();
    assert_eq!(count, 601_080_390);
}
