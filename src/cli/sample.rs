use anyhow::{Context, Result, bail};
use rand::{Rng, SeedableRng, rngs::StdRng};

use bitperm::codec::PermutationCodec;
use bitperm::self_test;

const MAX_MISMATCHES_PER_SHAPE: usize = 5;

pub(crate) fn run_sample(samples: usize, max_bits: u32, seed: Option<u64>) -> Result<usize> {
    let shapes = self_test::shapes(max_bits)
        .with_context(|| format!("cannot sample up to {max_bits} bits"))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let codec = PermutationCodec::standard();

    let mut total_samples = 0usize;
    let mut total_mismatches = 0usize;

    for shape in &shapes {
        let (n, k) = (shape.n(), shape.k());
        let width = n as usize;
        let count = codec.count(n, k)?;
        let mut mismatches = 0usize;

        for _ in 0..samples {
            let rank = rng.gen_range(0..count);
            let bitmap = codec.unrank(rank, n, k)?;
            let reranked = codec.rank_of(bitmap, n, k);
            if reranked != Ok(rank) {
                mismatches += 1;
                if mismatches <= MAX_MISMATCHES_PER_SHAPE {
                    let shown = match reranked {
                        Ok(other) => other.to_string(),
                        Err(err) => err.to_string(),
                    };
                    println!(
                        "Mismatch {}: rank {} -> {:0width$b} -> {}",
                        shape, rank, bitmap, shown
                    );
                }
            }
        }

        total_samples += samples;
        total_mismatches += mismatches;

        if mismatches > 0 {
            println!("Found {} mismatches in {}.", mismatches, shape);
        }
    }

    println!(
        "Checked {} shapes ({} samples).",
        shapes.len(),
        total_samples
    );
    println!("Mismatches: {}", total_mismatches);

    if total_mismatches > 0 {
        bail!("sampled round-trips reported mismatches");
    }

    Ok(total_samples)
}
