mod demo;
mod literal;
mod sample;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bitperm::binomial_table::MAX_BITS;
use bitperm::codec::PermutationCodec;
use bitperm::shape::Shape;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first few bit permutations of a shape.
    Demo {
        /// Shape as `<total bits>:<set bits>`, e.g. `8:5`.
        #[arg(long, default_value = "8:5")]
        shape: Shape,
        /// Number of permutations to print.
        #[arg(long, default_value_t = 20)]
        count: u64,
    },
    /// Check rank and unrank against an independent enumeration of every shape.
    SelfTest {
        /// Largest total bit width to check.
        #[arg(long, default_value_t = MAX_BITS)]
        max_bits: u32,
    },
    /// Round-trip randomly chosen ranks for every shape.
    Sample {
        /// Ranks sampled per shape.
        #[arg(long, default_value_t = 256)]
        samples: usize,
        /// Largest total bit width to sample.
        #[arg(long, default_value_t = MAX_BITS)]
        max_bits: u32,
        /// Seed for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the rank of a bitmap.
    Rank {
        /// Bitmap in decimal, `0b` binary or `0x` hexadecimal.
        #[arg(value_parser = literal::parse_bitmap)]
        bitmap: u64,
        /// Shape as `<total bits>:<set bits>`.
        shape: Shape,
    },
    /// Print the bitmap at a rank.
    Unrank {
        rank: u64,
        /// Shape as `<total bits>:<set bits>`.
        shape: Shape,
    },
}

/// Parse CLI arguments and execute the requested command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { shape, count } => {
            demo::run_demo(shape, count)?;
        }
        Commands::SelfTest { max_bits } => {
            self_test::run_self_test(max_bits)?;
        }
        Commands::Sample {
            samples,
            max_bits,
            seed,
        } => {
            sample::run_sample(samples, max_bits, seed)?;
        }
        Commands::Rank { bitmap, shape } => {
            let rank = PermutationCodec::standard()
                .rank_of(bitmap, shape.n(), shape.k())
                .with_context(|| format!("cannot rank {bitmap:#b} as {shape}"))?;
            println!("{rank}");
        }
        Commands::Unrank { rank, shape } => {
            let bitmap = PermutationCodec::standard()
                .unrank(rank, shape.n(), shape.k())
                .with_context(|| format!("cannot unrank {rank} as {shape}"))?;
            let width = shape.n() as usize;
            println!("{bitmap} ({bitmap:0width$b})");
        }
    }

    Ok(())
}
