//! Applies a list of block exchanges to a sequence and prints the result.
//!
//! With no arguments it replays the classic exercise on `[0, 8)`:
//! `block-exchange` prints `0, 5, 6, 7, 2, 3, 4, 1` for swaps
//! `1:5 2:4 4:6 2:6`.

use std::str::FromStr;

use anyhow::{Context, bail};
use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use implicit_treap::ImplicitTreap;

const DEFAULT_SWAPS: [Swap; 4] = [
    Swap { i: 1, j: 5 },
    Swap { i: 2, j: 4 },
    Swap { i: 4, j: 6 },
    Swap { i: 2, j: 6 },
];

#[derive(Clone, Copy, Debug)]
struct Swap {
    i: usize,
    j: usize,
}

impl FromStr for Swap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let Some((i, j)) = s.split_once(':') else {
            bail!("expected I:J, got {s:?}");
        };
        let i = i.trim().parse::<usize>().with_context(|| format!("bad block start in {s:?}"))?;
        let j = j.trim().parse::<usize>().with_context(|| format!("bad block end in {s:?}"))?;
        Ok(Self { i, j })
    }
}

#[derive(Debug, Parser)]
#[command(name = "block-exchange", version, about = "Swap equal-length blocks of a sequence")]
struct Options {
    /// Build the sequence 0, 1, ..., LEN - 1.
    #[arg(short = 'n', long, default_value_t = 8, conflicts_with = "values")]
    len: usize,

    /// Explicit comma-separated sequence.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i64>>,

    /// Block pair to exchange, as I:J. May be repeated.
    #[arg(short, long = "swap", value_name = "I:J")]
    swaps: Vec<Swap>,

    /// Seed for node priorities. Omit for OS randomness.
    #[arg(long)]
    seed: Option<u64>,
}

fn run(options: Options) -> anyhow::Result<String> {
    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let values = options
        .values
        .unwrap_or_else(|| (0..options.len as i64).collect());
    let mut seq = ImplicitTreap::from_values(values, rng);

    let swaps = if options.swaps.is_empty() {
        DEFAULT_SWAPS.to_vec()
    } else {
        options.swaps
    };
    for Swap { i, j } in swaps {
        seq.exchange_blocks(i, j)
            .with_context(|| format!("swap {i}:{j} failed"))?;
        debug!("after {i}:{j}: {seq:?}");
    }

    let rendered: Vec<String> = seq.iter().map(i64::to_string).collect();
    Ok(rendered.join(", "))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let options = Options::parse();
    debug!("options: {options:?}");
    println!("{}", run(options)?);
    Ok(())
}
