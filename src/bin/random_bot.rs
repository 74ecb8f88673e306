use std::io;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use golad_bot::interface::riddles::client;
use golad_bot::strategy::RandomStrategy;

#[derive(Parser)]
struct Args {
    /// RNG seed, drawn randomly when not given
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    // stdout is reserved for moves, the seed goes to the log channel
    eprintln!("(info): rng seed {}", seed);

    let strategy = RandomStrategy::new(SmallRng::seed_from_u64(seed));
    client::run(strategy, io::stdin().lock(), io::stdout().lock(), io::stderr())
}
