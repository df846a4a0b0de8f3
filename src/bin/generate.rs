use aoc2025::generate::machines;
use clap::Parser;

/// Prints random day 10 machines, one per line.
#[derive(Parser)]
struct Cli {
    #[clap(long, short = 'n', default_value = "10")]
    n_machines: usize,
    #[clap(long, short = 's')]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    for m in machines::generate(args.n_machines, args.seed) {
        println!("{}", m);
    }
    Ok(())
}
