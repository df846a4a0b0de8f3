use aoc2025::days::day02;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let ranges = day02::parse(&input);
    let (p1, p2) = timed("p12", || day02::solve(&ranges));
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
