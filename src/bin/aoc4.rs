use aoc2025::days::day04;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let floor = day04::parse(&input)?;
    let (p1, p2) = timed("p12", || day04::solve(&floor));
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
