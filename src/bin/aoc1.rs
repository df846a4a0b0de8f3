use aoc2025::days::day01;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let rotations = day01::parse(&input);
    let (p1, p2) = timed("p12", || day01::solve(&rotations));
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
