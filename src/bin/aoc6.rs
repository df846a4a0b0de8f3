use aoc2025::days::day06;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let sheet = day06::parse(&input);
    let p1 = timed("p1", || day06::part1(&sheet));
    let p2 = timed("p2", || day06::part2(&sheet));
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
