use aoc2025::days::day09;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let tiles = day09::parse(&input);
    let p1 = timed("p1", || day09::part1(&tiles));
    let p2 = timed("p2", || day09::part2(&tiles));
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
