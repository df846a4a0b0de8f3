use aoc2025::days::day08;
use aoc2025::input::Cli;
use aoc2025::timer::timed;
use anyhow::Context as _;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let input = Cli::parse().read_input()?;
    let points = day08::parse(&input);
    let pairs = timed("compute distances", || day08::pairs_by_distance(&points));
    let n = day08::connections_for(points.len());
    let p1 = timed("p1", || day08::part1(&points, &pairs, n));
    let p2 = timed("p2", || day08::part2(&points, &pairs)).context("boxes never form one circuit")?;
    println!("pt1 = {}", p1);
    println!("pt2 = {}", p2);
    Ok(())
}
