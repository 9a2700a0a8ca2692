// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::PathBuf;


/// Runs the Advent of Code 2022 challenge solutions
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Cli {
	/// Day to run; may be repeated, runs all implemented days if omitted
	#[arg(short, long = "day", value_parser = clap::value_parser!(u8).range(1..=25))]
	pub(crate) days: Vec<u8>,

	/// Directory holding the `dayNN.txt` input files
	#[arg(short, long, default_value = "input")]
	pub(crate) input_dir: PathBuf,

	/// Raise the log level; may be repeated
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub(crate) verbose: u8,

	/// Run the selected days one after another
	#[arg(long)]
	pub(crate) sequential: bool,
}

impl Cli {
	pub(crate) fn log_level(&self) -> tracing::Level {
		use tracing::Level;
		match self.verbose {
			0 => Level::WARN,
			1 => Level::INFO,
			2 => Level::DEBUG,
			_ => Level::TRACE,
		}
	}

	/// Resolves the requested day numbers against `available`, in ascending order without
	/// duplicates. No requested days means all of them.
	pub(crate) fn select<'d>(&self, available: &'d [crate::util::Day])
	-> anyhow::Result<Vec<&'d crate::util::Day>> {
		use itertools::Itertools as _;
		if self.days.is_empty() { return Ok(available.iter().collect()) }
		self.days.iter()
			.sorted()
			.dedup()
			.map(|&n| available.iter()
				.find(|day| day.number == n)
				.ok_or_else(|| anyhow::anyhow!("Day {n} is not implemented")))
			.collect()
	}
}


#[cfg(test)]
mod tests {
	use clap::Parser as _;
	use super::Cli;
	use crate::util::Day;

	fn answer(_: &str) -> anyhow::Result<String> { Ok(String::new()) }

	const AVAILABLE: [Day; 3] = [
		Day { number: 1, part1: answer, part2: answer },
		Day { number: 2, part1: answer, part2: answer },
		Day { number: 5, part1: answer, part2: answer },
	];

	fn numbers(days: &[&Day]) -> Vec<u8> {
		days.iter().map(|day| day.number).collect()
	}

	#[test]
	fn defaults() {
		let cli = Cli::try_parse_from(["advent22"]).unwrap();
		assert!(cli.days.is_empty());
		assert_eq!(cli.input_dir, std::path::Path::new("input"));
		assert_eq!(cli.log_level(), tracing::Level::WARN);
		assert!(!cli.sequential);
		assert_eq!(numbers(&cli.select(&AVAILABLE).unwrap()), [1, 2, 5]);
	}

	#[test]
	fn select() {
		let cli = Cli::try_parse_from(["advent22", "-d", "5", "--day", "1", "-d", "5", "-vv"]).unwrap();
		assert_eq!(cli.log_level(), tracing::Level::DEBUG);
		assert_eq!(numbers(&cli.select(&AVAILABLE).unwrap()), [1, 5]);
	}

	#[test_case::test_case(&["advent22", "-d", "3"] ; "unimplemented")]
	fn select_err(args: &[&str]) {
		let cli = Cli::try_parse_from(args).unwrap();
		assert!(cli.select(&AVAILABLE).is_err());
	}

	#[test_case::test_case(&["advent22", "-d", "0"] ; "zero")]
	#[test_case::test_case(&["advent22", "-d", "26"] ; "past christmas")]
	#[test_case::test_case(&["advent22", "-d", "x"] ; "not a number")]
	fn parse_err(args: &[&str]) {
		assert!(Cli::try_parse_from(args).is_err());
	}
}
