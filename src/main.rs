// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod cli;
mod util;
util::mod_days![01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11, 12, 13, 14];

use std::{path::Path, time::{Duration, Instant}};


struct Outcome {
	number: u8,
	answers: [String; 2],
	elapsed: Duration,
}

fn run_day(day: &util::Day, input_dir: &Path) -> anyhow::Result<Outcome> {
	use anyhow::Context as _;
	let input = util::load_input(input_dir, day.number)?;
	tracing::info!(day = day.number, "running");

	let start = Instant::now();
	let part1 = (day.part1)(&input).with_context(|| format!("Day {} part 1 failed", day.number))?;
	let part2 = (day.part2)(&input).with_context(|| format!("Day {} part 2 failed", day.number))?;
	let elapsed = start.elapsed();

	tracing::info!(day = day.number, ?elapsed, "finished");
	Ok(Outcome { number: day.number, answers: [part1, part2], elapsed })
}

/// Multi-line answers start on the line after their label.
fn write_outcome(w: &mut impl std::io::Write, outcome: &Outcome) -> std::io::Result<()> {
	for (p, answer) in outcome.answers.iter().enumerate() {
		let sep = if answer.contains('\n') { '\n' } else { ' ' };
		writeln!(w, "Day {:02}; part {}:{sep}{answer}", outcome.number, p + 1)?;
	}
	Ok(())
}


fn main() -> anyhow::Result<()> {
	use {clap::Parser as _, rayon::prelude::*};

	let cli = cli::Cli::parse();
	tracing_subscriber::fmt()
		.with_max_level(cli.log_level())
		.with_writer(std::io::stderr)
		.init();

	let days = cli.select(DAYS)?;
	let results: Vec<_> = if cli.sequential {
		days.iter().map(|day| run_day(day, &cli.input_dir)).collect()
	} else {
		days.par_iter().map(|day| run_day(day, &cli.input_dir)).collect()
	};

	let mut stdout = std::io::stdout().lock();
	let mut total = Duration::ZERO;
	let mut first_err = None;
	for result in results {
		match result {
			Ok(outcome) => {
				total += outcome.elapsed;
				write_outcome(&mut stdout, &outcome)?;
			}
			Err(err) => {
				tracing::error!("{err:#}");
				first_err.get_or_insert(err);
			}
		}
	}
	tracing::info!(?total, "all days finished");

	first_err.map_or(Ok(()), Err)
}


#[cfg(test)]
mod tests {
	use super::*;

	fn shout(input: &str) -> anyhow::Result<String> { Ok(input.trim().to_uppercase()) }
	fn count(input: &str) -> anyhow::Result<String> { Ok(input.trim().len().to_string()) }
	fn fail(_: &str) -> anyhow::Result<String> { anyhow::bail!("No answer") }

	fn input_dir(name: &str) -> std::path::PathBuf {
		let dir = std::env::temp_dir().join(format!("advent22-{name}-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();
		std::fs::write(util::input_path(&dir, 3), "abc\n").unwrap();
		dir
	}

	#[test]
	fn run_day_answers() {
		let dir = input_dir("answers");
		let outcome = run_day(&util::Day { number: 3, part1: shout, part2: count }, &dir).unwrap();
		assert_eq!(outcome.number, 3);
		assert_eq!(outcome.answers, ["ABC", "3"]);
		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn run_day_errors() {
		let dir = input_dir("errors");
		let err = run_day(&util::Day { number: 3, part1: shout, part2: fail }, &dir).err().unwrap();
		assert_eq!(err.to_string(), "Day 3 part 2 failed");
		assert_eq!(format!("{err:#}"), "Day 3 part 2 failed: No answer");
		let err = run_day(&util::Day { number: 4, part1: shout, part2: count }, &dir).err().unwrap();
		assert!(err.to_string().contains("day04.txt"), "{err}");
		std::fs::remove_dir_all(dir).unwrap();
	}

	#[test]
	fn write_outcome() {
		let outcome = Outcome {
			number: 10,
			answers: ["13140".to_owned(), "##..\n..##".to_owned()],
			elapsed: Duration::ZERO,
		};
		let mut out = vec![];
		super::write_outcome(&mut out, &outcome).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), indoc::indoc! { "
			Day 10; part 1: 13140
			Day 10; part 2:
			##..
			..##
		" });
	}
}
