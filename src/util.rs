// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::path::{Path, PathBuf};


/// Part function as stored in the [`Day`] table: takes the input text and returns the answer
/// rendered for printing.
pub(crate) type Part = fn(&str) -> anyhow::Result<String>;

pub(crate) struct Day {
	pub(crate) number: u8,
	pub(crate) part1: Part,
	pub(crate) part2: Part,
}


/// Declares the `dayNN` modules and a `DAYS` table pointing at their `part1` & `part2`.
macro_rules! mod_days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	$(
		fn [<day $day _part1>](input: &str) -> anyhow::Result<String> {
			Ok([<day $day>]::part1(input)?.to_string())
		}

		fn [<day $day _part2>](input: &str) -> anyhow::Result<String> {
			Ok([<day $day>]::part2(input)?.to_string())
		}
	)+

	#[allow(clippy::zero_prefixed_literal)]
	pub(crate) const DAYS: &[util::Day] = &[ $(
		util::Day { number: $day, part1: [<day $day _part1>], part2: [<day $day _part2>] },
	)+ ];
} } }

pub(crate) use mod_days;


pub(crate) fn input_path(dir: &Path, day: u8) -> PathBuf {
	dir.join(format!("day{day:02}.txt"))
}

pub(crate) fn load_input(dir: &Path, day: u8) -> anyhow::Result<String> {
	use anyhow::Context as _;
	let path = input_path(dir, day);
	tracing::debug!(day, path = %path.display(), "loading input");
	std::fs::read_to_string(&path)
		.with_context(|| format!("Could not read input for day {day} from {}", path.display()))
}
