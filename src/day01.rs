// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Elf {
	calories: Vec<u64>,
}

impl Elf {
	fn total_calories(&self) -> u64 {
		self.calories.iter().sum()
	}
}


fn input_elves_from_str(s: &str) -> Result<Vec<Elf>, parsing::CaloriesError> {
	parsing::elves_from_str(s)
}


fn part1_impl(input_elves: &[Elf]) -> u64 {
	input_elves.iter().map(Elf::total_calories).max().unwrap_or(0)
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(part1_impl(&input_elves_from_str(input)?))
}


fn part2_impl(input_elves: &[Elf]) -> u64 {
	use {std::cmp::Reverse, itertools::Itertools as _};
	input_elves.iter()
		.map(Elf::total_calories)
		.sorted_unstable_by_key(|&total| Reverse(total))
		.take(3)
		.sum()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	Ok(part2_impl(&input_elves_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Elf;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CaloriesError {
		#[error("No elves")]
		Empty,
		#[error("Invalid calories on line {line}")]
		Invalid { line: usize, source: ParseIntError },
	}

	pub(super) fn elves_from_str(s: &str) -> Result<Vec<Elf>, CaloriesError> {
		let mut elves = vec![];
		let mut current: Option<Elf> = None;

		for (l, line) in s.lines().enumerate() {
			if line.is_empty() {
				elves.extend(current.take());
				continue
			}
			let calories = line.parse()
				.map_err(|e| CaloriesError::Invalid { line: l + 1, source: e })?;
			current.get_or_insert_with(|| Elf { calories: vec![] }).calories.push(calories);
		}
		elves.extend(current);

		if elves.is_empty() { return Err(CaloriesError::Empty) }
		Ok(elves)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };
	let elves = input_elves_from_str(INPUT).unwrap();
	assert_eq!(elves.len(), 5);
	assert_eq!(part1_impl(&elves), 24_000);
	assert_eq!(part2_impl(&elves), 45_000);
	assert_eq!(part2_impl(&elves[..2]), 10_000);
	assert!(matches!(input_elves_from_str(""), Err(parsing::CaloriesError::Empty)));
	assert!(matches!(input_elves_from_str("1000\nabc\n"),
		Err(parsing::CaloriesError::Invalid { line: 2, .. })));
}
