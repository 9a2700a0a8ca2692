// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Inclusive range of section IDs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Sections { first: u32, last: u32 }

impl Sections {
	fn contains(&self, other: &Sections) -> bool {
		self.first <= other.first && self.last >= other.last
	}

	fn overlaps(&self, other: &Sections) -> bool {
		self.first <= other.last && other.first <= self.last
	}
}

struct Pair([Sections; 2]);


fn input_pairs_from_str(s: &str) -> Result<Vec<Pair>, parsing::PairsError> {
	parsing::pairs_from_str(s).collect()
}


fn part1_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter()
		.filter(|Pair([left, right])| left.contains(right) || right.contains(left))
		.count()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_pairs_from_str(input)?))
}


fn part2_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter()
		.filter(|Pair([left, right])| left.overlaps(right))
		.count()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(part2_impl(&input_pairs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Sections, Pair};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum SectionsError {
		#[error("Missing “-”")]
		NoHyphen,
		#[error("Invalid section ID")]
		Id(#[from] ParseIntError),
		#[error("Range {first}-{last} is backwards")]
		Backwards { first: u32, last: u32 },
	}

	impl FromStr for Sections {
		type Err = SectionsError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (first, last) = s.split_once('-').ok_or(SectionsError::NoHyphen)?;
			let (first, last) = (first.parse()?, last.parse()?);
			if last < first { return Err(SectionsError::Backwards { first, last }) }
			Ok(Sections { first, last })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PairError {
		#[error("Missing “,”")]
		NoComma,
		#[error("Invalid {side}-hand sections")]
		Sections { side: &'static str, source: SectionsError },
	}

	impl FromStr for Pair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',').ok_or(PairError::NoComma)?;
			let left = left.parse().map_err(|e| PairError::Sections { side: "left", source: e })?;
			let right = right.parse().map_err(|e| PairError::Sections { side: "right", source: e })?;
			Ok(Pair([left, right]))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PairsError {
		#[error("No pairs")]
		Empty,
		#[error("Invalid pair on line {line}")]
		Pair { line: usize, source: PairError },
	}

	pub(super) fn pairs_from_str(s: &str) -> impl Iterator<Item = Result<Pair, PairsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(PairsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| PairsError::Pair { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };
	let pairs = input_pairs_from_str(INPUT).unwrap();
	assert_eq!(pairs[3].0, [Sections { first: 2, last: 8 }, Sections { first: 3, last: 7 }]);
	assert_eq!(part1_impl(&pairs), 2);
	assert_eq!(part2_impl(&pairs), 4);
	assert!(matches!(input_pairs_from_str("2-4,6-8\n2-4;6-8"), Err(parsing::PairsError::Pair { line: 2, .. })));
	assert!(matches!(input_pairs_from_str("4-2,6-8"), Err(parsing::PairsError::Pair {
		source: parsing::PairError::Sections { side: "left", source: parsing::SectionsError::Backwards { .. } }, .. })));
}
