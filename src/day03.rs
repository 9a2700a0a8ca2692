// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Set of item types, as a bitmask indexed by priority.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Items(u64);

impl Items {
	fn priority(item: u8) -> u32 {
		match item {
			b'a'..=b'z' => (item - b'a') as u32 + 1,
			_ => (item - b'A') as u32 + 27,
		}
	}

	fn from_bytes(bytes: &[u8]) -> Self {
		Items(bytes.iter().fold(0, |acc, &b| acc | 1 << Self::priority(b)))
	}

	fn intersection(self, other: Self) -> Self {
		Items(self.0 & other.0)
	}

	/// Priority of the single item type in the set, if there is exactly one.
	fn single_priority(self) -> Option<u32> {
		(self.0.count_ones() == 1).then(|| self.0.trailing_zeros())
	}
}

struct Rucksack<'s>(&'s [u8]);

impl Rucksack<'_> {
	fn compartments(&self) -> [Items; 2] {
		let (left, right) = self.0.split_at(self.0.len() / 2);
		[Items::from_bytes(left), Items::from_bytes(right)]
	}

	fn items(&self) -> Items {
		Items::from_bytes(self.0)
	}
}


fn input_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack<'_>>, parsing::RucksacksError> {
	parsing::rucksacks_from_str(s).collect()
}


fn part1_impl(input_rucksacks: &[Rucksack<'_>]) -> anyhow::Result<u64> {
	input_rucksacks.iter()
		.enumerate()
		.map(|(i, rucksack)| {
			let [left, right] = rucksack.compartments();
			left.intersection(right).single_priority()
				.map(u64::from)
				.ok_or_else(|| anyhow::anyhow!(
					"Rucksack {} does not have exactly one misplaced item type", i + 1))
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part1_impl(&input_rucksacks_from_str(input)?)
}


fn part2_impl(input_rucksacks: &[Rucksack<'_>]) -> anyhow::Result<u64> {
	anyhow::ensure!(input_rucksacks.len() % 3 == 0,
		"{} rucksacks cannot be split into groups of three", input_rucksacks.len());
	input_rucksacks.chunks_exact(3)
		.enumerate()
		.map(|(g, group)| {
			group.iter()
				.map(Rucksack::items)
				.reduce(Items::intersection)
				.and_then(Items::single_priority)
				.map(u64::from)
				.ok_or_else(|| anyhow::anyhow!("Group {} does not share exactly one badge", g + 1))
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part2_impl(&input_rucksacks_from_str(input)?)
}


mod parsing {
	use super::Rucksack;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RucksackError {
		#[error("Odd number of items ({0})")]
		OddLen(usize),
		#[error("Invalid item {found:?} in column {column}")]
		InvalidItem { column: usize, found: char },
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			if let Some((c, found)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_alphabetic()) {
				return Err(RucksackError::InvalidItem { column: c + 1, found })
			}
			if s.len() % 2 != 0 { return Err(RucksackError::OddLen(s.len())) }
			Ok(Rucksack(s.as_bytes()))
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RucksacksError {
		#[error("No rucksacks")]
		Empty,
		#[error("Invalid rucksack on line {line}")]
		Rucksack { line: usize, source: RucksackError },
	}

	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(RucksacksError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.try_into()
				.map_err(|e| RucksacksError::Rucksack { line: l + 1, source: e })))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };
	let rucksacks = input_rucksacks_from_str(INPUT).unwrap();
	assert_eq!(Items::priority(b'p'), 16);
	assert_eq!(Items::priority(b'L'), 38);
	assert_eq!(part1_impl(&rucksacks).unwrap(), 157);
	assert_eq!(part2_impl(&rucksacks).unwrap(), 70);
	assert!(part2_impl(&rucksacks[..4]).is_err());
	assert!(part1_impl(&input_rucksacks_from_str("abab").unwrap()).is_err());
	assert!(matches!(input_rucksacks_from_str("ab1c"),
		Err(parsing::RucksacksError::Rucksack { line: 1, source: parsing::RucksackError::InvalidItem { column: 3, .. } })));
}
