// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Shape { Rock, Paper, Scissors }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Outcome { Lose, Draw, Win }

impl Shape {
	fn score(self) -> u64 {
		match self { Shape::Rock => 1, Shape::Paper => 2, Shape::Scissors => 3 }
	}

	/// The shape this one defeats.
	fn beats(self) -> Self {
		use Shape::*;
		match self { Rock => Scissors, Paper => Rock, Scissors => Paper }
	}

	fn outcome_against(self, opponent: Shape) -> Outcome {
		if self == opponent { Outcome::Draw }
		else if self.beats() == opponent { Outcome::Win }
		else { Outcome::Lose }
	}

	fn for_outcome_against(opponent: Shape, outcome: Outcome) -> Self {
		match outcome {
			Outcome::Draw => opponent,
			Outcome::Lose => opponent.beats(),
			Outcome::Win => opponent.beats().beats(),
		}
	}
}

impl Outcome {
	fn score(self) -> u64 {
		match self { Outcome::Lose => 0, Outcome::Draw => 3, Outcome::Win => 6 }
	}
}

/// Opponent's shape and the strategy guide's second column, still undecided.
#[derive(Clone, Copy)]
struct Round { opponent: Shape, column: Column }

#[derive(Clone, Copy, Debug)]
enum Column { X, Y, Z }


fn input_rounds_from_str(s: &str) -> Result<Vec<Round>, parsing::RoundsError> {
	parsing::rounds_from_str(s).collect()
}


fn part1_impl(input_rounds: &[Round]) -> u64 {
	input_rounds.iter()
		.map(|&Round { opponent, column }| {
			let you = match column { Column::X => Shape::Rock, Column::Y => Shape::Paper, Column::Z => Shape::Scissors };
			you.score() + you.outcome_against(opponent).score()
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(part1_impl(&input_rounds_from_str(input)?))
}


fn part2_impl(input_rounds: &[Round]) -> u64 {
	input_rounds.iter()
		.map(|&Round { opponent, column }| {
			let outcome = match column { Column::X => Outcome::Lose, Column::Y => Outcome::Draw, Column::Z => Outcome::Win };
			Shape::for_outcome_against(opponent, outcome).score() + outcome.score()
		})
		.sum()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	Ok(part2_impl(&input_rounds_from_str(input)?))
}


mod parsing {
	use std::str::FromStr;
	use super::{Shape, Column, Round};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RoundError {
		#[error("Expected “<A|B|C> <X|Y|Z>”")]
		Format,
		#[error("Invalid opponent shape {0:?}")]
		Opponent(char),
		#[error("Invalid second column {0:?}")]
		Column(char),
	}

	impl FromStr for Round {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let &[opponent, b' ', column] = s.as_bytes() else { return Err(RoundError::Format) };
			let opponent = match opponent {
				b'A' => Shape::Rock,
				b'B' => Shape::Paper,
				b'C' => Shape::Scissors,
				b => return Err(RoundError::Opponent(b as char)),
			};
			let column = match column {
				b'X' => Column::X,
				b'Y' => Column::Y,
				b'Z' => Column::Z,
				b => return Err(RoundError::Column(b as char)),
			};
			Ok(Round { opponent, column })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RoundsError {
		#[error("No rounds")]
		Empty,
		#[error("Invalid round on line {line}")]
		Round { line: usize, source: RoundError },
	}

	pub(super) fn rounds_from_str(s: &str) -> impl Iterator<Item = Result<Round, RoundsError>> + '_ {
		use {std::iter::once, either::Either};
		if s.is_empty() { return Either::Left(once(Err(RoundsError::Empty))) }
		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RoundsError::Round { line: l + 1, source: e })))
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		A Y
		B X
		C Z
	" };

	#[test]
	fn example() {
		let rounds = input_rounds_from_str(INPUT).unwrap();
		assert_eq!(part1_impl(&rounds), 15);
		assert_eq!(part2_impl(&rounds), 12);
	}

	#[test_case(Shape::Rock, Outcome::Win => Shape::Paper ; "win rock")]
	#[test_case(Shape::Paper, Outcome::Lose => Shape::Rock ; "lose paper")]
	#[test_case(Shape::Scissors, Outcome::Draw => Shape::Scissors ; "draw scissors")]
	#[test_case(Shape::Scissors, Outcome::Win => Shape::Rock ; "win scissors")]
	fn for_outcome_against(opponent: Shape, outcome: Outcome) -> Shape {
		let shape = Shape::for_outcome_against(opponent, outcome);
		assert_eq!(shape.outcome_against(opponent), outcome);
		shape
	}

	#[test_case("A" ; "too short")]
	#[test_case("D X" ; "bad opponent")]
	#[test_case("A W" ; "bad column")]
	fn invalid(input: &str) {
		assert!(input_rounds_from_str(input).is_err());
	}
}
