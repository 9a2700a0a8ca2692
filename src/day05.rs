// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Crate labels per stack, bottom first.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Stacks(Vec<Vec<u8>>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Move {
	count: usize,
	from: usize,
	to: usize,
}

#[derive(Clone, Copy)]
enum Crane {
	/// Moves crates one at a time.
	CrateMover9000,
	/// Moves all crates of a step at once.
	CrateMover9001,
}

impl Stacks {
	fn apply(&mut self, step: Move, crane: Crane) -> anyhow::Result<()> {
		let Move { count, from, to } = step;
		let available = self.0[from].len();
		anyhow::ensure!(count <= available,
			"Cannot move {count} crates from stack {} holding {available}", from + 1);

		let mut moved = self.0[from].split_off(available - count);
		if let Crane::CrateMover9000 = crane { moved.reverse() }
		self.0[to].append(&mut moved);
		Ok(())
	}

	fn top_crates(&self) -> String {
		self.0.iter()
			.filter_map(|stack| stack.last())
			.map(|&label| label as char)
			.collect()
	}
}


fn input_from_str(s: &str) -> Result<(Stacks, Vec<Move>), parsing::InputError> {
	parsing::try_stacks_and_moves_from_str(s)
}


fn part1and2_impl((mut stacks, moves): (Stacks, Vec<Move>), crane: Crane) -> anyhow::Result<String> {
	for (i, &step) in moves.iter().enumerate() {
		stacks.apply(step, crane)
			.map_err(|e| e.context(format!("Move {} failed", i + 1)))?;
		tracing::trace!(?step, ?stacks);
	}
	Ok(stacks.top_crates())
}

pub(crate) fn part1(input: &str) -> anyhow::Result<String> {
	part1and2_impl(input_from_str(input)?, Crane::CrateMover9000)
}

pub(crate) fn part2(input: &str) -> anyhow::Result<String> {
	part1and2_impl(input_from_str(input)?, Crane::CrateMover9001)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Stacks, Move};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum StacksError {
		#[error("Invalid byte {found:?} on line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
		#[error("No stacks")]
		Empty,
	}

	/// Parses the drawing, where crates sit in every fourth column starting at the second one
	/// (`[A] [B]`), topmost line first, followed by a line of stack labels.
	fn try_stacks_from_lines<'l>(lines: &[&'l str]) -> Result<Stacks, StacksError> {
		let len = lines.iter().map(|line| (line.len() + 1) / 4).max().unwrap_or(0);
		if len == 0 { return Err(StacksError::Empty) }

		let mut stacks = vec![vec![]; len];
		for (l, line) in lines.iter().enumerate().rev() {
			for (i, stack) in stacks.iter_mut().enumerate() {
				match line.as_bytes().get(4 * i + 1) {
					Some(b) if b.is_ascii_uppercase() => stack.push(*b),
					Some(b) if *b == b' ' || b.is_ascii_digit() => (),
					None => (),
					Some(&b) => return Err(StacksError::InvalidByte {
						line: l + 1, column: 4 * i + 2, found: b as char }),
				}
			}
		}

		Ok(Stacks(stacks))
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MoveError {
		#[error("Expected “move <n> from <stack> to <stack>”")]
		Format,
		#[error("Invalid number")]
		Number(#[from] ParseIntError),
		#[error("Stack numbers start at 1")]
		ZeroStack,
		#[error("Moving from and to the same stack")]
		SameStack,
	}

	impl FromStr for Move {
		type Err = MoveError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let s = s.strip_prefix("move ").ok_or(MoveError::Format)?;
			let (count, s) = s.split_once(" from ").ok_or(MoveError::Format)?;
			let (from, to) = s.split_once(" to ").ok_or(MoveError::Format)?;
			let (count, from, to): (usize, usize, usize) = (count.parse()?, from.parse()?, to.parse()?);
			if from == 0 || to == 0 { return Err(MoveError::ZeroStack) }
			if from == to { return Err(MoveError::SameStack) }
			Ok(Move { count, from: from - 1, to: to - 1 })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InputError {
		#[error("Invalid stacks drawing")]
		Stacks(#[from] StacksError),
		#[error("Expected a blank line after the stacks drawing")]
		NoBlank,
		#[error("Invalid move on line {line}")]
		Move { line: usize, source: MoveError },
		#[error("Move on line {line} refers to stack {stack}, but there are only {len}")]
		NoSuchStack { line: usize, stack: usize, len: usize },
	}

	pub(super) fn try_stacks_and_moves_from_str(s: &str) -> Result<(Stacks, Vec<Move>), InputError> {
		let lines = s.lines().collect::<Vec<_>>();
		let blank = lines.iter().position(|line| line.is_empty()).ok_or(InputError::NoBlank)?;
		let stacks = try_stacks_from_lines(&lines[..blank])?;

		let len = stacks.0.len();
		let moves = lines[blank + 1..].iter()
			.enumerate()
			.map(|(i, line)| {
				let l = blank + i + 2;
				let step: Move = line.parse().map_err(|e| InputError::Move { line: l, source: e })?;
				if let Some(stack) = [step.from, step.to].into_iter().find(|&s| s >= len) {
					return Err(InputError::NoSuchStack { line: l, stack: stack + 1, len })
				}
				Ok(step)
			})
			.collect::<Result<_, _>>()?;

		Ok((stacks, moves))
	}
}
