// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, Debug)]
enum Dir { Up, Down, Left, Right }

impl Dir {
	fn delta(self) -> Pos {
		match self {
			Dir::Up => Pos { x: 0, y: 1 },
			Dir::Down => Pos { x: 0, y: -1 },
			Dir::Left => Pos { x: -1, y: 0 },
			Dir::Right => Pos { x: 1, y: 0 },
		}
	}
}

#[derive(Clone, Copy, Debug)]
struct Motion { dir: Dir, steps: usize }

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
struct Pos { x: i64, y: i64 }

impl std::ops::Add for Pos {
	type Output = Pos;
	fn add(self, rhs: Pos) -> Pos {
		Pos { x: self.x + rhs.x, y: self.y + rhs.y }
	}
}

impl std::ops::Sub for Pos {
	type Output = Pos;
	fn sub(self, rhs: Pos) -> Pos {
		Pos { x: self.x - rhs.x, y: self.y - rhs.y }
	}
}

impl Pos {
	fn clamp(self, min: i64, max: i64) -> Pos {
		Pos { x: self.x.clamp(min, max), y: self.y.clamp(min, max) }
	}

	fn touches(self, other: Pos) -> bool {
		let d = other - self;
		d.x.abs() <= 1 && d.y.abs() <= 1
	}
}

/// Knot positions, head first.
struct Rope(Vec<Pos>);

impl Rope {
	fn new(knots: usize) -> Self {
		assert!(knots >= 1);
		Rope(vec![Pos::default(); knots])
	}

	fn tail(&self) -> Pos {
		*self.0.last().unwrap()
	}

	/// Moves the head one step and lets the other knots follow. Returns whether the tail moved.
	fn step(&mut self, dir: Dir) -> bool {
		self.0[0] = self.0[0] + dir.delta();
		for i in 1..self.0.len() {
			let (leader, knot) = (self.0[i - 1], &mut self.0[i]);
			if knot.touches(leader) { return false }
			*knot = *knot + (leader - *knot).clamp(-1, 1);
		}
		true
	}
}


fn input_motions_from_str(s: &str) -> Result<Vec<Motion>, parsing::MotionsError> {
	parsing::motions_from_str(s).collect()
}


fn part1and2_impl(input_motions: &[Motion], knots: usize) -> usize {
	use std::collections::HashSet;

	let mut rope = Rope::new(knots);
	let mut visited = HashSet::from([rope.tail()]);
	for &Motion { dir, steps } in input_motions {
		for _ in 0..steps {
			if rope.step(dir) { visited.insert(rope.tail()); }
		}
		tracing::trace!(?dir, steps, tail = ?rope.tail());
	}

	tracing::debug!(knots, visited = visited.len());
	visited.len()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(part1and2_impl(&input_motions_from_str(input)?, 2))
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(part1and2_impl(&input_motions_from_str(input)?, 10))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dir, Motion};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MotionError {
		#[error("Expected “<U|D|L|R> <steps>”")]
		Format,
		#[error("Invalid direction {0:?}")]
		Dir(String),
		#[error("Invalid number of steps")]
		Steps(#[from] ParseIntError),
	}

	impl FromStr for Motion {
		type Err = MotionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (dir, steps) = s.split_once(' ').ok_or(MotionError::Format)?;
			let dir = match dir {
				"U" => Dir::Up,
				"D" => Dir::Down,
				"L" => Dir::Left,
				"R" => Dir::Right,
				_ => return Err(MotionError::Dir(dir.to_owned())),
			};
			Ok(Motion { dir, steps: steps.parse()? })
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("Invalid motion on line {line}")]
	pub(super) struct MotionsError {
		line: usize,
		source: MotionError,
	}

	pub(super) fn motions_from_str(s: &str) -> impl Iterator<Item = Result<Motion, MotionsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| MotionsError { line: l + 1, source: e }))
	}
}
