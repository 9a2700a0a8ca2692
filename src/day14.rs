// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SOURCE_X: usize = 500;


/// Rock scan; `x` is shifted right by `margin` so sand can spread a full floor-depth either way.
struct Cave {
	rocks: Vec<bool>,
	width: usize,
	margin: usize,
	/// Y of the deepest rock.
	depth: usize,
}

impl Cave {
	fn from_segments(segments: &[[[usize; 2]; 2]]) -> Self {
		use itertools::iproduct;

		let depth = segments.iter().flatten().map(|&[_, y]| y).max().unwrap_or(0);
		let max_x = segments.iter().flatten().map(|&[x, _]| x).max().unwrap_or(0).max(SOURCE_X);
		let margin = depth + 3;
		let width = max_x + 2 * margin;
		let mut rocks = vec![false; width * (depth + 2)];

		for &[[x0, y0], [x1, y1]] in segments {
			let (xr, yr) = (x0.min(x1)..=x0.max(x1), y0.min(y1)..=y0.max(y1));
			for (x, y) in iproduct!(xr, yr) { rocks[y * width + x + margin] = true }
		}

		Cave { rocks, width, margin, depth }
	}

	fn floor(&self) -> usize {
		self.depth + 2
	}

	fn source(&self) -> [usize; 2] {
		[SOURCE_X + self.margin, 0]
	}

	fn pos(&self, [x, y]: [usize; 2]) -> usize {
		y * self.width + x
	}
}

/// With `ABYSS`, sand falls past the deepest rock forever; otherwise it lands on a floor two
/// below it.
struct Simulation<'c, const ABYSS: bool> {
	cave: &'c Cave,
	sand: Vec<bool>,
	resting: usize,
}

impl<'c, const ABYSS: bool> Simulation<'c, ABYSS> {
	fn new(cave: &'c Cave) -> Self {
		Simulation { cave, sand: vec![false; cave.rocks.len()], resting: 0 }
	}

	fn blocked(&self, [x, y]: [usize; 2]) -> bool {
		if !ABYSS && y == self.cave.floor() { return true }
		let pos = self.cave.pos([x, y]);
		self.cave.rocks[pos] || self.sand[pos]
	}

	/// Drops one unit from the source. Returns whether another unit could follow.
	fn drop_unit(&mut self) -> bool {
		let mut at = self.cave.source();
		if self.blocked(at) { return false }

		loop {
			let [x, y] = at;
			if ABYSS && y >= self.cave.depth { return false }
			match [[x, y + 1], [x - 1, y + 1], [x + 1, y + 1]].into_iter().find(|&to| !self.blocked(to)) {
				Some(to) => at = to,
				None => break,
			}
		}

		let pos = self.cave.pos(at);
		self.sand[pos] = true;
		self.resting += 1;
		at != self.cave.source()
	}

	fn run(mut self) -> usize {
		while self.drop_unit() {}
		tracing::trace!("\n{}", self);
		self.resting
	}
}

impl<const ABYSS: bool> std::fmt::Display for Simulation<'_, ABYSS> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use {std::fmt::Write as _, itertools::Itertools as _};

		let cave = self.cave;
		let rows = if ABYSS { cave.depth + 1 } else { cave.floor() };
		let Some((x0, x1)) = (0..rows * cave.width)
			.filter(|&i| cave.rocks[i] || self.sand[i])
			.map(|i| i % cave.width)
			.minmax().into_option() else { return Ok(()) };

		for y in 0..rows {
			for x in x0..=x1 {
				let pos = cave.pos([x, y]);
				f.write_char(if [x, y] == cave.source() && !self.sand[pos] { '+' }
					else if cave.rocks[pos] { '#' }
					else if self.sand[pos] { 'o' }
					else { '.' })?;
			}
			if y + 1 < rows { writeln!(f)? }
		}
		if !ABYSS {
			writeln!(f)?;
			for _ in x0..=x1 { f.write_char('#')? }
		}
		Ok(())
	}
}


fn input_cave_from_str(s: &str) -> Result<Cave, parsing::CaveError> {
	parsing::try_segments_from_str(s).map(|segments| Cave::from_segments(&segments))
}


fn part1_impl(input_cave: &Cave) -> usize {
	Simulation::<true>::new(input_cave).run()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_cave_from_str(input)?))
}


fn part2_impl(input_cave: &Cave) -> usize {
	Simulation::<false>::new(input_cave).run()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(part2_impl(&input_cave_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PointError {
		#[error("Expected “<x>,<y>”")]
		Format,
		#[error("Invalid x")]
		X(#[source] ParseIntError),
		#[error("Invalid y")]
		Y(#[source] ParseIntError),
		#[error("Coordinate {coord} exceeds {}", MAX_COORD)]
		OutOfRange { coord: usize },
	}

	/// Bounds the cave grid to a few million squares.
	const MAX_COORD: usize = 1_000;

	fn try_point_from_str(s: &str) -> Result<[usize; 2], PointError> {
		let (x, y) = s.split_once(',').ok_or(PointError::Format)?;
		let point = [x.parse().map_err(PointError::X)?, y.parse().map_err(PointError::Y)?];
		match point.into_iter().find(|&c| c > MAX_COORD) {
			Some(coord) => Err(PointError::OutOfRange { coord }),
			None => Ok(point),
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PathError {
		#[error("Invalid point {index}")]
		Point { index: usize, source: PointError },
		#[error("Segment from {from:?} to {to:?} is diagonal")]
		Diagonal { from: [usize; 2], to: [usize; 2] },
	}

	fn try_path_segments_from_str(s: &str, segments: &mut Vec<[[usize; 2]; 2]>) -> Result<(), PathError> {
		let mut from = None;
		for (i, point) in s.split(" -> ").enumerate() {
			let to = try_point_from_str(point.trim())
				.map_err(|e| PathError::Point { index: i + 1, source: e })?;
			let from = from.replace(to).unwrap_or(to);
			if from[0] != to[0] && from[1] != to[1] {
				return Err(PathError::Diagonal { from, to })
			}
			segments.push([from, to]);
		}
		Ok(())
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CaveError {
		#[error("No rock paths")]
		Empty,
		#[error("Invalid rock path on line {line}")]
		Path { line: usize, source: PathError },
	}

	/// Every segment of every path. Paths start with a segment from their first point to itself,
	/// so a lone point is a rock too.
	pub(super) fn try_segments_from_str(s: &str) -> Result<Vec<[[usize; 2]; 2]>, CaveError> {
		let mut segments = vec![];
		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
			try_path_segments_from_str(line, &mut segments)
				.map_err(|e| CaveError::Path { line: l + 1, source: e })?;
		}
		if segments.is_empty() { return Err(CaveError::Empty) }
		Ok(segments)
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		498,4 -> 498,6 -> 496,6
		503,4 -> 502,4 -> 502,9 -> 494,9
	" };

	#[test]
	fn example() {
		let cave = input_cave_from_str(INPUT).unwrap();
		assert_eq!((cave.depth, cave.floor()), (9, 11));
		assert_eq!(part1_impl(&cave), 24);
		assert_eq!(part2_impl(&cave), 93);
	}

	#[test]
	fn display() {
		let cave = input_cave_from_str(INPUT).unwrap();
		let mut simulation = Simulation::<true>::new(&cave);
		while simulation.drop_unit() {}
		assert_eq!(simulation.to_string(), indoc::indoc! { "
			......+...
			..........
			......o...
			.....ooo..
			....#ooo##
			...o#ooo#.
			..###ooo#.
			....oooo#.
			.o.ooooo#.
			#########."
		});
	}

	#[test]
	fn single_rock() {
		// The very first unit slides off the rock into the abyss
		let cave = input_cave_from_str("500,2\n").unwrap();
		assert_eq!(part1_impl(&cave), 0);
		assert_eq!(part2_impl(&cave), 15);
	}

	#[test_case("" ; "empty")]
	#[test_case("498,4 -> 500,6" ; "diagonal")]
	#[test_case("498,4 -> 498" ; "missing y")]
	#[test_case("498,4 -> x,6" ; "invalid x")]
	#[test_case("498,4 498,6" ; "missing arrow")]
	#[test_case("498,4 -> 498,1001" ; "too deep")]
	#[test_case("18446744073709551615,0" ; "too far right")]
	fn invalid(input: &str) {
		assert!(input_cave_from_str(input).is_err());
	}
}
