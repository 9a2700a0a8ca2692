// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Forest {
	heights: Vec<u8>,
	width: usize,
	height: usize,
}

impl Forest {
	fn at(&self, [x, y]: [usize; 2]) -> u8 {
		self.heights[y * self.width + x]
	}

	/// Sight lines from the edge inwards: every row from the left & right, every column from the
	/// top & bottom.
	fn sight_lines(&self) -> impl Iterator<Item = Vec<[usize; 2]>> + '_ {
		let rows = (0..self.height).flat_map(move |y| {
			let line = (0..self.width).map(|x| [x, y]).collect::<Vec<_>>();
			let rev = line.iter().rev().copied().collect();
			[line, rev]
		});
		let cols = (0..self.width).flat_map(move |x| {
			let line = (0..self.height).map(|y| [x, y]).collect::<Vec<_>>();
			let rev = line.iter().rev().copied().collect();
			[line, rev]
		});
		rows.chain(cols)
	}

	/// Number of trees seen from `pos` looking in direction `step`, up to and including the first
	/// one at least as tall.
	fn viewing_distance(&self, [x, y]: [usize; 2], [dx, dy]: [isize; 2]) -> usize {
		let height = self.at([x, y]);
		let mut count = 0;
		let (mut x, mut y) = (x, y);
		loop {
			let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else { break };
			if nx >= self.width || ny >= self.height { break }
			count += 1;
			if self.at([nx, ny]) >= height { break }
			(x, y) = (nx, ny);
		}
		count
	}

	fn scenic_score(&self, pos: [usize; 2]) -> usize {
		[[0, -1], [-1, 0], [1, 0], [0, 1]].into_iter()
			.map(|step| self.viewing_distance(pos, step))
			.product()
	}
}


fn input_forest_from_str(s: &str) -> Result<Forest, parsing::ForestError> {
	s.parse()
}


fn part1_impl(input_forest: &Forest) -> usize {
	use std::collections::HashSet;

	let mut visible = HashSet::new();
	for line in input_forest.sight_lines() {
		let mut tallest = None;
		for pos in line {
			let height = input_forest.at(pos);
			if tallest.map_or(true, |tallest| height > tallest) {
				visible.insert(pos);
				tallest = Some(height);
			}
		}
	}

	tracing::debug!(visible = visible.len(), total = input_forest.heights.len());
	visible.len()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_forest_from_str(input)?))
}


fn part2_impl(input_forest: &Forest) -> usize {
	use {itertools::iproduct, rayon::prelude::*};
	// Edge trees have a viewing distance of zero in at least one direction
	let interior = iproduct!(1..input_forest.height.saturating_sub(1), 1..input_forest.width.saturating_sub(1))
		.map(|(y, x)| [x, y])
		.collect::<Vec<_>>();
	interior.into_par_iter()
		.map(|pos| input_forest.scenic_score(pos))
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(part2_impl(&input_forest_from_str(input)?))
}


mod parsing {
	use std::str::FromStr;
	use super::Forest;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum ForestError {
		#[error("No trees")]
		Empty,
		#[error("Line {line} has {found} trees, expected {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid height {found:?} on line {line}, column {column}")]
		InvalidHeight { line: usize, column: usize, found: char },
	}

	impl FromStr for Forest {
		type Err = ForestError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = vec![];
			let mut width = None;
			let mut height = 0;

			for (l, line) in s.lines().enumerate() {
				let len = *width.get_or_insert(line.len());
				if line.len() != len {
					return Err(ForestError::LineLen { line: l + 1, len, found: line.len() })
				}
				for (c, b) in line.bytes().enumerate() {
					if !b.is_ascii_digit() {
						return Err(ForestError::InvalidHeight { line: l + 1, column: c + 1, found: b as char })
					}
					heights.push(b - b'0');
				}
				height += 1;
			}

			match width {
				None | Some(0) => Err(ForestError::Empty),
				Some(width) => Ok(Forest { heights, width, height }),
			}
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		30373
		25512
		65332
		33549
		35390
	" };
	let forest = input_forest_from_str(INPUT).unwrap();
	assert_eq!((forest.width, forest.height), (5, 5));
	assert_eq!(part1_impl(&forest), 21);
	assert_eq!(forest.scenic_score([2, 1]), 4);
	assert_eq!(forest.scenic_score([2, 3]), 8);
	assert_eq!(forest.scenic_score([0, 0]), 0);
	assert_eq!(part2_impl(&forest), 8);

	let single = input_forest_from_str("7").unwrap();
	assert_eq!(part1_impl(&single), 1);
	assert_eq!(part2_impl(&single), 0);

	assert!(matches!(input_forest_from_str("123\n12\n"), Err(parsing::ForestError::LineLen { line: 2, .. })));
	assert!(matches!(input_forest_from_str(""), Err(parsing::ForestError::Empty)));
}
