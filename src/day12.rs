// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Heightmap {
	heights: Vec<u8>,
	width: usize,
	start: usize,
	end: usize,
}

impl Heightmap {
	/// Squares one step away from `pos` that can be climbed to, being at most one higher.
	fn climbable_from(&self, pos: usize) -> impl Iterator<Item = usize> + '_ {
		let w = self.width;
		let (x, len) = (pos % w, self.heights.len());
		let up = (pos >= w).then(|| pos - w);
		let left = (x > 0).then(|| pos - 1);
		let right = (x + 1 < w).then(|| pos + 1);
		let down = (pos + w < len).then(|| pos + w);
		let max_height = self.heights[pos] + 1;
		[up, left, right, down].into_iter()
			.flatten()
			.filter(move |&next| self.heights[next] <= max_height)
	}

	/// Fewest steps from any of `starts` to the end, breadth first.
	fn fewest_steps(&self, starts: impl IntoIterator<Item = usize>) -> Option<usize> {
		use std::collections::VecDeque;

		let mut steps = vec![None; self.heights.len()];
		let mut queue = VecDeque::new();
		for start in starts {
			steps[start] = Some(0);
			queue.push_back((start, 0));
		}

		while let Some((pos, n)) = queue.pop_front() {
			if pos == self.end { return Some(n) }
			for next in self.climbable_from(pos) {
				if steps[next].is_none() {
					steps[next] = Some(n + 1);
					queue.push_back((next, n + 1));
				}
			}
		}

		tracing::debug!(explored = steps.iter().flatten().count(), "end unreachable");
		None
	}
}


fn input_heightmap_from_str(s: &str) -> Result<Heightmap, parsing::HeightmapError> {
	s.parse()
}


fn part1_impl(input_heightmap: &Heightmap) -> Option<usize> {
	input_heightmap.fewest_steps([input_heightmap.start])
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	part1_impl(&input_heightmap_from_str(input)?)
		.ok_or_else(|| anyhow::anyhow!("No path from the start to the end"))
}


fn part2_impl(input_heightmap: &Heightmap) -> Option<usize> {
	input_heightmap.fewest_steps(input_heightmap.heights.iter()
		.enumerate()
		.filter_map(|(pos, &height)| (height == 0).then_some(pos)))
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	part2_impl(&input_heightmap_from_str(input)?)
		.ok_or_else(|| anyhow::anyhow!("No path from any lowest square to the end"))
}


mod parsing {
	use std::str::FromStr;
	use super::Heightmap;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HeightmapError {
		#[error("Line {line} has length {found}, expected {len}")]
		LineLen { line: usize, len: usize, found: usize },
		#[error("Invalid byte {found:?} on line {line}, column {column}")]
		InvalidByte { line: usize, column: usize, found: char },
		#[error("Second {which} on line {line}, column {column}")]
		Duplicate { which: char, line: usize, column: usize },
		#[error("No {0}")]
		Missing(char),
	}

	impl FromStr for Heightmap {
		type Err = HeightmapError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut heights = vec![];
			let mut width = None;
			let (mut start, mut end) = (None, None);

			for (l, line) in s.lines().enumerate() {
				let len = *width.get_or_insert(line.len());
				if line.len() != len {
					return Err(HeightmapError::LineLen { line: l + 1, len, found: line.len() })
				}

				for (c, b) in line.bytes().enumerate() {
					let pos = heights.len();
					let (height, marker) = match b {
						b'a'..=b'z' => (b - b'a', None),
						b'S' => (0, Some((&mut start, 'S'))),
						b'E' => (b'z' - b'a', Some((&mut end, 'E'))),
						found => return Err(HeightmapError::InvalidByte {
							line: l + 1, column: c + 1, found: found as char }),
					};
					if let Some((marker, which)) = marker {
						if marker.replace(pos).is_some() {
							return Err(HeightmapError::Duplicate { which, line: l + 1, column: c + 1 })
						}
					}
					heights.push(height);
				}
			}

			Ok(Heightmap {
				heights,
				width: width.filter(|&w| w > 0).ok_or(HeightmapError::Missing('S'))?,
				start: start.ok_or(HeightmapError::Missing('S'))?,
				end: end.ok_or(HeightmapError::Missing('E'))?,
			})
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Sabqponm
		abcryxxl
		accszExk
		acctuvwj
		abdefghi
	" };

	#[test]
	fn example() {
		let heightmap = input_heightmap_from_str(INPUT).unwrap();
		assert_eq!((heightmap.width, heightmap.start, heightmap.end), (8, 0, 21));
		assert_eq!(part1_impl(&heightmap), Some(31));
		assert_eq!(part2_impl(&heightmap), Some(29));
	}

	#[test]
	fn unreachable() {
		let heightmap = input_heightmap_from_str("SazE").unwrap();
		assert_eq!(part1_impl(&heightmap), None);
		assert!(part2("SazE").is_err());
	}

	#[test_case::test_case("SabE\nab" ; "ragged")]
	#[test_case::test_case("SabE\naSbc" ; "two starts")]
	#[test_case::test_case("Sab" ; "no end")]
	#[test_case::test_case("Sa1E" ; "digit")]
	fn invalid(input: &str) {
		assert!(input_heightmap_from_str(input).is_err());
	}
}
