// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::cmp::Ordering;


#[derive(Clone, Debug, PartialEq, Eq)]
enum Packet {
	Int(u32),
	List(Vec<Packet>),
}

impl Ord for Packet {
	fn cmp(&self, other: &Self) -> Ordering {
		use Packet::*;
		match (self, other) {
			(Int(left), Int(right)) => left.cmp(right),
			(List(left), List(right)) => left.cmp(right),
			(Int(_), List(right)) => std::slice::from_ref(self).cmp(right.as_slice()),
			(List(left), Int(_)) => left.as_slice().cmp(std::slice::from_ref(other)),
		}
	}
}

impl PartialOrd for Packet {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl std::fmt::Display for Packet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Packet::Int(v) => write!(f, "{v}"),
			Packet::List(items) => {
				use itertools::Itertools as _;
				write!(f, "[{}]", items.iter().format(","))
			}
		}
	}
}

fn divider(v: u32) -> Packet {
	Packet::List(vec![Packet::List(vec![Packet::Int(v)])])
}


fn input_pairs_from_str(s: &str) -> Result<Vec<[Packet; 2]>, parsing::PacketsError> {
	parsing::try_pairs_from_str(s)
}


fn part1_impl(input_pairs: &[[Packet; 2]]) -> usize {
	input_pairs.iter()
		.enumerate()
		.filter(|(_, [left, right])| left <= right)
		.map(|(i, _)| i + 1)
		.sum()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(part1_impl(&input_pairs_from_str(input)?))
}


fn part2_impl(input_pairs: Vec<[Packet; 2]>) -> usize {
	let dividers = [divider(2), divider(6)];
	let mut packets = input_pairs.into_iter().flatten().collect::<Vec<_>>();
	packets.extend(dividers.iter().cloned());
	packets.sort();
	dividers.iter()
		.map(|divider| packets.iter().position(|packet| packet == divider).map_or(0, |i| i + 1))
		.product()
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(part2_impl(input_pairs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Packet;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PacketError {
		#[error("Unexpected {found:?} at column {column}")]
		Unexpected { column: usize, found: char },
		#[error("Unexpected end of packet")]
		EndOfPacket,
		#[error("Invalid integer at column {column}")]
		Int { column: usize, source: ParseIntError },
		#[error("Trailing data at column {column}")]
		Trailing { column: usize },
		#[error("Packet is not a list")]
		NotAList,
		#[error("List at column {column} is nested more than {} deep", MAX_DEPTH)]
		TooDeep { column: usize },
	}

	const MAX_DEPTH: usize = 64;

	/// Recursive descent parser over the bytes of one packet.
	struct Parser<'s> {
		s: &'s str,
		pos: usize,
		depth: usize,
	}

	impl<'s> Parser<'s> {
		fn peek(&self) -> Option<u8> {
			self.s.as_bytes().get(self.pos).copied()
		}

		fn unexpected(&self) -> PacketError {
			match self.s[self.pos..].chars().next() {
				Some(found) => PacketError::Unexpected { column: self.pos + 1, found },
				None => PacketError::EndOfPacket,
			}
		}

		fn value(&mut self) -> Result<Packet, PacketError> {
			match self.peek() {
				Some(b'[') => self.list(),
				Some(b) if b.is_ascii_digit() => self.int(),
				_ => Err(self.unexpected()),
			}
		}

		fn int(&mut self) -> Result<Packet, PacketError> {
			let start = self.pos;
			while self.peek().map_or(false, |b| b.is_ascii_digit()) { self.pos += 1 }
			self.s[start..self.pos].parse()
				.map(Packet::Int)
				.map_err(|e| PacketError::Int { column: start + 1, source: e })
		}

		fn list(&mut self) -> Result<Packet, PacketError> {
			if self.depth == MAX_DEPTH { return Err(PacketError::TooDeep { column: self.pos + 1 }) }
			self.pos += 1; // '['
			self.depth += 1;
			let mut items = vec![];
			if self.peek() != Some(b']') {
				loop {
					items.push(self.value()?);
					match self.peek() {
						Some(b',') => self.pos += 1,
						Some(b']') => break,
						_ => return Err(self.unexpected()),
					}
				}
			}
			self.pos += 1; // ']'
			self.depth -= 1;
			Ok(Packet::List(items))
		}
	}

	impl FromStr for Packet {
		type Err = PacketError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			if !s.starts_with('[') { return Err(PacketError::NotAList) }
			let mut parser = Parser { s, pos: 0, depth: 0 };
			let packet = parser.value()?;
			if parser.pos < s.len() { return Err(PacketError::Trailing { column: parser.pos + 1 }) }
			Ok(packet)
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PacketsError {
		#[error("Invalid packet on line {line}")]
		Packet { line: usize, source: PacketError },
		#[error("Packet on line {line} has no partner")]
		Unpaired { line: usize },
	}

	pub(super) fn try_pairs_from_str(s: &str) -> Result<Vec<[Packet; 2]>, PacketsError> {
		let mut pairs = vec![];
		let mut left = None;
		for (l, line) in s.lines().enumerate() {
			if line.is_empty() {
				if left.is_some() { return Err(PacketsError::Unpaired { line: l }) }
				continue
			}
			let packet = line.parse().map_err(|e| PacketsError::Packet { line: l + 1, source: e })?;
			match left.take() {
				None => left = Some((l + 1, packet)),
				Some((_, left)) => pairs.push([left, packet]),
			}
		}
		match left {
			Some((line, _)) => Err(PacketsError::Unpaired { line }),
			None => Ok(pairs),
		}
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		[1,1,3,1,1]
		[1,1,5,1,1]

		[[1],[2,3,4]]
		[[1],4]

		[9]
		[[8,7,6]]

		[[4,4],4,4]
		[[4,4],4,4,4]

		[7,7,7,7]
		[7,7,7]

		[]
		[3]

		[[[]]]
		[[]]

		[1,[2,[3,[4,[5,6,7]]]],8,9]
		[1,[2,[3,[4,[5,6,0]]]],8,9]
	" };

	#[test]
	fn example() {
		let pairs = input_pairs_from_str(INPUT).unwrap();
		assert_eq!(pairs.len(), 8);
		assert_eq!(part1_impl(&pairs), 13);
		assert_eq!(part2_impl(pairs), 140);
	}

	#[test_case("[1,1,3,1,1]", "[1,1,5,1,1]" => Ordering::Less ; "pair 1")]
	#[test_case("[[1],[2,3,4]]", "[[1],4]" => Ordering::Less ; "pair 2")]
	#[test_case("[9]", "[[8,7,6]]" => Ordering::Greater ; "pair 3")]
	#[test_case("[[4,4],4,4]", "[[4,4],4,4,4]" => Ordering::Less ; "pair 4")]
	#[test_case("[[[]]]", "[[]]" => Ordering::Greater ; "pair 7")]
	#[test_case("[[2]]", "[2]" => Ordering::Equal ; "divider equals int list")]
	#[test_case("[10]", "[9]" => Ordering::Greater ; "multi digit")]
	fn order(left: &str, right: &str) -> Ordering {
		left.parse::<Packet>().unwrap().cmp(&right.parse().unwrap())
	}

	#[test_case("[1,[2,[3,[4,[5,6,7]]]],8,9]" ; "nested")]
	#[test_case("[]" ; "empty")]
	#[test_case("[[],[10,[]]]" ; "empty lists and multi digit")]
	fn display(s: &str) {
		assert_eq!(s.parse::<Packet>().unwrap().to_string(), s);
	}

	#[test_case("1" ; "not a list")]
	#[test_case("[1,2" ; "unterminated")]
	#[test_case("[1,,2]" ; "empty element")]
	#[test_case("[1]]" ; "trailing")]
	#[test_case("[a]" ; "letter")]
	fn invalid(s: &str) {
		assert!(s.parse::<Packet>().is_err());
	}

	#[test]
	fn nesting() {
		let nested = |depth| format!("{}{}", "[".repeat(depth), "]".repeat(depth));
		assert!(nested(64).parse::<Packet>().is_ok());
		assert!(matches!(nested(65).parse::<Packet>(), Err(parsing::PacketError::TooDeep { column: 65 })));
		assert!(matches!(nested(100_000).parse::<Packet>(), Err(parsing::PacketError::TooDeep { column: 65 })));
	}

	#[test]
	fn unpaired() {
		assert!(matches!(input_pairs_from_str("[1]\n[2]\n\n[3]\n"), Err(parsing::PacketsError::Unpaired { line: 4 })));
	}
}
