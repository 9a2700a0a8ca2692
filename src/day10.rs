// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SCREEN_WIDTH: usize = 40;
const SIGNAL_FIRST_CYCLE: usize = 20;
const SIGNAL_LAST_CYCLE: usize = 220;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Instr {
	Noop,
	AddX(i64),
}

impl Instr {
	fn cycles(self) -> usize {
		match self { Instr::Noop => 1, Instr::AddX(_) => 2 }
	}
}

/// Yields the value of the `X` register *during* each successive cycle.
struct Cpu<'i> {
	instrs: std::slice::Iter<'i, Instr>,
	x: i64,
	current: Option<(Instr, usize)>,
}

impl<'i> Cpu<'i> {
	fn new(instrs: &'i [Instr]) -> Self {
		Cpu { instrs: instrs.iter(), x: 1, current: None }
	}
}

impl Iterator for Cpu<'_> {
	type Item = i64;
	fn next(&mut self) -> Option<i64> {
		let (instr, remaining) = match self.current.take() {
			Some(current) => current,
			None => { let &instr = self.instrs.next()?; (instr, instr.cycles()) }
		};
		let during = self.x;
		if remaining > 1 {
			self.current = Some((instr, remaining - 1));
		} else if let Instr::AddX(v) = instr {
			self.x += v;
		}
		Some(during)
	}
}

pub(crate) struct Screen(Vec<bool>);

impl std::fmt::Display for Screen {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		let rows = self.0.chunks(SCREEN_WIDTH).map(|row| row.iter()
			.map(|&lit| if lit { '#' } else { '.' })
			.collect::<String>());
		for (i, row) in rows.enumerate() {
			if i > 0 { f.write_char('\n')? }
			f.write_str(&row)?;
		}
		Ok(())
	}
}


fn input_instrs_from_str(s: &str) -> Result<Vec<Instr>, parsing::InstrsError> {
	parsing::instrs_from_str(s).collect()
}


fn part1_impl(input_instrs: &[Instr]) -> i64 {
	Cpu::new(input_instrs)
		.zip(1..)
		.take_while(|&(_, cycle)| cycle <= SIGNAL_LAST_CYCLE)
		.filter(|&(_, cycle)| cycle >= SIGNAL_FIRST_CYCLE && (cycle - SIGNAL_FIRST_CYCLE) % SCREEN_WIDTH == 0)
		.map(|(x, cycle)| cycle as i64 * x)
		.sum()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	Ok(part1_impl(&input_instrs_from_str(input)?))
}


fn part2_impl(input_instrs: &[Instr]) -> Screen {
	Screen(Cpu::new(input_instrs)
		.enumerate()
		.map(|(i, x)| ((i % SCREEN_WIDTH) as i64 - x).abs() <= 1)
		.collect())
}

pub(crate) fn part2(input: &str) -> anyhow::Result<Screen> {
	Ok(part2_impl(&input_instrs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InstrError {
		#[error("Unknown instruction {0:?}")]
		Unknown(String),
		#[error("Invalid addx operand")]
		AddX(#[from] ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.split_once(' ') {
				None if s == "noop" => Ok(Instr::Noop),
				Some(("addx", v)) => Ok(Instr::AddX(v.parse()?)),
				_ => Err(InstrError::Unknown(s.to_owned())),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	#[error("Invalid instruction on line {line}")]
	pub(super) struct InstrsError {
		line: usize,
		source: InstrError,
	}

	pub(super) fn instrs_from_str(s: &str) -> impl Iterator<Item = Result<Instr, InstrsError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| InstrsError { line: l + 1, source: e }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const LARGER: &str = indoc::indoc! { "
		addx 15
		addx -11
		addx 6
		addx -3
		addx 5
		addx -1
		addx -8
		addx 13
		addx 4
		noop
		addx -1
		addx 5
		addx -1
		addx 5
		addx -1
		addx 5
		addx -1
		addx 5
		addx -1
		addx -35
		addx 1
		addx 24
		addx -19
		addx 1
		addx 16
		addx -11
		noop
		noop
		addx 21
		addx -15
		noop
		noop
		addx -3
		addx 9
		addx 1
		addx -3
		addx 8
		addx 1
		addx 5
		noop
		noop
		noop
		noop
		noop
		addx -36
		noop
		addx 1
		addx 7
		noop
		noop
		noop
		addx 2
		addx 6
		noop
		noop
		noop
		noop
		noop
		addx 1
		noop
		noop
		addx 7
		addx 1
		noop
		addx -13
		addx 13
		addx 7
		noop
		addx 1
		addx -33
		noop
		noop
		noop
		addx 2
		noop
		noop
		noop
		addx 8
		noop
		addx -1
		addx 2
		addx 1
		noop
		addx 17
		addx -9
		addx 1
		addx 1
		addx -3
		addx 11
		noop
		noop
		addx 1
		noop
		addx 1
		noop
		noop
		addx -13
		addx -19
		addx 1
		addx 3
		addx 26
		addx -30
		addx 12
		addx -1
		addx 3
		addx 1
		noop
		noop
		noop
		addx -9
		addx 18
		addx 1
		addx 2
		noop
		noop
		addx 9
		noop
		noop
		noop
		addx -1
		addx 2
		addx -37
		addx 1
		addx 3
		noop
		addx 15
		addx -21
		addx 22
		addx -6
		addx 1
		noop
		addx 2
		addx 1
		noop
		addx -10
		noop
		noop
		addx 20
		addx 1
		addx 2
		addx 2
		addx -6
		addx -11
		noop
		noop
		noop
	" };

	#[test]
	fn small() {
		let instrs = input_instrs_from_str("noop\naddx 3\naddx -5\n").unwrap();
		assert_eq!(Cpu::new(&instrs).collect::<Vec<_>>(), [1, 1, 1, 4, 4]);
		assert_eq!(part1_impl(&instrs), 0);
	}

	#[test]
	fn larger() {
		let instrs = input_instrs_from_str(LARGER).unwrap();
		assert_eq!(Cpu::new(&instrs).nth(19), Some(21));
		assert_eq!(part1_impl(&instrs), 13140);
		assert_eq!(part2_impl(&instrs).to_string(), indoc::indoc! { "
			##..##..##..##..##..##..##..##..##..##..
			###...###...###...###...###...###...###.
			####....####....####....####....####....
			#####.....#####.....#####.....#####.....
			######......######......######......####
			#######.......#######.......#######....." });
	}

	#[test_case::test_case("addx" ; "missing operand")]
	#[test_case::test_case("addx 1.5" ; "fractional operand")]
	#[test_case::test_case("mul 2" ; "unknown")]
	fn invalid(input: &str) {
		assert!(input_instrs_from_str(input).is_err());
	}
}
