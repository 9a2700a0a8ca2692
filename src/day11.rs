// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
	Add(u64),
	Mul(u64),
	Square,
}

impl Operation {
	/// Wide enough that squaring any `u64` worry level cannot overflow.
	fn apply(self, old: u128) -> u128 {
		match self {
			Operation::Add(v) => old + u128::from(v),
			Operation::Mul(v) => old * u128::from(v),
			Operation::Square => old * old,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Test {
	divisor: u64,
	/// Targets when the test passes & fails respectively.
	targets: [usize; 2],
}

impl Test {
	fn target(self, worry_level: u64) -> usize {
		if worry_level % self.divisor == 0 { self.targets[0] } else { self.targets[1] }
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Monkey {
	items: Vec<u64>,
	operation: Operation,
	test: Test,
}

#[derive(Clone, Copy)]
enum Relief {
	/// Worry levels are divided by three after every inspection.
	DivideByThree,
	None,
}


fn input_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, parsing::MonkeysError> {
	parsing::try_monkeys_from_str(s)
}


/// Returns the number of inspections per monkey.
fn simulate(mut monkeys: Vec<Monkey>, rounds: usize, relief: Relief) -> Vec<usize> {
	// Reducing modulo the product of all divisors keeps worry levels bounded while preserving the
	// outcome of every divisibility test. Parsing ensures the product fits.
	let modulus = monkeys.iter().map(|monkey| u128::from(monkey.test.divisor)).product::<u128>();
	let mut inspections = vec![0; monkeys.len()];
	let mut thrown = vec![];

	for round in 0..rounds {
		for i in 0..monkeys.len() {
			let monkey = &mut monkeys[i];
			inspections[i] += monkey.items.len();
			let (operation, test) = (monkey.operation, monkey.test);
			thrown.extend(monkey.items.drain(..).map(|item| {
				let mut worry_level = operation.apply(u128::from(item));
				if let Relief::DivideByThree = relief { worry_level /= 3 }
				let worry_level = (worry_level % modulus) as u64;
				(test.target(worry_level), worry_level)
			}));
			for (target, worry_level) in thrown.drain(..) {
				monkeys[target].items.push(worry_level);
			}
		}
		tracing::trace!(round = round + 1, ?inspections);
	}

	inspections
}

fn monkey_business(inspections: &[usize]) -> u64 {
	use {std::cmp::Reverse, itertools::Itertools as _};
	inspections.iter()
		.sorted_unstable_by_key(|&&count| Reverse(count))
		.take(2)
		.map(|&count| count as u64)
		.product()
}


fn part1_impl(input_monkeys: Vec<Monkey>) -> u64 {
	monkey_business(&simulate(input_monkeys, 20, Relief::DivideByThree))
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(part1_impl(input_monkeys_from_str(input)?))
}


fn part2_impl(input_monkeys: Vec<Monkey>) -> u64 {
	monkey_business(&simulate(input_monkeys, 10_000, Relief::None))
}

pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	Ok(part2_impl(input_monkeys_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Operation, Test, Monkey};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MonkeyError {
		#[error("Expected {expected:?} on line {line}")]
		Format { line: usize, expected: &'static str },
		#[error("Monkey notes starting on line {line} have {found} lines, expected 6")]
		LineCount { line: usize, found: usize },
		#[error("Invalid number on line {line}")]
		Number { line: usize, source: ParseIntError },
		#[error("Invalid operation {0:?}")]
		Operation(String),
		#[error("Divisor cannot be zero")]
		ZeroDivisor,
	}

	impl FromStr for Operation {
		type Err = MonkeyError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let err = || MonkeyError::Operation(s.to_owned());
			match s.split_once(' ').ok_or_else(err)? {
				("*", "old") => Ok(Operation::Square),
				("+", v) => Ok(Operation::Add(v.parse().map_err(|_| err())?)),
				("*", v) => Ok(Operation::Mul(v.parse().map_err(|_| err())?)),
				_ => Err(err()),
			}
		}
	}

	/// Parses the lines of one monkey's notes (first one being `Monkey <id>:`); returns its ID too.
	fn try_monkey_from_lines(first_line: usize, lines: &[&str]) -> Result<(usize, Monkey), MonkeyError> {
		const PREFIXES: [&str; 6] = [
			"Monkey ",
			"Starting items:",
			"Operation: new = old ",
			"Test: divisible by ",
			"If true: throw to monkey ",
			"If false: throw to monkey ",
		];
		if lines.len() != PREFIXES.len() {
			return Err(MonkeyError::LineCount { line: first_line, found: lines.len() })
		}

		let mut fields = [""; 6];
		for (i, (line, prefix)) in lines.iter().zip(PREFIXES).enumerate() {
			fields[i] = line.trim().strip_prefix(prefix)
				.ok_or(MonkeyError::Format { line: first_line + i, expected: prefix })?
				.trim();
		}

		macro_rules! number { ( $i:literal ) => {
			fields[$i].parse().map_err(|e| MonkeyError::Number { line: first_line + $i, source: e })
		} }

		let id = fields[0].strip_suffix(':')
			.ok_or(MonkeyError::Format { line: first_line, expected: ":" })?
			.parse().map_err(|e| MonkeyError::Number { line: first_line, source: e })?;
		let items = match fields[1] {
			"" => vec![],
			items => items.split(", ")
				.map(|item| item.parse().map_err(|e| MonkeyError::Number { line: first_line + 1, source: e }))
				.collect::<Result<_, _>>()?,
		};
		let operation = fields[2].parse()?;
		let divisor: u64 = number!(3)?;
		if divisor == 0 { return Err(MonkeyError::ZeroDivisor) }
		let targets = [number!(4)?, number!(5)?];

		Ok((id, Monkey { items, operation, test: Test { divisor, targets } }))
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum MonkeysError {
		#[error("Invalid monkey notes")]
		Monkey(#[from] MonkeyError),
		#[error("Monkey {found} where monkey {expected} was expected")]
		Id { expected: usize, found: usize },
		#[error("Monkey {monkey} throws to monkey {target}")]
		Target { monkey: usize, target: usize },
		#[error("Need at least two monkeys, found {0}")]
		TooFew(usize),
		#[error("Product of all divisors does not fit 64 bits")]
		DivisorProduct,
	}

	pub(super) fn try_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeysError> {
		let lines = s.lines().collect::<Vec<_>>();
		let mut monkeys = vec![];
		let mut l = 0;
		for block in lines.split(|line| line.trim().is_empty()) {
			if !block.is_empty() {
				let (id, monkey) = try_monkey_from_lines(l + 1, block)?;
				if id != monkeys.len() { return Err(MonkeysError::Id { expected: monkeys.len(), found: id }) }
				monkeys.push(monkey);
			}
			l += block.len() + 1;
		}

		let n = monkeys.len();
		if n < 2 { return Err(MonkeysError::TooFew(n)) }
		for (i, monkey) in monkeys.iter().enumerate() {
			if let Some(&target) = monkey.test.targets.iter().find(|&&t| t == i || t >= n) {
				return Err(MonkeysError::Target { monkey: i, target })
			}
		}

		monkeys.iter().try_fold(1_u64, |product, monkey| product.checked_mul(monkey.test.divisor))
			.ok_or(MonkeysError::DivisorProduct)?;

		Ok(monkeys)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };

	#[test]
	fn parse() {
		let monkeys = input_monkeys_from_str(INPUT).unwrap();
		assert_eq!(monkeys.len(), 4);
		assert_eq!(monkeys[2], Monkey {
			items: vec![79, 60, 97],
			operation: Operation::Square,
			test: Test { divisor: 13, targets: [1, 3] },
		});
	}

	#[test]
	fn example() {
		let monkeys = input_monkeys_from_str(INPUT).unwrap();
		assert_eq!(simulate(monkeys.clone(), 20, Relief::DivideByThree), [101, 95, 7, 105]);
		assert_eq!(part1_impl(monkeys.clone()), 10605);
		assert_eq!(simulate(monkeys.clone(), 1, Relief::None), [2, 4, 3, 6]);
		assert_eq!(part2_impl(monkeys), 2713310158);
	}

	#[test]
	fn invalid() {
		let swapped = INPUT.replacen("Monkey 0:", "Monkey 1:", 1);
		assert!(matches!(input_monkeys_from_str(&swapped), Err(parsing::MonkeysError::Id { expected: 0, found: 1 })));
		let to_self = INPUT.replacen("If true: throw to monkey 2", "If true: throw to monkey 0", 1);
		assert!(matches!(input_monkeys_from_str(&to_self), Err(parsing::MonkeysError::Target { monkey: 0, target: 0 })));
		let bad_op = INPUT.replacen("old * 19", "old / 19", 1);
		assert!(input_monkeys_from_str(&bad_op).is_err());
		let one = INPUT.split("\n\n").next().unwrap();
		assert!(matches!(input_monkeys_from_str(one), Err(parsing::MonkeysError::TooFew(1))));
		let huge = INPUT.replace("divisible by 23", "divisible by 18446744073709551557");
		assert!(matches!(input_monkeys_from_str(&huge), Err(parsing::MonkeysError::DivisorProduct)));
	}

	#[test]
	fn squares_stay_bounded() {
		let monkeys = input_monkeys_from_str(indoc::indoc! { "
			Monkey 0:
			  Starting items: 1000
			  Operation: new = old * old
			  Test: divisible by 7
			    If true: throw to monkey 1
			    If false: throw to monkey 1

			Monkey 1:
			  Starting items:
			  Operation: new = old * old
			  Test: divisible by 11
			    If true: throw to monkey 0
			    If false: throw to monkey 0
		" }).unwrap();
		assert_eq!(simulate(monkeys.clone(), 20, Relief::DivideByThree), [20, 20]);
		assert_eq!(part1_impl(monkeys.clone()), 400);
		assert_eq!(part2_impl(monkeys), 10_000 * 10_000);
	}
}
