// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const DISK_SIZE: u64 = 70_000_000;
const NEEDED_FREE: u64 = 30_000_000;
const SMALL_DIR_MAX: u64 = 100_000;


#[derive(Debug)]
enum Command<'s> {
	ChangeDir(Target<'s>),
	List(Vec<Entry<'s>>),
}

#[derive(Debug, PartialEq, Eq)]
enum Target<'s> { Root, Parent, Child(&'s str) }

#[derive(Debug, PartialEq, Eq)]
enum Entry<'s> {
	Dir(&'s str),
	File { name: &'s str, size: u64 },
}


type DirId = usize;

#[derive(Default)]
struct Dir<'s> {
	parent: Option<DirId>,
	children: Vec<(&'s str, DirId)>,
	files_size: u64,
	listed: bool,
}

/// Directory tree stored as an arena; the root is at index 0.
struct FileSystem<'s> {
	dirs: Vec<Dir<'s>>,
}

impl<'s> FileSystem<'s> {
	const ROOT: DirId = 0;

	fn child(&mut self, parent: DirId, name: &'s str) -> DirId {
		if let Some(&(_, id)) = self.dirs[parent].children.iter().find(|(n, _)| *n == name) {
			return id
		}
		let id = self.dirs.len();
		self.dirs.push(Dir { parent: Some(parent), ..Dir::default() });
		self.dirs[parent].children.push((name, id));
		id
	}

	fn from_commands(commands: &[Command<'s>]) -> anyhow::Result<Self> {
		let mut fs = FileSystem { dirs: vec![Dir::default()] };
		let mut cwd = Self::ROOT;

		for command in commands {
			match command {
				Command::ChangeDir(Target::Root) => cwd = Self::ROOT,
				Command::ChangeDir(Target::Parent) => cwd = fs.dirs[cwd].parent
					.ok_or_else(|| anyhow::anyhow!("Cannot change out of the root directory"))?,
				Command::ChangeDir(Target::Child(name)) => cwd = fs.child(cwd, *name),
				// Listing a directory again would count its files twice
				Command::List(_) if fs.dirs[cwd].listed => (),
				Command::List(entries) => {
					for entry in entries {
						match *entry {
							Entry::Dir(name) => { fs.child(cwd, name); }
							Entry::File { size, .. } => fs.dirs[cwd].files_size += size,
						}
					}
					fs.dirs[cwd].listed = true;
				}
			}
		}

		Ok(fs)
	}

	/// Total size per directory, indexed by [`DirId`].
	fn dir_sizes(&self) -> Vec<u64> {
		let mut sizes = self.dirs.iter().map(|dir| dir.files_size).collect::<Vec<_>>();
		// Children are always created after their parent, so a reverse sweep adds every
		// directory's total to its parent after all of its own children were added to it.
		for (id, dir) in self.dirs.iter().enumerate().skip(1).rev() {
			if let Some(parent) = dir.parent { sizes[parent] += sizes[id] }
		}
		sizes
	}
}


fn input_commands_from_str(s: &str) -> Result<Vec<Command<'_>>, parsing::TranscriptError> {
	parsing::try_commands_from_str(s)
}

fn input_dir_sizes(s: &str) -> anyhow::Result<Vec<u64>> {
	let sizes = FileSystem::from_commands(&input_commands_from_str(s)?)?.dir_sizes();
	tracing::debug!(dirs = sizes.len(), total = sizes[FileSystem::ROOT]);
	Ok(sizes)
}


fn part1_impl(dir_sizes: &[u64]) -> u64 {
	dir_sizes.iter().filter(|&&size| size <= SMALL_DIR_MAX).sum()
}

pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(part1_impl(&input_dir_sizes(input)?))
}


fn part2_impl(dir_sizes: &[u64]) -> anyhow::Result<u64> {
	let used = dir_sizes[FileSystem::ROOT];
	let free = DISK_SIZE.checked_sub(used)
		.ok_or_else(|| anyhow::anyhow!("Using {used}, more than the disk size"))?;
	let to_free = NEEDED_FREE.saturating_sub(free);
	dir_sizes.iter()
		.copied()
		.filter(|&size| size >= to_free)
		.min()
		.ok_or_else(|| anyhow::anyhow!("No directory frees up {to_free}"))
}

pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part2_impl(&input_dir_sizes(input)?)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Command, Target, Entry};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum EntryError {
		#[error("Expected “dir <name>” or “<size> <name>”")]
		Format,
		#[error("Invalid file size")]
		Size(#[from] ParseIntError),
	}

	impl<'s> TryFrom<&'s str> for Entry<'s> {
		type Error = EntryError;
		fn try_from(line: &'s str) -> Result<Self, Self::Error> {
			match line.split_once(' ').ok_or(EntryError::Format)? {
				(_, "") => Err(EntryError::Format),
				("dir", name) => Ok(Entry::Dir(name)),
				(size, name) => Ok(Entry::File { name, size: u64::from_str(size)? }),
			}
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum TranscriptError {
		#[error("Line {line}: unknown command {command:?}")]
		UnknownCommand { line: usize, command: String },
		#[error("Line {line}: output without a preceding “ls”")]
		UnexpectedOutput { line: usize },
		#[error("Line {line}: invalid listing entry")]
		Entry { line: usize, source: EntryError },
	}

	pub(super) fn try_commands_from_str(s: &str) -> Result<Vec<Command<'_>>, TranscriptError> {
		let mut commands = vec![];

		for (l, line) in s.lines().enumerate() {
			match line.strip_prefix("$ ") {
				Some("ls") => commands.push(Command::List(vec![])),
				Some(command) => {
					let target = match command.strip_prefix("cd ") {
						Some("/") => Target::Root,
						Some("..") => Target::Parent,
						Some(name) if !name.is_empty() => Target::Child(name),
						_ => return Err(TranscriptError::UnknownCommand {
							line: l + 1, command: command.to_owned() }),
					};
					commands.push(Command::ChangeDir(target))
				}
				None => {
					let Some(Command::List(entries)) = commands.last_mut() else {
						return Err(TranscriptError::UnexpectedOutput { line: l + 1 })
					};
					entries.push(line.try_into()
						.map_err(|e| TranscriptError::Entry { line: l + 1, source: e })?)
				}
			}
		}

		Ok(commands)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };

	#[test]
	fn example() {
		let commands = input_commands_from_str(INPUT).unwrap();
		assert_eq!(commands.len(), 10);
		assert!(matches!(&commands[2], Command::ChangeDir(Target::Child("a"))));

		let mut sizes = input_dir_sizes(INPUT).unwrap();
		assert_eq!(part1_impl(&sizes), 95437);
		assert_eq!(part2_impl(&sizes).unwrap(), 24933642);
		sizes.sort();
		assert_eq!(sizes, [584, 94853, 24933642, 48381165]);
	}

	#[test]
	fn relisting() {
		let input = "$ cd /\n$ ls\n100 a\n$ ls\n100 a\n";
		assert_eq!(input_dir_sizes(input).unwrap(), [100]);
	}

	#[test_case::test_case("$ cd /\n$ cd ..\n" ; "out of root")]
	#[test_case::test_case("$ cd /\n$ rm -rf\n" ; "unknown command")]
	#[test_case::test_case("$ cd /\n100 a\n" ; "output without ls")]
	#[test_case::test_case("$ ls\nabc a\n" ; "invalid size")]
	fn invalid(input: &str) {
		assert!(input_dir_sizes(input).is_err());
	}
}
