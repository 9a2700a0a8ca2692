// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const START_OF_PACKET_LEN: usize = 4;
const START_OF_MESSAGE_LEN: usize = 14;


/// Returns the number of bytes processed once the last `len` bytes are all different.
fn marker_end(datastream: &[u8], len: usize) -> Option<usize> {
	// Index past the most recent occurrence of every byte value
	let mut last_seen = [0_usize; 256];
	let mut window_start = 0;
	for (i, &b) in datastream.iter().enumerate() {
		window_start = window_start.max(last_seen[b as usize]);
		last_seen[b as usize] = i + 1;
		if i + 1 - window_start == len { return Some(i + 1) }
	}
	None
}


fn part1and2_impl(input: &str, len: usize) -> anyhow::Result<usize> {
	let datastream = input.trim_end();
	anyhow::ensure!(!datastream.is_empty(), "Empty datastream");
	if let Some((i, c)) = datastream.char_indices().find(|(_, c)| !c.is_ascii_lowercase()) {
		anyhow::bail!("Invalid character {c:?} at position {}", i + 1)
	}
	let end = marker_end(datastream.as_bytes(), len)
		.ok_or_else(|| anyhow::anyhow!("No marker of {len} distinct characters"))?;
	tracing::debug!(len, end, marker = &datastream[end - len..end]);
	Ok(end)
}

pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	part1and2_impl(input, START_OF_PACKET_LEN)
}

pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	part1and2_impl(input, START_OF_MESSAGE_LEN)
}


#[cfg(test)]
mod tests {
	use test_case::test_case;

	#[test_case("mjqjpqmgbljsphdztnvjfqwrcgsmlb" => (7, 19) ; "example 1")]
	#[test_case("bvwbjplbgvbhsrlpgdmjqwftvncz" => (5, 23) ; "example 2")]
	#[test_case("nppdvjthqldpwncqszvftbrmjlhg" => (6, 23) ; "example 3")]
	#[test_case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg\n" => (10, 29) ; "example 4")]
	#[test_case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw" => (11, 26) ; "example 5")]
	fn markers(input: &str) -> (usize, usize) {
		(super::part1(input).unwrap(), super::part2(input).unwrap())
	}

	#[test_case("" ; "empty")]
	#[test_case("abcabcabc" ; "repeating")]
	#[test_case("abcé" ; "non ascii")]
	#[test_case("abCd" ; "uppercase")]
	#[test_case("ab\ncd" ; "inner newline")]
	fn rejected(input: &str) {
		assert!(super::part1(input).is_err());
		assert!(super::part2(input).is_err());
	}

	#[test]
	fn marker_at_start() {
		assert_eq!(super::marker_end(b"abcd", 4), Some(4));
		assert_eq!(super::marker_end(b"abc", 4), None);
	}
}
