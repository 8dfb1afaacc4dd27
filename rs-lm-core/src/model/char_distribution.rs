use std::fmt;

use super::char_count::CharCount;

/// Character returned when sampling a distribution with no data.
pub const FALLBACK_CHAR: char = ' ';

/// Next-character distribution of a single context.
///
/// Conceptually, this is the set of outgoing edges of one Markov chain state,
/// weighted by how many times each was observed.
///
/// ## Invariants
/// - At most one `CharCount` per distinct character
/// - Entries keep first-observed order; this order decides which character
///   wins when a draw lands on a cumulative-probability boundary
/// - After finalization, cumulative probabilities are non-decreasing and the
///   last one is exactly `1.0`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharDistribution {
	entries: Vec<CharCount>,
}

impl CharDistribution {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records an occurrence of `next_char`.
	///
	/// - If the character was already seen, its count is increased.
	/// - Otherwise, a new entry with a count of 1 is appended at the end.
	pub fn update(&mut self, next_char: char) {
		match self.index_of(next_char) {
			Some(i) => self.entries[i].increment(),
			None => self.entries.push(CharCount::new(next_char)),
		}
	}

	/// Position of `c` in first-observed order, if present.
	pub fn index_of(&self, c: char) -> Option<usize> {
		self.entries.iter().position(|entry| entry.character() == c)
	}

	pub fn get(&self, index: usize) -> Option<&CharCount> {
		self.entries.get(index)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &CharCount> {
		self.entries.iter()
	}

	/// Sum of all occurrence counts.
	pub fn total(&self) -> usize {
		self.entries.iter().map(CharCount::count).sum()
	}

	/// Computes `probability` and `cumulative_probability` of every entry.
	///
	/// Probabilities are accumulated in insertion order, then the last
	/// cumulative probability is forced to exactly `1.0` so that any draw
	/// in `[0, 1)` selects an entry.
	///
	/// Recomputes everything from the counts, so calling it again is harmless.
	pub fn calculate_probabilities(&mut self) {
		if self.entries.is_empty() {
			return;
		}

		let total = self.total();
		if total == 0 {
			// Unreachable while every entry is created with a count of 1
			return;
		}

		let mut running = 0.0;
		for entry in &mut self.entries {
			let probability = entry.count() as f64 / total as f64;
			running += probability;
			entry.set_probabilities(probability, running);
		}

		if let Some(last) = self.entries.last_mut() {
			let probability = last.probability();
			last.set_probabilities(probability, 1.0);
		}
	}

	/// Selects a character for a uniform draw `r` in `[0, 1)`.
	///
	/// Returns the first entry, in insertion order, whose cumulative
	/// probability is strictly greater than `r`. An empty distribution yields
	/// [`FALLBACK_CHAR`]; if no entry qualifies the last one is returned.
	pub fn sample(&self, r: f64) -> char {
		let Some(last) = self.entries.last() else {
			return FALLBACK_CHAR;
		};

		self.entries
			.iter()
			.find(|entry| entry.cumulative_probability() > r)
			.unwrap_or(last)
			.character()
	}
}

impl fmt::Display for CharDistribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{entry}")?;
		}
		write!(f, ")")
	}
}

#[cfg(test)]
mod tests {
	use super::{CharDistribution, FALLBACK_CHAR};

	fn distribution(text: &str) -> CharDistribution {
		let mut distribution = CharDistribution::new();
		for c in text.chars() {
			distribution.update(c);
		}
		distribution
	}

	#[test]
	fn update_keeps_first_observed_order() {
		let distribution = distribution("committee ");
		let order: Vec<char> = distribution.iter().map(|e| e.character()).collect();
		assert_eq!(order, vec!['c', 'o', 'm', 'i', 't', 'e', ' ']);
		assert_eq!(distribution.get(2).unwrap().count(), 2);
		assert_eq!(distribution.get(4).unwrap().count(), 2);
		assert_eq!(distribution.total(), 10);
		assert_eq!(distribution.index_of('e'), Some(5));
		assert_eq!(distribution.index_of('z'), None);
	}

	#[test]
	fn probabilities_sum_to_one() {
		let mut distribution = distribution("committee ");
		distribution.calculate_probabilities();

		let sum: f64 = distribution.iter().map(|e| e.probability()).sum();
		assert!((sum - 1.0).abs() < 1e-9);

		let mut previous = 0.0;
		for entry in distribution.iter() {
			assert!(entry.cumulative_probability() >= previous);
			previous = entry.cumulative_probability();
		}
		assert_eq!(previous, 1.0);
		assert_eq!(distribution.get(0).unwrap().probability(), 0.1);
		assert_eq!(distribution.get(2).unwrap().probability(), 0.2);
	}

	#[test]
	fn last_cumulative_probability_is_exactly_one() {
		// ten entries of 0.1 accumulate to 0.9999999999999999
		let mut distribution = distribution("abcdefghij");
		distribution.calculate_probabilities();
		assert_eq!(distribution.get(distribution.len() - 1).unwrap().cumulative_probability(), 1.0);
	}

	#[test]
	fn finalization_is_idempotent() {
		let mut once = distribution("hello world");
		once.calculate_probabilities();
		let mut twice = once.clone();
		twice.calculate_probabilities();
		assert_eq!(once, twice);
	}

	#[test]
	fn empty_distribution() {
		let mut distribution = CharDistribution::new();
		distribution.calculate_probabilities();
		assert!(distribution.is_empty());
		assert_eq!(distribution.sample(0.5), FALLBACK_CHAR);
		assert_eq!(distribution.to_string(), "()");
	}

	#[test]
	fn sample_uses_strict_boundaries() {
		// a: cp 0.25, b: cp 0.75, c: cp 1.0
		let mut distribution = distribution("abbc");
		distribution.calculate_probabilities();
		assert_eq!(distribution.sample(0.0), 'a');
		assert_eq!(distribution.sample(0.2499), 'a');
		assert_eq!(distribution.sample(0.25), 'b');
		assert_eq!(distribution.sample(0.7499), 'b');
		assert_eq!(distribution.sample(0.75), 'c');
		assert_eq!(distribution.sample(0.9999), 'c');
	}

	#[test]
	fn sample_falls_back_to_last_entry() {
		let mut distribution = distribution("ab");
		distribution.calculate_probabilities();
		assert_eq!(distribution.sample(1.0), 'b');
	}

	#[test]
	fn display() {
		let mut distribution = distribution("aaab");
		distribution.calculate_probabilities();
		assert_eq!(distribution.to_string(), "((a 3 0.75 0.75) (b 1 0.25 1.0))");
	}
}
