use std::fmt;

/// One observed next character of a context, with its statistics.
///
/// `probability` and `cumulative_probability` stay at `0.0` until the
/// owning distribution is finalized.
#[derive(Clone, Debug, PartialEq)]
pub struct CharCount {
	character: char,
	count: usize,
	probability: f64,
	cumulative_probability: f64,
}

impl CharCount {
	/// Creates the record for a first observation of `character`.
	pub(crate) fn new(character: char) -> Self {
		Self { character, count: 1, probability: 0.0, cumulative_probability: 0.0 }
	}

	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times `character` followed the owning context.
	pub fn count(&self) -> usize {
		self.count
	}

	/// `count / total` of the owning distribution.
	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Running sum of probabilities up to and including this entry.
	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}

	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	pub(crate) fn set_probabilities(&mut self, probability: f64, cumulative_probability: f64) {
		self.probability = probability;
		self.cumulative_probability = cumulative_probability;
	}
}

impl fmt::Display for CharCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {:?} {:?})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}
