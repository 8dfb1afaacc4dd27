use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::char_distribution::{CharDistribution, FALLBACK_CHAR};
use crate::io::{CharacterStream, CorpusReader};

/// Fixed-order character language model.
///
/// The `LanguageModel` maps every context of `window_length` characters seen
/// in the corpus to the distribution of the character that followed it, and
/// generates text by repeatedly sampling from those distributions.
///
/// # Responsibilities
/// - Learn context distributions from a character stream
/// - Finalize the probabilities of every distribution after training
/// - Generate text from an initial text, reproducibly when seeded
///
/// # Invariants
/// - Every key of `char_data_map` has exactly `window_length` characters
/// - After `train` returns, every distribution is finalized
/// - The random generator is owned by the model and reused by every draw
#[derive(Debug)]
pub struct LanguageModel {
	/// Context size (order) of the model
	window_length: usize,

	/// Mapping from a context to the distribution of its next character
	char_data_map: HashMap<String, CharDistribution>,

	random_generator: StdRng,
}

impl LanguageModel {
	/// Creates an empty model whose generator is seeded from the OS.
	///
	/// Generating from this model multiple times produces different texts.
	pub fn new(window_length: usize) -> Self {
		Self::with_generator(window_length, StdRng::from_os_rng())
	}

	/// Creates an empty model with a deterministic generator.
	///
	/// Two models built with the same seed and trained on the same corpus
	/// generate the same texts for the same inputs.
	pub fn with_seed(window_length: usize, seed: u64) -> Self {
		Self::with_generator(window_length, StdRng::seed_from_u64(seed))
	}

	fn with_generator(window_length: usize, random_generator: StdRng) -> Self {
		Self { window_length, char_data_map: HashMap::new(), random_generator }
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct contexts learned so far.
	pub fn len(&self) -> usize {
		self.char_data_map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.char_data_map.is_empty()
	}

	/// Returns the distribution learned for `context`, if any.
	pub fn distribution(&self, context: &str) -> Option<&CharDistribution> {
		self.char_data_map.get(context)
	}

	/// Iterates over every `(context, distribution)` pair, in no particular order.
	pub fn contexts(&self) -> impl Iterator<Item = (&str, &CharDistribution)> {
		self.char_data_map.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Learns the model from a character stream.
	///
	/// # Behavior
	/// - Reads the first `window_length` characters as the initial window.
	///   A stream shorter than that leaves the model untouched.
	/// - For every following character `c`, records `c` in the distribution
	///   of the current window, then slides the window by one character.
	/// - Finalizes the probabilities of every distribution once the stream
	///   is exhausted.
	///
	/// # Notes
	/// - Training again extends the existing counts; finalization is
	///   recomputed from scratch, so the result matches a single pass over
	///   both corpora when windows do not cross the boundary.
	pub fn train<S: CharacterStream>(&mut self, source: &mut S) {
		let mut window = String::new();
		let mut read = 0;
		while read < self.window_length && source.has_next() {
			match source.read_char() {
				Some(c) => {
					window.push(c);
					read += 1;
				}
				None => break,
			}
		}

		if read < self.window_length {
			debug!("Corpus shorter than window length {}, nothing learned", self.window_length);
			return;
		}

		while source.has_next() {
			let Some(c) = source.read_char() else {
				break;
			};
			read += 1;

			match self.char_data_map.get_mut(&window) {
				Some(probs) => probs.update(c),
				None => {
					let mut probs = CharDistribution::new();
					probs.update(c);
					self.char_data_map.insert(window.clone(), probs);
				}
			}

			// Push before dropping the head so an empty window never underflows
			window.push(c);
			window.remove(0);
		}

		for probs in self.char_data_map.values_mut() {
			probs.calculate_probabilities();
		}

		debug!("Trained on {} characters, {} contexts", read, self.char_data_map.len());
	}

	/// Learns the model from a UTF-8 text file.
	///
	/// # Errors
	/// Returns an error if the file cannot be read.
	pub fn train_file<P: AsRef<Path>>(&mut self, filename: P) -> io::Result<()> {
		let mut reader = CorpusReader::from_file(filename)?;
		self.train(&mut reader);
		Ok(())
	}

	/// Draws a character from `probs` using the model's generator.
	///
	/// Returns a space when `probs` is absent or empty.
	pub fn get_random_char(&mut self, probs: Option<&CharDistribution>) -> char {
		Self::draw(&mut self.random_generator, probs)
	}

	/// Single sampling path shared by `get_random_char` and `generate`.
	fn draw(random_generator: &mut StdRng, probs: Option<&CharDistribution>) -> char {
		match probs {
			Some(probs) if !probs.is_empty() => probs.sample(random_generator.random()),
			_ => FALLBACK_CHAR,
		}
	}

	/// Generates a text of `text_length` characters starting with `initial_text`.
	///
	/// # Behavior
	/// - Empty `initial_text`: returns an empty string.
	/// - `text_length` <= length of `initial_text`: returns its first
	///   `text_length` characters.
	/// - `initial_text` shorter than the window: returns it unchanged.
	/// - Otherwise appends sampled characters, each chosen from the
	///   distribution of the last `window_length` characters, and stops early
	///   when that context was never seen during training.
	///
	/// # Notes
	/// - Lengths are counted in characters, not bytes.
	/// - Never modifies the learned distributions.
	pub fn generate(&mut self, initial_text: &str, text_length: usize) -> String {
		if initial_text.is_empty() {
			return String::new();
		}

		let initial_length = initial_text.chars().count();
		if text_length <= initial_length {
			return initial_text.chars().take(text_length).collect();
		}
		if initial_length < self.window_length {
			return initial_text.to_owned();
		}

		let mut generated: Vec<char> = initial_text.chars().collect();
		while generated.len() < text_length {
			let window: String = generated[generated.len() - self.window_length..].iter().collect();

			let probs = self.char_data_map.get(&window);
			if probs.is_none() {
				debug!("Unseen context {:?}, stopping at {} characters", window, generated.len());
				break;
			}

			generated.push(Self::draw(&mut self.random_generator, probs));
		}

		generated.into_iter().collect()
	}
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, probs) in &self.char_data_map {
			writeln!(f, "{key} : {probs}")?;
		}
		Ok(())
	}
}
