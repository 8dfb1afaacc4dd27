use super::language_model::LanguageModel;

/// Seed used when reproducible generation is requested without an explicit seed.
pub const DEFAULT_SEED: u64 = 20;

/// Mode flag selecting entropy seeding.
pub const RANDOM_MODE: &str = "random";

/// Strategy used to seed the random generator of a model.
///
/// # Variants
/// - `Fixed(u64)`: deterministic generator; same seed, same corpus and same
///   inputs always produce the same text.
/// - `Random`: generator seeded from the operating system, different on
///   every construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
	Fixed(u64),
	Random,
}

impl Seeding {
	/// Maps a command-line mode flag to a seeding strategy.
	///
	/// `"random"` selects [`Seeding::Random`]; any other flag selects
	/// [`Seeding::Fixed`] with [`DEFAULT_SEED`].
	pub fn from_mode(mode: &str) -> Self {
		if mode == RANDOM_MODE {
			Seeding::Random
		} else {
			Seeding::Fixed(DEFAULT_SEED)
		}
	}
}

/// Construction parameters of a [`LanguageModel`].
///
/// # Invariants
/// - `window_length` is always >= 1
#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
	/// Number of preceding characters used as context.
	window_length: usize,

	/// How the model's random generator is seeded.
	pub seeding: Seeding,
}

impl ModelConfig {
	/// Creates a configuration with entropy seeding.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self, String> {
		let mut config = Self { window_length: 1, seeding: Seeding::Random };
		config.set_window_length(window_length)?;
		Ok(config)
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Sets the window length.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn set_window_length(&mut self, window_length: usize) -> Result<(), String> {
		if window_length == 0 {
			return Err("Window length must be >= 1".to_owned());
		}
		self.window_length = window_length;
		Ok(())
	}

	/// Builds an untrained model from this configuration.
	pub fn build(&self) -> LanguageModel {
		match self.seeding {
			Seeding::Fixed(seed) => LanguageModel::with_seed(self.window_length, seed),
			Seeding::Random => LanguageModel::new(self.window_length),
		}
	}
}
