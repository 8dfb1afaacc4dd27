use std::fs::File;
use std::io::Read;
use std::iter::Peekable;
use std::path::Path;
use std::{io, vec};

/// Sequential character source consumed by training.
///
/// A stream is read front to back exactly once; it is never rewound.
pub trait CharacterStream {
	/// Returns `true` if at least one more character can be read.
	fn has_next(&mut self) -> bool;

	/// Reads and consumes the next character.
	///
	/// Returns `None` once the stream is exhausted.
	fn read_char(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char>> CharacterStream for Peekable<I> {
	fn has_next(&mut self) -> bool {
		self.peek().is_some()
	}

	fn read_char(&mut self) -> Option<char> {
		self.next()
	}
}

/// A corpus held in memory and read one character (code point) at a time.
///
/// Line breaks are kept, so windows span lines exactly as in the source text.
#[derive(Debug)]
pub struct CorpusReader {
	chars: Peekable<vec::IntoIter<char>>,
}

impl CorpusReader {
	/// Creates a reader over the given text.
	pub fn from_text(text: &str) -> Self {
		Self { chars: text.chars().collect::<Vec<_>>().into_iter().peekable() }
	}

	/// Reads a whole UTF-8 text file and returns a reader over its characters.
	///
	/// # Errors
	/// Returns an error if the file cannot be opened or is not valid UTF-8.
	pub fn from_file<P: AsRef<Path>>(filename: P) -> io::Result<Self> {
		Ok(Self::from_text(&read_file(filename)?))
	}
}

impl CharacterStream for CorpusReader {
	fn has_next(&mut self) -> bool {
		self.chars.has_next()
	}

	fn read_char(&mut self) -> Option<char> {
		self.chars.read_char()
	}
}

/// Reads a text file and returns its whole content.
///
/// Unlike a line-based reader, line terminators are preserved.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
