//! Fixed-pattern random string generation
//!
//! A generator samples a fixed number of symbols from an [`Alphabet`],
//! uniformly and with replacement, and concatenates them.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::error::{UtilError, UtilResult};

/// Upper bound on the bytes reserved up front for one generated string
const MAX_PREALLOCATION: usize = 64 * 1024;

/// Ordered, non-empty set of symbols to sample from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<String>,
}

impl Alphabet {
    /// Build an alphabet from a sequence of symbols.
    ///
    /// Symbols may be longer than one character. Fails when the sequence is
    /// empty or contains an empty symbol.
    pub fn from_symbols<I, S>(symbols: I) -> UtilResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbols: Vec<String> = symbols.into_iter().map(Into::into).collect();

        if symbols.is_empty() {
            return Err(UtilError::invalid_alphabet("alphabet has no symbols"));
        }
        if let Some(position) = symbols.iter().position(|s| s.is_empty()) {
            return Err(UtilError::invalid_alphabet(format!(
                "symbol {} is empty",
                position
            )));
        }

        Ok(Self { symbols })
    }

    /// Build an alphabet by splitting a string into one-character symbols
    pub fn from_chars(chars: &str) -> UtilResult<Self> {
        Self::from_symbols(chars.chars().map(String::from))
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true for a constructed alphabet
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True when every symbol is exactly one character, so generated strings
    /// are exactly `length` characters long
    pub fn is_single_char(&self) -> bool {
        self.symbols.iter().all(|s| s.chars().count() == 1)
    }

    fn widest_symbol(&self) -> usize {
        self.symbols.iter().map(String::len).max().unwrap_or(0)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = UtilError;

    fn try_from(chars: &str) -> UtilResult<Self> {
        Self::from_chars(chars)
    }
}

impl TryFrom<Vec<String>> for Alphabet {
    type Error = UtilError;

    fn try_from(symbols: Vec<String>) -> UtilResult<Self> {
        Self::from_symbols(symbols)
    }
}

impl TryFrom<&[&str]> for Alphabet {
    type Error = UtilError;

    fn try_from(symbols: &[&str]) -> UtilResult<Self> {
        Self::from_symbols(symbols.iter().copied())
    }
}

/// Generates strings of `length` symbols drawn from an alphabet
#[derive(Debug, Clone)]
pub struct StringGenerator<R = ThreadRng> {
    alphabet: Alphabet,
    length: usize,
    rng: R,
}

impl StringGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local random source
    pub fn new(alphabet: Alphabet, length: usize) -> Self {
        Self::with_rng(alphabet, length, rand::thread_rng())
    }
}

impl<R: Rng> StringGenerator<R> {
    /// Create a generator with an explicit random source
    pub fn with_rng(alphabet: Alphabet, length: usize, rng: R) -> Self {
        Self {
            alphabet,
            length,
            rng,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of symbols in every generated string
    pub fn length(&self) -> usize {
        self.length
    }

    /// Produce a new string, sampling each symbol independently
    pub fn generate(&mut self) -> String {
        let symbols = self.alphabet.symbols();
        let mut result = String::with_capacity(self.capacity_hint());

        for _ in 0..self.length {
            let index = self.rng.gen_range(0..symbols.len());
            result.push_str(&symbols[index]);
        }

        result
    }

    fn capacity_hint(&self) -> usize {
        self.length
            .saturating_mul(self.alphabet.widest_symbol())
            .min(MAX_PREALLOCATION)
    }
}

impl<R: Rng> Iterator for StringGenerator<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate())
    }
}

/// Return a zero-argument function producing a fresh random string per call
///
/// # Examples
/// ```
/// use jsonkit::generator::{make_generator, Alphabet};
///
/// let mut next_id = make_generator(Alphabet::from_chars("abcdef0123456789").unwrap(), 8);
/// assert_eq!(next_id().len(), 8);
/// ```
pub fn make_generator(alphabet: Alphabet, length: usize) -> impl FnMut() -> String {
    let mut generator = StringGenerator::new(alphabet, length);
    move || generator.generate()
}

/// Like [`make_generator`], sampling from the given random source
pub fn make_generator_with_rng<R: Rng>(
    alphabet: Alphabet,
    length: usize,
    rng: R,
) -> impl FnMut() -> String {
    let mut generator = StringGenerator::with_rng(alphabet, length, rng);
    move || generator.generate()
}
