//! Integration tests for random string generation

use assert_matches::assert_matches;
use jsonkit::{make_generator, make_generator_with_rng, Alphabet, StringGenerator, UtilError};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn test_char_alphabet_gives_exact_length() {
        let alphabet = Alphabet::from_chars("abcdefghijklmnopqrstuvwxyz").unwrap();
        let mut next = make_generator(alphabet, 12);

        for _ in 0..20 {
            let value = next();
            assert_eq!(value.chars().count(), 12);
            assert!(value.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_multi_char_symbols_count_as_one() {
        let alphabet = Alphabet::from_symbols(["ab", "cd", "ef"]).unwrap();
        let mut next = make_generator_with_rng(alphabet, 6, StdRng::seed_from_u64(42));
        let value = next();

        assert_eq!(value.len(), 12);
        let chunks: Vec<&str> = (0..6).map(|i| &value[i * 2..i * 2 + 2]).collect();
        assert!(chunks.iter().all(|c| ["ab", "cd", "ef"].contains(c)));
    }

    #[test]
    fn test_same_seed_same_output() {
        let alphabet = Alphabet::from_chars("0123456789").unwrap();
        let mut first = StringGenerator::with_rng(alphabet.clone(), 10, StdRng::seed_from_u64(3));
        let mut second = StringGenerator::with_rng(alphabet, 10, StdRng::seed_from_u64(3));

        for _ in 0..5 {
            assert_eq!(first.generate(), second.generate());
        }
    }

    #[test]
    fn test_every_symbol_is_reachable() {
        let alphabet = Alphabet::from_chars("abc").unwrap();
        let mut generator = StringGenerator::with_rng(alphabet, 300, StdRng::seed_from_u64(9));
        let value = generator.generate();

        for symbol in ['a', 'b', 'c'] {
            assert!(value.contains(symbol), "symbol {} never drawn", symbol);
        }
    }

    #[test]
    fn test_unicode_chars_are_single_symbols() {
        let alphabet = Alphabet::try_from("αβ").unwrap();
        assert!(alphabet.is_single_char());

        let mut next = make_generator(alphabet, 4);
        assert_eq!(next().chars().count(), 4);
    }

    #[test]
    fn test_invalid_alphabets() {
        assert_matches!(
            Alphabet::from_chars(""),
            Err(UtilError::InvalidAlphabet { .. })
        );
        assert_matches!(
            Alphabet::try_from(vec!["x".to_string(), String::new()]),
            Err(UtilError::InvalidAlphabet { .. })
        );
    }
}
