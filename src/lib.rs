//! jsonkit
//!
//! Small helpers for JSON values and strings: shallow/deep record merging,
//! key-subset extraction, snake_case/camelCase conversion, synchronous JSON
//! file loading and random fixed-length string generation.

pub mod case;
pub mod cli;
pub mod error;
pub mod extract;
pub mod generator;
pub mod loader;
pub mod merge;

// Re-export commonly used types
pub use case::{camelize, camelize_keys, underscore, underscore_keys};
pub use error::{ParseError, UtilError, UtilResult};
pub use extract::{extract, extract_map};
pub use generator::{make_generator, make_generator_with_rng, Alphabet, StringGenerator};
pub use loader::{load_json_file, load_json_file_as, with_json_extension};
pub use merge::{is_record, merge, merge_deep, merge_shallow, MergeOptions};
