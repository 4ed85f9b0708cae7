//! Sentence segmentation and camelCasing over raw bytes
//!
//! This crate implements the byte-level algorithm behind rakuda: input
//! bytes are classified with the standard ASCII tables, segmented into
//! sentences on punctuation and into words on whitespace, and each word
//! is recased by its position before the words of a sentence are
//! concatenated into one token.
//!
//! The algorithm is a single synchronous pass with no shared state, so
//! concurrent calls on independent inputs are trivially safe. Inputs are
//! arbitrary byte strings; bytes outside the classified ASCII ranges are
//! carried through untouched.
//!
//! # Example
//!
//! ```rust
//! use rakuda_core::camel_case;
//!
//! let tokens = camel_case(b"Hello world. Goodbye world.");
//! assert_eq!(tokens, vec![b"helloWorld".to_vec(), b"goodbyeWorld".to_vec()]);
//! ```

#![warn(missing_docs)]

pub mod case;
pub mod scanner;
pub mod transform;
pub mod types;

pub use case::{camel_word, WordPosition};
pub use scanner::{sentences, words, SentenceScanner, Span};
pub use transform::camel_case;
pub use types::{Class, WordCase};
