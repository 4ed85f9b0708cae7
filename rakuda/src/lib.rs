//! Public API for rakuda camelCase sentence transformation
//!
//! This crate provides a clean, stable interface over the byte-level
//! algorithm in `rakuda-core`: input is segmented into sentences on
//! punctuation, each sentence into words on whitespace, the first letter
//! of every word is forced by position (lowercase for the sentence's
//! first word, uppercase after), and each sentence comes back as one
//! owned token with no separators.
//!
//! Absence is a value here, not an error: [`transform`] maps `None` to
//! `None` without allocating. A present-but-empty input yields a
//! present, zero-length [`Output`]. The output owns all of its storage
//! and releases it on drop.
//!
//! # Example
//!
//! ```rust
//! let output = rakuda::camel_case("Hello world. Goodbye world.").unwrap();
//! let tokens: Vec<String> = output.iter().map(|t| t.to_string()).collect();
//! assert_eq!(tokens, vec!["helloWorld", "goodbyeWorld"]);
//! ```

#![warn(missing_docs)]

pub mod dto;
pub mod error;

use std::time::Instant;

use error::Result;

// Re-export key types
pub use dto::{Input, Metadata, Output, Token};
pub use error::ApiError;

/// Main entry point for the camelCase transform
///
/// The processor is stateless, so a single instance can serve any number
/// of threads and every call is independent of every other.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaser;

impl CamelCaser {
    /// Create a new processor
    pub fn new() -> Self {
        CamelCaser
    }

    /// Transform an input into camelCased sentence tokens
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();

        let bytes = input.into_bytes()?;
        let total_bytes = bytes.len();

        let tokens: Vec<Token> = rakuda_core::camel_case(&bytes)
            .into_iter()
            .map(Token::new)
            .collect();

        let elapsed = start.elapsed();
        tracing::debug!(
            total_bytes,
            token_count = tokens.len(),
            "camel-cased input"
        );

        let metadata = Metadata {
            total_bytes,
            token_count: tokens.len(),
            processing_time_ms: elapsed.as_millis() as u64,
        };

        Ok(Output { tokens, metadata })
    }

    /// Transform text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Transform bytes directly (convenience method)
    pub fn process_bytes(&self, bytes: &[u8]) -> Result<Output> {
        self.process(Input::from_bytes(bytes.to_vec()))
    }
}

// Convenience functions

/// Transform an optional input, propagating absence
///
/// An absent input maps to an absent output; nothing is allocated on
/// that path. A present input is processed with a default processor.
pub fn transform(input: Option<Input>) -> Result<Option<Output>> {
    match input {
        None => Ok(None),
        Some(input) => CamelCaser::new().process(input).map(Some),
    }
}

/// camelCase a text with the default processor
pub fn camel_case(text: &str) -> Result<Output> {
    CamelCaser::new().process_text(text)
}

/// camelCase raw bytes with the default processor
pub fn camel_case_bytes(bytes: &[u8]) -> Result<Output> {
    CamelCaser::new().process_bytes(bytes)
}
