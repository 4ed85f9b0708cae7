//! Streaming sentence segmentation
//!
//! Input is split into sentences on punctuation delimiters. The delimiter
//! byte is consumed and never appears in any sentence. A stretch between
//! delimiters that holds nothing but whitespace produces no sentence, and
//! a trailing stretch with real content is a sentence even without a
//! closing delimiter.

use crate::types::Class;

/// Half-open byte range of one sentence within the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First byte of the sentence
    pub start: usize,
    /// One past the last byte of the sentence
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice the spanned bytes out of the input
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start..self.end]
    }
}

/// Streaming per-byte sentence scanner
///
/// Feed bytes with [`step`](SentenceScanner::step) and flush the trailing
/// sentence with [`finish`](SentenceScanner::finish). Spans are emitted
/// through the provided closure; a span is only emitted for a sentence
/// that contains at least one non-whitespace byte.
#[derive(Debug, Default)]
pub struct SentenceScanner {
    offset: usize,
    start: usize,
    has_word: bool,
}

impl SentenceScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one byte, emitting a sentence span when a delimiter closes one
    pub fn step(&mut self, byte: u8, emit: &mut impl FnMut(Span)) {
        match Class::from_byte(byte) {
            Class::Punct => {
                if self.has_word {
                    emit(Span::new(self.start, self.offset));
                }
                self.start = self.offset + 1;
                self.has_word = false;
            }
            Class::Space => {}
            Class::Letter | Class::Other => self.has_word = true,
        }
        self.offset += 1;
    }

    /// Flush the trailing sentence, if it holds any content
    pub fn finish(&mut self, emit: &mut impl FnMut(Span)) {
        if self.has_word {
            emit(Span::new(self.start, self.offset));
        }
        self.start = self.offset;
        self.has_word = false;
    }
}

/// Collect the sentence spans of a whole input
pub fn sentences(input: &[u8]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut scanner = SentenceScanner::new();
    for &byte in input {
        scanner.step(byte, &mut |span| spans.push(span));
    }
    scanner.finish(&mut |span| spans.push(span));
    spans
}

/// Iterate the words of one sentence
///
/// A word is a maximal nonempty run of non-whitespace bytes; whitespace
/// runs of any length collapse and never appear as items.
pub fn words(sentence: &[u8]) -> impl Iterator<Item = &[u8]> {
    sentence
        .split(|&byte| Class::from_byte(byte).is_space())
        .filter(|word| !word.is_empty())
}
