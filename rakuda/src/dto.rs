//! Data Transfer Objects for the public API

use crate::error::{ApiError, Result};
use std::fmt;
use std::io::Read;

/// Input source for the transform
///
/// Inputs are byte strings; they do not have to be valid UTF-8. A
/// [`Reader`](Input::Reader) is drained fully before any processing
/// starts, since the transform works on the whole input at once.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// Raw bytes, preserved exactly
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the full input bytes
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

/// One camelCased sentence
///
/// Tokens are owned byte strings. Input bytes outside the ASCII letter
/// range are carried through untouched, so a token is only guaranteed to
/// be valid UTF-8 when its input was.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token(Vec<u8>);

impl Token {
    /// Create a token from its bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Token(bytes)
    }

    /// The token bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// View the token as text, failing on invalid UTF-8
    pub fn to_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.0).map_err(ApiError::Utf8)
    }

    /// Take ownership of the token bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length of the token in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the token is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Processing metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Total input bytes processed
    pub total_bytes: usize,
    /// Number of tokens produced
    pub token_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output: one token per sentence, in input order
///
/// The output owns every token; dropping it releases the whole sequence.
/// Use [`into_tokens`](Output::into_tokens) to take ownership of the
/// tokens out of the sequence instead.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// camelCased sentence tokens
    pub tokens: Vec<Token>,
    /// Processing metadata
    pub metadata: Metadata,
}

impl Output {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence holds no tokens
    ///
    /// An empty output is still a present value, distinct from the absent
    /// output produced for an absent input.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate the tokens in order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Take ownership of the tokens, discarding the metadata
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Serialize the output to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ApiError::Serde)
    }
}

impl IntoIterator for Output {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Output {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
