//! Whole-input transform
//!
//! Drives the sentence scanner over the input, tokenizes each sentence
//! into words, recases every word by position, and concatenates the words
//! of each sentence into one owned token.

use crate::case::{camel_word, WordPosition};
use crate::scanner::{sentences, words};

/// camelCase an input into one owned token per sentence
///
/// Tokens come back in input order. Delimiter bytes never appear in any
/// token, and every other input byte appears in exactly one token, in its
/// original relative order, with only first-letter bytes recased. An
/// input with no sentences (empty, or nothing but whitespace and
/// punctuation) yields an empty vector.
pub fn camel_case(input: &[u8]) -> Vec<Vec<u8>> {
    sentences(input)
        .into_iter()
        .map(|span| {
            let sentence = span.slice(input);
            let mut token = Vec::with_capacity(span.len());
            for (index, word) in words(sentence).enumerate() {
                camel_word(word, WordPosition::from_index(index), &mut token);
            }
            token
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &[u8]) -> Vec<Vec<u8>> {
        camel_case(input)
    }

    #[test]
    fn two_sentence_input() {
        let input = b"The Heisenbug is an incredible creature. \
                      Facenovel servers get their power from its indeterminism.";
        assert_eq!(
            tokens(input),
            vec![
                b"theHeisenbugIsAnIncredibleCreature".to_vec(),
                b"facenovelServersGetTheirPowerFromItsIndeterminism".to_vec(),
            ]
        );
    }

    #[test]
    fn whitespace_collapses_to_nothing() {
        assert_eq!(tokens(b"     hello   world   "), vec![b"helloWorld".to_vec()]);
    }

    #[test]
    fn every_delimiter_closes_a_sentence() {
        assert_eq!(tokens(b"Hello.World."), vec![b"hello".to_vec(), b"world".to_vec()]);
    }

    #[test]
    fn empty_input_yields_empty_present_sequence() {
        assert_eq!(tokens(b""), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn delimiters_and_whitespace_only() {
        assert_eq!(tokens(b" . ! ? "), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn high_bit_bytes_pass_through_in_place() {
        assert_eq!(tokens(b"na\xc3\xafve words"), vec![b"na\xc3\xafveWords".to_vec()]);
        assert_eq!(tokens(b"\x80abc def"), vec![b"\x80abcDef".to_vec()]);
    }

    #[test]
    fn mid_word_punctuation_splits_the_sentence() {
        // An apostrophe is a delimiter like any other punctuation byte
        assert_eq!(tokens(b"don't stop"), vec![b"don".to_vec(), b"tStop".to_vec()]);
    }

    #[test]
    fn words_without_letters_are_carried() {
        assert_eq!(tokens(b"123 abc 456"), vec![b"123Abc456".to_vec()]);
    }

    #[test]
    fn interior_case_is_preserved() {
        assert_eq!(tokens(b"McDonald eats McNuggets"), vec![b"mcDonaldEatsMcNuggets".to_vec()]);
    }
}
