//! Basic tests for rakuda-core

use rakuda_core::*;

#[test]
fn test_class_from_byte() {
    assert_eq!(Class::from_byte(b'a'), Class::Letter);
    assert_eq!(Class::from_byte(b'Q'), Class::Letter);
    assert_eq!(Class::from_byte(b' '), Class::Space);
    assert_eq!(Class::from_byte(b'\n'), Class::Space);
    assert_eq!(Class::from_byte(b'.'), Class::Punct);
    assert_eq!(Class::from_byte(b','), Class::Punct);
    assert_eq!(Class::from_byte(b'_'), Class::Punct);
    assert_eq!(Class::from_byte(b'5'), Class::Other);
    assert_eq!(Class::from_byte(0x80), Class::Other);
}

#[test]
fn test_word_case_classify() {
    assert_eq!(WordCase::classify(b"ABC"), WordCase::Upper);
    assert_eq!(WordCase::classify(b"abc"), WordCase::Lower);
    assert_eq!(WordCase::classify(b"aBc"), WordCase::Mixed);
    assert_eq!(WordCase::classify(b"42"), WordCase::Lower);
}

#[test]
fn test_scanner_step_emits_spans() {
    let mut scanner = SentenceScanner::new();
    let mut spans = Vec::new();

    // Process two delimited sentences byte by byte
    for &byte in b"Hi there. Bye." {
        scanner.step(byte, &mut |span| spans.push(span));
    }
    scanner.finish(&mut |span| spans.push(span));

    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0], Span::new(0, 8));
    assert_eq!(spans[1], Span::new(9, 13));
}

#[test]
fn test_scanner_suppresses_blank_stretches() {
    let mut scanner = SentenceScanner::new();
    let mut spans = Vec::new();

    for &byte in b"..  .. " {
        scanner.step(byte, &mut |span| spans.push(span));
    }
    scanner.finish(&mut |span| spans.push(span));

    assert!(spans.is_empty());
}

#[test]
fn test_camel_case_scenario_pair() {
    let tokens = camel_case(
        b"The Heisenbug is an incredible creature. \
          Facenovel servers get their power from its indeterminism.",
    );
    assert_eq!(
        tokens,
        vec![
            b"theHeisenbugIsAnIncredibleCreature".to_vec(),
            b"facenovelServersGetTheirPowerFromItsIndeterminism".to_vec(),
        ]
    );
}

#[test]
fn test_camel_case_single_sentence() {
    assert_eq!(camel_case(b"     hello   world   "), vec![b"helloWorld".to_vec()]);
}

#[test]
fn test_camel_case_no_punctuation_single_token() {
    let tokens = camel_case(b"a quick brown fox");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0], b"aQuickBrownFox".to_vec());
}

#[test]
fn test_camel_case_empty_and_blank() {
    assert!(camel_case(b"").is_empty());
    assert!(camel_case(b" \t\r\n ").is_empty());
    assert!(camel_case(b".!?,;").is_empty());
}

#[test]
fn test_refeeding_a_letter_led_token_is_identity() {
    for token in camel_case(b"Some Words Here. More Words.") {
        let again = camel_case(&token);
        assert_eq!(again, vec![token]);
    }
}
