use anyhow::Result;
use passgen_password::{
    generator::parse_word_count, GenerationRequest, PassphraseGenerator,
    WordCorpus, Words, MAX_WORDS, SYMBOLS,
};
use passgen_test_utils::{assert::assert_passphrase, mock};
use secrecy::ExposeSecret;

#[test]
fn passphrase_word_counts() -> Result<()> {
    let corpus = WordCorpus::new(mock::words());
    let words = corpus.snapshot();
    let mut generator = PassphraseGenerator::with_rng(&corpus, mock::seeded(1));

    for word_count in 1..=MAX_WORDS {
        let request = GenerationRequest::new(word_count).separator(" ");
        for _ in 0..25 {
            let result = generator.generate(&request);
            assert_eq!(word_count, result.used_word_count);
            assert!(!result.reduced());
            assert_passphrase(
                result.passphrase.expose_secret(),
                " ",
                word_count,
                false,
                &words,
            );
        }
    }
    Ok(())
}

#[test]
fn passphrase_with_symbols() -> Result<()> {
    let corpus = WordCorpus::new(mock::words());
    let words = corpus.snapshot();
    let mut generator = PassphraseGenerator::with_rng(&corpus, mock::seeded(2));
    let request = GenerationRequest::new(5).separator(" ").symbols(true);

    for _ in 0..100 {
        let result = generator.generate(&request);
        let shapes = assert_passphrase(
            result.passphrase.expose_secret(),
            " ",
            5,
            true,
            &words,
        );
        assert_eq!(Some(SYMBOLS.len()), result.symbol_set_size);
        assert_eq!(
            result.policy.symbol_targets(),
            shapes.iter().filter(|s| s.symbol.is_some()).count()
        );
    }
    Ok(())
}

#[test]
fn passphrase_single_word() -> Result<()> {
    let corpus = WordCorpus::new(mock::words());
    let mut generator = PassphraseGenerator::with_rng(&corpus, mock::seeded(3));
    let request = GenerationRequest::new(1).symbols(true);

    for _ in 0..50 {
        let result = generator.generate(&request);
        assert_eq!(vec![0], result.policy.capitalized);
        assert_eq!(1, result.policy.digit_targets());
        assert_eq!(1, result.policy.symbol_targets());
    }
    Ok(())
}

#[test]
fn passphrase_custom_symbols() -> Result<()> {
    let corpus = WordCorpus::new(mock::words());
    let mut generator = PassphraseGenerator::with_rng(&corpus, mock::seeded(4))
        .with_symbols(&['!']);
    assert_eq!(1, generator.symbol_set_size());

    let request = GenerationRequest::new(3).separator(" ").symbols(true);
    let result = generator.generate(&request);
    assert!(result.policy.symbols.iter().all(|s| s.symbol == '!'));
    assert!(result.passphrase.expose_secret().contains('!'));
    Ok(())
}

#[test]
fn passphrase_empty_separator_uses_default() -> Result<()> {
    let corpus = WordCorpus::new(Words::new(["plain"])?);
    let mut generator = PassphraseGenerator::with_rng(&corpus, mock::seeded(5));
    let request = GenerationRequest::new(3).separator("");
    assert_eq!("-", request.separator);

    let result = generator.generate(&request);
    assert_eq!(3, result.passphrase.expose_secret().split('-').count());
    Ok(())
}

#[test]
fn passphrase_request_corrections() {
    assert_eq!(MAX_WORDS, GenerationRequest::new(99).word_count);
    assert_eq!(1, GenerationRequest::new(0).word_count);
    assert_eq!(None, GenerationRequest::default().max_length(Some(0)).max_length);

    assert_eq!(4, parse_word_count(""));
    assert_eq!(4, parse_word_count("abc"));
    assert_eq!(4, parse_word_count("0"));
    assert_eq!(1, parse_word_count("-3"));
    assert_eq!(MAX_WORDS, parse_word_count("40"));
    assert_eq!(6, parse_word_count(" 6 "));
    assert_eq!(9, parse_word_count("9.5"));
    assert_eq!(7, parse_word_count("7 words"));
}

#[test]
fn passphrase_os_rng() -> Result<()> {
    let corpus = WordCorpus::embedded();
    let words = corpus.snapshot();
    let mut generator = PassphraseGenerator::new(&corpus);
    let result = generator.generate(&GenerationRequest::new(6).separator(" "));
    assert_passphrase(result.passphrase.expose_secret(), " ", 6, false, &words);
    Ok(())
}
