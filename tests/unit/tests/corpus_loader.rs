use anyhow::Result;
use passgen_password::{loader::read_words, CorpusLoader, WordCorpus, Words};
use passgen_test_utils::{init_tracing, mock};

#[tokio::test]
async fn corpus_loader_replaces_words() -> Result<()> {
    init_tracing();
    let (_dir, path) =
        mock::wordlist_file(&["11111 abacus", "11112 abdomen", "", "  11113 abide  "])?;

    let corpus = WordCorpus::embedded();
    let loader = CorpusLoader::new(&path);
    assert!(!loader.is_loaded());
    assert!(loader.load(&corpus).await);
    assert!(loader.is_loaded());

    let words = corpus.snapshot();
    assert_eq!(3, words.len());
    assert_eq!(
        vec!["abacus", "abdomen", "abide"],
        words.iter().collect::<Vec<_>>()
    );
    Ok(())
}

#[tokio::test]
async fn corpus_loader_missing_file() -> Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let corpus = WordCorpus::embedded();
    let loader = CorpusLoader::new(dir.path().join("missing.txt"));

    assert!(!loader.load(&corpus).await);
    assert!(!loader.is_loaded());
    assert_eq!(200, corpus.len());
    Ok(())
}

#[tokio::test]
async fn corpus_loader_empty_file() -> Result<()> {
    init_tracing();
    let (_dir, path) = mock::wordlist_file(&["", "   "])?;
    let corpus = WordCorpus::embedded();
    let loader = CorpusLoader::new(&path);

    assert!(!loader.load(&corpus).await);
    assert_eq!(Words::embedded(), *corpus.snapshot());
    assert!(read_words(&path).await.is_err());
    Ok(())
}

#[tokio::test]
async fn corpus_loader_loads_once() -> Result<()> {
    init_tracing();
    let (_dir, path) = mock::wordlist_file(&["first", "second"])?;
    let corpus = WordCorpus::embedded();
    let loader = CorpusLoader::new(&path);

    let (a, b) = tokio::join!(loader.load(&corpus), loader.load(&corpus));
    assert!(a && b);
    assert_eq!(2, corpus.len());

    // Later changes to the file are not observed.
    std::fs::write(&path, "third\n")?;
    assert!(loader.load(&corpus).await);
    assert_eq!(2, corpus.len());
    Ok(())
}

#[test]
fn corpus_snapshot_survives_replace() -> Result<()> {
    let corpus = WordCorpus::new(mock::words());
    let snapshot = corpus.snapshot();

    let previous = corpus.replace(Words::new(["solo"])?);
    assert_eq!(snapshot, previous);
    assert_eq!(10, snapshot.len());
    assert_eq!(1, corpus.len());

    assert!(!corpus.replace_list(["", "  "]));
    assert_eq!(1, corpus.len());
    assert!(corpus.replace_list(["one", "two"]));
    assert_eq!(2, corpus.len());
    Ok(())
}
