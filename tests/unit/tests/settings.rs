use anyhow::Result;
use passgen_password::{
    generator::parse_word_count, GenerationRequest, MAX_WORDS,
};
use passgen_preferences::{
    FileStorage, MemoryStorage, Settings, SettingsStorage, SettingsStore,
    SETTINGS_KEY,
};
use passgen_test_utils::init_tracing;
use tempfile::tempdir;

#[tokio::test]
async fn settings_file_round_trip() -> Result<()> {
    init_tracing();
    let temp = tempdir()?;
    let path = temp.path().join("settings.json");

    let request = GenerationRequest::new(6)
        .separator(".")
        .max_length(Some(32))
        .symbols(true);
    let store = SettingsStore::new(Box::new(FileStorage::new(&path)));
    assert!(store.load().await.is_none());
    store.save(&Settings::from(&request)).await?;

    let store = SettingsStore::new(Box::new(FileStorage::new(&path)));
    let settings = store.load().await.expect("settings were saved");
    assert_eq!(request, settings.to_request());

    let content = std::fs::read_to_string(&path)?;
    let items: serde_json::Value = serde_json::from_str(&content)?;
    let record = items[SETTINGS_KEY].as_str().expect("record is a string");
    let record: serde_json::Value = serde_json::from_str(record)?;
    assert_eq!(6, record["wordCount"]);
    assert_eq!(true, record["addSymbol"]);

    store.clear().await?;
    assert!(store.load().await.is_none());
    Ok(())
}

#[tokio::test]
async fn settings_corrupt_record_ignored() -> Result<()> {
    init_tracing();
    let storage = MemoryStorage::new();
    storage
        .set_item(SETTINGS_KEY, "{\"wordCount\":".to_owned())
        .await?;
    let store = SettingsStore::new(Box::new(storage));
    assert!(store.load().await.is_none());

    store.save(&Settings::default()).await?;
    assert_eq!(Some(Settings::default()), store.load().await);
    Ok(())
}

#[tokio::test]
async fn settings_corrupt_file_ignored() -> Result<()> {
    init_tracing();
    let temp = tempdir()?;
    let path = temp.path().join("settings.json");
    std::fs::write(&path, "not json")?;

    let store = SettingsStore::new(Box::new(FileStorage::new(&path)));
    assert!(store.load().await.is_none());
    store
        .save(&Settings {
            word_count: Some(5),
            ..Default::default()
        })
        .await?;
    assert_eq!(Some(5), store.load().await.and_then(|s| s.word_count));
    Ok(())
}

#[test]
fn settings_out_of_range_corrected() -> Result<()> {
    let settings: Settings = serde_json::from_str(
        r#"{"wordCount":"99","separator":"","maxLength":"0"}"#,
    )?;
    let request = settings.to_request();
    assert_eq!(MAX_WORDS, request.word_count);
    assert_eq!("-", request.separator);
    assert_eq!(None, request.max_length);
    assert!(!request.symbols);

    let request = Settings::default().to_request();
    assert_eq!(GenerationRequest::default(), request);
    Ok(())
}

#[tokio::test]
async fn settings_zero_word_count_matches_flag() -> Result<()> {
    let storage = MemoryStorage::new();
    storage
        .set_item(SETTINGS_KEY, r#"{"wordCount":"0"}"#.to_owned())
        .await?;
    let store = SettingsStore::new(Box::new(storage));
    let settings = store.load().await.expect("record is valid");
    assert_eq!(parse_word_count("0"), settings.to_request().word_count);
    assert_eq!(4, settings.to_request().word_count);

    let settings: Settings = serde_json::from_str(r#"{"wordCount":0}"#)?;
    assert_eq!(4, settings.to_request().word_count);
    Ok(())
}

#[tokio::test]
async fn settings_negative_max_length_keeps_record() -> Result<()> {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            SETTINGS_KEY,
            r#"{"wordCount":"6","separator":".","addSymbol":true,"maxLength":-5}"#
                .to_owned(),
        )
        .await?;
    let store = SettingsStore::new(Box::new(storage));
    let settings = store.load().await.expect("record is valid");
    assert_eq!(None, settings.max_length);

    let request = settings.to_request();
    assert_eq!(6, request.word_count);
    assert_eq!(".", request.separator);
    assert!(request.symbols);
    assert_eq!(None, request.max_length);
    Ok(())
}

#[test]
fn settings_numeric_prefixes() -> Result<()> {
    let settings: Settings = serde_json::from_str(
        r#"{"wordCount":"7 words","maxLength":24.5}"#,
    )?;
    assert_eq!(Some(7), settings.word_count);
    assert_eq!(Some(24), settings.max_length);
    Ok(())
}

#[tokio::test]
async fn settings_custom_key() -> Result<()> {
    let store =
        SettingsStore::new(Box::new(MemoryStorage::new())).with_key("mock");
    assert_eq!("mock", store.key());
    store.save(&Settings::default()).await?;
    assert!(store.load().await.is_some());
    Ok(())
}
