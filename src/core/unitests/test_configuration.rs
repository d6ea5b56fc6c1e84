use std::fs;
use log::LevelFilter;
use crate::core::default_configuration::{
    Builder,
    DEFAULT_SERVICE_URL,
    DEFAULT_SEARCH_DEBOUNCE,
};

#[test]
fn test_defaults() {
    let cfg = Builder::new().build().unwrap();
    assert_eq!(cfg.service_url(), DEFAULT_SERVICE_URL);
    assert_eq!(cfg.search_debounce(), DEFAULT_SEARCH_DEBOUNCE);
    assert_eq!(cfg.log_level(), LevelFilter::Info);
    assert!(cfg.log_file().is_none());
}

#[test]
fn test_reject_base_without_separator() {
    let result = Builder::new()
        .with_service_url("http://localhost:3000/api/contacts")
        .build();
    assert!(result.is_err());

    let result = Builder::new()
        .with_service_url("not a url/")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_load_and_override() {
    let path = std::env::temp_dir().join("rolodex_test_cfg.conf");
    fs::write(&path, r#"{
        "serviceUrl": "http://127.0.0.1:4000/api/contacts/",
        "searchDebounce": 150,
        "logger": { "level": "debug", "logFile": "rolodex.log" }
    }"#).unwrap();

    let input = path.display().to_string();
    let cfg = Builder::new()
        .load(&input)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(cfg.service_url(), "http://127.0.0.1:4000/api/contacts/");
    assert_eq!(cfg.search_debounce(), 150);
    assert_eq!(cfg.log_level(), LevelFilter::Debug);
    assert_eq!(cfg.log_file(), Some("rolodex.log"));

    let cfg = Builder::new()
        .load(&input)
        .unwrap()
        .with_search_debounce(500)
        .with_logger(LevelFilter::Warn, None)
        .build()
        .unwrap();

    assert_eq!(cfg.search_debounce(), 500);
    assert_eq!(cfg.log_level(), LevelFilter::Warn);
    assert_eq!(cfg.log_file(), Some("rolodex.log"));
    _ = fs::remove_file(&path);
}

#[test]
fn test_load_bad_file() {
    assert!(Builder::new().load("no-such-file.conf").is_err());

    let path = std::env::temp_dir().join("rolodex_test_bad_cfg.conf");
    fs::write(&path, "{ not json").unwrap();
    assert!(Builder::new().load(&path.display().to_string()).is_err());
    _ = fs::remove_file(&path);
}
