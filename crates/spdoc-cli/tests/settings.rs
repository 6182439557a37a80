//! Settings loading tests.

use std::fs;
use std::time::Duration;

use spdoc_cli::settings::{Settings, load_settings, parse_settings, settings_to_toml};
use spdoc_model::FilterComposition;
use tempfile::tempdir;

#[test]
fn explicit_settings_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[view]\ncomposition = \"intersect\"\n\n[reveal]\ndelay_ms = 250\n",
    )
    .unwrap();

    let settings = load_settings(Some(&path)).unwrap();
    assert_eq!(settings.view.composition, FilterComposition::Intersect);

    let options = settings.page_options();
    assert_eq!(options.composition, FilterComposition::Intersect);
    assert_eq!(options.reveal.delay, Duration::from_millis(250));
    assert_eq!(options.reveal.duration, Duration::from_millis(500));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_settings(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn malformed_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[view]\ncomposition = \"sideways\"\n").unwrap();
    assert!(load_settings(Some(&path)).is_err());
}

#[test]
fn empty_file_gives_defaults() {
    let settings = parse_settings("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.view.composition, FilterComposition::Override);
}

#[test]
fn settings_round_trip_through_toml() {
    let mut settings = Settings::default();
    settings.view.composition = FilterComposition::Intersect;
    settings.catalog.path = Some("catalog.toml".into());
    let text = settings_to_toml(&settings).unwrap();
    assert!(text.contains("composition = \"intersect\""));
    assert_eq!(parse_settings(&text).unwrap(), settings);
}

#[test]
fn catalog_path_is_relative_to_the_settings_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[catalog]\npath = \"catalog.toml\"\n").unwrap();

    let settings = load_settings(Some(&path)).unwrap();
    assert_eq!(settings.catalog.path, Some(dir.path().join("catalog.toml")));
}
