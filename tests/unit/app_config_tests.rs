/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::path::PathBuf;
use docmirror::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_dir, PathBuf::from("docs-en"));
    assert_eq!(config.output_dir, PathBuf::from("docs-de"));
    assert_eq!(config.extension, "mdx");
    assert_eq!(config.target_language, "de");
    assert_eq!(config.oracle.command, "claude-code");
    assert_eq!(config.oracle.args, vec!["ask".to_string()]);
    assert_eq!(config.oracle.timeout_secs, 120);
    assert_eq!(
        config.translatable_keys,
        vec!["title", "description", "keywords", "sidebar_label"]
    );
    assert!(config.preserve_terms.iter().any(|t| t == "Caret"));
    assert!(config.preserve_terms.iter().any(|t| t == "VS Code"));
    assert_eq!(config.skip.title_marker, "title:");
    assert_eq!(config.skip.brand_token, "Caret");
    assert_eq!(config.skip.marker_phrases, vec!["Was ist", "Einführung"]);
    assert!(!config.rewrite_locale_links);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.target_language = "xx".to_string();
    assert!(config.validate().is_err());
    config.target_language = "fr".to_string();

    config.extension = ".".to_string();
    assert!(config.validate().is_err());
    config.extension = ".mdx".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.normalized_extension(), "mdx");

    config.oracle.command = "  ".to_string();
    assert!(config.validate().is_err());
    config.oracle.command = "claude-code".to_string();

    config.oracle.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.oracle.timeout_secs = 30;

    config.output_dir = config.source_dir.clone();
    assert!(config.validate().is_err());
}

/// Test that an output root nested inside the source root is rejected
#[test]
fn test_config_validate_withNestedOutputDir_shouldFail() {
    let mut config = Config {
        source_dir: PathBuf::from("docs-en"),
        ..Config::default()
    };

    config.output_dir = PathBuf::from("docs-en/de");
    assert!(config.validate().is_err());

    config.output_dir = PathBuf::from("./docs-en/de");
    assert!(config.validate().is_err());

    config.output_dir = PathBuf::from("docs-en-de");
    assert!(config.validate().is_ok());

    config.output_dir = PathBuf::from("docs-de");
    assert!(config.validate().is_ok());
}

/// Test that a partial JSON file is completed with defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let json = r#"{
        "source_dir": "site/docs-en",
        "target_language": "fr",
        "preserve_terms": ["Caret"],
        "oracle": { "command": "my-llm" },
        "skip": { "marker_phrases": ["Qu'est-ce que"] }
    }"#;

    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.source_dir, PathBuf::from("site/docs-en"));
    assert_eq!(config.output_dir, PathBuf::from("docs-de"));
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.preserve_terms, vec!["Caret"]);
    assert_eq!(config.oracle.command, "my-llm");
    assert_eq!(config.oracle.args, vec!["ask".to_string()]);
    assert_eq!(config.oracle.timeout_secs, 120);
    assert_eq!(config.skip.marker_phrases, vec!["Qu'est-ce que"]);
    assert_eq!(config.skip.brand_token, "Caret");
    Ok(())
}

/// Test that a missing config file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("docmirror.json");

    let (config, created) = Config::load_or_create(&path)?;
    assert!(created);
    assert!(path.exists());
    assert_eq!(config.extension, "mdx");

    let (reloaded, created_again) = Config::load_or_create(&path)?;
    assert!(!created_again);
    assert_eq!(reloaded.preserve_terms, config.preserve_terms);
    Ok(())
}

/// Test that a malformed config file is reported
#[test]
fn test_load_or_create_withMalformedFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "docmirror.json", "{ not json")?;
    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}
