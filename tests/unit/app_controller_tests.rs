/*!
 * Tests for the skip heuristic, outcomes and run tally
 */

use docmirror::app_config::SkipConfig;
use docmirror::app_controller::{is_already_translated, DocumentOutcome, RunTally};

/// Test that an output ending with the brand token and no marker phrase is reprocessed
#[test]
fn test_is_already_translated_withBrandEndingAndNoMarker_shouldReturnFalse() {
    let skip = SkipConfig::default();
    let existing = "---\ntitle: \"Intro\"\n---\nWelcome to Caret\n";
    assert!(!is_already_translated(existing, &skip));
}

/// Test that an output containing a marker phrase is skipped
#[test]
fn test_is_already_translated_withMarkerPhrase_shouldReturnTrue() {
    let skip = SkipConfig::default();
    let existing = "---\ntitle: \"Was ist Caret\"\n---\nWillkommen bei Caret\n";
    assert!(is_already_translated(existing, &skip));
}

/// Test that an output not ending with the brand token is skipped
#[test]
fn test_is_already_translated_withOtherEnding_shouldReturnTrue() {
    let skip = SkipConfig::default();
    let existing = "---\ntitle: \"Überblick\"\n---\nDas ist die Übersicht.\n";
    assert!(is_already_translated(existing, &skip));
}

/// Test that an output without the title marker is always reprocessed
#[test]
fn test_is_already_translated_withoutTitleMarker_shouldReturnFalse() {
    let skip = SkipConfig::default();
    assert!(!is_already_translated("Einführung in das Produkt.", &skip));
    assert!(!is_already_translated("", &skip));
}

/// Test that custom markers replace the German defaults
#[test]
fn test_is_already_translated_withCustomMarkers_shouldUseThem() {
    let skip = SkipConfig {
        title_marker: "title:".to_string(),
        marker_phrases: vec!["Qu'est-ce que".to_string()],
        brand_token: "Caret".to_string(),
    };
    assert!(is_already_translated("title: x\nQu'est-ce que Caret", &skip));
    assert!(!is_already_translated("title: x\nEinführung Caret", &skip));
}

/// Test that the tally counts every outcome exactly once
#[test]
fn test_run_tally_withMixedOutcomes_shouldCountEach() {
    let mut tally = RunTally::new(4);
    tally.record(&DocumentOutcome::Written);
    tally.record(&DocumentOutcome::Written);
    tally.record(&DocumentOutcome::Skipped);
    tally.record(&DocumentOutcome::Failed("boom".to_string()));

    assert_eq!(
        tally,
        RunTally { successful: 2, skipped: 1, failed: 1, total: 4 }
    );
    assert_eq!(
        tally.summary(),
        "Translation Summary:\n  Successful: 2\n  Skipped: 1\n  Failed: 1\n  Total: 4"
    );
}

/// Test the per-file console lines
#[test]
fn test_outcome_message_withEachOutcome_shouldUseGlyphs() {
    assert!(DocumentOutcome::Written.message().contains('✓'));
    assert!(DocumentOutcome::Skipped.message().contains("skipping"));
    let failed = DocumentOutcome::Failed("no output".to_string()).message();
    assert!(failed.contains('✗'));
    assert!(failed.contains("no output"));
}
