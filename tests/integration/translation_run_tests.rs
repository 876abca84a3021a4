/*!
 * End-to-end tests for translating a documentation tree
 */

use anyhow::Result;
use std::sync::Arc;
use docmirror::app_controller::{Controller, RunTally};
use docmirror::oracle::MockOracle;
use crate::common::TestTree;

/// Test the canonical single-document scenario
#[tokio::test]
async fn test_run_withSingleDocument_shouldWriteUppercasedMirror() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("intro.mdx", "---\ntitle: \"Intro\"\n---\nHello Caret.")?;

    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(MockOracle::uppercase()))?;
    let report = controller.run().await?;

    assert_eq!(tree.read_output("intro.mdx")?, "---\ntitle: \"INTRO\"\n---\nHELLO CARET.");
    assert_eq!(report.counts, RunTally { successful: 1, skipped: 0, failed: 0, total: 1 });
    assert_eq!(report.written, vec!["intro.mdx"]);
    Ok(())
}

/// Test that an empty tree reports all-zero counts
#[tokio::test]
async fn test_run_withEmptyTree_shouldReportZeroCounts() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("readme.txt", "not a document")?;

    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(MockOracle::uppercase()))?;
    let report = controller.run().await?;

    assert_eq!(report.counts, RunTally::default());
    assert!(report.written.is_empty());
    Ok(())
}

/// Test that nested directories are mirrored and created on demand
#[tokio::test]
async fn test_run_withNestedTree_shouldMirrorStructure() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("a.mdx", "---\ntitle: A\n---\nAlpha")?;
    tree.add_source("guide/deep/b.mdx", "Beta")?;
    tree.add_source("guide/c.md", "ignored")?;

    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(MockOracle::uppercase()))?;
    let report = controller.run().await?;

    assert_eq!(tree.read_output("a.mdx")?, "---\ntitle: \"A\"\n---\nALPHA");
    assert_eq!(tree.read_output("guide/deep/b.mdx")?, "---\n---\nBETA");
    assert!(!tree.output().join("guide/c.md").exists());
    assert_eq!(report.counts.total, 2);
    assert_eq!(report.counts.successful, 2);
    Ok(())
}

/// Test that already-translated outputs are skipped and untranslated ones redone
#[tokio::test]
async fn test_run_withExistingOutputs_shouldApplySkipHeuristic() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("done.mdx", "---\ntitle: What is Caret\n---\nWelcome to Caret")?;
    tree.add_source("stale.mdx", "---\ntitle: Setup\n---\nInstall Caret")?;
    tree.add_output("done.mdx", "---\ntitle: \"Was ist Caret\"\n---\nWillkommen bei Caret")?;
    tree.add_output("stale.mdx", "---\ntitle: \"Setup\"\n---\nInstall Caret")?;

    let oracle = MockOracle::uppercase();
    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(oracle.clone()))?;
    let report = controller.run().await?;

    assert_eq!(report.counts, RunTally { successful: 1, skipped: 1, failed: 0, total: 2 });
    assert_eq!(report.skipped, vec!["done.mdx"]);
    assert_eq!(tree.read_output("done.mdx")?, "---\ntitle: \"Was ist Caret\"\n---\nWillkommen bei Caret");
    assert_eq!(tree.read_output("stale.mdx")?, "---\ntitle: \"SETUP\"\n---\nINSTALL CARET");
    assert_eq!(oracle.seen(), vec!["Setup", "Install Caret"]);
    Ok(())
}

/// Test that force retranslates outputs the heuristic would skip
#[tokio::test]
async fn test_run_withForce_shouldIgnoreSkipHeuristic() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("done.mdx", "---\ntitle: Intro\n---\nHello")?;
    tree.add_output("done.mdx", "---\ntitle: \"Einführung\"\n---\nHallo")?;

    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(MockOracle::uppercase()))?
        .with_force(true);
    let report = controller.run().await?;

    assert_eq!(report.counts.successful, 1);
    assert_eq!(tree.read_output("done.mdx")?, "---\ntitle: \"INTRO\"\n---\nHELLO");
    Ok(())
}

/// Test that a failing oracle still writes the untranslated document
#[tokio::test]
async fn test_run_withFailingOracle_shouldFailOpen() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("intro.mdx", "---\ntitle: Intro\n---\nHello Caret.")?;

    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(MockOracle::timing_out()))?;
    let report = controller.run().await?;

    assert_eq!(report.counts.successful, 1);
    assert_eq!(tree.read_output("intro.mdx")?, "---\ntitle: \"Intro\"\n---\nHello Caret.");
    Ok(())
}

/// Test that empty documents are counted as failures without aborting the run
#[tokio::test]
async fn test_run_withEmptyDocument_shouldMarkFailedAndContinue() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("a-empty.mdx", "")?;
    tree.add_source("b-ok.mdx", "Text")?;

    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(MockOracle::uppercase()))?;
    let report = controller.run().await?;

    assert_eq!(report.counts, RunTally { successful: 1, skipped: 0, failed: 1, total: 2 });
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, "a-empty.mdx");
    assert_eq!(report.failed[0].reason, "Document error: Translation produced empty output");
    assert!(!tree.output().join("a-empty.mdx").exists());
    assert_eq!(tree.read_output("b-ok.mdx")?, "---\n---\nTEXT");
    Ok(())
}

/// Test that a missing source root aborts the run
#[tokio::test]
async fn test_run_withMissingSourceDir_shouldReturnError() -> Result<()> {
    let tree = TestTree::new()?;
    let mut config = tree.config.clone();
    config.source_dir = tree.root.path().join("nope");

    let controller = Controller::with_oracle(config, Arc::new(MockOracle::uppercase()))?;
    assert!(controller.run().await.is_err());
    Ok(())
}

/// Test that the report serializes with the documented fields
#[tokio::test]
async fn test_run_report_withOneDocument_shouldSerializeCounts() -> Result<()> {
    let tree = TestTree::new()?;
    tree.add_source("intro.mdx", "Hello")?;

    let controller = Controller::with_oracle(tree.config.clone(), Arc::new(MockOracle::uppercase()))?;
    let report = controller.run().await?;
    let json: serde_json::Value = serde_json::to_value(&report)?;

    assert_eq!(json["language"], "de");
    assert_eq!(json["counts"]["successful"], 1);
    assert_eq!(json["counts"]["total"], 1);
    assert_eq!(json["written"][0], "intro.mdx");
    Ok(())
}
