use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::{Config, SkipConfig};
use crate::errors::{AppError, DocumentError};
use crate::file_utils::FileManager;
use crate::oracle::{CommandOracle, TranslationOracle};
use crate::translation::DocumentTranslator;

// @module: Application controller for documentation tree translation

/// Terminal state of one document in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// Translated and written to the output tree
    Written,
    /// Output already looked translated
    Skipped,
    /// Nothing was written; carries the reason
    Failed(String),
}

impl DocumentOutcome {
    /// Console line shown under the file header
    pub fn message(&self) -> String {
        match self {
            Self::Written => "  ✓ Translated successfully".to_string(),
            Self::Skipped => "  ✓ Already translated, skipping".to_string(),
            Self::Failed(reason) => format!("  ✗ Translation failed: {}", reason),
        }
    }
}

/// Per-run counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunTally {
    pub successful: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunTally {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &DocumentOutcome) {
        match outcome {
            DocumentOutcome::Written => self.successful += 1,
            DocumentOutcome::Skipped => self.skipped += 1,
            DocumentOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Four-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Translation Summary:\n  Successful: {}\n  Skipped: {}\n  Failed: {}\n  Total: {}",
            self.successful, self.skipped, self.failed, self.total
        )
    }
}

/// A document that could not be translated
#[derive(Debug, Clone, Serialize)]
pub struct FailedDocument {
    pub path: String,
    pub reason: String,
}

/// Machine-readable record of a translation run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub timestamp: String,
    pub language: String,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub counts: RunTally,
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<FailedDocument>,
}

/// Documents whose output is missing or still looks untranslated
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub timestamp: String,
    pub language: String,
    pub total: usize,
    pub untranslated: Vec<String>,
}

/// Decide whether an existing output already holds a translation.
///
/// Approximate by nature: the output must carry the title marker and then
/// either contain a target-language marker phrase or not end with the
/// brand token an untranslated English page ends with.
pub fn is_already_translated(existing: &str, skip: &SkipConfig) -> bool {
    if !existing.contains(&skip.title_marker) {
        return false;
    }

    let has_marker_phrase = skip
        .marker_phrases
        .iter()
        .any(|phrase| !phrase.is_empty() && existing.contains(phrase.as_str()));

    has_marker_phrase || !existing.trim().ends_with(&skip.brand_token)
}

/// Main application controller for documentation translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    translator: DocumentTranslator,
    force: bool,
}

impl Controller {
    // @method: Create a controller that calls the configured command-line oracle
    pub fn with_config(config: Config) -> Result<Self> {
        let oracle = Arc::new(CommandOracle::from_config(&config.oracle));
        Self::with_oracle(config, oracle)
    }

    /// Create a controller around any oracle implementation
    pub fn with_oracle(config: Config, oracle: Arc<dyn TranslationOracle>) -> Result<Self> {
        let translator = DocumentTranslator::from_config(&config, oracle)?;
        Ok(Self {
            config,
            translator,
            force: false,
        })
    }

    /// Translate every document even when its output looks translated already
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Translate the whole source tree into the output tree
    pub async fn run(&self) -> Result<RunReport> {
        let start_time = std::time::Instant::now();
        let files = self.discover()?;
        let total = files.len();

        info!("Starting {} translation: {:?} -> {:?} ({})",
            self.target_language_name(),
            self.config.source_dir,
            self.config.output_dir,
            self.translator.oracle_name());
        info!("Found {} {} files to translate", total, self.config.normalized_extension());

        let progress_bar = Self::progress_bar(total);

        let mut tally = RunTally::new(total);
        let mut report = RunReport {
            timestamp: chrono::Local::now().to_rfc3339(),
            language: self.config.target_language.clone(),
            source_dir: self.config.source_dir.clone(),
            output_dir: self.config.output_dir.clone(),
            counts: RunTally::default(),
            written: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        };

        for (i, input_file) in files.iter().enumerate() {
            let relative = FileManager::relative_path(input_file, &self.config.source_dir)?;
            let relative_display = relative.display().to_string();

            progress_bar.set_message(relative_display.clone());
            progress_bar.suspend(|| {
                println!("\n[{}/{}] Translating: {}", i + 1, total, relative_display);
            });

            let outcome = self.process_document(input_file, &relative).await;

            progress_bar.suspend(|| println!("{}", outcome.message()));
            tally.record(&outcome);
            match outcome {
                DocumentOutcome::Written => report.written.push(relative_display),
                DocumentOutcome::Skipped => report.skipped.push(relative_display),
                DocumentOutcome::Failed(reason) => report.failed.push(FailedDocument {
                    path: relative_display,
                    reason,
                }),
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        println!("\n\n{}", tally.summary());
        info!("Run finished in {}", Self::format_duration(start_time.elapsed()));

        report.counts = tally;
        Ok(report)
    }

    /// Take one document from pending to its terminal state
    pub async fn process_document(&self, input_file: &Path, relative: &Path) -> DocumentOutcome {
        match self.try_process_document(input_file, relative).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error processing {}: {}", relative.display(), e);
                DocumentOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_process_document(&self, input_file: &Path, relative: &Path) -> Result<DocumentOutcome, AppError> {
        let output_file = FileManager::mirror_path(input_file, &self.config.source_dir, &self.config.output_dir)?;

        if let Some(parent) = output_file.parent() {
            FileManager::ensure_dir(parent)?;
        }

        if !self.force && output_file.exists() {
            let existing = FileManager::read_to_string(&output_file)?;
            if is_already_translated(&existing, &self.config.skip) {
                debug!("Skipping {}, output already translated", relative.display());
                return Ok(DocumentOutcome::Skipped);
            }
            debug!("Existing output for {} looks untranslated", relative.display());
        }

        let translated = self.translator.translate_file(input_file).await?;

        std::fs::write(&output_file, translated).map_err(|source| DocumentError::Write {
            path: output_file.display().to_string(),
            source,
        })?;

        Ok(DocumentOutcome::Written)
    }

    /// List the documents a run would still translate, without calling the oracle
    pub fn status(&self) -> Result<StatusReport> {
        let files = self.discover()?;
        let total = files.len();
        let mut untranslated = Vec::new();

        for input_file in &files {
            let relative = FileManager::relative_path(input_file, &self.config.source_dir)?;
            let output_file = self.config.output_dir.join(&relative);

            let translated = FileManager::file_exists(&output_file)
                && match FileManager::read_to_string(&output_file) {
                    Ok(existing) => is_already_translated(&existing, &self.config.skip),
                    Err(e) => {
                        warn!("{:#}", e);
                        false
                    }
                };

            if !translated {
                untranslated.push(relative.display().to_string());
            }
        }

        Ok(StatusReport {
            timestamp: chrono::Local::now().to_rfc3339(),
            language: self.config.target_language.clone(),
            total,
            untranslated,
        })
    }

    /// Sorted list of source documents
    fn discover(&self) -> Result<Vec<PathBuf>> {
        if !FileManager::dir_exists(&self.config.source_dir) {
            return Err(anyhow!("Source directory does not exist: {:?}", self.config.source_dir));
        }
        FileManager::find_files(&self.config.source_dir, self.config.normalized_extension())
    }

    fn target_language_name(&self) -> String {
        crate::language_utils::get_language_name(&self.config.target_language)
            .unwrap_or_else(|_| self.config.target_language.clone())
    }

    fn progress_bar(total: usize) -> ProgressBar {
        let progress_bar = ProgressBar::new(total as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
