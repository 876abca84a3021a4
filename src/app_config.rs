use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Root of the documentation tree to translate
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Root of the mirrored output tree
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extension of the documents to translate, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Terms the oracle is told to leave untranslated
    #[serde(default = "default_preserve_terms")]
    pub preserve_terms: Vec<String>,

    /// Frontmatter keys whose values are translated; others pass through
    #[serde(default = "default_translatable_keys")]
    pub translatable_keys: Vec<String>,

    /// Rewrite `](/<source>/` link targets to `](/<target>/` after translation
    #[serde(default)]
    pub rewrite_locale_links: bool,

    /// External translation command
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Heuristic used to detect outputs that are already translated
    #[serde(default)]
    pub skip: SkipConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// External oracle invocation settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OracleConfig {
    // @field: Program to execute
    #[serde(default = "default_oracle_command")]
    pub command: String,

    // @field: Arguments placed before the prompt
    #[serde(default = "default_oracle_args")]
    pub args: Vec<String>,

    // @field: Hard upper bound on a single call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl OracleConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            command: default_oracle_command(),
            args: default_oracle_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Markers that identify an existing output as already translated.
///
/// An output is skipped when it contains `title_marker` and either contains
/// one of `marker_phrases` or does not end with `brand_token`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SkipConfig {
    #[serde(default = "default_title_marker")]
    pub title_marker: String,

    /// Phrases that only occur in target-language text
    #[serde(default = "default_marker_phrases")]
    pub marker_phrases: Vec<String>,

    /// Token an untranslated English page typically ends with
    #[serde(default = "default_brand_token")]
    pub brand_token: String,
}

impl Default for SkipConfig {
    fn default() -> Self {
        Self {
            title_marker: default_title_marker(),
            marker_phrases: default_marker_phrases(),
            brand_token: default_brand_token(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("docs-en")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs-de")
}

fn default_extension() -> String {
    "mdx".to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "de".to_string()
}

fn default_translatable_keys() -> Vec<String> {
    ["title", "description", "keywords", "sidebar_label"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Product, brand and technology names kept in English
pub fn default_preserve_terms() -> Vec<String> {
    [
        "Caret", "Cline", "Claude", "VS Code", "VSCode",
        "personas", "workflows", "tasks", "shortcuts", "commands",
        "MCP", "LLM", "AI", "API", "SDK", "CLI", "gRPC",
        "GitHub", "Anthropic", "OpenAI", "Google", "AWS",
        "Gemini", "Claude Opus", "Claude Sonnet", "Claude Haiku",
        "TypeScript", "JavaScript", "Python", "Go", "Rust",
        "JSON", "YAML", "MDX", "Markdown", "Git",
        "Slack", "Discord", "HTTP", "REST", "WebSocket",
        "Terminal", "Shell", "Bash", "zsh", "PowerShell",
        "Model", "Provider", "Token", "Context Window",
        "System Prompt", "User Message", "Assistant",
        "Function Calling", "Tool Use", "RAG",
        "Ollama", "LM Studio", "Mistral", "Groq", "xAI", "OpenRouter",
        "GPT-4", "GPT-3.5", "Bedrock", "Vertex AI", "FireWorks",
        "Codestral", "DeepSeek", "Qwen", "Doubao",
        "Memory Bank", "Checkpoint", "Auto-Compact",
        "Dual Mode", "Enhanced Mode", "YOLO Mode",
        "Focus Chain", "Multiroot Workspace",
        "Dark Mode", "Light Mode",
        "Docusaurus",
        "Import", "Export", "Settings", "Extensions",
        "Marketplace", "Repository", "README", "LICENSE",
        "Enterprise", "Sovereign Cloud",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_oracle_command() -> String {
    "claude-code".to_string()
}

fn default_oracle_args() -> Vec<String> {
    vec!["ask".to_string()]
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_title_marker() -> String {
    "title:".to_string()
}

fn default_marker_phrases() -> Vec<String> {
    vec!["Was ist".to_string(), "Einführung".to_string()]
}

fn default_brand_token() -> String {
    "Caret".to_string()
}

impl Config {
    /// Load a configuration file, writing the defaults there first if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        let path = path.as_ref();
        if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok((config, false));
        }

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok((config, true))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        crate::language_utils::validate_language_code(&self.source_language)?;
        crate::language_utils::validate_language_code(&self.target_language)?;

        if self.extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("Document extension cannot be empty"));
        }

        if self.oracle.command.trim().is_empty() {
            return Err(anyhow!("Oracle command cannot be empty"));
        }

        if self.oracle.timeout_secs == 0 {
            return Err(anyhow!("Oracle timeout must be at least one second"));
        }

        // The output tree must not overlap the source tree
        if without_cur_dir(&self.output_dir).starts_with(without_cur_dir(&self.source_dir)) {
            return Err(anyhow!(
                "Output directory {} must not be the source directory or inside it ({})",
                self.output_dir.display(),
                self.source_dir.display()
            ));
        }

        Ok(())
    }

    /// Extension without a leading dot
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            extension: default_extension(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            preserve_terms: default_preserve_terms(),
            translatable_keys: default_translatable_keys(),
            rewrite_locale_links: false,
            oracle: OracleConfig::default(),
            skip: SkipConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
