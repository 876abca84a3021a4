// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
#![cfg_attr(test, allow(non_snake_case))]

use anyhow::{Result, Context};
use log::{info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand, Args};
use clap_complete::{generate, Shell};

use docmirror::app_config::{self, Config};
use docmirror::app_controller::Controller;
use docmirror::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the source tree into the output tree (default command)
    Translate(RunArgs),

    /// List documents whose output is missing or not yet translated
    Status(RunArgs),

    /// Generate shell completions for docmirror
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct RunArgs {
    /// Source documentation directory
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output directory for the translated tree
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target language code (e.g., 'de', 'fr', 'ru')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Document extension to translate
    #[arg(short, long)]
    extension: Option<String>,

    /// Translate even when the output already looks translated
    #[arg(short, long)]
    force: bool,

    /// Oracle command to run
    #[arg(long)]
    oracle_command: Option<String>,

    /// Oracle timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write a JSON report of the run to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "docmirror.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// docmirror - translate a documentation tree with an AI command-line tool
#[derive(Parser, Debug)]
#[command(name = "docmirror")]
#[command(version)]
#[command(about = "Translate a documentation tree into a mirrored tree")]
#[command(long_about = "docmirror walks a documentation tree, translates frontmatter and body of every
document through an external AI command-line tool and writes the result to a
mirrored tree. Code, markup and a list of preserved terms are kept as-is.

EXAMPLES:
    docmirror                                   # Translate using docmirror.json
    docmirror -s docs-en -o docs-fr -t fr       # Translate docs-en into docs-fr
    docmirror -f                                # Retranslate everything
    docmirror status -r todo.json               # List untranslated documents
    docmirror completions bash > docmirror.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in docmirror.json by default. If the file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

// @struct: Custom logger implementation, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger with an initial level
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Config and CLI adjust the level after init through log::set_max_level
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "docmirror", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        Some(Commands::Status(args)) => run_status(args),
        None => run_translate(cli.run).await,
    }
}

/// Load the configuration file and apply command line overrides
fn load_config(options: &RunArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let (mut config, created) = Config::load_or_create(&options.config_path)?;
    if created {
        warn!("Config file not found at '{}', created default config.", options.config_path);
    }

    if let Some(source) = &options.source {
        config.source_dir = source.clone();
    }
    if let Some(output) = &options.output {
        config.output_dir = output.clone();
    }
    if let Some(target_language) = &options.target_language {
        config.target_language = target_language.clone();
    }
    if let Some(extension) = &options.extension {
        config.extension = extension.clone();
    }
    if let Some(command) = &options.oracle_command {
        config.oracle.command = command.clone();
    }
    if let Some(timeout_secs) = options.timeout_secs {
        config.oracle.timeout_secs = timeout_secs;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

async fn run_translate(options: RunArgs) -> Result<()> {
    let config = load_config(&options)?;
    let controller = Controller::with_config(config)?
        .with_force(options.force);

    let report = controller.run().await?;

    if let Some(report_path) = &options.report {
        FileManager::write_json(report_path, &report)?;
        info!("Report written to {}", report_path.display());
    }

    Ok(())
}

fn run_status(options: RunArgs) -> Result<()> {
    let config = load_config(&options)?;
    let controller = Controller::with_config(config)?;

    let status = controller.status()?;
    for path in &status.untranslated {
        println!("{}", path);
    }
    println!("\nUntranslated: {}/{}", status.untranslated.len(), status.total);

    if let Some(report_path) = &options.report {
        FileManager::write_json(report_path, &status)?;
        info!("Status written to {}", report_path.display());
    }

    Ok(())
}
