/*!
 * # docmirror - documentation tree translator
 *
 * A Rust library for translating a tree of documentation files into a
 * mirrored tree in another language, using an external AI command-line
 * tool as the translator.
 *
 * ## Features
 *
 * - Recursive discovery of documents by extension (MDX by default)
 * - Flat frontmatter parsing and re-serialization
 * - Per-key frontmatter translation and whole-body translation
 * - Configurable list of terms the translator must keep
 * - Fail-open translation: a failed call keeps the original text
 * - Best-effort skipping of outputs that are already translated
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `frontmatter`: Frontmatter splitting and reassembly
 * - `translation`: Document translation:
 *   - `translation::document`: Frontmatter-aware document translator
 *   - `translation::prompts`: Instruction template
 * - `oracle`: Translation back-ends:
 *   - `oracle::command`: External command-line tool
 *   - `oracle::mock`: Deterministic test oracles
 * - `file_utils`: File system operations
 * - `app_controller`: Driver loop over the source tree
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Test names follow the `test_unit_withCase_shouldOutcome` convention
#![cfg_attr(test, allow(non_snake_case))]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod frontmatter;
pub mod language_utils;
pub mod oracle;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, DocumentOutcome, RunReport, RunTally};
pub use errors::{AppError, DocumentError, OracleError};
pub use frontmatter::{Frontmatter, SplitDocument};
pub use oracle::{CommandOracle, MockOracle, TranslationOracle};
pub use translation::DocumentTranslator;
