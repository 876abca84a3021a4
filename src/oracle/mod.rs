/*!
 * Translation oracle implementations.
 *
 * The oracle is the external tool that performs the actual translation.
 * This module contains:
 * - `command`: invokes a command-line AI tool as a subprocess
 * - `mock`: deterministic oracles for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::OracleError;

/// A single translation call
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// The text segment being translated
    pub text: String,
    /// The complete instruction payload embedding `text`
    pub prompt: String,
}

/// Common trait for all translation oracles
///
/// An oracle answers a request with the translated text. Implementations
/// report failures as errors; the fail-open policy is applied by the caller.
#[async_trait]
pub trait TranslationOracle: Send + Sync + Debug {
    /// Complete a request and return the oracle's answer
    ///
    /// # Arguments
    /// * `request` - The segment and its rendered prompt
    ///
    /// # Returns
    /// * `Result<String, OracleError>` - The answer, trimmed, or an error
    async fn translate(&self, request: &TranslationRequest) -> Result<String, OracleError>;

    /// Short name used in log lines
    fn name(&self) -> String;
}

pub mod command;
pub mod mock;

pub use command::CommandOracle;
pub use mock::{MockBehavior, MockOracle};
