/*!
 * Subprocess-backed oracle.
 *
 * Runs `<program> <args...> <prompt>` and treats standard output as the
 * translation. The wait is bounded; on timeout the child is killed.
 */

use async_trait::async_trait;
use log::debug;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::app_config::OracleConfig;
use crate::errors::OracleError;
use crate::oracle::{TranslationOracle, TranslationRequest};

/// Oracle that shells out to a command-line AI tool
#[derive(Debug, Clone)]
pub struct CommandOracle {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandOracle {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &OracleConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone(), config.timeout())
    }
}

#[async_trait]
impl TranslationOracle for CommandOracle {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, OracleError> {
        let prompt = request.prompt.as_str();
        debug!("Invoking {} ({} prompt chars)", self.program, prompt.chars().count());

        let output_future = Command::new(&self.program)
            .args(&self.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::select! {
            result = output_future => {
                result.map_err(|e| OracleError::Unavailable(format!("{}: {}", self.program, e)))?
            },
            _ = tokio::time::sleep(self.timeout) => {
                return Err(OracleError::Timeout(self.timeout));
            }
        };

        if !output.status.success() {
            return Err(OracleError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| OracleError::BadOutput(format!("stdout is not UTF-8: {}", e)))?;
        let answer = stdout.trim();
        if answer.is_empty() {
            return Err(OracleError::BadOutput("empty response".to_string()));
        }

        Ok(answer.to_string())
    }

    fn name(&self) -> String {
        self.program.clone()
    }
}
