/*!
 * Mock oracle implementations for testing.
 *
 * This module provides mock oracles that simulate different behaviors:
 * - `MockOracle::uppercase()` - Always succeeds with the uppercased segment
 * - `MockOracle::echo()` - Always succeeds with the segment unchanged
 * - `MockOracle::failing()` - Always fails with a non-zero exit
 * - `MockOracle::timing_out()` - Always fails with a timeout
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::OracleError;
use crate::oracle::{TranslationOracle, TranslationRequest};

/// Behavior mode for the mock oracle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Answers with the segment uppercased
    Uppercase,
    /// Answers with the segment unchanged
    Echo,
    /// Fails every Nth request, uppercases the others
    Intermittent { fail_every: usize },
    /// Always exits with a failure status
    Failing,
    /// Always reports a timeout
    TimingOut,
    /// Always answers with blank output
    Empty,
}

/// Mock oracle for testing translation behavior
#[derive(Debug, Clone)]
pub struct MockOracle {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Segments received, in order
    seen: Arc<Mutex<Vec<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockOracle {
    /// Create a new mock oracle with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    pub fn uppercase() -> Self {
        Self::new(MockBehavior::Uppercase)
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn timing_out() -> Self {
        Self::new(MockBehavior::TimingOut)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Replace the successful answer with a custom generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Segments received so far
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn answer(&self, text: &str) -> String {
        match self.custom_response {
            Some(generator) => generator(text),
            None => text.to_uppercase(),
        }
    }
}

#[async_trait]
impl TranslationOracle for MockOracle {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, OracleError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(request.text.clone());
        }

        match self.behavior {
            MockBehavior::Uppercase => Ok(self.answer(&request.text)),
            MockBehavior::Echo => Ok(request.text.clone()),
            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(OracleError::NonZeroExit {
                        code: 1,
                        stderr: format!("simulated failure on request {}", count + 1),
                    })
                } else {
                    Ok(self.answer(&request.text))
                }
            }
            MockBehavior::Failing => Err(OracleError::NonZeroExit {
                code: 1,
                stderr: "simulated failure".to_string(),
            }),
            MockBehavior::TimingOut => Err(OracleError::Timeout(Duration::from_secs(120))),
            MockBehavior::Empty => Err(OracleError::BadOutput("empty response".to_string())),
        }
    }

    fn name(&self) -> String {
        format!("mock ({:?})", self.behavior)
    }
}
