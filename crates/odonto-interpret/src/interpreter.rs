use std::sync::Arc;
use std::time::Duration;

use odonto_core::models::command::{InterpretationRequest, StructuredCommand};
use odonto_core::vocabulary::Vocabulary;
use tracing::{info, warn};

use crate::error::ProviderError;
use crate::messages;
use crate::provider::InterpretationProvider;

#[derive(Debug, Clone, Copy)]
pub struct InterpreterConfig {
    /// Upper bound on one provider round trip.
    pub timeout: Duration,
    /// Actionable commands below this confidence are downgraded to
    /// `unknown`. `None` accepts any confidence.
    pub min_confidence: Option<f64>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            min_confidence: None,
        }
    }
}

/// Turns a transcript into a command using a provider.
///
/// Never fails: empty input, transport errors, timeouts and unparsable
/// replies all come back as an `unknown` command with confidence 0 and a
/// localized message. Nothing is retried; the clinician repeats the command.
#[derive(Clone)]
pub struct Interpreter {
    provider: Arc<dyn InterpretationProvider>,
    config: InterpreterConfig,
}

impl Interpreter {
    pub fn new(provider: Arc<dyn InterpretationProvider>) -> Self {
        Self {
            provider,
            config: InterpreterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: InterpreterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Interpret `transcript` against the closed vocabularies.
    ///
    /// The result is not validated; pass it through
    /// [`odonto_core::validate::validate`] before touching a chart.
    pub async fn interpret(&self, transcript: &str, vocabulary: &Vocabulary) -> StructuredCommand {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            warn!("empty transcript, skipping interpretation");
            return StructuredCommand::unknown(messages::EMPTY_TRANSCRIPT);
        }

        let request = InterpretationRequest::new(transcript, vocabulary);
        let result = tokio::time::timeout(self.config.timeout, self.provider.interpret(&request))
            .await
            .unwrap_or(Err(ProviderError::Timeout(self.config.timeout)));

        match result {
            Ok(command) => self.apply_threshold(explain_unknown(command)),
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "interpretation failed");
                StructuredCommand::unknown(e.user_message())
            }
        }
    }

    fn apply_threshold(&self, command: StructuredCommand) -> StructuredCommand {
        match self.config.min_confidence {
            Some(min) if command.is_actionable() && command.confidence < min => {
                info!(
                    confidence = command.confidence,
                    min_confidence = min,
                    "command below confidence threshold"
                );
                StructuredCommand::unknown(messages::LOW_CONFIDENCE)
            }
            _ => command,
        }
    }
}

/// Give an `unknown` command with a blank message the generic
/// not-understood explanation. Other commands are returned unchanged.
pub fn explain_unknown(mut command: StructuredCommand) -> StructuredCommand {
    if !command.is_actionable() && command.message.trim().is_empty() {
        command.message = messages::NOT_UNDERSTOOD.to_string();
    }
    command
}
