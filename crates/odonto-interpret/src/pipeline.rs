//! Transcript → interpreter → validator → chart.

use std::sync::Arc;

use odonto_core::models::chart::ChartState;
use odonto_core::models::command::StructuredCommand;
use odonto_core::validate::{to_chart_command, validate};
use odonto_core::vocabulary::Vocabulary;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::interpreter::Interpreter;
use crate::session::{ChartSession, ListeningSessions, SessionId};

/// One recognizer result from the speech-to-text source.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub transcript: String,
    /// Recognizer confidence in `[0, 1]`.
    pub confidence: f32,
    /// Interim results are still changing and are never interpreted.
    pub is_final: bool,
}

impl Utterance {
    pub fn final_result(transcript: impl Into<String>, confidence: f32) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
            is_final: true,
        }
    }
}

/// What happened to one utterance.
#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    /// The command was valid and produced a new chart version.
    Applied {
        command: StructuredCommand,
        chart: Arc<ChartState>,
    },
    /// Interpretation or validation produced an `unknown` command; its
    /// message says why.
    Rejected { command: StructuredCommand },
    /// The session ended while the interpretation was in flight; the chart
    /// was not touched.
    Stale {
        session: SessionId,
        command: StructuredCommand,
    },
    /// Interim result, or delivered after the session stopped listening.
    Ignored,
}

pub struct VoicePipeline {
    interpreter: Interpreter,
    vocabulary: Vocabulary,
    chart: Arc<ChartSession>,
    sessions: ListeningSessions,
}

impl VoicePipeline {
    pub fn new(interpreter: Interpreter, vocabulary: Vocabulary, chart: Arc<ChartSession>) -> Self {
        Self {
            interpreter,
            vocabulary,
            chart,
            sessions: ListeningSessions::new(),
        }
    }

    pub fn chart(&self) -> &Arc<ChartSession> {
        &self.chart
    }

    pub fn sessions(&self) -> &ListeningSessions {
        &self.sessions
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Process one utterance delivered for `session`.
    pub async fn handle(&self, session: SessionId, utterance: &Utterance) -> PipelineOutcome {
        if !utterance.is_final || !self.sessions.is_listening(session) {
            debug!(session = %session, is_final = utterance.is_final, "utterance ignored");
            return PipelineOutcome::Ignored;
        }

        info!(
            session = %session,
            recognizer_confidence = utterance.confidence,
            "interpreting utterance"
        );

        let interpreted = self
            .interpreter
            .interpret(&utterance.transcript, &self.vocabulary)
            .await;
        let command = validate(&interpreted, &self.vocabulary);

        if !self.sessions.is_current(session) {
            info!(session = %session, "discarding result of ended session");
            return PipelineOutcome::Stale { session, command };
        }

        match to_chart_command(&command, &self.vocabulary) {
            Ok(chart_command) => {
                let chart = self.chart.apply(&chart_command);
                PipelineOutcome::Applied { command, chart }
            }
            Err(_) => {
                warn!(message = %command.message, "command rejected");
                PipelineOutcome::Rejected { command }
            }
        }
    }

    /// Handle utterances in arrival order until the source closes or the
    /// outcome receiver is dropped.
    pub async fn run(
        &self,
        session: SessionId,
        mut utterances: mpsc::Receiver<Utterance>,
        outcomes: mpsc::Sender<PipelineOutcome>,
    ) {
        while let Some(utterance) = utterances.recv().await {
            let outcome = self.handle(session, &utterance).await;
            if outcomes.send(outcome).await.is_err() {
                debug!(session = %session, "outcome receiver dropped");
                break;
            }
        }
    }
}
