#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use odonto_core::models::command::{CommandAction, InterpretationRequest, StructuredCommand};
use odonto_interpret::error::ProviderError;
use odonto_interpret::provider::InterpretationProvider;
use tokio::sync::Notify;

#[derive(Debug, Clone)]
pub enum Reply {
    Command(StructuredCommand),
    RateLimited,
    QuotaExhausted,
    Malformed,
    Hang,
}

/// Answers by transcript; unknown transcripts get an `unknown` command.
#[derive(Default)]
pub struct ScriptedProvider {
    replies: HashMap<String, Reply>,
    calls: AtomicUsize,
    last_request: Mutex<Option<InterpretationRequest>>,
    /// When set, every call waits for a permit before answering.
    gate: Option<Notify>,
    pub started: Notify,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn reply(mut self, transcript: &str, reply: Reply) -> Self {
        self.replies.insert(transcript.to_string(), reply);
        self
    }

    pub fn open_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<InterpretationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl InterpretationProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn interpret(
        &self,
        request: &InterpretationRequest,
    ) -> Result<StructuredCommand, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.started.notify_one();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.replies.get(&request.transcript).cloned() {
            Some(Reply::Command(cmd)) => Ok(cmd),
            Some(Reply::RateLimited) => Err(ProviderError::RateLimited),
            Some(Reply::QuotaExhausted) => Err(ProviderError::QuotaExhausted),
            Some(Reply::Malformed) => Err(ProviderError::MalformedResponse("not json".into())),
            Some(Reply::Hang) => {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(StructuredCommand::unknown("too late"))
            }
            None => Ok(StructuredCommand::unknown("sin coincidencia")),
        }
    }
}

pub fn command(
    action: CommandAction,
    tooth: i32,
    treatment: &str,
    area: Option<&str>,
    status: Option<&str>,
    confidence: f64,
) -> StructuredCommand {
    StructuredCommand {
        action,
        tooth_number: Some(tooth),
        treatment: Some(treatment.to_string()),
        area: area.map(str::to_string),
        status: status.map(str::to_string),
        confidence,
        message: String::new(),
    }
}

/// "Caries en vestibular del diente 15"
pub fn caries_vestibular_15() -> StructuredCommand {
    command(
        CommandAction::ApplyTreatment,
        15,
        "obturacion",
        Some("vestibular"),
        Some("diagnostico"),
        0.92,
    )
}

/// "Obturación realizada en oclusal del 36"
pub fn obturacion_realizada_36() -> StructuredCommand {
    command(
        CommandAction::ApplyTreatment,
        36,
        "obturacion",
        Some("oclusal"),
        Some("realizado"),
        0.88,
    )
}
