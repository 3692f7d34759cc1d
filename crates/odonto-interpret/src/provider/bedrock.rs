//! Interpretation via the Bedrock Converse API.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use odonto_core::models::command::{InterpretationRequest, StructuredCommand};
use tracing::info;
use uuid::Uuid;

use super::InterpretationProvider;
use crate::error::ProviderError;
use crate::prompt;

/// Sends the domain prompt and the transcript to a Claude model on Bedrock
/// and parses its JSON reply.
pub struct BedrockProvider {
    client: Client,
    model_id: String,
}

impl BedrockProvider {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), model_id)
    }

    pub fn from_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Classify a Converse service error.
pub fn converse_error(err: ConverseError) -> ProviderError {
    if err.is_throttling_exception() {
        ProviderError::RateLimited
    } else if err.is_model_timeout_exception() {
        ProviderError::ModelTimeout(err.to_string())
    } else {
        ProviderError::Invocation(err.to_string())
    }
}

#[async_trait]
impl InterpretationProvider for BedrockProvider {
    fn name(&self) -> &str {
        "bedrock"
    }

    async fn interpret(
        &self,
        request: &InterpretationRequest,
    ) -> Result<StructuredCommand, ProviderError> {
        let request_id = Uuid::new_v4();
        info!(request_id = %request_id, model = %self.model_id, "starting interpretation");

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt::user_message(request)))
            .build()
            .map_err(|e| ProviderError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(prompt::system_prompt()))
            .messages(message)
            .send()
            .await
            .map_err(|e| converse_error(e.into_service_error()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| ProviderError::MalformedResponse("no message in response".to_string()))?;

        let response_text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        let command = prompt::parse_command(&response_text)?;

        info!(
            request_id = %request_id,
            action = ?command.action,
            confidence = command.confidence,
            "interpretation complete"
        );

        Ok(command)
    }
}
