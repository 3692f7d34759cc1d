//! Interpretation providers.
//!
//! A provider turns an [`InterpretationRequest`] into a raw
//! [`StructuredCommand`]. Providers report failures as [`ProviderError`];
//! turning those into user-facing `unknown` commands is the interpreter's job.

pub mod bedrock;
pub mod http;

use async_trait::async_trait;
use odonto_core::models::command::{InterpretationRequest, StructuredCommand};

use crate::error::ProviderError;

pub use bedrock::BedrockProvider;
pub use http::HttpProvider;

#[async_trait]
pub trait InterpretationProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn interpret(
        &self,
        request: &InterpretationRequest,
    ) -> Result<StructuredCommand, ProviderError>;
}
