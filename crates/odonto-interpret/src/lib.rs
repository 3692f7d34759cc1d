//! odonto-interpret
//!
//! Voice command interpretation: the domain prompt, pluggable interpretation
//! providers (remote HTTP endpoint, Bedrock), the interpreter that turns
//! every failure into an `unknown` command, and the chart session that
//! serializes reconciliation.

pub mod error;
pub mod interpreter;
pub mod messages;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod session;
