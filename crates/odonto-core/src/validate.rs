//! Command validation against the active vocabulary.
//!
//! The validator is the only gate between interpretation output and the
//! chart: a command referencing a tooth outside the active dentition or a
//! code outside the closed sets is rewritten to `unknown`, no matter how
//! confident the interpreter was.

use crate::error::ValidationError;
use crate::models::command::{ChartCommand, StructuredCommand};
use crate::vocabulary::Vocabulary;

/// Validate a structured command.
///
/// Valid and already-unknown commands are returned unchanged, so the function
/// is idempotent. Any violation yields an `unknown` command with confidence 0
/// and a message naming the offending field, including a confidence outside
/// `[0, 1]`.
pub fn validate(cmd: &StructuredCommand, vocabulary: &Vocabulary) -> StructuredCommand {
    if !cmd.is_actionable() {
        return cmd.clone();
    }

    match to_chart_command(cmd, vocabulary) {
        Ok(_) => cmd.clone(),
        Err(e) => StructuredCommand::unknown(e.user_message()),
    }
}

/// Convert an actionable command into its typed form, checking every field
/// against `vocabulary`.
pub fn to_chart_command(
    cmd: &StructuredCommand,
    vocabulary: &Vocabulary,
) -> Result<ChartCommand, ValidationError> {
    let command = ChartCommand::try_from(cmd)?;

    if !vocabulary.contains_tooth(command.tooth) {
        return Err(ValidationError::ToothNotInDentition(i32::from(command.tooth)));
    }
    if !vocabulary.contains_treatment(command.treatment) {
        return Err(ValidationError::UnknownTreatment(
            command.treatment.code().to_string(),
        ));
    }

    Ok(command)
}
