//! The chart reducer.
//!
//! Every new version of a [`ChartState`] is produced here from the previous
//! version and one command. Inputs are never mutated; the caller receives a
//! fresh state and decides when to publish and persist it.
//!
//! The reducer trusts its input: commands must have passed
//! [`crate::validate`] first.

use std::collections::BTreeSet;

use crate::models::chart::{ChartState, ToothState};
use crate::models::command::{ChartAction, ChartCommand, StructuredCommand};
use crate::models::procedure::{ProcedureRecord, ProcedureStatus};
use crate::models::surface::Surface;
use crate::models::treatment::Treatment;

/// Apply a structured command.
///
/// Non-actionable commands leave the chart untouched and return an equal
/// state.
pub fn apply(state: &ChartState, cmd: &StructuredCommand, now: jiff::Timestamp) -> ChartState {
    match ChartCommand::try_from(cmd) {
        Ok(command) => apply_command(state, &command, now),
        Err(_) => state.clone(),
    }
}

/// Apply a typed command. `now` stamps any record the command touches.
pub fn apply_command(
    state: &ChartState,
    command: &ChartCommand,
    now: jiff::Timestamp,
) -> ChartState {
    let mut next = state.clone();
    let targets = command.target_surfaces();

    match command.action {
        ChartAction::Apply { status } => {
            let tooth = next
                .teeth
                .entry(command.tooth)
                .or_insert_with(|| ToothState::new(command.tooth));
            merge_surfaces(
                &mut tooth.procedures,
                command.treatment,
                status,
                &targets,
                now,
            );
        }
        ChartAction::Remove => {
            // Teeth are created only by an apply.
            if let Some(tooth) = next.teeth.get_mut(&command.tooth) {
                remove_surfaces(&mut tooth.procedures, command.treatment, &targets);
            }
        }
        ChartAction::ChangeStatus { to } => {
            if let Some(tooth) = next.teeth.get_mut(&command.tooth) {
                change_status(&mut tooth.procedures, command.treatment, to, &targets, now);
            }
        }
    }

    next
}

/// Union `surfaces` into the `(treatment, status)` record, creating it if
/// the tooth has none.
fn merge_surfaces(
    procedures: &mut Vec<ProcedureRecord>,
    treatment: Treatment,
    status: ProcedureStatus,
    surfaces: &BTreeSet<Surface>,
    now: jiff::Timestamp,
) {
    match procedures
        .iter_mut()
        .find(|r| r.treatment == treatment && r.status == status)
    {
        Some(record) => {
            record.segments.extend(surfaces.iter().copied());
            record.applied_at = now;
        }
        None => procedures.push(ProcedureRecord {
            treatment,
            status,
            segments: surfaces.clone(),
            applied_at: now,
        }),
    }
}

fn remove_surfaces(
    procedures: &mut Vec<ProcedureRecord>,
    treatment: Treatment,
    surfaces: &BTreeSet<Surface>,
) {
    for record in procedures.iter_mut().filter(|r| r.treatment == treatment) {
        record.segments.retain(|s| !surfaces.contains(s));
    }
    procedures.retain(|r| !r.segments.is_empty());
}

/// Move the targeted surfaces of every `treatment` record under another
/// status to `to`.
///
/// A record covered entirely keeps its place in the list and only changes
/// status, unless a `(treatment, to)` record already exists, in which case
/// its surfaces are merged there. Partially covered records are split.
fn change_status(
    procedures: &mut Vec<ProcedureRecord>,
    treatment: Treatment,
    to: ProcedureStatus,
    surfaces: &BTreeSet<Surface>,
    now: jiff::Timestamp,
) {
    let mut target_exists = procedures
        .iter()
        .any(|r| r.treatment == treatment && r.status == to);
    let mut moved = BTreeSet::new();

    for record in procedures
        .iter_mut()
        .filter(|r| r.treatment == treatment && r.status != to)
    {
        let hit: BTreeSet<Surface> = record.segments.intersection(surfaces).copied().collect();
        if hit.is_empty() {
            continue;
        }

        if hit == record.segments && !target_exists {
            record.status = to;
            record.applied_at = now;
            target_exists = true;
            continue;
        }

        record.segments.retain(|s| !hit.contains(s));
        moved.extend(hit);
    }

    procedures.retain(|r| !r.segments.is_empty());

    if !moved.is_empty() {
        merge_surfaces(procedures, treatment, to, &moved, now);
    }
}
