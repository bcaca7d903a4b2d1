//! Turning a strategy's raw command into the command that is submitted.
//!
//! Evaluation failures are recovered here: the tick's command is replaced by
//! an inert one and the failure is logged. The control loop never sees them.

use tracing::{debug, warn};
use wizard_command::{Command, CommandError};
use wizard_model::UnitId;

use crate::context::TickContext;

/// How a tick's command was finalized.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The strategy's command passed evaluation.
    Accepted,
    /// The strategy's command failed evaluation and an inert one was used.
    Substituted(CommandError),
}

/// A command ready for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Finalized {
    /// The normalized command, or the inert substitute.
    pub command: Command,
    /// Whether the strategy's command was kept or replaced.
    pub outcome: Outcome,
    /// Where a status spell will land, when the action is one.
    pub status_target: Option<UnitId>,
}

/// Finalize a strategy's command for the given tick.
///
/// 1. Messages from a wizard that is not the master are dropped.
/// 2. Numeric fields are normalized against the tick's limits.
/// 3. Messages are checked against the faction roster.
///
/// A failure in step 2 or 3 substitutes an inert command.
#[must_use]
pub fn finalize(ctx: &TickContext, mut command: Command) -> Finalized {
    if !command.is_eligible_to_message(ctx.is_master) && command.messages().is_some() {
        debug!(
            tick_id = ctx.tick_id,
            wizard_id = ctx.wizard_id.id(),
            "dropping messages from non-master wizard"
        );
        command.clear_messages();
    }

    let checked = command
        .normalize_in_place(&ctx.limits)
        .and_then(|()| command.validate_messages(&ctx.recipients()).map(|_| ()));

    if let Err(error) = checked {
        warn!(
            tick_id = ctx.tick_id,
            wizard_id = ctx.wizard_id.id(),
            %error,
            "command rejected, submitting inert command"
        );
        return Finalized {
            command: Command::inert(),
            outcome: Outcome::Substituted(error),
            status_target: None,
        };
    }

    let status_target = command
        .action()
        .is_status()
        .then(|| command.resolve_status_target(&ctx.status_candidates(), ctx.wizard_id));
    if let Some(target) = status_target {
        debug!(
            tick_id = ctx.tick_id,
            wizard_id = ctx.wizard_id.id(),
            target = target.id(),
            "status spell target resolved"
        );
    }

    Finalized {
        command,
        outcome: Outcome::Accepted,
        status_target,
    }
}
