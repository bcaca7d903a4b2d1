//! NATS subject hierarchy.
//!
//! All subjects are prefixed with `wizards.` to namespace within a shared
//! NATS cluster.

/// Finished commands. Agents → Host.
pub const COMMAND_SUBMIT: &str = "wizards.command";

/// Build the subject on which the host publishes per-tick context for one
/// wizard.
///
/// `wizards.tick.<wizard_id>`
#[must_use]
pub fn agent_tick(wizard_id: u64) -> String {
    format!("wizards.tick.{wizard_id}")
}

/// Build the queue group name for the agent processes driving one wizard.
///
/// `q.wizard.<wizard_id>`
#[must_use]
pub fn queue_group(wizard_id: u64) -> String {
    format!("q.wizard.{wizard_id}")
}
