//! Payloads exchanged between the host and a wizard agent each tick.
//!
//! All payloads derive `Serialize` and `Deserialize` for MessagePack
//! transport. Routing metadata (tick-id, instance-id, msg-type) is carried in
//! NATS headers as well as in the payload so the host can route without
//! decoding.

use serde::{Deserialize, Serialize};
use wizard_model::{FactionRoster, GameRules, MoveLimits, MoveModifiers, UnitId};

use crate::wire::WireCommand;

// ── Host → agent ────────────────────────────────────────────────────────────

/// Everything an agent needs from the host to evaluate one tick's command.
/// Published on [`subjects::agent_tick`](crate::subjects::agent_tick).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentTick {
    /// Monotonically increasing tick counter.
    pub tick_id: u64,
    /// The wizard this tick is addressed to.
    pub wizard_id: UnitId,
    /// Whether the wizard is its faction's master and may send messages.
    pub is_master: bool,
    /// Status and skill state that extends the wizard's limits.
    pub modifiers: MoveModifiers,
    /// All members of the wizard's faction, the wizard included.
    pub roster: FactionRoster,
    /// Host constants, when they differ from [`GameRules::default`].
    pub rules: Option<GameRules>,
}

impl AgentTick {
    /// The limits this wizard's command is clamped against, using `fallback`
    /// when the host did not send its own rules.
    #[must_use]
    pub fn limits(&self, fallback: &GameRules) -> MoveLimits {
        MoveLimits::for_wizard(self.rules.as_ref().unwrap_or(fallback), &self.modifiers)
    }
}

// ── Agent → host ────────────────────────────────────────────────────────────

/// A finished command for one tick.
/// Published on [`subjects::COMMAND_SUBMIT`](crate::subjects::COMMAND_SUBMIT).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSubmission {
    /// The tick the command belongs to.
    pub tick_id: u64,
    /// The wizard the command controls.
    pub wizard_id: UnitId,
    /// The agent process that produced it.
    pub instance_id: String,
    /// The command itself.
    pub command: WireCommand,
}

// ── NATS header keys ────────────────────────────────────────────────────────

/// Standard NATS header keys used for routing metadata.
pub mod headers {
    /// The message type (e.g. `"command_submission"`).
    pub const MSG_TYPE: &str = "msg-type";
    /// The tick ID this message belongs to.
    pub const TICK_ID: &str = "tick-id";
    /// The wizard this message concerns.
    pub const WIZARD_ID: &str = "wizard-id";
    /// The instance ID of the sender.
    pub const INSTANCE_ID: &str = "instance-id";
}

/// Header value for a [`CommandSubmission`].
pub const COMMAND_SUBMISSION_MSG_TYPE: &str = "command_submission";
