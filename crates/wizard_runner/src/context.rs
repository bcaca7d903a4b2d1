//! Per-tick context provided to strategies.

use std::collections::BTreeSet;

use wizard_model::{FactionRoster, GameRules, MoveLimits, UnitId};
use wizard_net::messages::AgentTick;

/// What a strategy knows about its own wizard when deciding a command.
///
/// The context carries the externally determined state a command is
/// evaluated against; the command itself never queries anything.
#[derive(Debug, Clone)]
pub struct TickContext {
    /// The current tick ID.
    pub tick_id: u64,
    /// The wizard being controlled.
    pub wizard_id: UnitId,
    /// Whether the wizard is its faction's master.
    pub is_master: bool,
    /// Limits the command will be clamped against this tick.
    pub limits: MoveLimits,
    /// The wizard's faction, the wizard included.
    pub roster: FactionRoster,
}

impl TickContext {
    /// Create a context with default limits and an empty roster.
    #[must_use]
    pub fn new(tick_id: u64, wizard_id: UnitId) -> Self {
        Self {
            tick_id,
            wizard_id,
            is_master: false,
            limits: MoveLimits::default(),
            roster: FactionRoster::default(),
        }
    }

    /// Build the context for a tick received from the host.
    #[must_use]
    pub fn from_agent_tick(tick: &AgentTick, fallback_rules: &GameRules) -> Self {
        Self {
            tick_id: tick.tick_id,
            wizard_id: tick.wizard_id,
            is_master: tick.is_master,
            limits: tick.limits(fallback_rules),
            roster: tick.roster.clone(),
        }
    }

    /// Message recipients, in the order messages must be listed.
    #[must_use]
    pub fn recipients(&self) -> Vec<UnitId> {
        self.roster.recipients_excluding(self.wizard_id)
    }

    /// Living teammates a status spell may target.
    #[must_use]
    pub fn status_candidates(&self) -> BTreeSet<UnitId> {
        self.roster.living_ids()
    }
}

#[cfg(test)]
mod tests {
    use wizard_model::{MoveModifiers, Teammate};

    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = TickContext::new(1, UnitId(4));
        assert_eq!(ctx.tick_id, 1);
        assert!(!ctx.is_master);
        assert!(ctx.recipients().is_empty());
        assert_eq!(ctx.limits, MoveLimits::default());
    }

    #[test]
    fn test_from_agent_tick() {
        let tick = AgentTick {
            tick_id: 9,
            wizard_id: UnitId(4),
            is_master: true,
            modifiers: MoveModifiers {
                hastened: true,
                movement_bonus_levels: 0,
            },
            roster: FactionRoster::new([Teammate::alive(4), Teammate::dead(1), Teammate::alive(8)]),
            rules: None,
        };
        let rules = GameRules::default();
        let ctx = TickContext::from_agent_tick(&tick, &rules);

        assert_eq!(ctx.tick_id, 9);
        assert!(ctx.is_master);
        assert_eq!(ctx.recipients(), vec![UnitId(1), UnitId(8)]);
        assert_eq!(
            ctx.status_candidates().into_iter().collect::<Vec<_>>(),
            vec![UnitId(4), UnitId(8)]
        );
        assert!(ctx.limits.max_turn > rules.wizard_max_turn_angle);
    }
}
