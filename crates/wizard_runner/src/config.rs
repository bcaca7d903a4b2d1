//! Agent configuration.

use std::time::Duration;

use wizard_model::{GameRules, UnitId};

/// Time a strategy has to produce its command before an inert one is sent
/// instead.
pub const DEFAULT_TICK_DEADLINE: Duration = Duration::from_millis(20);

/// Configuration for an agent process.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Human-readable strategy name (e.g. `"walker"`).
    pub name: String,
    /// The wizard this agent controls.
    pub wizard_id: UnitId,
    /// Optional NATS URL override (defaults to `NATS_URL` env or localhost).
    pub nats_url: Option<String>,
    /// Per-tick budget for the strategy.
    pub tick_deadline: Duration,
    /// Host constants used when a tick does not carry its own.
    pub rules: GameRules,
}

impl RunnerConfig {
    /// Create a new config for the given strategy name and wizard.
    #[must_use]
    pub fn new(name: impl Into<String>, wizard_id: UnitId) -> Self {
        Self {
            name: name.into(),
            wizard_id,
            nats_url: None,
            tick_deadline: DEFAULT_TICK_DEADLINE,
            rules: GameRules::default(),
        }
    }

    /// Override the NATS URL.
    #[must_use]
    pub fn with_nats_url(mut self, url: impl Into<String>) -> Self {
        self.nats_url = Some(url.into());
        self
    }

    /// Override the per-tick deadline.
    #[must_use]
    pub fn with_tick_deadline(mut self, deadline: Duration) -> Self {
        self.tick_deadline = deadline;
        self
    }

    /// Override the fallback host constants.
    #[must_use]
    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }
}
