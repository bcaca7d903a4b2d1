//! Idle wizard — a minimal strategy wired into the agent harness.
//!
//! The wizard walks forward at full speed, throws a magic missile every
//! [`CAST_INTERVAL`] ticks and, when it is the faction's master, sends every
//! teammate a lane assignment.
//!
//! The controlled wizard id is read from `WIZARD_ID` (default `1`).

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wizard_command::Command;
use wizard_model::{ActionType, LaneType, Message, UnitId};
use wizard_runner::{RunnerConfig, Strategy, StrategyRunner, TickContext};

/// Ticks between two casts.
const CAST_INTERVAL: u64 = 60;

const LANES: [LaneType; 3] = [LaneType::Top, LaneType::Middle, LaneType::Bottom];

#[derive(Debug, Default)]
struct IdleWizard {
    last_cast: Option<u64>,
}

impl Strategy for IdleWizard {
    fn decide(&mut self, ctx: &TickContext, command: &mut Command) {
        command.set_speed(ctx.limits.max_forward);

        let ready = self
            .last_cast
            .is_none_or(|tick| ctx.tick_id.saturating_sub(tick) >= CAST_INTERVAL);
        if ready {
            command
                .set_action(ActionType::MagicMissile)
                .set_cast_angle(0.0);
            self.last_cast = Some(ctx.tick_id);
        }

        if ctx.is_master {
            let messages = ctx
                .recipients()
                .iter()
                .enumerate()
                .map(|(i, _)| Some(Message::lane(LANES[i % LANES.len()])))
                .collect();
            command.set_messages(messages);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("idle_wizard=info".parse()?),
        )
        .init();

    let wizard_id = match std::env::var("WIZARD_ID") {
        Ok(raw) => raw.parse::<u64>().context("WIZARD_ID must be a non-negative integer")?,
        Err(_) => 1,
    };

    let config = RunnerConfig::new("idle", UnitId(wizard_id));
    let runner = StrategyRunner::new(config);
    info!(wizard_id, "idle wizard starting");

    runner.run(IdleWizard::default()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use wizard_model::{FactionRoster, MoveLimits, Teammate};

    use super::*;

    fn ctx(tick_id: u64) -> TickContext {
        TickContext {
            tick_id,
            wizard_id: UnitId(1),
            is_master: false,
            limits: MoveLimits::default(),
            roster: FactionRoster::new([Teammate::alive(1)]),
        }
    }

    fn decide(wizard: &mut IdleWizard, tick_id: u64) -> Command {
        let mut command = Command::new();
        wizard.decide(&ctx(tick_id), &mut command);
        command
    }

    #[test]
    fn test_casts_every_interval() {
        let mut wizard = IdleWizard::default();
        assert_eq!(decide(&mut wizard, 10).action(), ActionType::MagicMissile);
        assert_eq!(decide(&mut wizard, 11).action(), ActionType::None);
        assert_eq!(
            decide(&mut wizard, 10 + CAST_INTERVAL).action(),
            ActionType::MagicMissile
        );
    }

    #[test]
    fn test_cast_near_tick_limit() {
        let mut wizard = IdleWizard {
            last_cast: Some(u64::MAX - 1),
        };
        assert_eq!(decide(&mut wizard, u64::MAX).action(), ActionType::None);

        // A tick counter that went backwards does not cast either.
        assert_eq!(decide(&mut wizard, 0).action(), ActionType::None);
    }
}
