//! Strategy runner — the main harness for running a strategy as a process.
//!
//! The runner handles NATS connection, the tick subscription, and the
//! per-tick receive/decide/finalize/submit loop.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use futures::StreamExt;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use wizard_command::Command;
use wizard_net::messages::{AgentTick, CommandSubmission};
use wizard_net::{NatsConnection, NetError, WireCommand};

use crate::config::RunnerConfig;
use crate::context::TickContext;
use crate::finalize::finalize;
use crate::strategy::Strategy;

/// Turns a [`Strategy`] into a NATS-connected agent process.
///
/// Call [`StrategyRunner::run`] to start the agent lifecycle.
#[derive(Debug)]
pub struct StrategyRunner {
    config: RunnerConfig,
    /// Unique instance identifier for this process.
    instance_id: String,
}

impl StrategyRunner {
    /// Create a new strategy runner.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        let instance_id = Uuid::new_v4().to_string();
        Self {
            config,
            instance_id,
        }
    }

    /// Returns the unique instance ID for this runner.
    #[must_use]
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Returns the strategy name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Produce the submission for one tick.
    ///
    /// The strategy gets a fresh inert command and runs on the blocking
    /// pool. If the finalized command is not ready within
    /// [`RunnerConfig::tick_deadline`], or cannot be put on the wire, an
    /// inert command is submitted instead. A strategy that overruns keeps
    /// running and holds its lock, so later ticks wait for it.
    ///
    /// # Errors
    ///
    /// Returns [`NetError`] only if even the inert command cannot be encoded.
    pub async fn process_tick<S: Strategy + 'static>(
        &self,
        strategy: &Arc<Mutex<S>>,
        tick: &AgentTick,
    ) -> Result<CommandSubmission, NetError> {
        let ctx = TickContext::from_agent_tick(tick, &self.config.rules);

        let worker = Arc::clone(strategy);
        let worker_ctx = ctx.clone();
        let decision = tokio::task::spawn_blocking(move || {
            let mut strategy = worker.lock().unwrap_or_else(PoisonError::into_inner);
            let mut command = Command::new();
            strategy.decide(&worker_ctx, &mut command);
            finalize(&worker_ctx, command)
        });

        let command = match timeout(self.config.tick_deadline, decision).await {
            Ok(Ok(finalized)) => finalized.command,
            Ok(Err(error)) => {
                warn!(
                    tick_id = ctx.tick_id,
                    wizard_id = ctx.wizard_id.id(),
                    %error,
                    "strategy failed, submitting inert command"
                );
                Command::inert()
            }
            Err(_) => {
                let deadline_ms = u64::try_from(self.config.tick_deadline.as_millis())
                    .unwrap_or(u64::MAX);
                warn!(
                    tick_id = ctx.tick_id,
                    wizard_id = ctx.wizard_id.id(),
                    deadline_ms,
                    "tick deadline missed, submitting inert command"
                );
                Command::inert()
            }
        };

        let wire = match WireCommand::try_from(&command.snapshot()) {
            Ok(wire) => wire,
            Err(error) => {
                warn!(
                    tick_id = ctx.tick_id,
                    wizard_id = ctx.wizard_id.id(),
                    %error,
                    "command not encodable, submitting inert command"
                );
                WireCommand::try_from(&Command::inert().snapshot())?
            }
        };

        Ok(CommandSubmission {
            tick_id: ctx.tick_id,
            wizard_id: ctx.wizard_id,
            instance_id: self.instance_id.clone(),
            command: wire,
        })
    }

    /// Run the agent lifecycle.
    ///
    /// 1. Connect to NATS.
    /// 2. Subscribe to this wizard's tick subject.
    /// 3. Loop: receive tick → decide → finalize → submit.
    ///
    /// Tick payloads that cannot be decoded are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the NATS connection, subscription or a publish
    /// fails.
    pub async fn run<S: Strategy + 'static>(self, strategy: S) -> Result<()> {
        info!(
            strategy = self.config.name,
            wizard_id = self.config.wizard_id.id(),
            instance_id = self.instance_id,
            "agent starting"
        );

        let conn = match self.config.nats_url.as_deref() {
            Some(url) => NatsConnection::connect_to(url).await?,
            None => NatsConnection::connect().await?,
        };

        let mut ticks = conn.subscribe_ticks(self.config.wizard_id).await?;
        let strategy = Arc::new(Mutex::new(strategy));

        while let Some(message) = ticks.next().await {
            let tick: AgentTick = match wizard_net::decode(message.payload.as_ref()) {
                Ok(tick) => tick,
                Err(error) => {
                    warn!(%error, "skipping undecodable tick");
                    continue;
                }
            };

            if tick.wizard_id != self.config.wizard_id {
                warn!(
                    expected = self.config.wizard_id.id(),
                    received = tick.wizard_id.id(),
                    "skipping tick addressed to another wizard"
                );
                continue;
            }

            let submission = self.process_tick(&strategy, &tick).await?;
            conn.submit_command(&submission).await?;
            debug!(tick_id = tick.tick_id, "tick complete");
        }

        info!(strategy = self.config.name, "tick stream closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use wizard_command::CommandSnapshot;
    use wizard_model::{
        ActionType, FactionRoster, GameRules, LaneType, Message, MoveModifiers, Teammate, UnitId,
    };
    use wizard_net::NO_TARGET;

    use super::*;

    fn runner() -> StrategyRunner {
        StrategyRunner::new(
            RunnerConfig::new("test", UnitId(1)).with_tick_deadline(Duration::from_secs(5)),
        )
    }

    fn tick(is_master: bool) -> AgentTick {
        AgentTick {
            tick_id: 11,
            wizard_id: UnitId(1),
            is_master,
            modifiers: MoveModifiers::default(),
            roster: FactionRoster::new([Teammate::alive(1), Teammate::alive(2), Teammate::dead(3)]),
            rules: None,
        }
    }

    fn shared<S: Strategy>(strategy: S) -> Arc<Mutex<S>> {
        Arc::new(Mutex::new(strategy))
    }

    fn assert_inert(submission: &CommandSubmission) {
        assert_eq!(submission.command.speed, 0.0);
        assert_eq!(submission.command.status_target_id, NO_TARGET);
    }

    /// Counts its calls and sleeps on the first one.
    struct SlowStart {
        calls: u32,
        first_delay: Duration,
    }

    impl Strategy for SlowStart {
        fn decide(&mut self, _ctx: &TickContext, command: &mut Command) {
            self.calls += 1;
            if self.calls == 1 {
                std::thread::sleep(self.first_delay);
            }
            command.set_speed(f64::from(self.calls));
        }
    }

    #[test]
    fn test_runner_creation() {
        let runner = runner();
        assert_eq!(runner.name(), "test");
        assert!(!runner.instance_id().is_empty());
    }

    #[tokio::test]
    async fn test_process_tick_submits_normalized_command() {
        let runner = runner();
        let strategy = shared(|_ctx: &TickContext, command: &mut Command| {
            command
                .set_speed(100.0)
                .set_action(ActionType::Haste)
                .set_status_target(Some(UnitId(2)));
        });

        let submission = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        assert_eq!(submission.tick_id, 11);
        assert_eq!(submission.wizard_id, UnitId(1));
        assert_eq!(submission.instance_id, runner.instance_id());
        assert_eq!(submission.command.speed, 4.0);
        assert_eq!(submission.command.status_target_id, 2);
    }

    #[tokio::test]
    async fn test_process_tick_uses_configured_rules() {
        let rules = GameRules {
            wizard_forward_speed: 2.0,
            ..GameRules::default()
        };
        let runner = StrategyRunner::new(
            RunnerConfig::new("test", UnitId(1))
                .with_tick_deadline(Duration::from_secs(5))
                .with_rules(rules),
        );
        let strategy = shared(|_ctx: &TickContext, command: &mut Command| {
            command.set_speed(100.0);
        });

        let submission = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        assert_eq!(submission.command.speed, 2.0);
    }

    #[tokio::test]
    async fn test_process_tick_master_messages() {
        let runner = runner();
        let strategy = shared(|ctx: &TickContext, command: &mut Command| {
            let messages = ctx
                .recipients()
                .iter()
                .map(|_| Some(Message::lane(LaneType::Middle)))
                .collect();
            command.set_messages(messages);
        });

        let submission = runner.process_tick(&strategy, &tick(true)).await.unwrap();
        assert_eq!(submission.command.messages.map(|m| m.len()), Some(2));
    }

    #[tokio::test]
    async fn test_process_tick_rejected_command_is_inert() {
        let runner = runner();
        let strategy = shared(|_ctx: &TickContext, command: &mut Command| {
            command.set_turn(f64::INFINITY);
        });

        let submission = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        let command = CommandSnapshot::from(submission.command).into_command();
        assert!(command.is_inert());
    }

    #[tokio::test]
    async fn test_process_tick_inert_command_is_ready_at_deadline() {
        let runner = StrategyRunner::new(
            RunnerConfig::new("slow", UnitId(1)).with_tick_deadline(Duration::from_millis(20)),
        );
        let strategy = shared(|_ctx: &TickContext, command: &mut Command| {
            std::thread::sleep(Duration::from_millis(500));
            command.set_speed(2.0);
        });

        let started = Instant::now();
        let submission = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        let elapsed = started.elapsed();

        assert_inert(&submission);
        assert!(
            elapsed < Duration::from_millis(250),
            "ready after {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_overrunning_strategy_is_kept_for_later_ticks() {
        let runner = StrategyRunner::new(
            RunnerConfig::new("slow", UnitId(1)).with_tick_deadline(Duration::from_millis(50)),
        );
        let strategy = shared(SlowStart {
            calls: 0,
            first_delay: Duration::from_millis(150),
        });

        let first = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        assert_inert(&first);

        tokio::time::sleep(Duration::from_millis(400)).await;
        let second = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        assert_eq!(second.command.speed, 2.0);
    }

    #[tokio::test]
    async fn test_panicking_strategy_submits_inert() {
        let runner = runner();
        let strategy = shared(|_ctx: &TickContext, _command: &mut Command| {
            panic!("strategy bug");
        });

        let submission = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        assert_inert(&submission);
    }

    #[tokio::test]
    async fn test_process_tick_unencodable_target_is_inert() {
        let runner = runner();
        let strategy = shared(|_ctx: &TickContext, command: &mut Command| {
            command
                .set_speed(1.0)
                .set_status_target(Some(UnitId(u64::MAX)));
        });

        let submission = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        assert_inert(&submission);
    }

    #[tokio::test]
    async fn test_strategy_state_persists_across_ticks() {
        let runner = runner();
        let mut calls = 0u32;
        let strategy = shared(move |_ctx: &TickContext, command: &mut Command| {
            calls += 1;
            command.set_speed(f64::from(calls));
        });

        runner.process_tick(&strategy, &tick(false)).await.unwrap();
        let second = runner.process_tick(&strategy, &tick(false)).await.unwrap();
        assert_eq!(second.command.speed, 2.0);
    }
}
