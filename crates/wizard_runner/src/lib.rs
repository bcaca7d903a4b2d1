//! # wizard_runner
//!
//! Agent harness for wizard strategies. Each agent process:
//!
//! 1. Connects to NATS.
//! 2. Subscribes to the tick subject of the wizard it controls.
//! 3. On each tick: builds a [`TickContext`], hands the strategy a fresh
//!    inert [`Command`](wizard_command::Command), finalizes the result and
//!    submits it to the host.
//!
//! A command that fails evaluation or misses the tick deadline is replaced
//! by an inert one; neither stops the loop.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wizard_command::Command;
//! use wizard_model::UnitId;
//! use wizard_runner::{RunnerConfig, StrategyRunner, TickContext};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = RunnerConfig::new("walker", UnitId(1));
//!     let runner = StrategyRunner::new(config);
//!     // runner.run(|_: &TickContext, cmd: &mut Command| { cmd.set_speed(4.0); }).await.unwrap();
//! }
//! ```

pub mod config;
pub mod context;
pub mod finalize;
pub mod runner;
pub mod strategy;

pub use config::RunnerConfig;
pub use context::TickContext;
pub use finalize::{Finalized, Outcome, finalize};
pub use runner::StrategyRunner;
pub use strategy::Strategy;
