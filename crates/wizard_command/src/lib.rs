//! # wizard_command
//!
//! The command a strategy issues to its wizard for one simulation tick.
//!
//! A [`Command`] stores exactly what the strategy requested. Nothing is
//! clamped when a field is set; clamping happens in an explicit evaluation
//! step ([`Command::normalize`]) against limits supplied by the caller, the
//! same way the host evaluates the command on its side.
//!
//! This crate provides:
//!
//! - [`command`] — the [`Command`] value and its accessors.
//! - [`normalize`] — range clamping and the joint speed projection.
//! - [`addressing`] — status target resolution and message delivery.
//! - [`snapshot`] — the read-only [`CommandSnapshot`] handed to transport.
//! - [`error`] — [`CommandError`].
//!
//! ## Usage
//!
//! ```rust
//! use wizard_command::Command;
//! use wizard_model::{ActionType, MoveLimits};
//!
//! let mut command = Command::new();
//! command.set_speed(10.0).set_strafe_speed(10.0).set_action(ActionType::MagicMissile);
//!
//! let normalized = command.normalize(&MoveLimits::symmetric(4.0, 3.0, 0.1, 1.0)).unwrap();
//! assert!(normalized.speed() < 4.0);
//! ```

pub mod addressing;
pub mod command;
pub mod error;
pub mod normalize;
pub mod snapshot;

pub use addressing::Delivery;
pub use command::{Command, DEFAULT_MAX_CAST_DISTANCE};
pub use error::CommandError;
pub use snapshot::CommandSnapshot;
