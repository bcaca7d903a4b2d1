//! # wizard_model
//!
//! The vocabulary shared by every wizard crate. Nothing here evaluates a
//! command; these are the value types a command is built from and the
//! externally supplied state it is evaluated against.
//!
//! This crate provides:
//!
//! - [`ActionType`] — the ability a wizard requests for one tick.
//! - [`SkillType`] — skills a wizard may learn between ticks.
//! - [`Message`] and [`LaneType`] — directives a master sends to teammates.
//! - [`UnitId`], [`Teammate`], [`FactionRoster`] — identity and faction membership.
//! - [`GameRules`], [`MoveModifiers`], [`MoveLimits`] — movement limits derived
//!   from host constants and the wizard's current state.

pub mod action;
pub mod limits;
pub mod message;
pub mod roster;
pub mod skill;
pub mod unit;

pub use action::ActionType;
pub use limits::{GameRules, MoveLimits, MoveModifiers};
pub use message::{LaneType, Message};
pub use roster::{FactionRoster, Teammate};
pub use skill::SkillType;
pub use unit::UnitId;
