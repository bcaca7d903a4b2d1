//! # wizard_net
//!
//! Transport boundary between a wizard strategy and the simulation host.
//!
//! This crate provides:
//!
//! - [`wire`] — the field-for-field wire form of a command.
//! - [`messages`] — per-tick payloads exchanged with the host.
//! - [`subjects`] — NATS subject names and builders.
//! - [`codec`] — MessagePack serialisation/deserialisation helpers.
//! - [`connection`] — NATS connection management.
//! - [`error`] — Network-layer error types.

pub mod codec;
pub mod connection;
pub mod error;
pub mod messages;
pub mod subjects;
pub mod wire;

pub use codec::{decode, encode};
pub use connection::NatsConnection;
pub use error::NetError;
pub use wire::{NO_TARGET, WireCommand, decode_command, encode_command};
