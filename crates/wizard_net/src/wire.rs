//! Wire form of a command.
//!
//! [`WireCommand`] mirrors [`CommandSnapshot`] field for field. The only
//! difference is the status target, which travels as a signed id with
//! [`NO_TARGET`] standing in for "no explicit target". Optional fields keep
//! the distinction between absent (`nil`) and present-but-empty.

use serde::{Deserialize, Serialize};
use wizard_command::CommandSnapshot;
use wizard_model::{ActionType, Message, SkillType, UnitId};

use crate::codec;
use crate::error::NetError;

/// Wire sentinel for "no explicit status target".
pub const NO_TARGET: i64 = -1;

/// A command as serialised for the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireCommand {
    /// Forward speed.
    pub speed: f64,
    /// Lateral speed.
    pub strafe_speed: f64,
    /// Turn in radians.
    pub turn: f64,
    /// Action to perform.
    pub action: ActionType,
    /// Cast direction relative to facing, in radians.
    pub cast_angle: f64,
    /// Nearest projectile hit distance.
    pub min_cast_distance: f64,
    /// Farthest projectile travel distance.
    pub max_cast_distance: f64,
    /// Target id, or [`NO_TARGET`]. Any negative id decodes as no target.
    pub status_target_id: i64,
    /// Skill to learn, if any.
    pub skill_to_learn: Option<SkillType>,
    /// Per-recipient messages; absent and empty stay distinct.
    pub messages: Option<Vec<Option<Message>>>,
}

impl TryFrom<&CommandSnapshot> for WireCommand {
    type Error = NetError;

    fn try_from(snapshot: &CommandSnapshot) -> Result<Self, Self::Error> {
        let status_target_id = match snapshot.status_target {
            Some(UnitId(id)) => i64::try_from(id).map_err(|_| NetError::UnitIdOutOfRange(id))?,
            None => NO_TARGET,
        };

        Ok(Self {
            speed: snapshot.speed,
            strafe_speed: snapshot.strafe_speed,
            turn: snapshot.turn,
            action: snapshot.action,
            cast_angle: snapshot.cast_angle,
            min_cast_distance: snapshot.min_cast_distance,
            max_cast_distance: snapshot.max_cast_distance,
            status_target_id,
            skill_to_learn: snapshot.skill_to_learn,
            messages: snapshot.messages.clone(),
        })
    }
}

impl From<WireCommand> for CommandSnapshot {
    fn from(wire: WireCommand) -> Self {
        Self {
            speed: wire.speed,
            strafe_speed: wire.strafe_speed,
            turn: wire.turn,
            action: wire.action,
            cast_angle: wire.cast_angle,
            min_cast_distance: wire.min_cast_distance,
            max_cast_distance: wire.max_cast_distance,
            status_target: UnitId::from_signed(wire.status_target_id),
            skill_to_learn: wire.skill_to_learn,
            messages: wire.messages,
        }
    }
}

/// Encode a finished command for the host.
///
/// # Errors
///
/// Returns [`NetError::UnitIdOutOfRange`] if the status target cannot be
/// represented on the wire, or [`NetError::Encode`] if serialisation fails.
pub fn encode_command(snapshot: &CommandSnapshot) -> Result<Vec<u8>, NetError> {
    codec::encode(&WireCommand::try_from(snapshot)?)
}

/// Decode a command received from the wire.
///
/// # Errors
///
/// Returns [`NetError::Decode`] if the bytes are not a valid command.
pub fn decode_command(bytes: &[u8]) -> Result<CommandSnapshot, NetError> {
    let wire: WireCommand = codec::decode(bytes)?;
    Ok(wire.into())
}
