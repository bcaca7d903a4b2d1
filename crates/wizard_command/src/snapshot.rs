//! Read-only view of a finished command.

use wizard_model::{ActionType, Message, SkillType, UnitId};

use crate::command::Command;

/// A by-value copy of every field of a [`Command`], handed to transport once
/// the tick's command is final.
///
/// The snapshot owns its data. Mutating the command afterwards does not
/// affect it, and nothing done to the snapshot reaches the command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSnapshot {
    /// Forward speed.
    pub speed: f64,
    /// Lateral speed.
    pub strafe_speed: f64,
    /// Turn in radians.
    pub turn: f64,
    /// Action to perform this tick.
    pub action: ActionType,
    /// Cast direction relative to facing, in radians.
    pub cast_angle: f64,
    /// Nearest distance a projectile may hit at.
    pub min_cast_distance: f64,
    /// Farthest distance a projectile may travel.
    pub max_cast_distance: f64,
    /// `None` is sent as the `-1` sentinel.
    pub status_target: Option<UnitId>,
    /// Skill to learn, if any.
    pub skill_to_learn: Option<SkillType>,
    /// `None` means "not set", which is distinct from an empty sequence.
    pub messages: Option<Vec<Option<Message>>>,
}

impl CommandSnapshot {
    /// Rebuild a command holding exactly these values.
    #[must_use]
    pub fn into_command(self) -> Command {
        Command {
            speed: self.speed,
            strafe_speed: self.strafe_speed,
            turn: self.turn,
            action: self.action,
            cast_angle: self.cast_angle,
            min_cast_distance: self.min_cast_distance,
            max_cast_distance: self.max_cast_distance,
            status_target: self.status_target,
            skill_to_learn: self.skill_to_learn,
            messages: self.messages,
        }
    }
}

impl Command {
    /// Copy every field into a [`CommandSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> CommandSnapshot {
        CommandSnapshot {
            speed: self.speed,
            strafe_speed: self.strafe_speed,
            turn: self.turn,
            action: self.action,
            cast_angle: self.cast_angle,
            min_cast_distance: self.min_cast_distance,
            max_cast_distance: self.max_cast_distance,
            status_target: self.status_target,
            skill_to_learn: self.skill_to_learn,
            messages: self.messages.clone(),
        }
    }
}

impl From<&Command> for CommandSnapshot {
    fn from(command: &Command) -> Self {
        command.snapshot()
    }
}

impl From<CommandSnapshot> for Command {
    fn from(snapshot: CommandSnapshot) -> Self {
        snapshot.into_command()
    }
}

#[cfg(test)]
mod tests {
    use wizard_model::LaneType;

    use super::*;

    #[test]
    fn test_snapshot_copies_every_field() {
        let mut command = Command::new();
        command
            .set_speed(1.0)
            .set_strafe_speed(-2.0)
            .set_turn(0.5)
            .set_action(ActionType::Shield)
            .set_cast_angle(0.25)
            .set_min_cast_distance(10.0)
            .set_max_cast_distance(400.0)
            .set_status_target(Some(UnitId(4)))
            .set_skill_to_learn(Some(SkillType::Shield))
            .set_messages(vec![Some(Message::lane(LaneType::Middle)), None]);

        let snapshot = command.snapshot();
        assert_eq!(snapshot.speed, 1.0);
        assert_eq!(snapshot.strafe_speed, -2.0);
        assert_eq!(snapshot.turn, 0.5);
        assert_eq!(snapshot.action, ActionType::Shield);
        assert_eq!(snapshot.cast_angle, 0.25);
        assert_eq!(snapshot.min_cast_distance, 10.0);
        assert_eq!(snapshot.max_cast_distance, 400.0);
        assert_eq!(snapshot.status_target, Some(UnitId(4)));
        assert_eq!(snapshot.skill_to_learn, Some(SkillType::Shield));
        assert_eq!(snapshot.messages.as_ref().map(Vec::len), Some(2));
        assert_eq!(snapshot.into_command(), command);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut command = Command::new();
        command.set_messages(vec![None]);
        let mut snapshot = command.snapshot();

        command.clear_messages().set_speed(3.0);
        assert_eq!(snapshot.messages, Some(vec![None]));
        assert_eq!(snapshot.speed, 0.0);

        snapshot.messages = Some(vec![Some(Message::default())]);
        assert!(command.messages().is_none());
    }

    #[test]
    fn test_inert_snapshot_keeps_defaults() {
        let snapshot = CommandSnapshot::from(&Command::inert());
        assert_eq!(snapshot.status_target, None);
        assert_eq!(snapshot.skill_to_learn, None);
        assert_eq!(snapshot.messages, None);
        assert_eq!(snapshot.max_cast_distance, 10_000.0);
        assert!(Command::from(snapshot).is_inert());
    }
}
