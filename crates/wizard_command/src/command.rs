//! The per-tick [`Command`] value.
//!
//! Setters store the requested value verbatim and never fail. Out-of-range
//! values are clamped only when the command is evaluated (see
//! [`Command::normalize`]), mirroring the host's "ignore and clamp, never
//! fail" handling.

use wizard_model::{ActionType, Message, SkillType, UnitId};

/// Default outer cast radius. Larger than the flight range of any projectile.
pub const DEFAULT_MAX_CAST_DISTANCE: f64 = 10_000.0;

/// Everything a wizard is asked to do during one tick.
///
/// A command is created fresh each tick, mutated by the strategy, evaluated,
/// then handed once to transport as a [`CommandSnapshot`](crate::CommandSnapshot).
/// It carries no state between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub(crate) speed: f64,
    pub(crate) strafe_speed: f64,
    pub(crate) turn: f64,
    pub(crate) action: ActionType,
    pub(crate) cast_angle: f64,
    pub(crate) min_cast_distance: f64,
    pub(crate) max_cast_distance: f64,
    pub(crate) status_target: Option<UnitId>,
    pub(crate) skill_to_learn: Option<SkillType>,
    pub(crate) messages: Option<Vec<Option<Message>>>,
}

impl Command {
    /// Create an inert command: no movement, no action, no target, no skill,
    /// no messages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            speed: 0.0,
            strafe_speed: 0.0,
            turn: 0.0,
            action: ActionType::None,
            cast_angle: 0.0,
            min_cast_distance: 0.0,
            max_cast_distance: DEFAULT_MAX_CAST_DISTANCE,
            status_target: None,
            skill_to_learn: None,
            messages: None,
        }
    }

    /// Alias of [`Command::new`], used where the intent is "submit nothing".
    #[must_use]
    pub fn inert() -> Self {
        Self::new()
    }

    /// Returns `true` if every field still holds its default.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        *self == Self::new()
    }

    // ── Movement ────────────────────────────────────────────────────────────

    /// Requested forward speed. Positive moves forward, negative backward.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Request a forward speed for this tick.
    pub fn set_speed(&mut self, speed: f64) -> &mut Self {
        self.speed = speed;
        self
    }

    /// Requested lateral speed. Positive moves to the right.
    #[must_use]
    pub fn strafe_speed(&self) -> f64 {
        self.strafe_speed
    }

    /// Request a lateral speed for this tick.
    pub fn set_strafe_speed(&mut self, strafe_speed: f64) -> &mut Self {
        self.strafe_speed = strafe_speed;
        self
    }

    /// Requested turn in radians, relative to the current heading. Positive
    /// turns clockwise.
    #[must_use]
    pub fn turn(&self) -> f64 {
        self.turn
    }

    /// Request a turn for this tick.
    pub fn set_turn(&mut self, turn: f64) -> &mut Self {
        self.turn = turn;
        self
    }

    // ── Action ──────────────────────────────────────────────────────────────

    /// Requested action.
    #[must_use]
    pub fn action(&self) -> ActionType {
        self.action
    }

    /// Request an action for this tick.
    pub fn set_action(&mut self, action: ActionType) -> &mut Self {
        self.action = action;
        self
    }

    /// Requested cast angle in radians, relative to the current heading.
    #[must_use]
    pub fn cast_angle(&self) -> f64 {
        self.cast_angle
    }

    /// Request a cast angle. Only projectile actions use it.
    pub fn set_cast_angle(&mut self, cast_angle: f64) -> &mut Self {
        self.cast_angle = cast_angle;
        self
    }

    /// Inner radius within which a projectile passes through everything but
    /// trees.
    #[must_use]
    pub fn min_cast_distance(&self) -> f64 {
        self.min_cast_distance
    }

    /// Set the inner cast radius. Only projectile actions use it.
    pub fn set_min_cast_distance(&mut self, distance: f64) -> &mut Self {
        self.min_cast_distance = distance;
        self
    }

    /// Outer radius at which a projectile is removed (a fireball detonates).
    #[must_use]
    pub fn max_cast_distance(&self) -> f64 {
        self.max_cast_distance
    }

    /// Set the outer cast radius. Only projectile actions use it.
    pub fn set_max_cast_distance(&mut self, distance: f64) -> &mut Self {
        self.max_cast_distance = distance;
        self
    }

    /// Requested status spell target, if any.
    #[must_use]
    pub fn status_target(&self) -> Option<UnitId> {
        self.status_target
    }

    /// Request a status spell target. `None` means "no explicit target",
    /// which the host resolves to the caster.
    pub fn set_status_target(&mut self, target: Option<UnitId>) -> &mut Self {
        self.status_target = target;
        self
    }

    /// Request a status spell target from a signed host id. Negative ids,
    /// including the `-1` sentinel, clear the target.
    pub fn set_status_target_raw(&mut self, target: i64) -> &mut Self {
        self.status_target = UnitId::from_signed(target);
        self
    }

    // ── Progression ─────────────────────────────────────────────────────────

    /// Skill selected for learning before the next tick.
    #[must_use]
    pub fn skill_to_learn(&self) -> Option<SkillType> {
        self.skill_to_learn
    }

    /// Select a skill to learn. Ignored by the host if the wizard has no
    /// free skill point or lacks a prerequisite.
    pub fn set_skill_to_learn(&mut self, skill: Option<SkillType>) -> &mut Self {
        self.skill_to_learn = skill;
        self
    }

    // ── Messages ────────────────────────────────────────────────────────────

    /// Messages to teammates in ascending recipient id order, if any were set.
    ///
    /// The slice is borrowed read-only; the stored sequence can only change
    /// through [`Command::set_messages`] or [`Command::clear_messages`].
    #[must_use]
    pub fn messages(&self) -> Option<&[Option<Message>]> {
        self.messages.as_deref()
    }

    /// Set the messages to teammates. The command takes ownership of the
    /// sequence, so no outside reference can alter it afterwards.
    pub fn set_messages(&mut self, messages: Vec<Option<Message>>) -> &mut Self {
        self.messages = Some(messages);
        self
    }

    /// Remove any messages.
    pub fn clear_messages(&mut self) -> &mut Self {
        self.messages = None;
        self
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use wizard_model::LaneType;

    use super::*;

    #[test]
    fn test_new_is_inert() {
        let command = Command::new();
        assert_eq!(command.speed(), 0.0);
        assert_eq!(command.strafe_speed(), 0.0);
        assert_eq!(command.turn(), 0.0);
        assert_eq!(command.action(), ActionType::None);
        assert_eq!(command.cast_angle(), 0.0);
        assert_eq!(command.min_cast_distance(), 0.0);
        assert_eq!(command.max_cast_distance(), DEFAULT_MAX_CAST_DISTANCE);
        assert_eq!(command.status_target(), None);
        assert_eq!(command.skill_to_learn(), None);
        assert!(command.messages().is_none());
        assert!(command.is_inert());
        assert_eq!(Command::default(), Command::inert());
    }

    #[test]
    fn test_setters_store_requested_values_verbatim() {
        let mut command = Command::new();
        command
            .set_speed(1_000.0)
            .set_strafe_speed(-1_000.0)
            .set_turn(42.0)
            .set_cast_angle(-7.5)
            .set_min_cast_distance(-3.0)
            .set_max_cast_distance(-4.0);

        assert_eq!(command.speed(), 1_000.0);
        assert_eq!(command.strafe_speed(), -1_000.0);
        assert_eq!(command.turn(), 42.0);
        assert_eq!(command.cast_angle(), -7.5);
        assert_eq!(command.min_cast_distance(), -3.0);
        assert_eq!(command.max_cast_distance(), -4.0);
        assert!(!command.is_inert());
    }

    #[test]
    fn test_setters_accept_non_finite_values() {
        let mut command = Command::new();
        command.set_speed(f64::NAN).set_turn(f64::INFINITY);
        assert!(command.speed().is_nan());
        assert_eq!(command.turn(), f64::INFINITY);
    }

    #[test]
    fn test_raw_status_target_sentinel() {
        let mut command = Command::new();
        command.set_status_target_raw(9);
        assert_eq!(command.status_target(), Some(UnitId(9)));
        command.set_status_target_raw(-1);
        assert_eq!(command.status_target(), None);
    }

    #[test]
    fn test_messages_are_owned() {
        let mut source = vec![Some(Message::lane(LaneType::Top)), None];
        let mut command = Command::new();
        command.set_messages(source.clone());

        source[0] = Some(Message::lane(LaneType::Bottom));
        source.push(None);

        let stored = command.messages().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0], Some(Message::lane(LaneType::Top)));
        assert_eq!(stored[1], None);
    }

    #[test]
    fn test_clear_messages() {
        let mut command = Command::new();
        command.set_messages(vec![None]).clear_messages();
        assert!(command.messages().is_none());
        assert!(command.is_inert());
    }

    #[test]
    fn test_empty_messages_are_not_absent() {
        let mut command = Command::new();
        command.set_messages(Vec::new());
        assert_eq!(command.messages(), Some(&[][..]));
        assert!(!command.is_inert());
    }
}
