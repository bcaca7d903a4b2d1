//! Movement and casting limits.
//!
//! The host clamps every command against limits that depend on state the
//! command itself never sees: learned skills, auras of nearby teammates and
//! the `HASTENED` status. Agent logic gathers that state into
//! [`MoveModifiers`] and derives [`MoveLimits`] from the host's
//! [`GameRules`].

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Host constants that bound a wizard's movement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    /// Base forward speed per tick.
    pub wizard_forward_speed: f64,
    /// Base backward speed per tick (a magnitude).
    pub wizard_backward_speed: f64,
    /// Base lateral speed per tick.
    pub wizard_strafe_speed: f64,
    /// Base turn limit per tick, in radians.
    pub wizard_max_turn_angle: f64,
    /// Full width of the staff sector, in radians.
    pub staff_sector: f64,
    /// Extra movement factor granted by `HASTENED`.
    pub hastened_movement_bonus_factor: f64,
    /// Extra rotation factor granted by `HASTENED`.
    pub hastened_rotation_bonus_factor: f64,
    /// Extra movement factor per learned or received movement skill level.
    pub movement_bonus_factor_per_skill_level: f64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            wizard_forward_speed: 4.0,
            wizard_backward_speed: 3.0,
            wizard_strafe_speed: 3.0,
            wizard_max_turn_angle: PI / 30.0,
            staff_sector: PI / 3.0,
            hastened_movement_bonus_factor: 0.3,
            hastened_rotation_bonus_factor: 1.0,
            movement_bonus_factor_per_skill_level: 0.05,
        }
    }
}

/// State of a wizard that extends its limits this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveModifiers {
    /// Whether the wizard currently has the `HASTENED` status.
    pub hastened: bool,
    /// Movement bonus levels from the wizard's own passive skills plus the
    /// strongest aura of nearby teammates.
    pub movement_bonus_levels: u32,
}

/// Effective limits a command is clamped against for one tick.
///
/// All values are magnitudes. Forward speed is clamped to
/// `[-max_backward, max_forward]`, strafe to `[-max_strafe, max_strafe]`,
/// turn to `[-max_turn, max_turn]` and cast angle to
/// `[-staff_sector / 2, staff_sector / 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveLimits {
    /// Largest forward speed.
    pub max_forward: f64,
    /// Largest backward speed, as a magnitude.
    pub max_backward: f64,
    /// Largest lateral speed in either direction.
    pub max_strafe: f64,
    /// Largest turn in either direction, in radians.
    pub max_turn: f64,
    /// Full width of the sector a cast may leave the staff in, in radians.
    pub staff_sector: f64,
}

impl MoveLimits {
    /// Limits where backward motion is bounded by the forward limit.
    #[must_use]
    pub const fn symmetric(
        max_forward: f64,
        max_strafe: f64,
        max_turn: f64,
        staff_sector: f64,
    ) -> Self {
        Self {
            max_forward,
            max_backward: max_forward,
            max_strafe,
            max_turn,
            staff_sector,
        }
    }

    /// Derive the limits of a wizard from the host constants and its
    /// current modifiers.
    #[must_use]
    pub fn for_wizard(rules: &GameRules, modifiers: &MoveModifiers) -> Self {
        let skill_bonus = f64::from(modifiers.movement_bonus_levels)
            * rules.movement_bonus_factor_per_skill_level;
        let mut speed_factor = 1.0 + skill_bonus;
        let mut turn_factor = 1.0;
        if modifiers.hastened {
            speed_factor += rules.hastened_movement_bonus_factor;
            turn_factor += rules.hastened_rotation_bonus_factor;
        }

        Self {
            max_forward: rules.wizard_forward_speed * speed_factor,
            max_backward: rules.wizard_backward_speed * speed_factor,
            max_strafe: rules.wizard_strafe_speed * speed_factor,
            max_turn: rules.wizard_max_turn_angle * turn_factor,
            staff_sector: rules.staff_sector,
        }
    }

    /// Half of the staff sector, the cast angle bound.
    #[must_use]
    pub fn max_cast_angle(&self) -> f64 {
        self.staff_sector / 2.0
    }
}

impl Default for MoveLimits {
    fn default() -> Self {
        Self::for_wizard(&GameRules::default(), &MoveModifiers::default())
    }
}
