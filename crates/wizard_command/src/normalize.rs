//! Clamping and normalization of the numeric fields of a command.
//!
//! Evaluation order:
//!
//! 1. Every numeric field and every limit is checked. A NaN, an infinity or a
//!    negative limit fails the whole evaluation before anything is written.
//! 2. `turn` is clamped to `[-max_turn, max_turn]`.
//! 3. `cast_angle` is clamped to `[-staff_sector / 2, staff_sector / 2]`.
//! 4. `speed` is clamped to `[-max_backward, max_forward]` and `strafe_speed`
//!    to `[-max_strafe, max_strafe]`.
//! 5. If `hypot(speed / limit, strafe_speed / max_strafe)` still exceeds `1.0`
//!    both speeds are divided by it, which places the request on the limit
//!    ellipse. The per-axis clamp is not applied again afterwards.
//!
//! Cast distances are only checked for finiteness. Their ordering and sign
//! are left to the host.

use glam::DVec2;
use wizard_model::MoveLimits;

use crate::command::Command;
use crate::error::CommandError;

/// Slack on the joint speed check. Without it a command that was already
/// projected onto the ellipse could be rescaled again by rounding error.
pub const ELLIPSE_EPSILON: f64 = 1e-9;

/// The clamped numeric fields of a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Forward speed; negative moves backward.
    pub speed: f64,
    /// Lateral speed; positive is to the right.
    pub strafe_speed: f64,
    /// Turn in radians; positive is clockwise.
    pub turn: f64,
    /// Cast direction relative to facing, in radians.
    pub cast_angle: f64,
}

impl Command {
    /// Evaluate this command against `limits` and return the normalized copy.
    ///
    /// Out-of-range values are clamped, never rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidCommandValue`] if any numeric field is
    /// not finite, or if a limit is not finite or is negative.
    pub fn normalize(&self, limits: &MoveLimits) -> Result<Command, CommandError> {
        let motion = self.evaluate_motion(limits)?;
        let mut normalized = self.clone();
        normalized.apply_motion(motion);
        Ok(normalized)
    }

    /// [`Command::normalize`] with backward speed bounded by `max_forward`.
    ///
    /// # Errors
    ///
    /// See [`Command::normalize`].
    pub fn normalize_symmetric(
        &self,
        max_forward: f64,
        max_strafe: f64,
        max_turn: f64,
        staff_sector: f64,
    ) -> Result<Command, CommandError> {
        self.normalize(&MoveLimits::symmetric(
            max_forward,
            max_strafe,
            max_turn,
            staff_sector,
        ))
    }

    /// Normalize this command in place. On error the command is left exactly
    /// as it was.
    ///
    /// # Errors
    ///
    /// See [`Command::normalize`].
    pub fn normalize_in_place(&mut self, limits: &MoveLimits) -> Result<(), CommandError> {
        let motion = self.evaluate_motion(limits)?;
        self.apply_motion(motion);
        Ok(())
    }

    /// Compute the clamped numeric fields without touching the command.
    ///
    /// # Errors
    ///
    /// See [`Command::normalize`].
    pub fn evaluate_motion(&self, limits: &MoveLimits) -> Result<Motion, CommandError> {
        let limits = checked_limits(limits)?;

        let speed = finite("speed", self.speed)?;
        let strafe_speed = finite("strafe_speed", self.strafe_speed)?;
        let turn = finite("turn", self.turn)?;
        let cast_angle = finite("cast_angle", self.cast_angle)?;
        finite("min_cast_distance", self.min_cast_distance)?;
        finite("max_cast_distance", self.max_cast_distance)?;

        let (speed, strafe_speed) = project_speeds(speed, strafe_speed, &limits);
        Ok(Motion {
            speed,
            strafe_speed,
            turn: turn.clamp(-limits.max_turn, limits.max_turn),
            cast_angle: cast_angle.clamp(-limits.max_cast_angle(), limits.max_cast_angle()),
        })
    }

    fn apply_motion(&mut self, motion: Motion) {
        self.speed = motion.speed;
        self.strafe_speed = motion.strafe_speed;
        self.turn = motion.turn;
        self.cast_angle = motion.cast_angle;
    }
}

/// Clamp each axis, then pull the pair back onto the limit ellipse if it
/// lies outside.
///
/// `limits` must already be finite and non-negative.
#[must_use]
pub fn project_speeds(speed: f64, strafe_speed: f64, limits: &MoveLimits) -> (f64, f64) {
    let speed = speed.clamp(-limits.max_backward, limits.max_forward);
    let strafe_speed = strafe_speed.clamp(-limits.max_strafe, limits.max_strafe);

    let magnitude = ellipse_ratio(speed, strafe_speed, limits);
    if magnitude > 1.0 + ELLIPSE_EPSILON {
        (speed / magnitude, strafe_speed / magnitude)
    } else {
        (speed, strafe_speed)
    }
}

/// `hypot(speed / limit, strafe_speed / max_strafe)`, where `limit` is the
/// forward or backward limit depending on the sign of `speed`. An axis with a
/// zero limit contributes nothing.
#[must_use]
pub fn ellipse_ratio(speed: f64, strafe_speed: f64, limits: &MoveLimits) -> f64 {
    let forward_limit = if speed < 0.0 {
        limits.max_backward
    } else {
        limits.max_forward
    };
    DVec2::new(
        axis_ratio(speed, forward_limit),
        axis_ratio(strafe_speed, limits.max_strafe),
    )
    .length()
}

fn axis_ratio(value: f64, limit: f64) -> f64 {
    if limit > 0.0 { value / limit } else { 0.0 }
}

fn finite(field: &'static str, value: f64) -> Result<f64, CommandError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CommandError::InvalidCommandValue { field, value })
    }
}

fn limit(field: &'static str, value: f64) -> Result<f64, CommandError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CommandError::InvalidCommandValue { field, value })
    }
}

fn checked_limits(limits: &MoveLimits) -> Result<MoveLimits, CommandError> {
    Ok(MoveLimits {
        max_forward: limit("max_forward", limits.max_forward)?,
        max_backward: limit("max_backward", limits.max_backward)?,
        max_strafe: limit("max_strafe", limits.max_strafe)?,
        max_turn: limit("max_turn", limits.max_turn)?,
        staff_sector: limit("staff_sector", limits.staff_sector)?,
    })
}
