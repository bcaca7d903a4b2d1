//! Actions a wizard may request for a single tick.

use serde::{Deserialize, Serialize};

/// The ability requested for one tick.
///
/// The host may still ignore the request (insufficient mana, cooldown), so
/// this is a request, never a guarantee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// Do nothing.
    #[default]
    None,
    /// Melee strike with the staff.
    Staff,
    /// Basic projectile.
    MagicMissile,
    /// Projectile that freezes its target.
    FrostBolt,
    /// Projectile that detonates at the end of its flight.
    Fireball,
    /// Status spell that speeds up its target.
    Haste,
    /// Status spell that absorbs incoming damage.
    Shield,
}

impl ActionType {
    /// All actions, in wire order.
    pub const ALL: [ActionType; 7] = [
        Self::None,
        Self::Staff,
        Self::MagicMissile,
        Self::FrostBolt,
        Self::Fireball,
        Self::Haste,
        Self::Shield,
    ];

    /// Returns `true` for free-flying projectile spells. Only these consume
    /// the cast angle and cast distances of a command.
    #[must_use]
    pub const fn is_projectile(self) -> bool {
        matches!(self, Self::MagicMissile | Self::FrostBolt | Self::Fireball)
    }

    /// Returns `true` for spells applied to a same-faction target. Only these
    /// consume the status target of a command.
    #[must_use]
    pub const fn is_status(self) -> bool {
        matches!(self, Self::Haste | Self::Shield)
    }
}
