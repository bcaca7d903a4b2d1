//! Learnable skills.

use serde::{Deserialize, Serialize};

/// A skill a wizard may select to learn before the next tick.
///
/// Skills form five branches. Each branch has two passive tiers and two aura
/// tiers followed by an ability unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillType {
    RangeBonusPassive1,
    RangeBonusAura1,
    RangeBonusPassive2,
    RangeBonusAura2,
    AdvancedMagicMissile,
    MagicalDamageBonusPassive1,
    MagicalDamageBonusAura1,
    MagicalDamageBonusPassive2,
    MagicalDamageBonusAura2,
    FrostBolt,
    StaffDamageBonusPassive1,
    StaffDamageBonusAura1,
    StaffDamageBonusPassive2,
    StaffDamageBonusAura2,
    Fireball,
    MovementBonusFactorPassive1,
    MovementBonusFactorAura1,
    MovementBonusFactorPassive2,
    MovementBonusFactorAura2,
    Haste,
    MagicalDamageAbsorptionPassive1,
    MagicalDamageAbsorptionAura1,
    MagicalDamageAbsorptionPassive2,
    MagicalDamageAbsorptionAura2,
    Shield,
}
