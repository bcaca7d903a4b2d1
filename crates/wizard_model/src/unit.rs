//! Unit identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of a unit in the simulated world.
///
/// Host identifiers are never negative; the wire sentinel `-1` for "no
/// target" is represented in memory as an absent `UnitId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u64);

impl UnitId {
    /// Interpret a signed host value, treating any negative value as absent.
    #[must_use]
    pub fn from_signed(id: i64) -> Option<Self> {
        u64::try_from(id).ok().map(Self)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

impl From<u64> for UnitId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed() {
        assert_eq!(UnitId::from_signed(9), Some(UnitId(9)));
        assert_eq!(UnitId::from_signed(0), Some(UnitId(0)));
        assert_eq!(UnitId::from_signed(-1), None);
        assert_eq!(UnitId::from_signed(i64::MIN), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(UnitId(12).to_string(), "Unit(12)");
    }
}
