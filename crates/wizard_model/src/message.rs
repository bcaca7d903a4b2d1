//! Directives a master wizard sends to its teammates.

use serde::{Deserialize, Serialize};

use crate::skill::SkillType;

/// One of the three lanes of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneType {
    Top,
    Middle,
    Bottom,
}

/// A directive addressed to a single teammate.
///
/// Every part is optional: the host delivers the message as-is and the
/// receiving strategy decides what to do with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The lane the recipient should move to.
    pub lane: Option<LaneType>,
    /// The skill the recipient should learn next.
    pub skill_to_learn: Option<SkillType>,
    /// Free-form payload understood only by the strategies themselves.
    pub raw: Vec<u8>,
}

impl Message {
    /// A message that only assigns a lane.
    #[must_use]
    pub fn lane(lane: LaneType) -> Self {
        Self {
            lane: Some(lane),
            ..Self::default()
        }
    }

    /// Attach a skill recommendation.
    #[must_use]
    pub fn with_skill(mut self, skill: SkillType) -> Self {
        self.skill_to_learn = Some(skill);
        self
    }

    /// Attach a raw payload.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<Vec<u8>>) -> Self {
        self.raw = raw.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let msg = Message::lane(LaneType::Top)
            .with_skill(SkillType::Haste)
            .with_raw(*b"go");
        assert_eq!(msg.lane, Some(LaneType::Top));
        assert_eq!(msg.skill_to_learn, Some(SkillType::Haste));
        assert_eq!(msg.raw, b"go".to_vec());
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::lane(LaneType::Bottom).with_raw(vec![0, 255, 7]);
        let bytes = rmp_serde::to_vec(&msg).unwrap();
        let restored: Message = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(msg, restored);
    }
}
