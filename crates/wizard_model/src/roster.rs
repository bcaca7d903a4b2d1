//! Faction membership as seen by one wizard.
//!
//! Two different views of the same faction are needed when evaluating a
//! command. Message addressing covers every teammate except the sender,
//! dead or alive, in ascending id order. Status target resolution only
//! considers living members, the sender included.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::unit::UnitId;

/// A member of the wizard's own faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teammate {
    /// The teammate's unit id.
    pub id: UnitId,
    /// Whether the teammate is currently alive.
    pub alive: bool,
}

impl Teammate {
    /// A living teammate.
    #[must_use]
    pub const fn alive(id: u64) -> Self {
        Self {
            id: UnitId(id),
            alive: true,
        }
    }

    /// A dead teammate.
    #[must_use]
    pub const fn dead(id: u64) -> Self {
        Self {
            id: UnitId(id),
            alive: false,
        }
    }
}

/// All members of a faction, ordered by id.
///
/// Duplicate ids are collapsed; the last reported liveness wins. A roster
/// travels as a plain list of teammates and is re-sorted when decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Teammate>", into = "Vec<Teammate>")]
pub struct FactionRoster {
    members: Vec<Teammate>,
}

impl FactionRoster {
    /// Build a roster from faction members in any order.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = Teammate>) -> Self {
        let mut members: Vec<Teammate> = members.into_iter().collect();
        // Stable sort: within equal ids the last reported entry survives the dedup.
        members.sort_by_key(|m| m.id);
        let mut deduped: Vec<Teammate> = Vec::with_capacity(members.len());
        for member in members {
            match deduped.last_mut() {
                Some(last) if last.id == member.id => *last = member,
                _ => deduped.push(member),
            }
        }
        Self { members: deduped }
    }

    /// Returns all members in ascending id order.
    #[must_use]
    pub fn members(&self) -> &[Teammate] {
        &self.members
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the roster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Message recipients for `sender`: every member except the sender,
    /// regardless of liveness, in ascending id order.
    #[must_use]
    pub fn recipients_excluding(&self, sender: UnitId) -> Vec<UnitId> {
        self.members
            .iter()
            .map(|m| m.id)
            .filter(|id| *id != sender)
            .collect()
    }

    /// Ids of all living members.
    #[must_use]
    pub fn living_ids(&self) -> BTreeSet<UnitId> {
        self.members
            .iter()
            .filter(|m| m.alive)
            .map(|m| m.id)
            .collect()
    }
}

impl From<Vec<Teammate>> for FactionRoster {
    fn from(members: Vec<Teammate>) -> Self {
        Self::new(members)
    }
}

impl From<FactionRoster> for Vec<Teammate> {
    fn from(roster: FactionRoster) -> Self {
        roster.members
    }
}

impl FromIterator<Teammate> for FactionRoster {
    fn from_iter<I: IntoIterator<Item = Teammate>>(iter: I) -> Self {
        Self::new(iter)
    }
}
