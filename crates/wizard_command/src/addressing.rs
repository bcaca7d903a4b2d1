//! Who a command's targeted parts reach: the status spell target and the
//! recipients of master messages.

use std::collections::BTreeSet;

use wizard_model::{Message, UnitId};

use crate::command::Command;
use crate::error::CommandError;

/// One message paired with its recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery<'a> {
    /// The teammate the entry is addressed to.
    pub recipient: UnitId,
    /// The directive, or `None` when there is nothing for this teammate.
    pub message: Option<&'a Message>,
}

impl Command {
    /// The unit a status spell will actually land on.
    ///
    /// `candidates` are the living wizards of the caster's faction. A target
    /// that is absent or not among them falls back to `caster`.
    #[must_use]
    pub fn resolve_status_target(&self, candidates: &BTreeSet<UnitId>, caster: UnitId) -> UnitId {
        match self.status_target {
            Some(target) if candidates.contains(&target) => target,
            _ => caster,
        }
    }

    /// Whether a sender may attach messages at all. Only the faction's
    /// master may; for anyone else the messages are treated as unset.
    #[must_use]
    pub fn is_eligible_to_message(&self, is_master: bool) -> bool {
        is_master
    }

    /// The messages as the host will see them: the stored sequence for the
    /// master, nothing for anyone else.
    #[must_use]
    pub fn messages_for(&self, is_master: bool) -> Option<&[Option<Message>]> {
        if self.is_eligible_to_message(is_master) {
            self.messages()
        } else {
            None
        }
    }

    /// Pair messages with recipients by position.
    ///
    /// `recipients` must be every teammate except the sender, dead or alive,
    /// in ascending id order; the order is not checked here, the i-th
    /// recipient simply receives the i-th message.
    /// [`FactionRoster::recipients_excluding`](wizard_model::FactionRoster::recipients_excluding)
    /// builds a list in that order. Absent or empty messages always succeed
    /// and produce no deliveries.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MessageCountMismatch`] if a non-empty message
    /// sequence does not have exactly one entry per recipient.
    pub fn validate_messages(
        &self,
        recipients: &[UnitId],
    ) -> Result<Vec<Delivery<'_>>, CommandError> {
        let messages = match self.messages.as_deref() {
            None | Some([]) => return Ok(Vec::new()),
            Some(messages) => messages,
        };

        if messages.len() != recipients.len() {
            return Err(CommandError::MessageCountMismatch {
                expected: recipients.len(),
                actual: messages.len(),
            });
        }

        Ok(recipients
            .iter()
            .zip(messages)
            .map(|(recipient, message)| Delivery {
                recipient: *recipient,
                message: message.as_ref(),
            })
            .collect())
    }
}
