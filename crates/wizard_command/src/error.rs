//! Command evaluation errors.

/// Errors detected while evaluating a command.
///
/// Neither is fatal: the caller decides whether to drop the tick's command or
/// substitute an inert one. Setting a field never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// A numeric field or limit is NaN, infinite, or a negative limit.
    #[error("invalid value {value} for `{field}`")]
    InvalidCommandValue {
        /// Name of the offending field or limit.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The message sequence does not have one entry per recipient.
    #[error("expected {expected} messages (one per teammate), got {actual}")]
    MessageCountMismatch {
        /// Number of eligible recipients.
        expected: usize,
        /// Number of messages in the command.
        actual: usize,
    },
}
