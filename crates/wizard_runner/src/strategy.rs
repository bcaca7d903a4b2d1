//! The strategy seam.

use wizard_command::Command;

use crate::context::TickContext;

/// Decides what a wizard does each tick.
///
/// `decide` is called once per tick with a fresh inert command. Whatever the
/// strategy leaves in it is finalized and submitted; it does not need to clamp
/// anything itself.
///
/// `decide` runs on a blocking thread, so it may do synchronous work, but a
/// call that outlives the tick deadline only delays the ticks after it.
pub trait Strategy: Send {
    /// Fill in this tick's command.
    fn decide(&mut self, ctx: &TickContext, command: &mut Command);
}

impl<F> Strategy for F
where
    F: FnMut(&TickContext, &mut Command) + Send,
{
    fn decide(&mut self, ctx: &TickContext, command: &mut Command) {
        self(ctx, command);
    }
}
