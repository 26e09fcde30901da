//! No-op command: the default for unconfigured slots.

use super::Command;

/// Does nothing on execute and on undo.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&mut self) {}

    fn undo(&mut self) {}

    fn name(&self) -> &'static str {
        "NoCommand"
    }
}
