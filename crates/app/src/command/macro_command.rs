//! Macro command: several commands behind a single button.

use super::{BoxedCommand, Command};

/// Runs its commands in order and undoes them in reverse order.
///
/// A macro keeps no state of its own: undoing it simply undoes each member
/// against whatever state the devices are in at that moment.
#[derive(Debug)]
pub struct MacroCommand {
    commands: Vec<BoxedCommand>,
}

impl MacroCommand {
    /// Compose `commands` into a single command.
    #[must_use]
    pub fn new(commands: Vec<BoxedCommand>) -> Self {
        Self { commands }
    }
}

impl Command for MacroCommand {
    fn execute(&mut self) {
        for command in &mut self.commands {
            command.execute();
        }
    }

    fn undo(&mut self) {
        for command in self.commands.iter_mut().rev() {
            command.undo();
        }
    }

    fn name(&self) -> &'static str {
        "MacroCommand"
    }
}
