//! Commands: parameterized actions bound to remote control buttons.
//!
//! Every command knows how to [`execute`](Command::execute) itself and how to
//! [`undo`](Command::undo) its last execution. Commands that need to restore
//! a previous value capture it when they execute.
//!
//! Instead of the invoker inspecting concrete command types, each command
//! answers a few capability queries (`is_active`, `describe`,
//! `power_effect`). The defaults answer `None`, meaning "not applicable".

mod light;
mod macro_command;
mod no_op;
mod thermostat;

pub use light::{LightOffCommand, LightOnCommand};
pub use macro_command::MacroCommand;
pub use no_op::NoCommand;
pub use thermostat::{
    DECREASE_UNDO_CEILING, ThermostatDecreaseCommand, ThermostatIncreaseCommand,
    ThermostatOffCommand, ThermostatOnCommand,
};

use homeremote_domain::power::Power;

/// An action that can be executed and undone.
///
/// Commands are `Send` so a remote control can be moved between threads,
/// even though the console session drives it from a single one.
pub trait Command: Send {
    /// Perform the action.
    fn execute(&mut self);

    /// Reverse the last [`execute`](Self::execute).
    fn undo(&mut self);

    /// Short type-like name shown in the remote control listing
    /// (e.g. `LightOnCommand`).
    fn name(&self) -> &'static str;

    /// Whether the target device currently sits in the state this command
    /// puts it in. `None` when the command has no such notion.
    fn is_active(&self) -> Option<bool> {
        None
    }

    /// One line describing the current state of the target device.
    fn describe(&self) -> Option<String> {
        None
    }

    /// Power state of the thermostat after this command executes, for
    /// commands that switch a thermostat.
    fn power_effect(&self) -> Option<Power> {
        None
    }
}

/// Heap-allocated command, as stored in remote control slots and macros.
pub type BoxedCommand = Box<dyn Command>;

impl std::fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
