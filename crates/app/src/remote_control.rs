//! Remote control: the invoker.
//!
//! A fixed row of [`SLOT_COUNT`] slots, each holding an on-command and an
//! off-command. Unconfigured slots hold [`NoCommand`], so pressing any button
//! in range always succeeds.
//!
//! Undo is single-level: the remote remembers which button was pressed last
//! and undoing calls that command's `undo` again every time, it never walks a
//! history.

use std::fmt;

use homeremote_domain::error::RemoteError;
use homeremote_domain::power::Power;

use crate::command::{BoxedCommand, Command, NoCommand};

/// Number of slots on the remote.
pub const SLOT_COUNT: usize = 7;

/// Which of a slot's two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    On,
    Off,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// The button whose command the next undo will reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoTarget {
    pub slot: usize,
    pub button: Button,
}

#[derive(Debug)]
struct Slot {
    on: BoxedCommand,
    off: BoxedCommand,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            on: Box::new(NoCommand),
            off: Box::new(NoCommand),
        }
    }
}

impl Slot {
    fn command(&self, button: Button) -> &dyn Command {
        match button {
            Button::On => self.on.as_ref(),
            Button::Off => self.off.as_ref(),
        }
    }

    fn command_mut(&mut self, button: Button) -> &mut BoxedCommand {
        match button {
            Button::On => &mut self.on,
            Button::Off => &mut self.off,
        }
    }
}

/// Seven-slot remote control with single-level undo.
#[derive(Debug)]
pub struct RemoteControl {
    slots: [Slot; SLOT_COUNT],
    undo: Option<UndoTarget>,
    thermostat_on: bool,
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot::default()),
            undo: None,
            thermostat_on: false,
        }
    }
}

impl RemoteControl {
    /// Create a remote with every slot bound to [`NoCommand`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `on` and `off` to `slot`.
    ///
    /// Rebinding the slot the undo target points at clears the undo target,
    /// the command it referred to is gone.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::SlotOutOfRange`] when `slot >= SLOT_COUNT`.
    pub fn set_command(
        &mut self,
        slot: usize,
        on: impl Command + 'static,
        off: impl Command + 'static,
    ) -> Result<(), RemoteError> {
        let entry = self.slot_mut(slot)?;
        entry.on = Box::new(on);
        entry.off = Box::new(off);

        if self.undo.is_some_and(|target| target.slot == slot) {
            tracing::debug!(slot, "undo target rebound, clearing it");
            self.undo = None;
        }
        Ok(())
    }

    /// Press the on button of `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::SlotOutOfRange`] when `slot >= SLOT_COUNT`.
    pub fn on_button_pressed(&mut self, slot: usize) -> Result<(), RemoteError> {
        self.press(slot, Button::On)
    }

    /// Press the off button of `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::SlotOutOfRange`] when `slot >= SLOT_COUNT`.
    pub fn off_button_pressed(&mut self, slot: usize) -> Result<(), RemoteError> {
        self.press(slot, Button::Off)
    }

    /// Undo the last pressed button's command.
    ///
    /// Returns `false` when no button has been pressed yet. Pressing undo
    /// again repeats the same undo.
    pub fn undo_pressed(&mut self) -> bool {
        let Some(target) = self.undo else {
            tracing::debug!("nothing to undo");
            return false;
        };

        let command = self.slots[target.slot].command_mut(target.button);
        tracing::debug!(
            slot = target.slot,
            button = %target.button,
            command = command.name(),
            "undo pressed"
        );
        command.undo();
        true
    }

    /// Button the next undo will reverse, if any.
    #[must_use]
    pub fn undo_target(&self) -> Option<UndoTarget> {
        self.undo
    }

    /// Whether the last thermostat power command switched it on.
    ///
    /// Informational only; derived from the commands pressed, not read from
    /// the device.
    #[must_use]
    pub fn is_thermostat_on(&self) -> bool {
        self.thermostat_on
    }

    /// Command bound to a button, or `None` when `slot` is out of range.
    #[must_use]
    pub fn command(&self, slot: usize, button: Button) -> Option<&dyn Command> {
        self.slots.get(slot).map(|entry| entry.command(button))
    }

    /// Multi-line report of the current device states, one line per slot
    /// whose on-command can describe its device.
    #[must_use]
    pub fn current_status(&self) -> String {
        let mut out = String::from("------ Current Status ------\n");
        for line in self.slots.iter().filter_map(|slot| slot.on.describe()) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("-----------------------------------");
        out
    }

    fn press(&mut self, slot: usize, button: Button) -> Result<(), RemoteError> {
        let command = self.slot_mut(slot)?.command_mut(button);
        tracing::debug!(slot, %button, command = command.name(), "button pressed");
        command.execute();

        match command.power_effect() {
            Some(Power::On) => self.thermostat_on = true,
            Some(Power::Off) => self.thermostat_on = false,
            None => {}
        }

        self.undo = Some(UndoTarget { slot, button });
        Ok(())
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut Slot, RemoteError> {
        self.slots
            .get_mut(slot)
            .ok_or(RemoteError::SlotOutOfRange {
                slot,
                slots: SLOT_COUNT,
            })
    }
}

impl fmt::Display for RemoteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "------- Remote Control -------")?;
        for (index, slot) in self.slots.iter().enumerate() {
            let mut line = format!(
                "[slot {index}] {:<27}{:<27}",
                slot.on.name(),
                slot.off.name()
            );
            if let Some(active) = slot.on.is_active() {
                line.push_str(if active { "Active" } else { "Inactive" });
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        match self.undo {
            Some(target) => write!(
                f,
                "[undo] {}",
                self.slots[target.slot].command(target.button).name()
            ),
            None => write!(f, "[undo] none"),
        }
    }
}
