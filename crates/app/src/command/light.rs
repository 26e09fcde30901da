//! Light commands: switch a shared [`Light`] on or off.

use std::sync::Arc;

use homeremote_domain::light::Light;

use super::Command;

/// Switches a light on; undo switches it off.
#[derive(Debug, Clone)]
pub struct LightOnCommand {
    light: Arc<Light>,
}

impl LightOnCommand {
    /// Bind the command to `light`.
    #[must_use]
    pub fn new(light: Arc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&mut self) {
        self.light.on();
    }

    fn undo(&mut self) {
        self.light.off();
    }

    fn name(&self) -> &'static str {
        "LightOnCommand"
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.light.is_on())
    }

    fn describe(&self) -> Option<String> {
        Some(describe(&self.light))
    }
}

/// Switches a light off; undo switches it back on.
#[derive(Debug, Clone)]
pub struct LightOffCommand {
    light: Arc<Light>,
}

impl LightOffCommand {
    /// Bind the command to `light`.
    #[must_use]
    pub fn new(light: Arc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&mut self) {
        self.light.off();
    }

    fn undo(&mut self) {
        self.light.on();
    }

    fn name(&self) -> &'static str {
        "LightOffCommand"
    }

    fn is_active(&self) -> Option<bool> {
        Some(!self.light.is_on())
    }

    fn describe(&self) -> Option<String> {
        Some(describe(&self.light))
    }
}

fn describe(light: &Light) -> String {
    format!("{} Light: {}", light.room(), light.power())
}
