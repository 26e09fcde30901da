//! Thermostat commands: power and setpoint changes on a shared
//! [`Thermostat`].
//!
//! The clamp bounds are deliberately asymmetric: increase clamps to its
//! configured maximum and its undo to `0`, decrease clamps to `0` and its
//! undo to the fixed [`DECREASE_UNDO_CEILING`].

use std::sync::Arc;

use homeremote_domain::power::Power;
use homeremote_domain::thermostat::Thermostat;

use super::Command;

/// Upper bound applied when undoing a [`ThermostatDecreaseCommand`].
pub const DECREASE_UNDO_CEILING: f64 = 70.0;

/// Lower bound for every setpoint change.
const FLOOR: f64 = 0.0;

fn apply(thermostat: &Thermostat, temperature: f64) {
    if let Err(err) = thermostat.set_temperature(temperature) {
        tracing::warn!(%err, temperature, "setpoint change rejected");
    }
}

fn describe(thermostat: &Thermostat) -> String {
    format!(
        "{} Thermostat: {}, Temperature: {} degrees",
        thermostat.location(),
        thermostat.power(),
        thermostat.temperature()
    )
}

/// Switches the thermostat on; undo switches it off, which also drops the
/// setpoint.
#[derive(Debug, Clone)]
pub struct ThermostatOnCommand {
    thermostat: Arc<Thermostat>,
}

impl ThermostatOnCommand {
    /// Bind the command to `thermostat`.
    #[must_use]
    pub fn new(thermostat: Arc<Thermostat>) -> Self {
        Self { thermostat }
    }
}

impl Command for ThermostatOnCommand {
    fn execute(&mut self) {
        self.thermostat.turn_on();
    }

    fn undo(&mut self) {
        self.thermostat.turn_off();
    }

    fn name(&self) -> &'static str {
        "ThermostatOnCommand"
    }

    fn describe(&self) -> Option<String> {
        Some(describe(&self.thermostat))
    }

    fn power_effect(&self) -> Option<Power> {
        Some(Power::On)
    }
}

/// Switches the thermostat off, remembering the setpoint it had.
///
/// Undo only re-applies the remembered setpoint; it does not switch the unit
/// back on, so while the unit stays off the thermostat rejects it.
#[derive(Debug, Clone)]
pub struct ThermostatOffCommand {
    thermostat: Arc<Thermostat>,
    previous_temperature: f64,
}

impl ThermostatOffCommand {
    /// Bind the command to `thermostat`.
    #[must_use]
    pub fn new(thermostat: Arc<Thermostat>) -> Self {
        Self {
            thermostat,
            previous_temperature: FLOOR,
        }
    }
}

impl Command for ThermostatOffCommand {
    fn execute(&mut self) {
        self.previous_temperature = self.thermostat.temperature();
        self.thermostat.turn_off();
    }

    fn undo(&mut self) {
        apply(&self.thermostat, self.previous_temperature);
    }

    fn name(&self) -> &'static str {
        "ThermostatOffCommand"
    }

    fn describe(&self) -> Option<String> {
        Some(describe(&self.thermostat))
    }

    fn power_effect(&self) -> Option<Power> {
        Some(Power::Off)
    }
}

/// Raises the setpoint by a fixed step, never above `max_temperature`.
#[derive(Debug, Clone)]
pub struct ThermostatIncreaseCommand {
    thermostat: Arc<Thermostat>,
    increment: f64,
    max_temperature: f64,
}

impl ThermostatIncreaseCommand {
    /// Bind the command to `thermostat` with the given step and ceiling.
    #[must_use]
    pub fn new(thermostat: Arc<Thermostat>, increment: f64, max_temperature: f64) -> Self {
        Self {
            thermostat,
            increment,
            max_temperature,
        }
    }
}

impl Command for ThermostatIncreaseCommand {
    fn execute(&mut self) {
        let target = self.thermostat.temperature() + self.increment;
        apply(&self.thermostat, target.min(self.max_temperature));
    }

    fn undo(&mut self) {
        let target = self.thermostat.temperature() - self.increment;
        apply(&self.thermostat, target.max(FLOOR));
    }

    fn name(&self) -> &'static str {
        "ThermostatIncreaseCommand"
    }
}

/// Lowers the setpoint by a fixed step, never below `0`.
#[derive(Debug, Clone)]
pub struct ThermostatDecreaseCommand {
    thermostat: Arc<Thermostat>,
    decrement: f64,
}

impl ThermostatDecreaseCommand {
    /// Bind the command to `thermostat` with the given step.
    #[must_use]
    pub fn new(thermostat: Arc<Thermostat>, decrement: f64) -> Self {
        Self {
            thermostat,
            decrement,
        }
    }
}

impl Command for ThermostatDecreaseCommand {
    fn execute(&mut self) {
        let target = self.thermostat.temperature() - self.decrement;
        apply(&self.thermostat, target.max(FLOOR));
    }

    fn undo(&mut self) {
        let target = self.thermostat.temperature() + self.decrement;
        apply(&self.thermostat, target.min(DECREASE_UNDO_CEILING));
    }

    fn name(&self) -> &'static str {
        "ThermostatDecreaseCommand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeremote_domain::feedback::MemoryFeedback;

    fn thermostat() -> (Arc<Thermostat>, Arc<MemoryFeedback>) {
        let feedback = MemoryFeedback::shared();
        let thermostat = Arc::new(Thermostat::new("Living Room", feedback.clone()));
        (thermostat, feedback)
    }

    fn assert_temperature(thermostat: &Thermostat, expected: f64) {
        let actual = thermostat.temperature();
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn should_turn_on_when_on_command_executed() {
        let (thermostat, _) = thermostat();
        let mut cmd = ThermostatOnCommand::new(thermostat.clone());
        cmd.execute();
        assert!(thermostat.is_on());
    }

    #[test]
    fn should_turn_off_and_drop_setpoint_when_on_command_undone() {
        let (thermostat, _) = thermostat();
        let mut cmd = ThermostatOnCommand::new(thermostat.clone());
        cmd.execute();
        thermostat.set_temperature(25.0).unwrap();
        cmd.undo();
        assert!(!thermostat.is_on());
        assert_temperature(&thermostat, 0.0);
    }

    #[test]
    fn should_remember_setpoint_when_off_command_executed() {
        let (thermostat, _) = thermostat();
        thermostat.turn_on();
        thermostat.set_temperature(40.0).unwrap();
        let mut cmd = ThermostatOffCommand::new(thermostat.clone());
        cmd.execute();
        assert!(!thermostat.is_on());
        assert_temperature(&thermostat, 0.0);

        // Unit is back on through another path, undo restores the setpoint.
        thermostat.turn_on();
        cmd.undo();
        assert_temperature(&thermostat, 40.0);
    }

    #[test]
    fn should_reject_off_command_undo_while_unit_stays_off() {
        let (thermostat, feedback) = thermostat();
        thermostat.turn_on();
        thermostat.set_temperature(40.0).unwrap();
        let mut cmd = ThermostatOffCommand::new(thermostat.clone());
        cmd.execute();
        cmd.undo();
        assert!(!thermostat.is_on());
        assert_temperature(&thermostat, 0.0);
        assert!(feedback.contains("thermostat is off. Cannot set temperature."));
    }

    #[test]
    fn should_clamp_increase_to_max() {
        let (thermostat, _) = thermostat();
        thermostat.turn_on();
        let mut cmd = ThermostatIncreaseCommand::new(thermostat.clone(), 10.0, 70.0);
        for _ in 0..10 {
            cmd.execute();
            assert!(thermostat.temperature() <= 70.0);
        }
        assert_temperature(&thermostat, 70.0);
    }

    #[test]
    fn should_clamp_increase_undo_to_zero() {
        let (thermostat, _) = thermostat();
        thermostat.turn_on();
        let mut cmd = ThermostatIncreaseCommand::new(thermostat.clone(), 10.0, 70.0);
        cmd.execute();
        for _ in 0..5 {
            cmd.undo();
            assert!(thermostat.temperature() >= 0.0);
        }
        assert_temperature(&thermostat, 0.0);
    }

    #[test]
    fn should_clamp_increase_to_non_multiple_max() {
        let (thermostat, _) = thermostat();
        thermostat.turn_on();
        let mut cmd = ThermostatIncreaseCommand::new(thermostat.clone(), 10.0, 25.0);
        cmd.execute();
        cmd.execute();
        cmd.execute();
        assert_temperature(&thermostat, 25.0);
        cmd.undo();
        assert_temperature(&thermostat, 15.0);
    }

    #[test]
    fn should_clamp_decrease_to_zero() {
        let (thermostat, _) = thermostat();
        thermostat.turn_on();
        thermostat.set_temperature(15.0).unwrap();
        let mut cmd = ThermostatDecreaseCommand::new(thermostat.clone(), 10.0);
        cmd.execute();
        assert_temperature(&thermostat, 5.0);
        cmd.execute();
        assert_temperature(&thermostat, 0.0);
    }

    #[test]
    fn should_clamp_decrease_undo_to_fixed_ceiling() {
        let (thermostat, _) = thermostat();
        thermostat.turn_on();
        let mut cmd = ThermostatDecreaseCommand::new(thermostat.clone(), 25.0);
        for _ in 0..5 {
            cmd.undo();
            assert!(thermostat.temperature() <= DECREASE_UNDO_CEILING);
        }
        assert_temperature(&thermostat, DECREASE_UNDO_CEILING);
    }

    #[test]
    fn should_leave_setpoint_alone_when_unit_is_off() {
        let (thermostat, _) = thermostat();
        let mut cmd = ThermostatIncreaseCommand::new(thermostat.clone(), 10.0, 70.0);
        cmd.execute();
        assert_temperature(&thermostat, 0.0);
    }

    #[test]
    fn should_describe_thermostat_state() {
        let (thermostat, _) = thermostat();
        let cmd = ThermostatOnCommand::new(thermostat.clone());
        assert_eq!(
            cmd.describe().as_deref(),
            Some("Living Room Thermostat: OFF, Temperature: 0 degrees")
        );
        thermostat.turn_on();
        thermostat.set_temperature(20.0).unwrap();
        assert_eq!(
            cmd.describe().as_deref(),
            Some("Living Room Thermostat: ON, Temperature: 20 degrees")
        );
    }

    #[test]
    fn should_report_power_effect_for_power_commands_only() {
        let (thermostat, _) = thermostat();
        assert_eq!(
            ThermostatOnCommand::new(thermostat.clone()).power_effect(),
            Some(Power::On)
        );
        assert_eq!(
            ThermostatOffCommand::new(thermostat.clone()).power_effect(),
            Some(Power::Off)
        );
        assert_eq!(
            ThermostatIncreaseCommand::new(thermostat.clone(), 1.0, 2.0).power_effect(),
            None
        );
        assert_eq!(
            ThermostatDecreaseCommand::new(thermostat, 1.0).power_effect(),
            None
        );
    }
}
