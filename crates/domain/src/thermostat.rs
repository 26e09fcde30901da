//! Thermostat: a heating unit with a power switch and a setpoint.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::DeviceError;
use crate::feedback::SharedFeedback;
use crate::power::Power;

#[derive(Debug, Clone, Copy, Default)]
struct ThermostatState {
    power: Power,
    temperature: f64,
}

/// A thermostat identified by its location in the house.
///
/// The setpoint is only accepted while the unit is on, and switching the
/// unit off always resets it to `0`.
pub struct Thermostat {
    location: String,
    state: Mutex<ThermostatState>,
    feedback: SharedFeedback,
}

impl Thermostat {
    /// Create a thermostat at `location`, initially off at 0 degrees.
    pub fn new(location: impl Into<String>, feedback: SharedFeedback) -> Self {
        Self {
            location: location.into(),
            state: Mutex::new(ThermostatState::default()),
            feedback,
        }
    }

    /// Location of the thermostat.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Switch the unit on. The setpoint is left untouched.
    pub fn turn_on(&self) {
        self.lock_state().power = Power::On;
        self.report(format_args!("{} thermostat is turned on", self.location));
    }

    /// Switch the unit off and reset the setpoint to `0`.
    pub fn turn_off(&self) {
        {
            let mut state = self.lock_state();
            state.power = Power::Off;
            state.temperature = 0.0;
        }
        self.report(format_args!("{} thermostat is turned off", self.location));
    }

    /// Change the setpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::PoweredOff`] when the unit is off; the setpoint
    /// is left unchanged and a rejection line is still reported.
    pub fn set_temperature(&self, temperature: f64) -> Result<(), DeviceError> {
        let accepted = {
            let mut state = self.lock_state();
            if state.power.is_on() {
                state.temperature = temperature;
            }
            state.power.is_on()
        };

        if accepted {
            self.report(format_args!(
                "{} thermostat is set to {temperature} degrees",
                self.location
            ));
            Ok(())
        } else {
            self.report(format_args!(
                "{} thermostat is off. Cannot set temperature.",
                self.location
            ));
            Err(DeviceError::PoweredOff {
                location: self.location.clone(),
            })
        }
    }

    /// Current power state.
    #[must_use]
    pub fn power(&self) -> Power {
        self.lock_state().power
    }

    /// Whether the unit is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power().is_on()
    }

    /// Current setpoint in degrees.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.lock_state().temperature
    }

    fn report(&self, line: std::fmt::Arguments<'_>) {
        self.feedback.emit(&line.to_string());
    }

    fn lock_state(&self) -> MutexGuard<'_, ThermostatState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Thermostat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = *self.lock_state();
        f.debug_struct("Thermostat")
            .field("location", &self.location)
            .field("power", &state.power)
            .field("temperature", &state.temperature)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::MemoryFeedback;

    fn thermostat() -> (Thermostat, std::sync::Arc<MemoryFeedback>) {
        let feedback = MemoryFeedback::shared();
        (Thermostat::new("Living Room", feedback.clone()), feedback)
    }

    #[test]
    fn should_default_to_off_at_zero() {
        let (thermostat, _) = thermostat();
        assert!(!thermostat.is_on());
        assert!(thermostat.temperature().abs() < f64::EPSILON);
    }

    #[test]
    fn should_turn_on_and_report() {
        let (thermostat, feedback) = thermostat();
        thermostat.turn_on();
        assert!(thermostat.is_on());
        assert_eq!(feedback.lines(), vec!["Living Room thermostat is turned on"]);
    }

    #[test]
    fn should_accept_temperature_while_on() {
        let (thermostat, feedback) = thermostat();
        thermostat.turn_on();
        assert!(thermostat.set_temperature(21.5).is_ok());
        assert!((thermostat.temperature() - 21.5).abs() < f64::EPSILON);
        assert!(feedback.contains("Living Room thermostat is set to 21.5 degrees"));
    }

    #[test]
    fn should_format_whole_temperatures_without_fraction() {
        let (thermostat, feedback) = thermostat();
        thermostat.turn_on();
        thermostat.set_temperature(20.0).unwrap();
        assert!(feedback.contains("is set to 20 degrees"));
    }

    #[test]
    fn should_reject_temperature_while_off() {
        let (thermostat, feedback) = thermostat();
        let result = thermostat.set_temperature(18.0);
        assert_eq!(
            result,
            Err(DeviceError::PoweredOff {
                location: "Living Room".to_string()
            })
        );
        assert!(thermostat.temperature().abs() < f64::EPSILON);
        assert_eq!(
            feedback.lines(),
            vec!["Living Room thermostat is off. Cannot set temperature."]
        );
    }

    #[test]
    fn should_reset_temperature_when_turned_off() {
        let (thermostat, feedback) = thermostat();
        thermostat.turn_on();
        thermostat.set_temperature(30.0).unwrap();
        thermostat.turn_off();
        assert!(!thermostat.is_on());
        assert!(thermostat.temperature().abs() < f64::EPSILON);
        assert_eq!(
            feedback.lines().last().unwrap(),
            "Living Room thermostat is turned off"
        );
    }

    #[test]
    fn should_keep_temperature_when_turned_on_again() {
        let (thermostat, _) = thermostat();
        thermostat.turn_on();
        thermostat.set_temperature(12.0).unwrap();
        thermostat.turn_on();
        assert!((thermostat.temperature() - 12.0).abs() < f64::EPSILON);
    }
}
