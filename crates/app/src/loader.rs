//! Standard home wiring: devices to commands to slots.
//!
//! | Slot | On button | Off button |
//! |------|-----------|------------|
//! | 0 | Living Room light on | Living Room light off |
//! | 1 | Kitchen light on | Kitchen light off |
//! | 2 | Thermostat on | Thermostat off |
//! | 3 | Thermostat increase | Thermostat decrease |
//! | 4 | "Back home" macro (both lights on) | "Out of the home" macro (both lights off) |
//! | 5, 6 | no-op | no-op |

use std::sync::Arc;

use homeremote_domain::error::RemoteError;
use homeremote_domain::feedback::SharedFeedback;
use homeremote_domain::light::Light;
use homeremote_domain::thermostat::Thermostat;

use crate::command::{
    LightOffCommand, LightOnCommand, MacroCommand, ThermostatDecreaseCommand,
    ThermostatIncreaseCommand, ThermostatOffCommand, ThermostatOnCommand,
};
use crate::remote_control::RemoteControl;

/// Step sizes and ceiling for the thermostat setpoint buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermostatSettings {
    pub increment: f64,
    pub max_temperature: f64,
    pub decrement: f64,
}

impl Default for ThermostatSettings {
    fn default() -> Self {
        Self {
            increment: 10.0,
            max_temperature: 70.0,
            decrement: 10.0,
        }
    }
}

/// The wired remote plus handles on the devices it drives.
#[derive(Debug)]
pub struct Home {
    pub remote: RemoteControl,
    pub living_room_light: Arc<Light>,
    pub kitchen_light: Arc<Light>,
    pub thermostat: Arc<Thermostat>,
}

/// Build the standard home, reporting device feedback to `feedback`.
///
/// # Errors
///
/// Returns [`RemoteError::SlotOutOfRange`] if the layout does not fit the
/// remote (cannot happen with the built-in layout).
pub fn standard_home(
    settings: &ThermostatSettings,
    feedback: &SharedFeedback,
) -> Result<Home, RemoteError> {
    let living_room_light = Arc::new(Light::new("Living Room", feedback.clone()));
    let kitchen_light = Arc::new(Light::new("Kitchen", feedback.clone()));
    let thermostat = Arc::new(Thermostat::new("Living Room", feedback.clone()));

    let mut remote = RemoteControl::new();
    remote.set_command(
        0,
        LightOnCommand::new(living_room_light.clone()),
        LightOffCommand::new(living_room_light.clone()),
    )?;
    remote.set_command(
        1,
        LightOnCommand::new(kitchen_light.clone()),
        LightOffCommand::new(kitchen_light.clone()),
    )?;
    remote.set_command(
        2,
        ThermostatOnCommand::new(thermostat.clone()),
        ThermostatOffCommand::new(thermostat.clone()),
    )?;
    remote.set_command(
        3,
        ThermostatIncreaseCommand::new(
            thermostat.clone(),
            settings.increment,
            settings.max_temperature,
        ),
        ThermostatDecreaseCommand::new(thermostat.clone(), settings.decrement),
    )?;

    let back_home = MacroCommand::new(vec![
        Box::new(LightOnCommand::new(living_room_light.clone())),
        Box::new(LightOnCommand::new(kitchen_light.clone())),
    ]);
    let out_of_the_home = MacroCommand::new(vec![
        Box::new(LightOffCommand::new(living_room_light.clone())),
        Box::new(LightOffCommand::new(kitchen_light.clone())),
    ]);
    remote.set_command(4, back_home, out_of_the_home)?;

    tracing::debug!(?settings, "standard home wired");

    Ok(Home {
        remote,
        living_room_light,
        kitchen_light,
        thermostat,
    })
}
