//! Light: a room light that can be switched on and off.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::feedback::SharedFeedback;
use crate::power::Power;

/// A light identified by the room it sits in.
///
/// State lives behind a [`Mutex`] so the light can be shared by every command
/// that targets it.
pub struct Light {
    room: String,
    power: Mutex<Power>,
    feedback: SharedFeedback,
}

impl Light {
    /// Create a light in `room`, initially off.
    pub fn new(room: impl Into<String>, feedback: SharedFeedback) -> Self {
        Self {
            room: room.into(),
            power: Mutex::new(Power::Off),
            feedback,
        }
    }

    /// Room the light belongs to.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Switch the light on.
    pub fn on(&self) {
        self.switch(Power::On);
    }

    /// Switch the light off.
    pub fn off(&self) {
        self.switch(Power::Off);
    }

    /// Current power state.
    #[must_use]
    pub fn power(&self) -> Power {
        *self.lock_power()
    }

    /// Whether the light is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.power().is_on()
    }

    fn switch(&self, power: Power) {
        *self.lock_power() = power;
        self.feedback.emit(&format!("{} light is {power}", self.room));
    }

    fn lock_power(&self) -> MutexGuard<'_, Power> {
        self.power.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Light {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Light")
            .field("room", &self.room)
            .field("power", &self.power())
            .finish_non_exhaustive()
    }
}
