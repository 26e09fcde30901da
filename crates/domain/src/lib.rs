//! # homeremote-domain
//!
//! Pure domain model for the homeremote remote control.
//!
//! ## Responsibilities
//! - Define **Devices** (things a remote control can drive: lights, thermostats)
//! - Define the **Power** state shared by every device
//! - Define the **Feedback** sink devices report their status lines to
//! - Contain all invariant enforcement (e.g. a thermostat only accepts a
//!   setpoint while it is on)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or the binary.
//! Output is expressed through the [`feedback::Feedback`] trait; the binary
//! decides where the lines end up.

pub mod error;
pub mod feedback;
pub mod power;

pub mod light;
pub mod thermostat;
