//! # homeremote-app
//!
//! Application layer: the Command pattern around the domain devices.
//!
//! ## Responsibilities
//! - Define the [`command::Command`] trait and its variants (light on/off,
//!   thermostat on/off/increase/decrease, macro, no-op)
//! - Provide the [`remote_control::RemoteControl`] invoker with seven slots
//!   and a single-level undo
//! - Wire the standard home (devices → commands → slots) in [`loader`]
//! - Run the line-oriented console [`session`] over any `BufRead`
//!
//! ## Dependency rule
//! Depends on `homeremote-domain` only. Never touches stdin/stdout directly;
//! the binary injects the reader and the feedback sink.

pub mod command;
pub mod loader;
pub mod remote_control;
pub mod session;
