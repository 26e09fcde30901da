//! # homeremote: console remote control
//!
//! Composition root that wires the devices, commands and remote control
//! together and runs the console session on stdin.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` (diagnostics go to stderr, the console UI owns stdout)
//! - Build the standard home through `homeremote_app::loader`
//! - Run the session until end of input
//!
//! ## Dependency rule
//! This is the **only** crate that touches stdin/stdout.
//! It is the wiring layer, no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use homeremote_app::loader::standard_home;
use homeremote_app::session::Session;
use homeremote_domain::feedback::{Feedback, SharedFeedback};
use tracing_subscriber::EnvFilter;

/// Prints every feedback line on stdout.
struct StdoutFeedback;

impl Feedback for StdoutFeedback {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

fn main() -> anyhow::Result<()> {
    let config = config::Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid logging filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = config.thermostat_settings();
    tracing::info!(?settings, "starting homeremote");

    let feedback: SharedFeedback = Arc::new(StdoutFeedback);
    let home = standard_home(&settings, &feedback).context("failed to wire the home")?;

    let mut session = Session::new(home.remote, feedback);
    session
        .run(std::io::stdin().lock())
        .context("console session failed")?;

    Ok(())
}
