//! Headless host for the clinic game.
//!
//! Wires `clinic-content` data and the stand-in collaborators in
//! [`headless`] into a [`clinic_core::TurnOrchestrator`] and lets the
//! [`autoplay`] loop press the buttons.

pub mod autoplay;
pub mod config;
pub mod headless;
pub mod logging;

pub use autoplay::{SessionSummary, autoplay};
pub use config::ClientConfig;
pub use headless::{HeadlessFactory, log_views};
