//! Unity Relay Library
//!
//! A relay registered as Unity's external script editor. Invocations carrying
//! the goto flag are rewritten for a running Emacs server; everything else is
//! forwarded untouched to a fallback editor. Either way the relay execs the
//! downstream program and disappears.

// Module declarations
pub mod common;
pub mod config;
pub mod core;
pub mod launch;

// Re-export main entry points
pub use common::error::{Error, Result};
pub use config::Settings;
pub use core::{classify, GotoTarget, Route};
pub use launch::{plan_invocation, replace, LaunchPlan};
