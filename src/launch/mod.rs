//! Resolving a classified invocation into a process and replacing ourselves with it.

pub mod exec;
pub mod plan;

pub use exec::replace;
pub use plan::{plan_invocation, LaunchPlan};
