//! Process replacement: hand this process over to the planned editor.

use std::process::Command;

use crate::common::prelude::*;

use super::plan::LaunchPlan;

/// Replace the current process image with the planned invocation.
///
/// On success this never returns; the returned error always means the
/// replacement failed and the caller should exit.
#[cfg(unix)]
pub fn replace(plan: &LaunchPlan) -> Error {
    use std::os::unix::process::CommandExt;

    let err = Command::new(&plan.program).args(&plan.args).exec();
    Error::spawn(&plan.program, err)
}

/// Spawn-and-wait stand-in for platforms without `exec`.
///
/// Exits with the child's status so callers observe the same contract as
/// the Unix path: control never comes back after a successful launch.
#[cfg(not(unix))]
pub fn replace(plan: &LaunchPlan) -> Error {
    match Command::new(&plan.program).args(&plan.args).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(err) => Error::spawn(&plan.program, err),
    }
}
