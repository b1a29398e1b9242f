//! Launch plans: the concrete program + argument vector for each route.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::common::prelude::*;
use crate::config::{FallbackSettings, ServerSettings, Settings};
use crate::core::{classify, GotoTarget, Route};

/// A fully resolved downstream invocation, ready to replace this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Binary to execute.
    pub program: PathBuf,

    /// Arguments after the binary name, byte-exact.
    pub args: Vec<OsString>,
}

impl LaunchPlan {
    /// Editor-server invocation: `emacsclient [+LINE] <extra args> FILE`.
    ///
    /// The line argument leads so later arguments cannot shadow it, and the
    /// file comes last where emacsclient expects it.
    pub fn server(target: &GotoTarget, settings: &ServerSettings) -> LaunchPlan {
        let mut args: Vec<OsString> = Vec::with_capacity(settings.extra_args.len() + 2);
        if let Some(line) = &target.line {
            args.push(format!("+{line}").into());
        }
        args.extend(settings.extra_args.iter().map(OsString::from));
        args.push(target.file.clone().into());

        LaunchPlan {
            program: settings.resolved_program(),
            args,
        }
    }

    /// Generic editor invocation: `sh <editor> <extra args> <forwarded>`.
    ///
    /// The editor launcher goes through the shell so that script launchers
    /// (the common case for desktop editors) run without an exec loader.
    pub fn fallback(forwarded: Vec<String>, settings: &FallbackSettings) -> LaunchPlan {
        let mut args: Vec<OsString> =
            Vec::with_capacity(settings.extra_args.len() + forwarded.len() + 1);
        // The editor path keeps its exact bytes even when not valid UTF-8.
        args.push(settings.resolved_program().into_os_string());
        args.extend(settings.extra_args.iter().map(OsString::from));
        args.extend(forwarded.into_iter().map(OsString::from));

        LaunchPlan {
            program: settings.shell.clone(),
            args,
        }
    }

    /// The full argument vector, program first, rendered for logging and
    /// diagnostics. Rendering is lossy for non-UTF-8 elements; the exec
    /// receives the exact bytes.
    pub fn to_argv(&self) -> Vec<String> {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Classify an invocation and resolve it into a launch plan.
pub fn plan_invocation(args: &[String], settings: &Settings) -> Result<LaunchPlan> {
    let plan = match classify(args)? {
        Route::Server(target) => LaunchPlan::server(&target, &settings.server),
        Route::Fallback(forwarded) => LaunchPlan::fallback(forwarded, &settings.fallback),
    };
    Ok(plan)
}
