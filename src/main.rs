//! Unity Relay - the external script editor binary Unity invokes
//!
//! This is the binary entry point. All logic lives in the library.

use unity_relay::common::logging;
use unity_relay::common::prelude::*;
use unity_relay::config::Settings;
use unity_relay::launch;

fn main() {
    // Logging is opt-in and file-only; a failed setup must not block or
    // pollute the handoff, so the error is dropped.
    let _ = logging::init();

    let args = match collect_args() {
        Ok(args) => args,
        Err(err) => fail(err),
    };
    debug!(?args, "relay invoked");

    let settings = Settings::load();

    let plan = match launch::plan_invocation(&args, &settings) {
        Ok(plan) => plan,
        Err(err) => fail(err),
    };

    info!(argv = ?plan.to_argv(), "replacing process with editor");
    fail(launch::replace(&plan))
}

/// Collect the invocation after the binary name.
///
/// `std::env::args` panics on non-UTF-8 arguments; those are rejected here
/// as a normal usage error instead.
fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| arg.into_string().map_err(Error::non_unicode_argument))
        .collect()
}

/// Report a fatal error on the relay's single stderr line and exit non-zero.
fn fail(err: Error) -> ! {
    if err.is_usage() {
        warn!("{err}");
    } else {
        error!("{err}");
    }
    eprintln!("{err}");
    std::process::exit(1);
}
