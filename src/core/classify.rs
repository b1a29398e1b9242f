//! Argument classification: which downstream form an invocation takes.

use super::target::GotoTarget;
use crate::common::prelude::*;

/// The goto flag: "open the file at this location".
pub const GOTO_FLAG: &str = "-g";

/// Marker identifying the calling build tool; never forwarded downstream.
pub const SENTINEL_FLAG: &str = "--from-unity";

/// Which downstream invocation to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Editor-server form: open FILE[:LINE] in the running Emacs server.
    Server(GotoTarget),

    /// Generic editor form: forward the invocation, sentinel removed.
    Fallback(Vec<String>),
}

/// Classify an invocation (the arguments after the binary name).
///
/// The goto flag is matched exactly, and when it repeats the *last*
/// occurrence decides the target, including deciding that the target is
/// missing when the last `-g` is the final argument. Without `-g`,
/// everything is forwarded in its original order minus the sentinel flag.
pub fn classify(args: &[String]) -> Result<Route> {
    if let Some(flag_index) = args.iter().rposition(|arg| arg == GOTO_FLAG) {
        let token = args.get(flag_index + 1).ok_or(Error::MissingTarget)?;
        let target = GotoTarget::parse(token)?;
        debug!(goto = %target.display(), "classified as editor-server form");
        return Ok(Route::Server(target));
    }

    let forwarded: Vec<String> = args
        .iter()
        .filter(|arg| *arg != SENTINEL_FLAG)
        .cloned()
        .collect();
    debug!(
        forwarded = forwarded.len(),
        "classified as generic editor form"
    );
    Ok(Route::Fallback(forwarded))
}
