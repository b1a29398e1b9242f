//! Core domain logic - argument classification and goto-target parsing

pub mod classify;
pub mod target;

pub use classify::{classify, Route, GOTO_FLAG, SENTINEL_FLAG};
pub use target::{strip_quotes, GotoTarget};
