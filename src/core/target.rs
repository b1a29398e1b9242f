//! Goto-target parsing: the `FILE:LINE` token that follows the goto flag.

use crate::common::prelude::*;

/// A parsed goto target (file path, optional line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GotoTarget {
    /// File path with surrounding quotes and whitespace removed.
    pub file: String,

    /// Line exactly as given by the caller; `None` when the token ended in
    /// a bare colon. Not validated as numeric; the editor server gets it
    /// verbatim.
    pub line: Option<String>,
}

impl GotoTarget {
    /// Parse a `FILE:LINE` token.
    ///
    /// The split happens at the *last* colon: line numbers never contain
    /// colons, file paths can. Both halves are stripped of surrounding
    /// whitespace and quotes, which also repairs tokens where the caller
    /// quoted the whole `FILE:LINE` instead of just the path.
    ///
    /// An empty file half is passed through; only a missing colon is an
    /// error.
    pub fn parse(token: &str) -> Result<GotoTarget> {
        let Some((file, line)) = token.rsplit_once(':') else {
            return Err(Error::malformed_target(token));
        };

        let line = strip_quotes(line);
        Ok(GotoTarget {
            file: strip_quotes(file).to_string(),
            line: (!line.is_empty()).then(|| line.to_string()),
        })
    }

    /// Format as "path:line" for logging.
    pub fn display(&self) -> String {
        match &self.line {
            Some(line) => format!("{}:{}", self.file, line),
            None => self.file.clone(),
        }
    }
}

/// Remove any run of ASCII whitespace, `'` and `"` from both ends.
///
/// Unity adds single quotes when a path contains special characters such as
/// spaces; quotes can also be absent, doubled, or unbalanced. Stripping is
/// idempotent and never reads past either end.
pub fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\'' || c == '"')
}
