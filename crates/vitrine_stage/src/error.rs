//! Stage error types

use thiserror::Error;

/// Errors surfaced at the stage API boundary
///
/// Animation-time failure modes (missing targets, dead sinks) are silent
/// no-ops and never reach this enum; only caller misuse does.
#[derive(Debug, Error)]
pub enum StageError {
    /// No element is registered under the given string id
    #[error("no element registered under id '{0}'")]
    UnknownElement(String),
}
