use thiserror::Error;

/// The engine itself never fails for well-formed string inputs; the only
/// signaled condition is a contract violation at the integration boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
