use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("walk length must be non-negative, got {0}")]
    NegativeLength(i64),

    #[error("walk length {0} does not fit in usize")]
    LengthOverflow(i64),

    #[error("unknown restart policy: {0:?} (expected \"restart\" or \"stall\")")]
    UnknownPolicy(String),
}
