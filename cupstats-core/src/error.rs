//! Engine error types
//!
//! Three outcome classes stay disjoint throughout the crate: expected
//! non-results (inconclusive days) are enum variants, data irregularities
//! are logged and skipped, and only genuine failures become `EngineError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration that would make every result misleading
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// A predicate referenced a metric the profile does not carry
    #[error("unknown metric `{0}`")]
    UnknownMetric(String),

    /// The persistence collaborator could not complete a read or write
    #[error("store error: {0}")]
    Store(String),
}
