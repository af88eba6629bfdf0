use thiserror::Error;

/// Errors that can occur when working with segment cache trees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentCacheError {
    /// A dynamic segment declared a parameter kind this crate does not know
    #[error("Unknown dynamic parameter kind: {0}")]
    UnknownParamKind(String),
}
