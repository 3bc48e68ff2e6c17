//! Error types for imgviz.
//!
//! Every failure is terminal for the current invocation; nothing is retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while reading serialized input
    #[error("Error reading input: {0}")]
    InputRead(String),

    /// Serialized input is not a valid image array
    #[error("Error reading JSON: {0}")]
    InputParse(String),

    /// The container engine could not be reached or queried
    #[error("{0}")]
    Connection(String),

    /// Start image query matched nothing
    #[error("Unable to find image {query} = {reference}.")]
    NotFound { query: String, reference: String },

    /// No output mode selected
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
