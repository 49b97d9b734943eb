//! Error types for the form writer.
//!
//! Every fallible operation in the crate returns [`Result`]. Construction
//! errors (geometry, field configuration, field values) are raised by the
//! offending `add_widget`/`add_label` call before anything is allocated, so a
//! caller can fix the input and retry against the same builder.

use crate::object::ObjectRef;
use std::path::PathBuf;

/// Result type alias for form writer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or writing a form document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Widget bounds are degenerate or fall outside the page.
    #[error("Invalid geometry for '{field}': {reason}")]
    InvalidGeometry {
        /// Field name (or label text) the bounds belong to
        field: String,
        /// What is wrong with the bounds
        reason: String,
    },

    /// Field specification is malformed (empty options, name misuse, ...).
    #[error("Invalid configuration for field '{field}': {reason}")]
    InvalidFieldConfiguration {
        /// Offending field name
        field: String,
        /// What is wrong with the configuration
        reason: String,
    },

    /// Initial value is not allowed for the field.
    #[error("Invalid value for field '{field}': '{value}'")]
    InvalidFieldValue {
        /// Offending field name
        field: String,
        /// The rejected value
        value: String,
    },

    /// Reference to an object that was never registered.
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectRef),

    /// The object store ran out of object numbers.
    #[error("Object store exhausted: no object numbers left")]
    StoreExhausted,

    /// Mutation attempted after the document was finalized.
    #[error("Document already finalized")]
    DocumentFinalized,

    /// Writing the destination file failed.
    #[error("IO error writing '{}': {source}", path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Encoding objects into the output buffer failed.
    #[error("Encoding error: {0}")]
    Encode(#[from] std::io::Error),
}
