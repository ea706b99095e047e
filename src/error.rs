//src/error.rs

use std::path::PathBuf;

use crate::types::ValidationOutcome;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeqTallyError>;

/// Whole-file failures. Per-row and per-entry defects are not errors;
/// they are collected as warnings / outcomes instead.
#[derive(thiserror::Error, Debug)]
pub enum SeqTallyError {
    /// A blank line, or sequence data right after a blank line.
    #[error("Invalid FASTA structure at line {line}: {content:?}")]
    StructuralViolation { line: usize, content: String },

    /// Only raised when aborting on the first invalid entry is enabled.
    #[error("Invalid FASTA entry {identifier:?}: {outcome}")]
    InvalidEntry {
        identifier: String,
        outcome: ValidationOutcome,
    },

    /// GC content requested for a zero-length sequence.
    #[error("Cannot compute GC content of an empty sequence")]
    EmptySequence,

    #[error("Could not compute digest of {}: {source}", .path.display())]
    DigestUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
