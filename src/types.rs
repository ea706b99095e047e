//src/types.rs

use std::fmt;

use ahash::AHashMap;

/// Category (gene type) -> number of well-formed rows carrying it.
pub type GeneTypeTally = AHashMap<String, u64>;

/// One record of a FASTA file.
/// For example:
///  >NM_000518.5 HBB
///  ACATTTGCTTCTGACACAACTGTGTTCACTAGC
///  AACCTCAAACAGACACCATGGTGCATCTGACTCC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaEntry {
    pub identifier: String,   // everything after '>' up to end of line
    pub sequence: String,     // all following lines, concatenated
    pub header_line: usize,   // 1-based line number of the header
}

impl FastaEntry {
    pub fn new(identifier: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            sequence: sequence.into(),
            header_line: 0,
        }
    }
}

/// Result of checking a single entry. Produced once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// Identifier is empty or whitespace only.
    InvalidIdentifier,
    /// No sequence lines followed the header.
    InvalidSequence,
}

impl ValidationOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationOutcome::Valid => f.write_str("Entry is valid"),
            ValidationOutcome::InvalidIdentifier => f.write_str("Entry ID is invalid"),
            ValidationOutcome::InvalidSequence => f.write_str("Sequence is empty"),
        }
    }
}

/// Shown in place of the identifier when the identifier itself is missing.
pub const MISSING_IDENTIFIER: &str = "<missing identifier>";

/// An entry routed to the invalid partition, with the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub entry: FastaEntry,
    pub outcome: ValidationOutcome,
}

impl InvalidEntry {
    /// The trimmed identifier, or a placeholder when there is none.
    pub fn display_identifier(&self) -> &str {
        let id = self.entry.identifier.trim();
        if id.is_empty() {
            MISSING_IDENTIFIER
        } else {
            id
        }
    }

    /// Human-readable reason, e.g. `Sequence is empty (entry: Valid_1)`.
    pub fn explanation(&self) -> String {
        format!("{} (entry: {})", self.outcome, self.display_identifier())
    }
}

/// GC composition of one valid entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryComposition {
    pub identifier: String,
    pub gc_fraction: f64,
}

impl EntryComposition {
    pub fn gc_percent(&self) -> f64 {
        self.gc_fraction * 100.0
    }
}
