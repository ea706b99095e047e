use crate::error::{Result, SeqTallyError};
use crate::types::{FastaEntry, InvalidEntry, ValidationOutcome};

/// Entries split by validity. Both sides keep file order.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedEntries {
    pub valid: Vec<FastaEntry>,
    pub invalid: Vec<InvalidEntry>,
}

impl ClassifiedEntries {
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// One explanation per invalid entry, in file order.
    pub fn explanations(&self) -> Vec<String> {
        self.invalid.iter().map(InvalidEntry::explanation).collect()
    }
}

/// Identifier is checked first, then the sequence.
pub fn classify_entry(entry: &FastaEntry) -> ValidationOutcome {
    if entry.identifier.trim().is_empty() {
        ValidationOutcome::InvalidIdentifier
    } else if entry.sequence.is_empty() {
        ValidationOutcome::InvalidSequence
    } else {
        ValidationOutcome::Valid
    }
}

/// Partition every entry; an invalid one never stops the rest.
pub fn classify<I>(entries: I) -> ClassifiedEntries
where
    I: IntoIterator<Item = FastaEntry>,
{
    let mut out = ClassifiedEntries::default();
    for entry in entries {
        let outcome = classify_entry(&entry);
        if outcome.is_valid() {
            out.valid.push(entry);
        } else {
            let invalid = InvalidEntry { entry, outcome };
            log::info!("line {}: {}", invalid.entry.header_line, invalid.explanation());
            out.invalid.push(invalid);
        }
    }
    out
}

/// Like [`classify`], but the first invalid entry is an error.
pub fn classify_strict<I>(entries: I) -> Result<Vec<FastaEntry>>
where
    I: IntoIterator<Item = FastaEntry>,
{
    entries
        .into_iter()
        .map(|entry| match classify_entry(&entry) {
            ValidationOutcome::Valid => Ok(entry),
            outcome => Err(SeqTallyError::InvalidEntry {
                identifier: entry.identifier,
                outcome,
            }),
        })
        .collect()
}
