use std::io::BufRead;

use crate::error::Result;
use crate::input::read_lines;
use crate::types::FastaEntry;

/// Incremental FASTA entry assembler.
///
/// Feed lines with [`push_line`](Self::push_line); a finished entry is handed
/// back whenever the next header starts one. Call [`finish`](Self::finish)
/// after the last line to flush the final entry.
#[derive(Debug, Default)]
pub struct FastaParser {
    current: Option<FastaEntry>,
    line_no: usize,
    orphan_lines: usize,
}

impl FastaParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence lines seen before the first header. They belong to no entry.
    pub fn orphan_lines(&self) -> usize {
        self.orphan_lines
    }

    pub fn push_line(&mut self, line: &str) -> Option<FastaEntry> {
        self.line_no += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(identifier) = line.strip_prefix('>') {
            let next = FastaEntry {
                identifier: identifier.to_string(),
                sequence: String::new(),
                header_line: self.line_no,
            };
            return self.current.replace(next);
        }

        // whitespace anywhere in a sequence line is layout, not residue data
        if line.trim().is_empty() {
            return None;
        }
        match self.current.as_mut() {
            Some(entry) => entry.sequence.extend(line.split_whitespace()),
            None => {
                self.orphan_lines += 1;
                log::warn!("line {}: sequence data before the first header, ignored", self.line_no);
            }
        }
        None
    }

    pub fn finish(&mut self) -> Option<FastaEntry> {
        self.current.take()
    }
}

/// Assemble all entries from an in-memory line sequence, in file order.
pub fn parse_entries<I, S>(lines: I) -> Vec<FastaEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = FastaParser::new();
    let mut entries: Vec<FastaEntry> = lines
        .into_iter()
        .filter_map(|line| parser.push_line(line.as_ref()))
        .collect();
    entries.extend(parser.finish());
    entries
}

/// Assemble all entries from a reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<FastaEntry>> {
    let mut parser = FastaParser::new();
    let mut entries = Vec::new();
    for line_result in read_lines(reader) {
        let line = line_result?;
        if let Some(entry) = parser.push_line(&line) {
            log::debug!("parsed entry {:?} ({} bp)", entry.identifier, entry.sequence.len());
            entries.push(entry);
        }
    }
    entries.extend(parser.finish());
    Ok(entries)
}
