//src/gene_info.rs

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::input::{open_input, read_lines};
use crate::options::GeneInfoOptions;
use crate::types::GeneTypeTally;

/// Rows with fewer fields than this are skipped.
pub const MIN_COLUMNS: usize = 10;
/// Column holding the organism's taxonomic id.
pub const TAXID_COLUMN: usize = 0;
/// Column holding the gene type.
pub const GENE_TYPE_COLUMN: usize = 9;

/// Aggregate of one pass over a gene-info table.
#[derive(Debug, Clone, Default)]
pub struct GeneInfoSummary {
    /// Every line read, malformed or not.
    pub total_rows: u64,
    /// Rows whose taxid column matched the target organism.
    pub species_count: u64,
    pub category_tally: GeneTypeTally,
    /// Distinct categories in order of first appearance.
    pub categories: Vec<String>,
    /// One message per malformed row, in file order.
    pub warnings: Vec<String>,
}

impl GeneInfoSummary {
    pub fn malformed_rows(&self) -> u64 {
        self.warnings.len() as u64
    }

    pub fn well_formed_rows(&self) -> u64 {
        self.total_rows - self.malformed_rows()
    }

    /// Category with the highest count. Ties go to the lexicographically
    /// smallest category, so the answer does not depend on hash order.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        most_frequent(&self.category_tally)
    }

    /// Fold one raw line (terminator already removed) into the summary.
    pub fn push_line(&mut self, line: &str, target_taxid: &str) {
        self.total_rows += 1;
        let line_no = self.total_rows;

        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < MIN_COLUMNS {
            log::debug!("line {line_no}: {} columns, skipping", columns.len());
            self.warnings.push(format!(
                "Warning: Line {line_no} has less than {MIN_COLUMNS} columns."
            ));
            return;
        }

        if columns[TAXID_COLUMN] == target_taxid {
            self.species_count += 1;
        }

        let gene_type = columns[GENE_TYPE_COLUMN];
        match self.category_tally.get_mut(gene_type) {
            Some(count) => *count += 1,
            None => {
                self.category_tally.insert(gene_type.to_string(), 1);
                self.categories.push(gene_type.to_string());
            }
        }
    }
}

/// See [`GeneInfoSummary::most_frequent`].
pub fn most_frequent(tally: &GeneTypeTally) -> Option<(&str, u64)> {
    tally
        .iter()
        .max_by(|(ka, va), (kb, vb)| va.cmp(vb).then_with(|| kb.cmp(ka)))
        .map(|(k, &v)| (k.as_str(), v))
}

/// Aggregate an in-memory line sequence. Lines must not carry terminators.
pub fn aggregate<I, S>(lines: I, options: &GeneInfoOptions) -> GeneInfoSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = GeneInfoSummary::default();
    for line in lines {
        summary.push_line(line.as_ref(), &options.target_taxid);
    }
    summary
}

/// Stream a reader through the aggregator. Only I/O failures are errors;
/// short rows end up in `warnings`.
pub fn aggregate_reader<R: BufRead>(
    reader: R,
    options: &GeneInfoOptions,
) -> Result<GeneInfoSummary> {
    let mut summary = GeneInfoSummary::default();
    for line_result in read_lines(reader) {
        let line = line_result?;
        summary.push_line(&line, &options.target_taxid);
    }
    log::info!(
        "aggregated {} rows ({} malformed, {} gene types)",
        summary.total_rows,
        summary.malformed_rows(),
        summary.category_tally.len()
    );
    Ok(summary)
}

/// Open `path` and aggregate it.
pub fn aggregate_file<P: AsRef<Path>>(
    path: P,
    options: &GeneInfoOptions,
) -> Result<GeneInfoSummary> {
    let reader = open_input(path)?;
    aggregate_reader(reader, options)
}
