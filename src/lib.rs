// src/lib.rs
pub mod digest;
pub mod error;
pub mod fasta;
pub mod gene_info;
pub mod input;
pub mod options;
pub mod report;
pub mod types;

use std::path::Path;

pub use crate::error::{Result, SeqTallyError};
pub use crate::options::{BlankLinePolicy, CategoryOrder, FastaOptions, GeneInfoOptions};

use crate::digest::file_digest;
use crate::fasta::{
    classify, classify_strict, gc_fraction, parse_entries, parse_reader, validate_structure,
    StructureScanner,
};
use crate::gene_info::{aggregate_file, GeneInfoSummary};
use crate::input::{open_input, read_lines};
use crate::types::{EntryComposition, FastaEntry, InvalidEntry};

/// Outcome of the gene-info pipeline. Text is generated on demand.
pub struct GeneInfoResults {
    /// MD5 of the input file's bytes.
    pub digest: String,
    pub summary: GeneInfoSummary,
    pub category_order: CategoryOrder,
}

impl GeneInfoResults {
    pub fn get_report(&self) -> String {
        report::render_gene_info(&self.digest, &self.summary, self.category_order)
    }

    /// Warnings for malformed rows, in file order.
    pub fn warnings(&self) -> &[String] {
        &self.summary.warnings
    }
}

/// Outcome of the FASTA pipeline.
pub struct FastaResults {
    pub valid_entries: Vec<FastaEntry>,
    pub invalid_entries: Vec<InvalidEntry>,
    /// One per valid entry, same order.
    pub compositions: Vec<EntryComposition>,
}

impl FastaResults {
    pub fn get_report(&self) -> String {
        report::render_fasta(&self.compositions, &self.invalid_entries)
    }

    /// Why each invalid entry was rejected.
    pub fn explanations(&self) -> Vec<String> {
        self.invalid_entries.iter().map(InvalidEntry::explanation).collect()
    }
}

/// Tally a gene-info table and checksum it.
pub fn analyze_gene_info<P: AsRef<Path>>(
    path: P,
    options: &GeneInfoOptions,
) -> Result<GeneInfoResults> {
    let path = path.as_ref();
    log::info!("aggregating gene info from {}", path.display());

    let summary = aggregate_file(path, options)?;
    let digest = file_digest(path)?;

    Ok(GeneInfoResults {
        digest,
        summary,
        category_order: options.category_order,
    })
}

/// Full structural scan of the file. Nothing is parsed when this fails.
pub fn check_fasta_structure<P: AsRef<Path>>(path: P, policy: BlankLinePolicy) -> Result<usize> {
    let mut scanner = StructureScanner::new(policy);
    for line_result in read_lines(open_input(path)?) {
        scanner.check_line(&line_result?)?;
    }
    Ok(scanner.lines_seen())
}

/// Validate, parse, classify and compute GC content for a FASTA file.
pub fn analyze_fasta<P: AsRef<Path>>(path: P, options: &FastaOptions) -> Result<FastaResults> {
    let path = path.as_ref();

    // 1. Structural gate over the whole file
    let lines = check_fasta_structure(path, options.blank_lines)?;
    log::info!("{}: structure ok ({} lines)", path.display(), lines);

    // 2. Assemble entries (second pass)
    let entries = parse_reader(open_input(path)?)?;

    finish_fasta(entries, options)
}

/// Same pipeline as [`analyze_fasta`] over lines already in memory.
pub fn analyze_fasta_lines<S: AsRef<str>>(
    lines: &[S],
    options: &FastaOptions,
) -> Result<FastaResults> {
    validate_structure(lines, options.blank_lines)?;
    log::info!("structure ok ({} lines)", lines.len());

    finish_fasta(parse_entries(lines), options)
}

/// Classification and GC stages shared by both FASTA entry points.
fn finish_fasta(entries: Vec<FastaEntry>, options: &FastaOptions) -> Result<FastaResults> {
    let total = entries.len();

    // 3. Classify
    let (valid_entries, invalid_entries) = if options.abort_on_invalid {
        (classify_strict(entries)?, Vec::new())
    } else {
        let classified = classify(entries);
        (classified.valid, classified.invalid)
    };
    log::info!(
        "{} entries: {} valid, {} invalid",
        total,
        valid_entries.len(),
        invalid_entries.len()
    );

    // 4. GC content of valid entries only
    let compositions = valid_entries
        .iter()
        .map(|entry| {
            Ok(EntryComposition {
                identifier: entry.identifier.clone(),
                gc_fraction: gc_fraction(&entry.sequence)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FastaResults {
        valid_entries,
        invalid_entries,
        compositions,
    })
}
