//src/report.rs

use std::fmt::Write as FmtWrite;

use crate::gene_info::GeneInfoSummary;
use crate::options::CategoryOrder;
use crate::types::{EntryComposition, InvalidEntry};

/// Text report for a gene-info table, e.g.:
/// ```text
/// MD5 Hash of the file: 05a6d4cebb961127eea12bb3f0104a40
/// Question 1: 50 genes in total
/// Question 2: 0 genes listed for homo sapiens
/// Question 3: type_of_gene, other, protein-coding, rRNA (all different gene types)
/// Question 4: Most frequent gene type: protein-coding, Amount of Times: 40
/// ```
pub fn render_gene_info(digest: &str, summary: &GeneInfoSummary, order: CategoryOrder) -> String {
    let mut categories: Vec<&str> = summary.categories.iter().map(String::as_str).collect();
    if order == CategoryOrder::Sorted {
        categories.sort_unstable();
    }

    let mut output = String::new();
    writeln!(output, "MD5 Hash of the file: {}", digest).unwrap();
    writeln!(output, "Question 1: {} genes in total", summary.total_rows).unwrap();
    writeln!(output, "Question 2: {} genes listed for homo sapiens", summary.species_count).unwrap();
    writeln!(output, "Question 3: {} (all different gene types)", categories.join(", ")).unwrap();
    writeln!(output, "Question 4: {}", most_frequent_line(summary)).unwrap();
    output
}

/// `Most frequent gene type: <type>, Amount of Times: <n>`
pub fn most_frequent_line(summary: &GeneInfoSummary) -> String {
    let (name, count) = summary.most_frequent().unwrap_or(("none", 0));
    format!("Most frequent gene type: {}, Amount of Times: {}", name, count)
}

/// Text report for a classified FASTA file. The invalid block is only
/// present when something was rejected.
pub fn render_fasta(compositions: &[EntryComposition], invalid: &[InvalidEntry]) -> String {
    let mut output = String::new();
    for comp in compositions {
        writeln!(output, "Entry ID: {}", comp.identifier).unwrap();
        writeln!(output, "GC Content Percentage: {:.10}%", comp.gc_percent()).unwrap();
        output.push('\n');
    }
    writeln!(output, "Total valid entries: {}", compositions.len()).unwrap();

    if !invalid.is_empty() {
        output.push('\n');
        for bad in invalid {
            writeln!(output, "Invalid FASTA entry found: {}", bad.display_identifier()).unwrap();
        }
        writeln!(output, "Total invalid entries: {}", invalid.len()).unwrap();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FastaEntry, GeneTypeTally, ValidationOutcome};

    fn summary(tally: &[(&str, u64)]) -> GeneInfoSummary {
        let mut category_tally = GeneTypeTally::new();
        for &(k, v) in tally {
            category_tally.insert(k.to_string(), v);
        }
        GeneInfoSummary {
            total_rows: tally.iter().map(|&(_, v)| v).sum(),
            species_count: 0,
            categories: tally.iter().map(|&(k, _)| k.to_string()).collect(),
            category_tally,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_most_frequent_line() {
        let s = summary(&[("A", 2), ("B", 3), ("C", 1)]);
        assert_eq!(most_frequent_line(&s), "Most frequent gene type: B, Amount of Times: 3");
        let empty = summary(&[]);
        assert_eq!(most_frequent_line(&empty), "Most frequent gene type: none, Amount of Times: 0");
    }

    #[test]
    fn test_gene_info_report_layout() {
        let s = summary(&[("type_of_gene", 1), ("other", 5), ("protein-coding", 40), ("rRNA", 4)]);
        let expected = "\
MD5 Hash of the file: 05a6d4cebb961127eea12bb3f0104a40
Question 1: 50 genes in total
Question 2: 0 genes listed for homo sapiens
Question 3: type_of_gene, other, protein-coding, rRNA (all different gene types)
Question 4: Most frequent gene type: protein-coding, Amount of Times: 40
";
        let digest = "05a6d4cebb961127eea12bb3f0104a40";
        assert_eq!(render_gene_info(digest, &s, CategoryOrder::FirstSeen), expected);

        let sorted = render_gene_info(digest, &s, CategoryOrder::Sorted);
        assert!(sorted.contains("Question 3: other, protein-coding, rRNA, type_of_gene (all"));
    }

    #[test]
    fn test_fasta_report_valid_only() {
        let comps = vec![
            EntryComposition { identifier: "A".into(), gc_fraction: 0.5 },
            EntryComposition { identifier: "B".into(), gc_fraction: 0.25 },
        ];
        let expected = "\
Entry ID: A
GC Content Percentage: 50.0000000000%

Entry ID: B
GC Content Percentage: 25.0000000000%

Total valid entries: 2
";
        assert_eq!(render_fasta(&comps, &[]), expected);
    }

    #[test]
    fn test_fasta_report_with_invalid() {
        let comps = vec![EntryComposition { identifier: "Valid_2".into(), gc_fraction: 0.5 }];
        let invalid = vec![InvalidEntry {
            entry: FastaEntry::new("", "ATCG"),
            outcome: ValidationOutcome::InvalidIdentifier,
        }];
        let expected = "\
Entry ID: Valid_2
GC Content Percentage: 50.0000000000%

Total valid entries: 1

Invalid FASTA entry found: <missing identifier>
Total invalid entries: 1
";
        assert_eq!(render_fasta(&comps, &invalid), expected);
    }

    #[test]
    fn test_reports_are_deterministic() {
        let s = summary(&[("x", 3), ("y", 3), ("z", 3)]);
        let first = render_gene_info("d", &s, CategoryOrder::FirstSeen);
        for _ in 0..5 {
            assert_eq!(render_gene_info("d", &s, CategoryOrder::FirstSeen), first);
        }
        assert!(first.ends_with("Most frequent gene type: x, Amount of Times: 3\n"));
    }
}
