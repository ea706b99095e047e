//src/options.rs

/// Organism counted by default: Homo sapiens.
pub const HOMO_SAPIENS_TAXID: &str = "9606";

/// How the distinct gene types are listed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryOrder {
    /// Order of first appearance in the file.
    #[default]
    FirstSeen,
    /// Lexicographic.
    Sorted,
}

/// Settings for the gene-info aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneInfoOptions {
    /// Value of column 0 counted as the target organism.
    pub target_taxid: String,
    pub category_order: CategoryOrder,
}

impl Default for GeneInfoOptions {
    fn default() -> Self {
        Self {
            target_taxid: HOMO_SAPIENS_TAXID.to_string(),
            category_order: CategoryOrder::default(),
        }
    }
}

impl GeneInfoOptions {
    pub fn with_target_taxid(mut self, taxid: impl Into<String>) -> Self {
        self.target_taxid = taxid.into();
        self
    }

    pub fn with_category_order(mut self, order: CategoryOrder) -> Self {
        self.category_order = order;
        self
    }
}

/// Which blank lines the structural scan tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Any blank line is a violation.
    #[default]
    Reject,
    /// A blank line is accepted when the next line is a header or the file ends.
    AllowBeforeHeader,
}

/// Settings for the FASTA pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FastaOptions {
    pub blank_lines: BlankLinePolicy,
    /// Fail on the first invalid entry instead of partitioning.
    pub abort_on_invalid: bool,
}

impl FastaOptions {
    pub fn with_blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = policy;
        self
    }

    pub fn with_abort_on_invalid(mut self, abort: bool) -> Self {
        self.abort_on_invalid = abort;
        self
    }
}
