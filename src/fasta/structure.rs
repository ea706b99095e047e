use crate::error::{Result, SeqTallyError};
use crate::options::BlankLinePolicy;

/// Line-level structural check that runs over a whole FASTA file before any
/// entry is assembled.
///
/// The only state carried between lines is whether the previous line was
/// blank. It starts out as "blank", so the first line has to be a header.
#[derive(Debug, Clone)]
pub struct StructureScanner {
    policy: BlankLinePolicy,
    prev_blank: bool,
    line_no: usize,
}

impl StructureScanner {
    pub fn new(policy: BlankLinePolicy) -> Self {
        Self {
            policy,
            prev_blank: true,
            line_no: 0,
        }
    }

    /// Number of lines checked so far.
    pub fn lines_seen(&self) -> usize {
        self.line_no
    }

    /// Check the next line (terminator already removed).
    pub fn check_line(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;
        let line = line.strip_suffix('\r').unwrap_or(line);
        let blank = line.is_empty();

        let violation = match self.policy {
            BlankLinePolicy::Reject => blank || (self.prev_blank && !line.starts_with('>')),
            BlankLinePolicy::AllowBeforeHeader => {
                !blank && self.prev_blank && !line.starts_with('>')
            }
        };
        if violation {
            log::debug!("structural violation at line {}: {:?}", self.line_no, line);
            return Err(SeqTallyError::StructuralViolation {
                line: self.line_no,
                content: line.to_string(),
            });
        }

        self.prev_blank = blank;
        Ok(())
    }
}

/// Scan every line, stopping at the first violation.
pub fn validate_structure<I, S>(lines: I, policy: BlankLinePolicy) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = StructureScanner::new(policy);
    for line in lines {
        scanner.check_line(line.as_ref())?;
    }
    Ok(())
}
