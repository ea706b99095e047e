use crate::error::{Result, SeqTallyError};

/// Fraction of G/C bases (either case) in `sequence`, in `[0, 1]`.
///
/// Every character counts toward the length, so ambiguity codes such as `N`
/// (or any non-ASCII residue) lower the fraction. An empty sequence has no defined GC content and is
/// rejected; classified-valid entries never hit that case.
pub fn gc_fraction(sequence: &str) -> Result<f64> {
    let (gc, len) = sequence.chars().fold((0usize, 0usize), |(gc, len), c| {
        (gc + matches!(c, 'G' | 'C' | 'g' | 'c') as usize, len + 1)
    });
    if len == 0 {
        return Err(SeqTallyError::EmptySequence);
    }
    Ok(gc as f64 / len as f64)
}
