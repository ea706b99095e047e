pub mod classify;
pub mod gc;
pub mod parser;
pub mod structure;

pub use classify::{classify, classify_entry, classify_strict, ClassifiedEntries};
pub use gc::gc_fraction;
pub use parser::{parse_entries, parse_reader, FastaParser};
pub use structure::{validate_structure, StructureScanner};
