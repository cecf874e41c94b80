//! Stable package handles, source positions and ranges, the symbol-string
//! grammar, and the occurrence/document shapes the rest of the pipeline
//! produces.

pub mod occurrence;
pub mod package_id;
pub mod position;
pub mod symbol;

pub use occurrence::{Document, Occurrence, Roles, SymbolInformation};
pub use package_id::PackageId;
pub use position::{FileId, Position, Range};
pub use symbol::{Descriptor, Suffix, Symbol, SymbolGrammarError};
