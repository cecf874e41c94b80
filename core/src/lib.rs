//! Builds a SCIP-style semantic index for one Go module: stable symbol
//! strings for every package-scope declaration, occurrences tying source
//! ranges to those symbols, and the document/symbol-information shapes an
//! interchange writer serializes.
//!
//! The crate assumes an external package loader has already elaborated the
//! module into [`loader::Package`] values with complete `defs`/`uses`
//! tables; [`pipeline::run`] is the entry point that mints, publishes, and
//! visits them in import order.

pub mod config;
pub mod core;
pub mod error;
pub mod index;
pub mod loader;
pub mod minter;
pub mod model;
pub mod pipeline;
pub mod visitor;

pub use config::IndexerConfig;
pub use error::{BugError, ErrorHandler, IndexError, LenientHandler, StrictHandler};
pub use model::{Document, Occurrence, PackageId, Symbol, SymbolInformation};
pub use pipeline::{run, PipelineError};
