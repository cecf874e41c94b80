//! # Error Code System
//!
//! Centralized error codes for the six error kinds the indexer distinguishes.
//!
//! ## Ranges
//!
//! - **IDX0xx**: degrading errors — routed through [`crate::error::ErrorHandler`],
//!   recoverable in lenient mode.
//! - **IDX9xx**: invariant violations — always fatal, never routed through
//!   the error handler.

pub const UNRESOLVED_IMPORT: &str = "IDX001";
pub const UNRESOLVED_IMPORT_MSG: &str = "import path does not resolve to a loaded package";

pub const MISSING_PACKAGE_NAME_SYMBOL: &str = "IDX002";
pub const MISSING_PACKAGE_NAME_SYMBOL_MSG: &str = "no package-name symbol for resolved package";

pub const UNRESOLVED_IDENTIFIER: &str = "IDX003";
pub const UNRESOLVED_IDENTIFIER_MSG: &str = "identifier has neither a definition nor a use entry";

pub const UNKNOWN_PACKAGE_ENTITY: &str = "IDX004";
pub const UNKNOWN_PACKAGE_ENTITY_MSG: &str = "entity's owning package was not in the load set";

pub const LOCAL_POSITION_COLLISION: &str = "IDX901";
pub const LOCAL_POSITION_COLLISION_MSG: &str =
    "position already owns a local symbol (visitor re-entry)";

pub const MISSING_FILE_ENTRY: &str = "IDX902";
pub const MISSING_FILE_ENTRY_MSG: &str = "file set has no entry for this document's path";
