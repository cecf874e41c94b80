//! Error types and the `ErrorHandler` collaborator boundary.
//!
//! Degrading errors (kinds 1-4) are routed through an [`ErrorHandler`]:
//! [`StrictHandler`] turns every call into an abort, [`LenientHandler`]
//! records and continues. Invariant violations (kinds 5-6) are
//! [`BugError`] and never go through the handler — they always abort,
//! regardless of mode.

use std::fmt;

use crate::core::error_codes::{
    LOCAL_POSITION_COLLISION, LOCAL_POSITION_COLLISION_MSG, MISSING_FILE_ENTRY,
    MISSING_FILE_ENTRY_MSG, MISSING_PACKAGE_NAME_SYMBOL, MISSING_PACKAGE_NAME_SYMBOL_MSG,
    UNKNOWN_PACKAGE_ENTITY, UNKNOWN_PACKAGE_ENTITY_MSG, UNRESOLVED_IDENTIFIER,
    UNRESOLVED_IDENTIFIER_MSG, UNRESOLVED_IMPORT, UNRESOLVED_IMPORT_MSG,
};
use crate::model::Position;

/// A degrading error: the document loses an occurrence, but stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexError {
    pub error_code: &'static str,
    pub kind: IndexErrorKind,
    pub message: String,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexErrorKind {
    /// An import path does not resolve to a loaded package.
    UnresolvedImport { path: String },
    /// A resolved package has no package-name symbol.
    MissingPackageNameSymbol,
    /// An identifier has neither a definition nor a use entry.
    UnresolvedIdentifier { name: String },
    /// An entity's owning package is not in the load set.
    UnknownPackageEntity { name: String },
}

impl IndexError {
    fn new(
        error_code: &'static str,
        kind: IndexErrorKind,
        message: impl Into<String>,
        position: Option<Position>,
    ) -> Self {
        Self {
            error_code,
            kind,
            message: message.into(),
            position,
        }
    }

    pub fn unresolved_import(path: impl Into<String>, position: Position) -> Self {
        let path = path.into();
        Self::new(
            UNRESOLVED_IMPORT,
            IndexErrorKind::UnresolvedImport { path: path.clone() },
            format!("{UNRESOLVED_IMPORT_MSG}: '{path}'"),
            Some(position),
        )
    }

    pub fn missing_package_name_symbol(position: Position) -> Self {
        Self::new(
            MISSING_PACKAGE_NAME_SYMBOL,
            IndexErrorKind::MissingPackageNameSymbol,
            MISSING_PACKAGE_NAME_SYMBOL_MSG,
            Some(position),
        )
    }

    pub fn unresolved_identifier(name: impl Into<String>, position: Position) -> Self {
        let name = name.into();
        Self::new(
            UNRESOLVED_IDENTIFIER,
            IndexErrorKind::UnresolvedIdentifier { name: name.clone() },
            format!("{UNRESOLVED_IDENTIFIER_MSG}: '{name}'"),
            Some(position),
        )
    }

    pub fn unknown_package_entity(name: impl Into<String>, position: Position) -> Self {
        let name = name.into();
        Self::new(
            UNKNOWN_PACKAGE_ENTITY,
            IndexErrorKind::UnknownPackageEntity { name: name.clone() },
            format!("{UNKNOWN_PACKAGE_ENTITY_MSG}: '{name}'"),
            Some(position),
        )
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code, self.message)?;
        if let Some(pos) = &self.position {
            write!(f, " (line {}, col {})", pos.line, pos.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for IndexError {}

/// An invariant violation: the visitor's internal bookkeeping is broken.
/// Always fatal, even in lenient mode.
#[derive(Debug, Clone, PartialEq)]
pub struct BugError {
    pub error_code: &'static str,
    pub message: String,
}

impl BugError {
    pub fn local_position_collision(position: Position) -> Self {
        Self {
            error_code: LOCAL_POSITION_COLLISION,
            message: format!(
                "{LOCAL_POSITION_COLLISION_MSG} at line {}, col {}",
                position.line, position.column
            ),
        }
    }

    pub fn missing_file_entry(relative_path: impl Into<String>) -> Self {
        Self {
            error_code: MISSING_FILE_ENTRY,
            message: format!("{MISSING_FILE_ENTRY_MSG}: '{}'", relative_path.into()),
        }
    }
}

impl fmt::Display for BugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code, self.message)
    }
}

impl std::error::Error for BugError {}

/// The error-handler collaborator: `err_or_panic` in the design notes.
///
/// Strict implementations abort on every call; lenient ones record the
/// error and return it so the caller can skip the offending identifier.
/// Every call site handles the returned error the same way regardless of
/// mode — by skipping the emission that triggered it.
pub trait ErrorHandler {
    fn err_or_panic(&mut self, error: IndexError) -> Option<IndexError>;

    fn errors(&self) -> &[IndexError];
}

/// Aborts the run on the first degrading error.
#[derive(Debug, Default)]
pub struct StrictHandler;

impl ErrorHandler for StrictHandler {
    fn err_or_panic(&mut self, error: IndexError) -> Option<IndexError> {
        panic!("{error}");
    }

    fn errors(&self) -> &[IndexError] {
        &[]
    }
}

/// Records every degrading error and lets the run continue.
#[derive(Debug, Default)]
pub struct LenientHandler {
    recorded: Vec<IndexError>,
}

impl ErrorHandler for LenientHandler {
    fn err_or_panic(&mut self, error: IndexError) -> Option<IndexError> {
        self.recorded.push(error.clone());
        Some(error)
    }

    fn errors(&self) -> &[IndexError] {
        &self.recorded
    }
}
