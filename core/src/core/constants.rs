/// Canonical short language tag used on every emitted [`crate::model::Document`].
///
/// This indexer front-ends a statically-typed, package-based language; Go
/// is the target language.
pub const DEFAULT_LANGUAGE_TAG: &str = "go";

/// Default `scheme` component of the symbol-string grammar.
pub const DEFAULT_SCHEME: &str = "scip";

/// Default `manager` component of the symbol-string grammar.
///
/// Identifies which package manager's namespace `package-name` lives in.
pub const DEFAULT_MANAGER: &str = "gomod";

/// Separator used between descriptors' `name/` (namespace) segments is
/// implicit in the suffix; this is the separator used when rendering a
/// human-facing qualified name, distinct from the wire grammar.
pub const DISPLAY_PATH_SEPARATOR: &str = ".";
