use crate::core::constants::{DEFAULT_LANGUAGE_TAG, DEFAULT_MANAGER, DEFAULT_SCHEME};

/// In-memory knobs for one indexing run.
///
/// This is not a file-backed config loader — reading configuration from
/// disk is external to the core, same as the package loader and version
/// inferrer. Callers (the CLI, or any embedder) construct one of these
/// directly and pass it to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Selects `StrictHandler` (abort on first degrading error) versus
    /// `LenientHandler` (record and continue).
    pub strict: bool,
    /// Canonical short language tag stamped on every emitted document.
    pub language_tag: String,
    /// Leading `scheme` component of every global symbol.
    pub scheme: String,
    /// Leading `manager` component of every global symbol.
    pub manager: String,
}

impl IndexerConfig {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            language_tag: DEFAULT_LANGUAGE_TAG.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            manager: DEFAULT_MANAGER.to_string(),
        }
    }

    pub fn with_language_tag(mut self, language_tag: impl Into<String>) -> Self {
        self.language_tag = language_tag.into();
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_manager(mut self, manager: impl Into<String>) -> Self {
        self.manager = manager.into();
        self
    }
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_lenient_with_go_defaults() {
        let cfg = IndexerConfig::default();
        assert!(!cfg.strict);
        assert_eq!(cfg.language_tag, "go");
        assert_eq!(cfg.scheme, "scip");
        assert_eq!(cfg.manager, "gomod");
    }

    #[test]
    fn builder_methods_override_defaults() {
        let cfg = IndexerConfig::new(true).with_manager("custom");
        assert!(cfg.strict);
        assert_eq!(cfg.manager, "custom");
    }
}
