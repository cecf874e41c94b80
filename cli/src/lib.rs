//! Thin driver around the core: build (or accept) a load set, run the
//! pipeline, and reduce the resulting documents to a summary the binary can
//! print. No filesystem or network access of its own — the package loader
//! this crate feeds the pipeline is a bundled fixture, standing in for the
//! real Go front end.

mod fixture;

use scindex::error::{ErrorHandler, IndexError, LenientHandler, StrictHandler};
use scindex::{Document, IndexerConfig, PipelineError};

/// Reduction over a completed run, printed by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub occurrences: usize,
    pub symbols: usize,
    pub errors: Vec<String>,
}

impl Summary {
    fn from_documents(documents: &[Document], errors: &[IndexError]) -> Self {
        Self {
            documents: documents.len(),
            occurrences: documents.iter().map(|d| d.occurrences.len()).sum(),
            symbols: documents.iter().map(|d| d.symbols.len()).sum(),
            errors: errors.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Runs the bundled fixture load set through the pipeline and summarizes
/// the result.
///
/// `strict` selects [`StrictHandler`] (abort on the first degrading error)
/// versus [`LenientHandler`] (collect and continue).
pub fn run(strict: bool) -> Result<Summary, PipelineError> {
    let config = IndexerConfig::new(strict);
    let packages = fixture::load_set();

    if strict {
        let mut handler = StrictHandler;
        let documents = scindex::pipeline::run(&config, &packages, &mut handler)?;
        Ok(Summary::from_documents(&documents, handler.errors()))
    } else {
        let mut handler = LenientHandler::default();
        let documents = scindex::pipeline::run(&config, &packages, &mut handler)?;
        Ok(Summary::from_documents(&documents, handler.errors()))
    }
}
