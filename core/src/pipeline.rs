//! Ties the four stages together: mint every package (independent of one
//! another, so this stage runs as coarse-grained parallel workers per §5),
//! then publish and visit each one in import order so the file visitor
//! never has to special-case a same-package reference against a
//! cross-package one.

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;

use crate::config::IndexerConfig;
use crate::error::{BugError, ErrorHandler};
use crate::index::{GlobalIndex, ImportCycleError, PackageGraph};
use crate::loader::Package;
use crate::minter::{PackageSymbolTable, SymbolMinter};
use crate::model::Document;
use crate::model::PackageId;
use crate::visitor::FileVisitor;

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    ImportCycle(ImportCycleError),
    Bug(BugError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::ImportCycle(e) => write!(f, "import cycle: {:?}", e.cycle),
            PipelineError::Bug(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ImportCycleError> for PipelineError {
    fn from(e: ImportCycleError) -> Self {
        PipelineError::ImportCycle(e)
    }
}

impl From<BugError> for PipelineError {
    fn from(e: BugError) -> Self {
        PipelineError::Bug(e)
    }
}

/// Indexes every package in `packages`, in import order.
///
/// Minting has no cross-package dependency — it only reads one package's
/// own declarations — so every package is minted concurrently before any
/// publication happens. A package whose minting fails (per
/// [`crate::minter::SymbolMinter`]'s "failure" rule) is logged and skipped;
/// the rest of the load set still gets indexed. Publication and file
/// visiting then proceed single-threaded per package, strictly in
/// topological order, so a cycle in the import graph or an internal
/// invariant violation while visiting a file aborts the whole run.
pub fn run(
    config: &IndexerConfig,
    packages: &[Package],
    error_handler: &mut dyn ErrorHandler,
) -> Result<Vec<Document>, PipelineError> {
    let mut graph = PackageGraph::new();
    for package in packages {
        graph.add_package(package.id.clone());
        for imported in package.imports.values() {
            graph.add_import(package.id.clone(), imported.clone());
        }
    }
    let order = graph.topological_order()?;

    let by_id: HashMap<_, _> = packages.iter().map(|p| (p.id.clone(), p)).collect();
    let minter = SymbolMinter::new(&config.scheme, &config.manager);

    let mut minted: HashMap<PackageId, PackageSymbolTable> = packages
        .par_iter()
        .filter_map(|package| match minter.mint_package(package) {
            Ok(table) => Some((package.id.clone(), table)),
            Err(err) => {
                tracing::warn!(package = %package.id, error = %err, "skipping package: mint failed");
                None
            }
        })
        .collect();

    let mut index = GlobalIndex::new();
    let mut documents = Vec::new();

    for package_id in order {
        let Some(package) = by_id.get(&package_id) else {
            // Imported but never loaded — the visitor reports this per
            // file via `unresolved_import` when it tries to resolve the
            // import spec; nothing to mint here.
            continue;
        };
        let Some(table) = minted.remove(&package_id) else {
            // Minting failed for this package; already logged above.
            continue;
        };

        index.publish(package_id.clone(), table);
        let table_ref = index
            .package_table(&package_id)
            .expect("just published above");

        for file in &package.files {
            let document =
                FileVisitor::new(&config.language_tag, package, table_ref, &index, error_handler)
                    .visit(file)?;
            documents.push(document);
        }
    }

    Ok(documents)
}
