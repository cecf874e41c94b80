//! Serves symbol lookups across package boundaries.
//!
//! The index is append-only and populated strictly in topological order of
//! imports ([`graph::PackageGraph`]): a package's contribution is frozen
//! the moment minting finishes for it, and publication never races a
//! reader, because a package is only read once all of its own imports are
//! already published.

pub mod graph;

use std::collections::HashMap;

use crate::loader::Entity;
use crate::minter::PackageSymbolTable;
use crate::model::{PackageId, Position, Symbol};

pub use graph::{ImportCycleError, PackageGraph};

/// Result of resolving an entity referenced from another package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolLookup {
    Found(Symbol),
    /// The entity is a predeclared builtin — not an error, handled
    /// separately by the file visitor.
    NotFound,
    /// The entity's owning package was never minted (not in the load
    /// set). Callers surface this through the error handler.
    UnknownPackage,
}

#[derive(Debug, Default)]
pub struct GlobalIndex {
    packages: HashMap<PackageId, PackageSymbolTable>,
}

impl GlobalIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes a package's minted symbols into the index. Called once per
    /// package, after [`crate::minter::SymbolMinter::mint_package`]
    /// succeeds and every package it imports has already been published.
    pub fn publish(&mut self, package: PackageId, table: PackageSymbolTable) {
        tracing::debug!(%package, symbols = table.len(), "publishing package into global index");
        self.packages.insert(package, table);
    }

    pub fn is_published(&self, package: &PackageId) -> bool {
        self.packages.contains_key(package)
    }

    /// The published symbol table for `package`, if any — the file visitor's
    /// view of a package it is about to walk, once minting and publication
    /// have both completed for it.
    pub fn package_table(&self, package: &PackageId) -> Option<&PackageSymbolTable> {
        self.packages.get(package)
    }

    /// Looks up the symbol assigned at a declaring position within
    /// `package`.
    pub fn get_symbol(&self, package: &PackageId, position: Position) -> Option<Symbol> {
        self.packages.get(package)?.symbol_at(position).cloned()
    }

    /// Resolves an entity referenced from another package by its owning
    /// package and declaring position.
    pub fn get_symbol_of_entity(&self, entity: &Entity) -> SymbolLookup {
        if entity.is_builtin() {
            return SymbolLookup::NotFound;
        }
        match self.packages.get(&entity.owner_package) {
            Some(table) => match table.symbol_of_entity(entity.id) {
                Some(symbol) => SymbolLookup::Found(symbol.clone()),
                None => SymbolLookup::NotFound,
            },
            None => SymbolLookup::UnknownPackage,
        }
    }

    /// The symbol used when `package`'s import path is written as a
    /// qualifier.
    pub fn get_package_name_symbol(&self, package: &PackageId) -> Option<Symbol> {
        self.packages
            .get(package)
            .map(|t| t.package_name_symbol().clone())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
