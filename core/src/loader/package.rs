use std::collections::HashMap;

use crate::loader::ast::FileAst;
use crate::loader::declaration::Declaration;
use crate::loader::entity::Entity;
use crate::model::{PackageId, Position};

/// Declaring-position → resolved entity, as the upstream type-checker
/// recorded it.
pub type DefsMap = HashMap<Position, Entity>;

/// Using-position → resolved entity.
pub type UsesMap = HashMap<Position, Entity>;

/// Position of a type-switch case's narrowed binding → the synthetic
/// per-case entity the type-checker created for it.
pub type ImplicitsMap = HashMap<Position, Entity>;

/// One elaborated package, as the external package loader supplies it.
///
/// The core assumes elaboration is complete and consistent: every
/// declaring and using position in `files` that denotes a non-blank
/// identifier has a corresponding entry in `defs`, `uses`, or `implicits`.
#[derive(Debug, Clone)]
pub struct Package {
    pub id: PackageId,
    pub import_path: String,
    pub module_path: String,
    pub module_version: String,
    pub files: Vec<FileAst>,
    pub declarations: Vec<Declaration>,
    pub defs: DefsMap,
    pub uses: UsesMap,
    pub implicits: ImplicitsMap,
    /// Import path → the package it resolves to, for every package this
    /// one imports directly.
    pub imports: HashMap<String, PackageId>,
}

impl Package {
    pub fn declaration_at(&self, position: Position) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.position() == position)
    }
}
