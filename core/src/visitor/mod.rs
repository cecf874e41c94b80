//! Traverses one syntax tree, emitting occurrences and minting locals.
//!
//! A [`FileVisitor`] is built fresh per file: local-symbol counters and the
//! override maps are file-scoped and never carried across documents.

mod signature;

use std::collections::HashMap;

use crate::error::{BugError, ErrorHandler, IndexError};
use crate::index::{GlobalIndex, SymbolLookup};
use crate::loader::{Entity, EntityKind, FileAst, Ident, ImportSpec, Node, Package, TypeSwitchCase};
use crate::minter::PackageSymbolTable;
use crate::model::{Document, Occurrence, PackageId, Position, Range, Symbol, SymbolInformation};

pub use signature::local_signature;

/// What a use site resolved to, once local bindings and the global index
/// have both been consulted.
enum UseResolution {
    Symbol(Symbol, Option<String>),
    /// A predeclared builtin — resolved, but nothing to emit.
    Builtin,
    /// The entity's owning package was never minted.
    Unresolvable,
}

pub struct FileVisitor<'a> {
    language_tag: &'a str,
    package: &'a Package,
    package_table: &'a PackageSymbolTable,
    index: &'a GlobalIndex,
    error_handler: &'a mut dyn ErrorHandler,

    local_positions: HashMap<Position, Symbol>,
    local_symbols: Vec<SymbolInformation>,
    package_name_overrides: HashMap<PackageId, Symbol>,
    /// Declaring position of a case-clause binding → its narrowed-type
    /// rendering, consulted when a use resolves to that binding.
    case_override_docs: HashMap<Position, String>,
    next_local: u32,
}

impl<'a> FileVisitor<'a> {
    pub fn new(
        language_tag: &'a str,
        package: &'a Package,
        package_table: &'a PackageSymbolTable,
        index: &'a GlobalIndex,
        error_handler: &'a mut dyn ErrorHandler,
    ) -> Self {
        Self {
            language_tag,
            package,
            package_table,
            index,
            error_handler,
            local_positions: HashMap::new(),
            local_symbols: Vec::new(),
            package_name_overrides: HashMap::new(),
            case_override_docs: HashMap::new(),
            next_local: 0,
        }
    }

    /// Walks `file` and produces its document. Consumes the visitor: a new
    /// one must be built for the next file, per the file-scoped state above.
    pub fn visit(mut self, file: &FileAst) -> Result<Document, BugError> {
        tracing::debug!(file = %file.relative_path, "visiting file");

        let mut document = Document::new(self.language_tag, file.relative_path.clone());
        self.seed_package_occurrence(&mut document, file);

        for decl in &file.decls {
            self.visit_node(&mut document, decl)?;
        }

        document.sort_occurrences();

        let mut symbols = self.package_table.information_in_file(file.file);
        symbols.extend(self.local_symbols.drain(..));
        document.symbols = symbols;

        Ok(document)
    }

    fn seed_package_occurrence(&self, document: &mut Document, file: &FileAst) {
        let range = Range::single_line(
            file.package_name.position,
            file.package_name.name.len() as u32,
        );
        document.occurrences.push(Occurrence::definition(
            range,
            self.package_table.package_name_symbol().clone(),
        ));
    }

    fn visit_node(&mut self, document: &mut Document, node: &Node) -> Result<(), BugError> {
        match node {
            Node::ImportDecl(specs) => {
                for spec in specs {
                    self.visit_import_spec(document, spec)?;
                }
                Ok(())
            }
            Node::Selector { x, sel } => self.visit_selector(document, x, sel),
            Node::Identifier(ident) => self.visit_identifier(document, ident),
            Node::TypeSwitch(cases) => {
                for case in cases {
                    self.visit_type_switch_case(document, case)?;
                }
                Ok(())
            }
            Node::Other(children) => {
                for child in children {
                    self.visit_node(document, child)?;
                }
                Ok(())
            }
        }
    }

    fn visit_import_spec(&mut self, document: &mut Document, spec: &ImportSpec) -> Result<(), BugError> {
        let resolved = match self.package.imports.get(&spec.path) {
            Some(id) => id.clone(),
            None => {
                self.error_handler.err_or_panic(IndexError::unresolved_import(
                    spec.path.clone(),
                    spec.path_range.start,
                ));
                return Ok(());
            }
        };

        if !spec.is_dot_import() && !spec.is_blank_import() {
            if let Some(alias) = &spec.local_alias {
                let local = self.mint_local(alias.position)?;
                let range = Range::single_line(alias.position, alias.name.len() as u32);
                document
                    .occurrences
                    .push(Occurrence::definition(range, local.clone()));
                self.local_symbols.push(SymbolInformation {
                    symbol: local.clone(),
                    display_name: alias.name.clone(),
                    documentation: Some(local_signature("import", &alias.name, Some(&spec.path))),
                });
                self.package_name_overrides.insert(resolved.clone(), local);
            }
        }

        match self.index.get_package_name_symbol(&resolved) {
            Some(symbol) => {
                document
                    .occurrences
                    .push(Occurrence::reference(spec.path_range, symbol));
            }
            None => {
                self.error_handler
                    .err_or_panic(IndexError::missing_package_name_symbol(spec.path_range.start));
            }
        }

        Ok(())
    }

    /// `X.Sel` where `X` is a simple name: if `X` names an imported
    /// package, emit its qualifier reference and walk only `Sel` — never
    /// treat the package alias as an ordinary value identifier.
    fn visit_selector(&mut self, document: &mut Document, x: &Node, sel: &Node) -> Result<(), BugError> {
        if let Node::Identifier(x_ident) = x {
            let qualifier_entity = self.package.uses.get(&x_ident.position).cloned();
            if let Some(entity) = qualifier_entity {
                if entity.is_package() {
                    self.visit_package_qualifier(document, x_ident, &entity);
                    return self.visit_node(document, sel);
                }
            }
        }
        self.visit_node(document, x)?;
        self.visit_node(document, sel)
    }

    fn visit_package_qualifier(&mut self, document: &mut Document, x_ident: &Ident, entity: &Entity) {
        let symbol = self
            .package_name_overrides
            .get(&entity.owner_package)
            .cloned()
            .or_else(|| self.index.get_package_name_symbol(&entity.owner_package));
        match symbol {
            Some(symbol) => {
                let range = Range::single_line(x_ident.position, x_ident.name.len() as u32);
                document.occurrences.push(Occurrence::reference(range, symbol));
            }
            None => {
                self.error_handler
                    .err_or_panic(IndexError::missing_package_name_symbol(x_ident.position));
            }
        }
    }

    fn visit_identifier(&mut self, document: &mut Document, ident: &Ident) -> Result<(), BugError> {
        if ident.name == "_" {
            return Ok(());
        }

        let mut resolved = false;

        if let Some(entity) = self.package.defs.get(&ident.position).cloned() {
            resolved = true;
            let symbol = self.symbol_for_definition(&entity, ident.position)?;
            let range = Range::single_line(ident.position, ident.name.len() as u32);
            if symbol.is_local() {
                self.local_symbols.push(SymbolInformation {
                    symbol: symbol.clone(),
                    display_name: ident.name.clone(),
                    documentation: Some(local_signature(
                        local_prefix(&entity.kind),
                        &ident.name,
                        entity.static_type.as_deref(),
                    )),
                });
            }
            document.occurrences.push(Occurrence::definition(range, symbol));
        }

        if let Some(entity) = self.package.uses.get(&ident.position).cloned() {
            resolved = true;
            match self.symbol_for_use(&entity) {
                UseResolution::Symbol(symbol, override_doc) => {
                    let range = Range::single_line(ident.position, ident.name.len() as u32);
                    let mut occurrence = Occurrence::reference(range, symbol);
                    if let Some(doc) = override_doc {
                        occurrence = occurrence.with_override_documentation(doc);
                    }
                    document.occurrences.push(occurrence);
                }
                UseResolution::Builtin => {}
                UseResolution::Unresolvable => {
                    self.error_handler.err_or_panic(IndexError::unknown_package_entity(
                        ident.name.clone(),
                        ident.position,
                    ));
                }
            }
        }

        if !resolved {
            self.error_handler
                .err_or_panic(IndexError::unresolved_identifier(ident.name.clone(), ident.position));
        }

        Ok(())
    }

    /// Priority: the package table (minted by `SymbolMinter`), then the
    /// global index (a re-export resolving to a foreign position), then a
    /// freshly minted local.
    fn symbol_for_definition(&mut self, entity: &Entity, position: Position) -> Result<Symbol, BugError> {
        if let Some(symbol) = self.package_table.symbol_of_entity(entity.id) {
            return Ok(symbol.clone());
        }
        if let SymbolLookup::Found(symbol) = self.index.get_symbol_of_entity(entity) {
            return Ok(symbol);
        }
        self.mint_local(position)
    }

    fn symbol_for_use(&self, entity: &Entity) -> UseResolution {
        if let Some(position) = entity.position {
            if let Some(local) = self.local_positions.get(&position) {
                let override_doc = self.case_override_docs.get(&position).cloned();
                return UseResolution::Symbol(local.clone(), override_doc);
            }
        }
        match self.index.get_symbol_of_entity(entity) {
            SymbolLookup::Found(symbol) => UseResolution::Symbol(symbol, None),
            SymbolLookup::NotFound => UseResolution::Builtin,
            SymbolLookup::UnknownPackage => UseResolution::Unresolvable,
        }
    }

    /// A type-switch case clause: its scrutinee binding (if any) gets a
    /// fresh local and a definition occurrence; uses inside the body that
    /// resolve back to it pick up `narrowed_type` as override-documentation.
    ///
    /// Every case clause of one type switch writes the same scrutinee token,
    /// so every `binding.position` in the statement is identical — but each
    /// clause still binds its own distinct local (a `switch v := x.(type)`
    /// with three cases mints three different locals, all at that one
    /// position). The binding is only in scope for its own clause's body, so
    /// it is registered in `local_positions`/`case_override_docs` just
    /// before walking that body and cleared right after, rather than left to
    /// collide with the next clause's binding at the same position.
    fn visit_type_switch_case(&mut self, document: &mut Document, case: &TypeSwitchCase) -> Result<(), BugError> {
        if let Some(binding) = &case.binding {
            let local = self.mint_local(binding.position)?;
            let range = Range::single_line(binding.position, binding.name.len() as u32);
            document
                .occurrences
                .push(Occurrence::definition(range, local.clone()));
            self.local_symbols.push(SymbolInformation {
                symbol: local,
                display_name: binding.name.clone(),
                documentation: Some(local_signature("", &binding.name, case.narrowed_type.as_deref())),
            });
            if let Some(narrowed_type) = &case.narrowed_type {
                self.case_override_docs.insert(binding.position, narrowed_type.clone());
            }

            for node in &case.body {
                self.visit_node(document, node)?;
            }

            self.local_positions.remove(&binding.position);
            self.case_override_docs.remove(&binding.position);
            return Ok(());
        }

        for node in &case.body {
            self.visit_node(document, node)?;
        }
        Ok(())
    }

    /// Mints a fresh local at `position`. Colliding with an already-live
    /// local at the same position is a genuine re-entry bug everywhere this
    /// is called from except type-switch case clauses, which scope their own
    /// binding out of `local_positions` before the next clause mints one.
    fn mint_local(&mut self, position: Position) -> Result<Symbol, BugError> {
        if self.local_positions.contains_key(&position) {
            return Err(BugError::local_position_collision(position));
        }
        let symbol = Symbol::local(self.next_local);
        self.next_local += 1;
        self.local_positions.insert(position, symbol.clone());
        Ok(symbol)
    }
}

fn local_prefix(kind: &EntityKind) -> &'static str {
    match kind {
        EntityKind::Const => "const",
        EntityKind::Var => "var",
        _ => "",
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
