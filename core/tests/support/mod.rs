//! Shared fixture builders for crate-level integration tests.
//!
//! Every scenario here plays the role the external package loader would in
//! a real run: a hand-built [`scindex::loader::Package`] with `defs`/`uses`
//! already resolved, exactly as §1 assumes.

use std::collections::HashMap;

use scindex::loader::{Entity, EntityId, EntityKind, FieldDecl, FileAst, Ident, ImportSpec, Node, Package};
use scindex::model::{FileId, PackageId, Position, Range};

pub fn pos(line: u32, column: u32) -> Position {
    Position::new(FileId(0), line, column, column)
}

pub fn empty_package(import_path: &str) -> Package {
    Package {
        id: PackageId::new(import_path, "v0.0.0"),
        import_path: import_path.to_string(),
        module_path: "example.com/app".to_string(),
        module_version: "v0.0.0".to_string(),
        files: Vec::new(),
        declarations: Vec::new(),
        defs: HashMap::new(),
        uses: HashMap::new(),
        implicits: HashMap::new(),
        imports: HashMap::new(),
    }
}

pub fn entity(id: EntityId, name: &str, kind: EntityKind, owner: &Package) -> Entity {
    Entity {
        id,
        name: name.to_string(),
        kind,
        owner_package: owner.id.clone(),
        position: None,
        static_type: None,
    }
}

pub fn file(relative_path: &str, package_name: &str, decls: Vec<Node>) -> FileAst {
    FileAst {
        relative_path: relative_path.to_string(),
        file: FileId(0),
        doc_comment: None,
        package_name: Ident::new(package_name, pos(0, 8)),
        decls,
    }
}

pub fn ident(name: &str, position: Position) -> Ident {
    Ident::new(name, position)
}

pub fn selector(qualifier: &str, qualifier_pos: Position, member: &str, member_pos: Position) -> Node {
    Node::Selector {
        x: Box::new(Node::Identifier(ident(qualifier, qualifier_pos))),
        sel: Box::new(Node::Identifier(ident(member, member_pos))),
    }
}

pub fn import_decl(path: &str, path_start: Position, alias: Option<&str>, alias_pos: Position) -> Node {
    Node::ImportDecl(vec![ImportSpec {
        path: path.to_string(),
        path_range: Range::single_line(path_start, path.len() as u32),
        local_alias: alias.map(|a| ident(a, alias_pos)),
    }])
}

pub fn field_decl(entity: EntityId, name: &str, position: Position, embedded: bool) -> FieldDecl {
    FieldDecl {
        entity,
        name: name.to_string(),
        position,
        embedded,
    }
}
