use crate::model::{FileId, Position, Range};

/// One identifier token: its written name and the position where the
/// visitor must look it up in the defs/uses/implicits maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub position: Position,
}

impl Ident {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// One `import` spec within an import declaration.
///
/// `local_alias` is `None` when the source wrote a bare `import "a/b"` with
/// no alias token to emit an occurrence for. `Some(alias)` covers the three
/// cases that do have a token: a dot-import (`alias.name == "."`), a blank
/// import (`alias.name == "_"`), or a renamed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub path: String,
    /// Range of the path content, excluding the surrounding quotes.
    pub path_range: Range,
    pub local_alias: Option<Ident>,
}

impl ImportSpec {
    pub fn is_dot_import(&self) -> bool {
        matches!(&self.local_alias, Some(a) if a.name == ".")
    }

    pub fn is_blank_import(&self) -> bool {
        matches!(&self.local_alias, Some(a) if a.name == "_")
    }
}

/// One `case` clause of a type-switch statement.
///
/// `binding` is the per-case identifier token for the narrowed scrutinee
/// (absent when the source switch has no `v :=` binding, e.g. bare `switch
/// x.(type)`). `narrowed_type` is the source-faithful rendering of the
/// type this clause matches against (e.g. `"*T"`, or the joined list for a
/// multi-type case), used as override-documentation on references inside
/// the clause body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSwitchCase {
    pub binding: Option<Ident>,
    pub narrowed_type: Option<String>,
    pub body: Vec<Node>,
}

/// A tagged-variant AST node. The File Visitor dispatches on the variant,
/// not through an open-ended visitor interface: most of the tree is
/// `Other`, a structural container the visitor recurses into without
/// special-casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    ImportDecl(Vec<ImportSpec>),
    Selector {
        x: Box<Node>,
        sel: Box<Node>,
    },
    Identifier(Ident),
    TypeSwitch(Vec<TypeSwitchCase>),
    /// Anything else — statement lists, expression lists, declaration
    /// bodies — walked structurally for the identifiers it contains.
    Other(Vec<Node>),
}

/// One source file as the package loader elaborated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAst {
    pub relative_path: String,
    pub file: FileId,
    pub doc_comment: Option<String>,
    /// The package-clause identifier. Never walked as a `Node` — its
    /// occurrence is pre-seeded onto the document before traversal starts.
    pub package_name: Ident,
    pub decls: Vec<Node>,
}
