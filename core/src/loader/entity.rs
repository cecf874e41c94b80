use crate::model::{PackageId, Position};

/// Opaque handle for an entity, stable for the lifetime of one invocation.
///
/// Positions are the preferred key at emission sites (cheaper, no hashing
/// of a handle through an indirection table); `EntityId` exists for the
/// cases where two different positions must be recognized as the same
/// entity — cross-file method sets, re-exports, and predeclared builtins
/// that have no declaring position at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// What kind of declaration an [`Entity`] names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Const,
    Var,
    Func,
    Method {
        receiver_type: EntityId,
    },
    Type,
    Field {
        owner: EntityId,
        embedded: bool,
    },
    InterfaceMethod {
        owner: EntityId,
    },
    TypeParameter {
        owner: EntityId,
        index: u32,
    },
    /// An imported package, as named through its qualifier.
    Package,
    /// A type-switch case's narrowed scrutinee binding. Two entities with
    /// this kind and the same written name are still distinct — each case
    /// clause gets its own.
    CaseBinding,
}

/// A compiler-resolved declaration: a function, a type, a variable, a field,
/// or an imported package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub kind: EntityKind,
    pub owner_package: PackageId,
    /// Absent for predeclared builtins (`error`, `len`, `nil`, ...), which
    /// have no declaring position in any loaded file.
    pub position: Option<Position>,
    /// Source-faithful rendering of the entity's static type (e.g. `"int"`,
    /// `"*T"`, the imported path for a package alias). Used to build a
    /// local's one-line signature string.
    pub static_type: Option<String>,
}

impl Entity {
    pub fn is_package(&self) -> bool {
        matches!(self.kind, EntityKind::Package)
    }

    pub fn is_builtin(&self) -> bool {
        self.position.is_none()
    }
}
