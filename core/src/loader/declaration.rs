use crate::loader::entity::EntityId;
use crate::model::Position;

/// A struct field, including embedded fields.
///
/// An embedded field's `name` is the base type's unqualified name — the
/// minter mints it as a field descriptor under the enclosing struct, and
/// the visitor separately emits a reference to the embedded type itself at
/// the same range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub entity: EntityId,
    pub name: String,
    pub position: Position,
    pub embedded: bool,
}

/// An interface method, a declared method-set member, or a type parameter —
/// each just a name and a declaring position under some owning type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDecl {
    pub entity: EntityId,
    pub name: String,
    pub position: Position,
}

/// One top-level, package-scope declaration, with enough nested structure
/// for the minter to recurse into per its algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Const {
        entity: EntityId,
        name: String,
        position: Position,
    },
    Var {
        entity: EntityId,
        name: String,
        position: Position,
    },
    /// A method set member is just a `Func` with `receiver_type` set —
    /// the minter nests it under its receiver type's descriptor; it is
    /// not repeated under `Type`.
    Func {
        entity: EntityId,
        name: String,
        position: Position,
        /// `Some` when this function declares a receiver — a method.
        receiver_type: Option<EntityId>,
    },
    Type {
        entity: EntityId,
        name: String,
        position: Position,
        fields: Vec<FieldDecl>,
        interface_methods: Vec<MemberDecl>,
        /// Ordered by declaration.
        type_parameters: Vec<MemberDecl>,
    },
}

impl Declaration {
    pub fn entity(&self) -> EntityId {
        match self {
            Declaration::Const { entity, .. }
            | Declaration::Var { entity, .. }
            | Declaration::Func { entity, .. }
            | Declaration::Type { entity, .. } => *entity,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Const { name, .. }
            | Declaration::Var { name, .. }
            | Declaration::Func { name, .. }
            | Declaration::Type { name, .. } => name,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Declaration::Const { position, .. }
            | Declaration::Var { position, .. }
            | Declaration::Func { position, .. }
            | Declaration::Type { position, .. } => *position,
        }
    }
}
