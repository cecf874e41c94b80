use super::position::Range;
use super::symbol::Symbol;

/// Bitset of roles an occurrence plays. Only `Definition` and
/// `ReadAccess` are used by this core; the remaining bits are reserved so
/// the bitset stays wire-compatible with the full interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roles(u32);

impl Roles {
    pub const DEFINITION: Roles = Roles(1 << 0);
    pub const READ_ACCESS: Roles = Roles(1 << 1);

    pub fn empty() -> Self {
        Roles(0)
    }

    pub fn contains(self, other: Roles) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_definition(self) -> bool {
        self.contains(Roles::DEFINITION)
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl std::ops::BitOr for Roles {
    type Output = Roles;
    fn bitor(self, rhs: Roles) -> Roles {
        Roles(self.0 | rhs.0)
    }
}

/// Ties one source location to one symbol.
///
/// `override_documentation` carries a formatted type string used when a
/// reference's static type differs from the referent's declared type — the
/// type-switch case-clause scenario, where a reference's narrowed type
/// differs from its referent's declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub range: Range,
    pub symbol: Symbol,
    pub roles: Roles,
    pub override_documentation: Option<String>,
}

impl Occurrence {
    pub fn definition(range: Range, symbol: Symbol) -> Self {
        Self {
            range,
            symbol,
            roles: Roles::DEFINITION,
            override_documentation: None,
        }
    }

    pub fn reference(range: Range, symbol: Symbol) -> Self {
        Self {
            range,
            symbol,
            roles: Roles::READ_ACCESS,
            override_documentation: None,
        }
    }

    pub fn with_override_documentation(mut self, doc: impl Into<String>) -> Self {
        self.override_documentation = Some(doc.into());
        self
    }

    /// Ordering key: source order of start positions, ties broken by end
    /// position, then by roles (Definition before ReadAccess).
    fn order_key(&self) -> ((u32, u32, u32, u32), u8) {
        let role_rank = if self.roles.is_definition() { 0 } else { 1 };
        (self.range.order_key(), role_rank)
    }
}

/// One symbol's display metadata, emitted once per document that defines
/// or uniquely hosts it.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInformation {
    pub symbol: Symbol,
    pub display_name: String,
    /// A one-line (locals) or multi-line (package symbols, per the
    /// minter) signature documentation string, tagged with the target
    /// language.
    pub documentation: Option<String>,
}

/// One indexed source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub language: String,
    pub relative_path: String,
    pub occurrences: Vec<Occurrence>,
    pub symbols: Vec<SymbolInformation>,
}

impl Document {
    pub fn new(language: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            relative_path: relative_path.into(),
            occurrences: Vec::new(),
            symbols: Vec::new(),
        }
    }

    /// Sorts `occurrences` in place by start position, ties broken by end
    /// position and then by role.
    pub fn sort_occurrences(&mut self) {
        self.occurrences.sort_by_key(Occurrence::order_key);
    }

    /// True if occurrence start positions within this document are
    /// non-decreasing.
    pub fn occurrences_are_ordered(&self) -> bool {
        self.occurrences
            .windows(2)
            .all(|w| w[0].range.start <= w[1].range.start)
    }
}
