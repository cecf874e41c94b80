use std::collections::HashMap;

use crate::loader::EntityId;
use crate::model::{FileId, Position, Symbol, SymbolInformation};

/// Output of minting one package: a lookup from declaring position (and,
/// redundantly but cheaply, from entity identity) to the symbol assigned to
/// it, the symbol's display metadata, plus the package's own package-name
/// symbol.
#[derive(Debug, Clone)]
pub struct PackageSymbolTable {
    package_name_symbol: Symbol,
    by_position: HashMap<Position, (Symbol, SymbolInformation)>,
    by_entity: HashMap<EntityId, Symbol>,
}

impl PackageSymbolTable {
    pub(crate) fn new(package_name_symbol: Symbol) -> Self {
        Self {
            package_name_symbol,
            by_position: HashMap::new(),
            by_entity: HashMap::new(),
        }
    }

    pub(crate) fn insert(
        &mut self,
        position: Position,
        entity: EntityId,
        symbol: Symbol,
        display_name: impl Into<String>,
    ) {
        let info = SymbolInformation {
            symbol: symbol.clone(),
            display_name: display_name.into(),
            documentation: None,
        };
        self.by_position.insert(position, (symbol.clone(), info));
        self.by_entity.insert(entity, symbol);
    }

    pub fn package_name_symbol(&self) -> &Symbol {
        &self.package_name_symbol
    }

    pub fn symbol_at(&self, position: Position) -> Option<&Symbol> {
        self.by_position.get(&position).map(|(s, _)| s)
    }

    pub fn symbol_of_entity(&self, entity: EntityId) -> Option<&Symbol> {
        self.by_entity.get(&entity)
    }

    /// Metadata for every package-scope symbol declared in `file` — the
    /// slice the file visitor folds into that document's symbols list.
    pub fn information_in_file(&self, file: FileId) -> Vec<SymbolInformation> {
        let mut entries: Vec<(Position, SymbolInformation)> = self
            .by_position
            .iter()
            .filter(|(pos, _)| pos.file == file)
            .map(|(pos, (_, info))| (*pos, info.clone()))
            .collect();
        entries.sort_by_key(|(pos, _)| (pos.line, pos.column, pos.byte));
        entries.into_iter().map(|(_, info)| info).collect()
    }

    pub fn len(&self) -> usize {
        self.by_position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_position.is_empty()
    }
}
