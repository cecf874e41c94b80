//! Assigns canonical global symbols to every package-scope and reachable
//! nested entity in one package.

pub mod table;

use std::collections::HashMap;
use std::fmt;

use crate::loader::{Declaration, EntityId, Package};
use crate::model::{Descriptor, Position, Symbol};

pub use table::PackageSymbolTable;

/// A declaring position for which the loader's type information is
/// incomplete. Fatal for the package that produced it — the caller
/// reports the position and skips the whole package, but keeps going with
/// the rest of the load set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintError {
    pub position: Position,
    pub message: String,
}

impl fmt::Display for MintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mint failed at line {}, col {}: {}",
            self.position.line, self.position.column, self.message
        )
    }
}

impl std::error::Error for MintError {}

/// Mints every symbol for one package: the package-name symbol, and one
/// symbol per package-scope declaration plus its reachable nested entities
/// (struct fields, interface methods, method-set members, type
/// parameters).
pub struct SymbolMinter<'cfg> {
    scheme: &'cfg str,
    manager: &'cfg str,
}

impl<'cfg> SymbolMinter<'cfg> {
    pub fn new(scheme: &'cfg str, manager: &'cfg str) -> Self {
        Self { scheme, manager }
    }

    pub fn mint_package(&self, package: &Package) -> Result<PackageSymbolTable, MintError> {
        tracing::debug!(package = %package.id, "minting package");

        let package_name_symbol = self.package_name_symbol(package);
        let mut table = PackageSymbolTable::new(package_name_symbol);

        let decls_by_entity: HashMap<EntityId, &Declaration> = package
            .declarations
            .iter()
            .map(|d| (d.entity(), d))
            .collect();

        let method_disambiguators = self.method_disambiguators(package);

        for decl in &package.declarations {
            match decl {
                Declaration::Const { entity, name, position } => {
                    let symbol = self.global(package, vec![Descriptor::term(name.clone())]);
                    table.insert(*position, *entity, symbol, name.clone());
                }
                Declaration::Var { entity, name, position } => {
                    let symbol = self.global(package, vec![Descriptor::term(name.clone())]);
                    table.insert(*position, *entity, symbol, name.clone());
                }
                Declaration::Func {
                    entity,
                    name,
                    position,
                    receiver_type,
                } => match receiver_type {
                    None => {
                        let symbol = self.global(package, vec![Descriptor::term(name.clone())]);
                        table.insert(*position, *entity, symbol, name.clone());
                    }
                    Some(owner) => {
                        let owner_decl = decls_by_entity.get(owner).ok_or_else(|| MintError {
                            position: *position,
                            message: format!(
                                "method '{name}' has no resolvable receiver type"
                            ),
                        })?;
                        let owner_name = owner_decl.name().to_string();
                        let disambiguator = method_disambiguators
                            .get(&(*owner, name.clone()))
                            .and_then(|d| d.get(entity))
                            .cloned()
                            .unwrap_or_default();
                        let symbol = self.global(
                            package,
                            vec![
                                Descriptor::r#type(owner_name),
                                Descriptor::method(name.clone(), disambiguator),
                            ],
                        );
                        table.insert(*position, *entity, symbol, format!("{owner_name}.{name}"));
                    }
                },
                Declaration::Type {
                    entity,
                    name,
                    position,
                    fields,
                    interface_methods,
                    type_parameters,
                } => {
                    let symbol = self.global(package, vec![Descriptor::r#type(name.clone())]);
                    table.insert(*position, *entity, symbol, name.clone());

                    for field in fields {
                        let field_symbol = self.global(
                            package,
                            vec![
                                Descriptor::r#type(name.clone()),
                                Descriptor::term(field.name.clone()),
                            ],
                        );
                        table.insert(
                            field.position,
                            field.entity,
                            field_symbol,
                            format!("{name}.{}", field.name),
                        );
                    }

                    for method in interface_methods {
                        let method_symbol = self.global(
                            package,
                            vec![
                                Descriptor::r#type(name.clone()),
                                Descriptor::method(method.name.clone(), ""),
                            ],
                        );
                        table.insert(
                            method.position,
                            method.entity,
                            method_symbol,
                            format!("{name}.{}", method.name),
                        );
                    }

                    for param in type_parameters {
                        let param_symbol = self.global(
                            package,
                            vec![
                                Descriptor::r#type(name.clone()),
                                Descriptor::type_parameter(param.name.clone()),
                            ],
                        );
                        table.insert(
                            param.position,
                            param.entity,
                            param_symbol,
                            format!("{name}[{}]", param.name),
                        );
                    }
                }
            }
        }

        Ok(table)
    }

    /// Groups declared methods by `(receiver, name)` and assigns each a
    /// decimal disambiguator — empty for the first, then `"1"`, `"2"`, ...
    /// in declaration order, for entities that share both a receiver and a
    /// written name after overload resolution.
    fn method_disambiguators(
        &self,
        package: &Package,
    ) -> HashMap<(EntityId, String), HashMap<EntityId, String>> {
        let mut groups: HashMap<(EntityId, String), Vec<EntityId>> = HashMap::new();
        for decl in &package.declarations {
            if let Declaration::Func {
                entity,
                name,
                receiver_type: Some(owner),
                ..
            } = decl
            {
                groups.entry((*owner, name.clone())).or_default().push(*entity);
            }
        }

        groups
            .into_iter()
            .map(|(key, members)| {
                let assigned = members
                    .into_iter()
                    .enumerate()
                    .map(|(i, entity)| {
                        let disambiguator = if i == 0 { String::new() } else { i.to_string() };
                        (entity, disambiguator)
                    })
                    .collect();
                (key, assigned)
            })
            .collect()
    }

    fn global(&self, package: &Package, descriptors: Vec<Descriptor>) -> Symbol {
        Symbol::global(
            self.scheme,
            self.manager,
            package.import_path.clone(),
            package.module_version.clone(),
            descriptors,
        )
    }

    /// The package-name symbol: a single `namespace` descriptor carrying
    /// the package's import path.
    fn package_name_symbol(&self, package: &Package) -> Symbol {
        self.global(
            package,
            vec![Descriptor::namespace(package.import_path.clone())],
        )
    }
}
