use super::*;
use crate::loader::EntityId;
use crate::loader::EntityKind;
use crate::minter::SymbolMinter;
use crate::model::FileId;

fn pos(line: u32, col: u32) -> Position {
    Position::new(FileId(0), line, col, col)
}

fn minted_table() -> (PackageId, PackageSymbolTable) {
    let package = crate::loader::Package {
        id: PackageId::new("example.com/lib", "v1.0.0"),
        import_path: "example.com/lib".to_string(),
        module_path: "example.com/lib".to_string(),
        module_version: "v1.0.0".to_string(),
        files: Vec::new(),
        declarations: vec![crate::loader::Declaration::Func {
            entity: EntityId(1),
            name: "Do".to_string(),
            position: pos(1, 0),
            receiver_type: None,
        }],
        defs: Default::default(),
        uses: Default::default(),
        implicits: Default::default(),
        imports: Default::default(),
    };
    let minter = SymbolMinter::new("scip", "gomod");
    let table = minter.mint_package(&package).unwrap();
    (package.id, table)
}

#[test]
fn get_symbol_resolves_a_published_position() {
    let mut index = GlobalIndex::new();
    let (pkg_id, table) = minted_table();
    index.publish(pkg_id.clone(), table);
    let symbol = index.get_symbol(&pkg_id, pos(1, 0)).unwrap();
    assert_eq!(symbol.encode(), "scip gomod example.com/lib v1.0.0 Do.");
}

#[test]
fn get_symbol_of_entity_from_unknown_package_is_unknown_package() {
    let index = GlobalIndex::new();
    let entity = Entity {
        id: EntityId(1),
        name: "Do".to_string(),
        kind: EntityKind::Func,
        owner_package: PackageId::new("example.com/missing", "v1.0.0"),
        position: Some(pos(1, 0)),
        static_type: None,
    };
    assert_eq!(index.get_symbol_of_entity(&entity), SymbolLookup::UnknownPackage);
}

#[test]
fn get_symbol_of_entity_for_builtin_is_not_found() {
    let index = GlobalIndex::new();
    let entity = Entity {
        id: EntityId(1),
        name: "error".to_string(),
        kind: EntityKind::Type,
        owner_package: PackageId::new("builtin", ""),
        position: None,
        static_type: None,
    };
    assert_eq!(index.get_symbol_of_entity(&entity), SymbolLookup::NotFound);
}

#[test]
fn package_table_is_available_once_published() {
    let mut index = GlobalIndex::new();
    assert!(index.package_table(&PackageId::new("example.com/lib", "v1.0.0")).is_none());
    let (pkg_id, table) = minted_table();
    index.publish(pkg_id.clone(), table);
    assert!(index.package_table(&pkg_id).is_some());
}

#[test]
fn get_package_name_symbol_returns_the_namespace_descriptor() {
    let mut index = GlobalIndex::new();
    let (pkg_id, table) = minted_table();
    index.publish(pkg_id.clone(), table);
    let symbol = index.get_package_name_symbol(&pkg_id).unwrap();
    assert_eq!(
        symbol.encode(),
        "scip gomod example.com/lib v1.0.0 example.com/lib/"
    );
}
