use super::*;
use crate::error::LenientHandler;
use crate::loader::{Declaration, EntityId, FieldDecl};
use crate::minter::SymbolMinter;
use crate::model::FileId;

fn pos(line: u32, col: u32) -> Position {
    Position::new(FileId(0), line, col, col)
}

fn empty_package(import_path: &str) -> Package {
    Package {
        id: PackageId::new(import_path, "v1.0.0"),
        import_path: import_path.to_string(),
        module_path: import_path.to_string(),
        module_version: "v1.0.0".to_string(),
        files: Vec::new(),
        declarations: Vec::new(),
        defs: Default::default(),
        uses: Default::default(),
        implicits: Default::default(),
        imports: Default::default(),
    }
}

fn minted(package: &Package) -> PackageSymbolTable {
    SymbolMinter::new("scip", "gomod").mint_package(package).unwrap()
}

fn file_with(decls: Vec<Node>) -> FileAst {
    FileAst {
        relative_path: "main.go".to_string(),
        file: FileId(0),
        doc_comment: None,
        package_name: Ident::new("main", pos(0, 8)),
        decls,
    }
}

#[test]
fn renamed_import_mints_local_and_emits_path_reference() {
    let imported = empty_package("a/b");
    let mut index = GlobalIndex::new();
    index.publish(imported.id.clone(), minted(&imported));

    let mut own = empty_package("m/main");
    own.imports.insert("a/b".to_string(), imported.id.clone());
    let own_table = minted(&own);

    let alias = Ident::new("bar", pos(1, 8));
    let path_range = Range::single_line(pos(1, 12), 3);
    let spec = ImportSpec {
        path: "a/b".to_string(),
        path_range,
        local_alias: Some(alias),
    };
    let file = file_with(vec![Node::ImportDecl(vec![spec])]);

    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert!(handler.errors().is_empty());
    assert_eq!(document.occurrences.len(), 3);

    let alias_def = &document.occurrences[1];
    assert!(alias_def.roles.is_definition());
    assert!(alias_def.symbol.is_local());

    let path_ref = &document.occurrences[2];
    assert!(!path_ref.roles.is_definition());
    assert_eq!(
        path_ref.symbol,
        index.get_package_name_symbol(&imported.id).unwrap()
    );

    let local_info = document
        .symbols
        .iter()
        .find(|s| s.display_name == "bar")
        .unwrap();
    assert_eq!(local_info.documentation.as_deref(), Some("import bar a/b"));
}

#[test]
fn dot_import_skips_local_but_still_emits_path_reference() {
    let imported = empty_package("a/b");
    let mut index = GlobalIndex::new();
    index.publish(imported.id.clone(), minted(&imported));

    let mut own = empty_package("m/main");
    own.imports.insert("a/b".to_string(), imported.id.clone());
    let own_table = minted(&own);

    let dot = Ident::new(".", pos(1, 8));
    let path_range = Range::single_line(pos(1, 10), 3);
    let spec = ImportSpec {
        path: "a/b".to_string(),
        path_range,
        local_alias: Some(dot),
    };
    let file = file_with(vec![Node::ImportDecl(vec![spec])]);

    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert!(handler.errors().is_empty());
    assert_eq!(document.occurrences.len(), 2);
    assert!(document.occurrences.iter().all(|o| !o.symbol.is_local()));
    assert!(document.symbols.is_empty());
}

#[test]
fn type_switch_case_binding_attaches_narrowed_type_to_its_use() {
    let mut own = empty_package("m/main");
    let index = GlobalIndex::new();

    let binding_pos = pos(2, 7);
    let use_pos = pos(3, 1);

    own.uses.insert(
        use_pos,
        Entity {
            id: EntityId(42),
            name: "v".to_string(),
            kind: EntityKind::CaseBinding,
            owner_package: own.id.clone(),
            position: Some(binding_pos),
            static_type: Some("*T".to_string()),
        },
    );

    let case = TypeSwitchCase {
        binding: Some(Ident::new("v", binding_pos)),
        narrowed_type: Some("*T".to_string()),
        body: vec![Node::Identifier(Ident::new("v", use_pos))],
    };
    let file = file_with(vec![Node::TypeSwitch(vec![case])]);

    let own_table = minted(&own);
    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert!(handler.errors().is_empty());
    assert_eq!(document.occurrences.len(), 3);

    let binding_def = &document.occurrences[1];
    assert!(binding_def.roles.is_definition());
    assert!(binding_def.symbol.is_local());

    let usage_ref = &document.occurrences[2];
    assert!(!usage_ref.roles.is_definition());
    assert_eq!(usage_ref.symbol, binding_def.symbol);
    assert_eq!(usage_ref.override_documentation.as_deref(), Some("*T"));

    let binding_info = document.symbols.iter().find(|s| s.display_name == "v").unwrap();
    assert_eq!(binding_info.documentation.as_deref(), Some("v *T"));
}

#[test]
fn multi_case_type_switch_mints_a_distinct_local_per_clause() {
    // switch v := x.(type) { case *A: ...v...; case *B: ...v...; default: ...v... }
    // every clause's binding sits at the same written `v` token, so all three
    // share one `Position` — each clause still gets its own local.
    let mut own = empty_package("m/main");
    let index = GlobalIndex::new();

    let binding_pos = pos(2, 7);
    let use_a = pos(3, 1);
    let use_b = pos(5, 1);
    let use_default = pos(7, 1);

    let uses = [
        (use_a, "*A"),
        (use_b, "*B"),
        (use_default, "interface{}"),
    ];
    for (i, (use_pos, narrowed)) in uses.iter().enumerate() {
        own.uses.insert(
            *use_pos,
            Entity {
                id: EntityId(100 + i as u32),
                name: "v".to_string(),
                kind: EntityKind::CaseBinding,
                owner_package: own.id.clone(),
                position: Some(binding_pos),
                static_type: Some((*narrowed).to_string()),
            },
        );
    }

    let case_a = TypeSwitchCase {
        binding: Some(Ident::new("v", binding_pos)),
        narrowed_type: Some("*A".to_string()),
        body: vec![Node::Identifier(Ident::new("v", use_a))],
    };
    let case_b = TypeSwitchCase {
        binding: Some(Ident::new("v", binding_pos)),
        narrowed_type: Some("*B".to_string()),
        body: vec![Node::Identifier(Ident::new("v", use_b))],
    };
    let case_default = TypeSwitchCase {
        binding: Some(Ident::new("v", binding_pos)),
        narrowed_type: Some("interface{}".to_string()),
        body: vec![Node::Identifier(Ident::new("v", use_default))],
    };
    let file = file_with(vec![Node::TypeSwitch(vec![case_a, case_b, case_default])]);

    let own_table = minted(&own);
    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert!(handler.errors().is_empty());
    // package-name occurrence + 3x (binding def + use ref)
    assert_eq!(document.occurrences.len(), 7);

    let binding_defs: Vec<_> = document.occurrences[1..]
        .iter()
        .filter(|o| o.roles.is_definition())
        .collect();
    assert_eq!(binding_defs.len(), 3);

    let locals: std::collections::HashSet<_> = binding_defs.iter().map(|o| o.symbol.clone()).collect();
    assert_eq!(locals.len(), 3, "each clause must mint its own distinct local");

    let refs: Vec<_> = document.occurrences[1..]
        .iter()
        .filter(|o| !o.roles.is_definition())
        .collect();
    assert_eq!(refs.len(), 3);
    for (binding_def, use_ref, narrowed) in [
        (&binding_defs[0], &refs[0], "*A"),
        (&binding_defs[1], &refs[1], "*B"),
        (&binding_defs[2], &refs[2], "interface{}"),
    ] {
        assert_eq!(use_ref.symbol, binding_def.symbol);
        assert_eq!(use_ref.override_documentation.as_deref(), Some(narrowed));
    }

    let binding_infos: Vec<_> = document.symbols.iter().filter(|s| s.display_name == "v").collect();
    assert_eq!(binding_infos.len(), 3);
}

#[test]
fn embedded_field_has_a_definition_and_a_reference_at_one_position() {
    let widget_id = EntityId(1);
    let field_id = EntityId(2);
    let base_id = EntityId(3);

    let field_pos = pos(5, 2);
    let base_decl_pos = pos(10, 5);

    let mut own = empty_package("m/main");
    own.declarations.push(Declaration::Type {
        entity: widget_id,
        name: "Widget".to_string(),
        position: pos(4, 5),
        fields: vec![FieldDecl {
            entity: field_id,
            name: "Base".to_string(),
            position: field_pos,
            embedded: true,
        }],
        interface_methods: Vec::new(),
        type_parameters: Vec::new(),
    });
    own.declarations.push(Declaration::Type {
        entity: base_id,
        name: "Base".to_string(),
        position: base_decl_pos,
        fields: Vec::new(),
        interface_methods: Vec::new(),
        type_parameters: Vec::new(),
    });

    own.defs.insert(
        field_pos,
        Entity {
            id: field_id,
            name: "Base".to_string(),
            kind: EntityKind::Field {
                owner: widget_id,
                embedded: true,
            },
            owner_package: own.id.clone(),
            position: Some(field_pos),
            static_type: Some("Base".to_string()),
        },
    );
    own.uses.insert(
        field_pos,
        Entity {
            id: base_id,
            name: "Base".to_string(),
            kind: EntityKind::Type,
            owner_package: own.id.clone(),
            position: Some(base_decl_pos),
            static_type: None,
        },
    );

    let own_table = minted(&own);
    let mut index = GlobalIndex::new();
    index.publish(own.id.clone(), own_table.clone());

    let file = file_with(vec![Node::Identifier(Ident::new("Base", field_pos))]);

    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert!(handler.errors().is_empty());
    assert_eq!(document.occurrences.len(), 3);

    let field_def = &document.occurrences[1];
    let type_ref = &document.occurrences[2];
    assert!(field_def.roles.is_definition());
    assert!(!type_ref.roles.is_definition());
    assert_eq!(field_def.range, type_ref.range);
    assert_eq!(field_def.symbol, *own_table.symbol_of_entity(field_id).unwrap());
    assert_eq!(type_ref.symbol, *own_table.symbol_of_entity(base_id).unwrap());
}

#[test]
fn cross_package_reference_through_a_qualifier_resolves_both_names() {
    let mut imported = empty_package("a/b");
    let do_pos = pos(1, 0);
    imported.declarations.push(Declaration::Func {
        entity: EntityId(10),
        name: "Do".to_string(),
        position: do_pos,
        receiver_type: None,
    });
    let imported_table = minted(&imported);
    let mut index = GlobalIndex::new();
    index.publish(imported.id.clone(), imported_table.clone());

    let mut own = empty_package("m/main");
    own.imports.insert("a/b".to_string(), imported.id.clone());

    let qualifier_pos = pos(2, 0);
    let call_pos = pos(2, 4);
    own.uses.insert(
        qualifier_pos,
        Entity {
            id: EntityId(99),
            name: "lib".to_string(),
            kind: EntityKind::Package,
            owner_package: imported.id.clone(),
            position: None,
            static_type: None,
        },
    );
    own.uses.insert(
        call_pos,
        Entity {
            id: EntityId(10),
            name: "Do".to_string(),
            kind: EntityKind::Func,
            owner_package: imported.id.clone(),
            position: Some(do_pos),
            static_type: None,
        },
    );

    let own_table = minted(&own);

    let selector = Node::Selector {
        x: Box::new(Node::Identifier(Ident::new("lib", qualifier_pos))),
        sel: Box::new(Node::Identifier(Ident::new("Do", call_pos))),
    };
    let file = file_with(vec![selector]);

    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert!(handler.errors().is_empty());
    assert_eq!(document.occurrences.len(), 3);

    let qualifier_ref = &document.occurrences[1];
    let call_ref = &document.occurrences[2];
    assert_eq!(
        qualifier_ref.symbol,
        index.get_package_name_symbol(&imported.id).unwrap()
    );
    assert_eq!(call_ref.symbol, *imported_table.symbol_of_entity(EntityId(10)).unwrap());
}

#[test]
fn blank_identifier_is_skipped_without_error() {
    let own = empty_package("m/main");
    let own_table = minted(&own);
    let index = GlobalIndex::new();

    let file = file_with(vec![Node::Identifier(Ident::new("_", pos(1, 0)))]);

    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert!(handler.errors().is_empty());
    assert_eq!(document.occurrences.len(), 1);
}

#[test]
fn identifier_with_neither_def_nor_use_reports_unresolved_identifier() {
    let own = empty_package("m/main");
    let own_table = minted(&own);
    let index = GlobalIndex::new();

    let file = file_with(vec![Node::Identifier(Ident::new("mystery", pos(1, 0)))]);

    let mut handler = LenientHandler::default();
    let document = FileVisitor::new("go", &own, &own_table, &index, &mut handler)
        .visit(&file)
        .unwrap();

    assert_eq!(document.occurrences.len(), 1);
    assert_eq!(handler.errors().len(), 1);
}
