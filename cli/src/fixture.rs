//! A small, hand-built two-package load set standing in for the real Go
//! package loader (out of scope, §1). Wide enough to exercise all four
//! pipeline stages: import resolution with a renamed alias, a
//! cross-package selector call, and a package-scope function definition.

use scindex::loader::{
    Declaration, Entity, EntityId, EntityKind, FileAst, Ident, ImportSpec, Node, Package,
};
use scindex::model::{FileId, PackageId, Position, Range};

fn pos(line: u32, column: u32) -> Position {
    Position::new(FileId(0), line, column, column)
}

/// `example.com/app/greet`: one exported function, no imports.
fn greet_package() -> Package {
    let id = PackageId::new("example.com/app/greet", "v0.0.0");
    let hello_pos = pos(2, 5);
    let hello = EntityId(1);

    let mut package = Package {
        id: id.clone(),
        import_path: "example.com/app/greet".to_string(),
        module_path: "example.com/app".to_string(),
        module_version: "v0.0.0".to_string(),
        files: Vec::new(),
        declarations: vec![Declaration::Func {
            entity: hello,
            name: "Hello".to_string(),
            position: hello_pos,
            receiver_type: None,
        }],
        defs: Default::default(),
        uses: Default::default(),
        implicits: Default::default(),
        imports: Default::default(),
    };

    package.defs.insert(
        hello_pos,
        Entity {
            id: hello,
            name: "Hello".to_string(),
            kind: EntityKind::Func,
            owner_package: id.clone(),
            position: Some(hello_pos),
            static_type: None,
        },
    );

    package.files.push(FileAst {
        relative_path: "greet.go".to_string(),
        file: FileId(0),
        doc_comment: Some("Hello returns a greeting.".to_string()),
        package_name: Ident::new("greet", pos(0, 8)),
        decls: vec![Node::Identifier(Ident::new("Hello", hello_pos))],
    });

    package
}

/// `example.com/app`: imports `greet` under the alias `g` and calls
/// `g.Hello()` from `main`.
fn app_package(greet_id: PackageId) -> Package {
    let id = PackageId::new("example.com/app", "v0.0.0");
    let main_pos = pos(4, 5);
    let main_entity = EntityId(2);
    let alias_pos = pos(2, 7);
    let path_range = Range::single_line(pos(2, 9), "example.com/app/greet".len() as u32);
    let qualifier_pos = pos(5, 4);
    let call_pos = pos(5, 6);

    let hello_pos = pos(2, 5); // must match greet_package's Hello position
    let hello = EntityId(1);

    let mut package = Package {
        id: id.clone(),
        import_path: "example.com/app".to_string(),
        module_path: "example.com/app".to_string(),
        module_version: "v0.0.0".to_string(),
        files: Vec::new(),
        declarations: vec![Declaration::Func {
            entity: main_entity,
            name: "main".to_string(),
            position: main_pos,
            receiver_type: None,
        }],
        defs: Default::default(),
        uses: Default::default(),
        implicits: Default::default(),
        imports: Default::default(),
    };
    package
        .imports
        .insert("example.com/app/greet".to_string(), greet_id.clone());

    package.defs.insert(
        main_pos,
        Entity {
            id: main_entity,
            name: "main".to_string(),
            kind: EntityKind::Func,
            owner_package: id.clone(),
            position: Some(main_pos),
            static_type: None,
        },
    );
    package.uses.insert(
        qualifier_pos,
        Entity {
            id: EntityId(100),
            name: "g".to_string(),
            kind: EntityKind::Package,
            owner_package: greet_id.clone(),
            position: None,
            static_type: None,
        },
    );
    package.uses.insert(
        call_pos,
        Entity {
            id: hello,
            name: "Hello".to_string(),
            kind: EntityKind::Func,
            owner_package: greet_id,
            position: Some(hello_pos),
            static_type: None,
        },
    );

    package.files.push(FileAst {
        relative_path: "main.go".to_string(),
        file: FileId(0),
        doc_comment: None,
        package_name: Ident::new("main", pos(0, 8)),
        decls: vec![
            Node::ImportDecl(vec![ImportSpec {
                path: "example.com/app/greet".to_string(),
                path_range,
                local_alias: Some(Ident::new("g", alias_pos)),
            }]),
            Node::Identifier(Ident::new("main", main_pos)),
            Node::Selector {
                x: Box::new(Node::Identifier(Ident::new("g", qualifier_pos))),
                sel: Box::new(Node::Identifier(Ident::new("Hello", call_pos))),
            },
        ],
    });

    package
}

/// The bundled load set: `greet` first, `app` importing it.
pub fn load_set() -> Vec<Package> {
    let greet = greet_package();
    let app = app_package(greet.id.clone());
    vec![greet, app]
}
