//! Snapshot tests for Rust code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use droute_codegen::RouteTable;
use droute_codegen_rust::{Generator, LanguageCodegen};
use droute_manifest::{ActionDeclaration, ModuleName};
use tempfile::TempDir;

fn table(module: &ModuleName, declarations: &[ActionDeclaration]) -> RouteTable {
    RouteTable::build(declarations, module).0
}

#[test]
fn test_empty_module() {
    let module = ModuleName::sanitize("empty").unwrap();
    let table = table(&module, &[]);

    let files = Generator::new(&module, &table).preview();

    insta::assert_snapshot!("empty_module", &files[0].content);
}

#[test]
fn test_multi_word_module() {
    let module = ModuleName::sanitize("user_center").unwrap();
    let table = table(
        &module,
        &[ActionDeclaration::qualified(
            "user_center/ProfileAction",
            "com.x.ProfileAction",
        )],
    );

    let files = Generator::new(&module, &table).preview();

    assert_eq!(files[0].path, "route_module_user_center.rs");
    insta::assert_snapshot!("multi_word_module", &files[0].content);
}

#[test]
fn test_generate_writes_once_into_output_dir() {
    let temp = TempDir::new().unwrap();
    let module = ModuleName::sanitize("login").unwrap();
    let table = table(
        &module,
        &[ActionDeclaration::qualified(
            "login/LoginAction",
            "com.x.LoginAction",
        )],
    );
    let generator = Generator::new(&module, &table);

    let result = generator.generate(temp.path()).unwrap();

    assert_eq!(result.written, vec![temp.path().join("route_module_login.rs")]);
    assert_eq!(
        fs::read_to_string(&result.written[0]).unwrap(),
        generator.preview()[0].content
    );
}

#[test]
fn test_modules_differing_in_case_get_distinct_files() {
    let lower = ModuleName::sanitize("login").unwrap();
    let upper = ModuleName::sanitize("Login").unwrap();
    let lower_table = table(&lower, &[]);
    let upper_table = table(&upper, &[]);

    let lower_files = Generator::new(&lower, &lower_table).preview();
    let upper_files = Generator::new(&upper, &upper_table).preview();

    assert_eq!(lower_files[0].path, "route_module_login.rs");
    assert_eq!(upper_files[0].path, "route_module_Login.rs");
    assert!(upper_files[0].content.contains("pub struct RouteModule_Login {"));
    assert_ne!(lower_files[0].content, upper_files[0].content);
}
