//! The checked-in fixture is both the generator's expected output and a
//! compiled module, so generated Rust is known to build and to answer lookups.

use droute_api::RouterModule;
use droute_codegen::RouteTable;
use droute_codegen_rust::{Generator, LanguageCodegen};
use droute_manifest::{ActionDeclaration, ModuleName};

mod generated {
    include!("fixtures/route_module_login.rs");
}

use generated::RouteModule_login;

#[test]
fn test_fixture_matches_generator() {
    let module = ModuleName::sanitize("login").unwrap();
    let (table, diagnostics) = RouteTable::build(
        &[
            ActionDeclaration::qualified("login/LoginAction", "com.x.LoginAction"),
            ActionDeclaration::qualified("login/LogoutAction", "com.x.LogoutAction"),
        ],
        &module,
    );
    assert!(diagnostics.is_empty());

    let files = Generator::new(&module, &table).preview();

    assert_eq!(files[0].path, "route_module_login.rs");
    assert_eq!(
        files[0].content,
        include_str!("fixtures/route_module_login.rs")
    );
}

#[test]
fn test_generated_module_lookup() {
    let module = RouteModule_login::new();

    assert_eq!(module.module_name(), "login");
    assert_eq!(
        module.find_action_class_name("login/LoginAction"),
        Some("com.x.LoginAction")
    );
    assert_eq!(
        module.find_action_class_name("login/LogoutAction"),
        Some("com.x.LogoutAction")
    );
    assert_eq!(module.find_action_class_name("unknown/path"), None);
}

#[test]
fn test_generated_module_as_trait_object() {
    let modules: Vec<Box<dyn RouterModule>> = vec![Box::new(RouteModule_login::default())];

    assert_eq!(
        droute_api::find_in(&modules, "login/LoginAction"),
        Some("com.x.LoginAction")
    );
}
