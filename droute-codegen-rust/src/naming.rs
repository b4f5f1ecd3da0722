//! Rust naming conventions for generated route modules.
//!
//! Names embed the sanitized module name unchanged. Module names are already
//! `[0-9A-Za-z_]+`, and any case conversion would map distinct modules such
//! as `login` and `Login` onto one artifact.

use droute_manifest::ModuleName;

/// `RouteModule_<module>`, e.g. `RouteModule_login` for `login`.
pub fn struct_name(module: &ModuleName) -> String {
    format!("RouteModule_{module}")
}

/// `route_module_<module>.rs`, e.g. `route_module_login.rs` for `login`.
pub fn file_name(module: &ModuleName) -> String {
    format!("route_module_{module}.rs")
}

/// Quote `value` as a Rust string literal.
pub fn string_literal(value: &str) -> String {
    format!("\"{}\"", value.escape_debug())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> ModuleName {
        ModuleName::sanitize(name).unwrap()
    }

    #[test]
    fn test_struct_name() {
        assert_eq!(struct_name(&module("login")), "RouteModule_login");
        assert_eq!(struct_name(&module("user_center")), "RouteModule_user_center");
        assert_eq!(struct_name(&module("v2")), "RouteModule_v2");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(&module("login")), "route_module_login.rs");
        assert_eq!(file_name(&module("userCenter")), "route_module_userCenter.rs");
    }

    #[test]
    fn test_names_differing_only_in_case_stay_distinct() {
        for (a, b) in [("login", "Login"), ("user_center", "userCenter"), ("ab", "a_b")] {
            assert_ne!(struct_name(&module(a)), struct_name(&module(b)));
            assert_ne!(file_name(&module(a)), file_name(&module(b)));
        }
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("login/LoginAction"), "\"login/LoginAction\"");
        assert_eq!(string_literal(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(string_literal("a\nb"), r#""a\nb""#);
        assert_eq!(string_literal("\u{1}"), r#""\u{1}""#);
    }
}
