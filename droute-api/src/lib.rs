//! Runtime lookup contract for droute-generated route modules.
//!
//! `droute` generates one route module per build unit. Each module implements
//! [`RouterModule`], which resolves an action path to the fully-qualified name
//! of the type that implements it.
//!
//! ```
//! use droute_api::RouterModule;
//!
//! struct Login;
//!
//! impl RouterModule for Login {
//!     fn module_name(&self) -> &'static str {
//!         "login"
//!     }
//!
//!     fn find_action_class_name(&self, path: &str) -> Option<&str> {
//!         match path {
//!             "login/LoginAction" => Some("com.x.LoginAction"),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let module = Login;
//! assert_eq!(
//!     module.find_action_class_name("login/LoginAction"),
//!     Some("com.x.LoginAction")
//! );
//! assert_eq!(module.find_action_class_name("unknown/path"), None);
//! ```

/// A generated route module for one build unit.
pub trait RouterModule {
    /// The sanitized module name this table was generated for.
    fn module_name(&self) -> &'static str;

    /// Look up the implementing type for an action path.
    ///
    /// Returns `None` when `path` is not registered in this module.
    fn find_action_class_name(&self, path: &str) -> Option<&str>;
}

/// Resolve `path` against several modules, first match wins.
pub fn find_in<'a>(modules: &'a [Box<dyn RouterModule>], path: &str) -> Option<&'a str> {
    modules
        .iter()
        .find_map(|module| module.find_action_class_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static [(&'static str, &'static str)]);

    impl RouterModule for Fixed {
        fn module_name(&self) -> &'static str {
            self.0
        }

        fn find_action_class_name(&self, path: &str) -> Option<&str> {
            self.1.iter().find(|(p, _)| *p == path).map(|(_, ty)| *ty)
        }
    }

    #[test]
    fn test_find_in_searches_every_module() {
        let modules: Vec<Box<dyn RouterModule>> = vec![
            Box::new(Fixed("login", &[("login/LoginAction", "com.x.LoginAction")])),
            Box::new(Fixed("shop", &[("shop/CartAction", "com.y.CartAction")])),
        ];

        assert_eq!(find_in(&modules, "shop/CartAction"), Some("com.y.CartAction"));
        assert_eq!(find_in(&modules, "login/LoginAction"), Some("com.x.LoginAction"));
        assert_eq!(find_in(&modules, "unknown/path"), None);
    }
}
