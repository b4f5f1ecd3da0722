// Generated by droute. Do not edit.

use std::collections::HashMap;

use droute_api::RouterModule;

/// Route table of the `login` module.
#[allow(non_camel_case_types)]
pub struct RouteModule_login {
    routes: HashMap<&'static str, &'static str>,
}

impl RouteModule_login {
    pub fn new() -> Self {
        let mut routes = HashMap::new();
        routes.insert("login/LoginAction", "com.x.LoginAction");
        routes.insert("login/LogoutAction", "com.x.LogoutAction");
        Self { routes }
    }
}

impl Default for RouteModule_login {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterModule for RouteModule_login {
    fn module_name(&self) -> &'static str {
        "login"
    }

    fn find_action_class_name(&self, path: &str) -> Option<&str> {
        self.routes.get(path).copied()
    }
}
