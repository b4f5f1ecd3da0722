use std::path::{Path, PathBuf};

use droute_codegen::{CodeBuilder, RouteTable};
use droute_core::{GENERATED_HEADER, GeneratedFile};
use droute_manifest::ModuleName;

use crate::naming::{file_name, string_literal, struct_name};

/// The `route_module_<module>.rs` source file.
pub struct RouteModuleRs<'a> {
    module: &'a ModuleName,
    table: &'a RouteTable,
}

impl<'a> RouteModuleRs<'a> {
    pub fn new(module: &'a ModuleName, table: &'a RouteTable) -> Self {
        Self { module, table }
    }

    fn constructor(&self, b: CodeBuilder) -> CodeBuilder {
        let binding = if self.table.is_empty() {
            "let routes = HashMap::new();"
        } else {
            "let mut routes = HashMap::new();"
        };

        b.block_with_close("pub fn new() -> Self {", "}", |b| {
            b.line(binding)
                .each(self.table.iter(), |b, (path, entry)| {
                    b.line(&format!(
                        "routes.insert({}, {});",
                        string_literal(path),
                        string_literal(entry.implementing_type())
                    ))
                })
                .line("Self { routes }")
        })
    }
}

impl GeneratedFile for RouteModuleRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(file_name(self.module))
    }

    fn render(&self) -> String {
        let name = struct_name(self.module);

        CodeBuilder::rust()
            .doc("//", GENERATED_HEADER)
            .blank()
            .line("use std::collections::HashMap;")
            .blank()
            .line("use droute_api::RouterModule;")
            .blank()
            .doc("///", &format!("Route table of the `{}` module.", self.module))
            .line("#[allow(non_camel_case_types)]")
            .block_with_close(&format!("pub struct {name} {{"), "}", |b| {
                b.line("routes: HashMap<&'static str, &'static str>,")
            })
            .blank()
            .block_with_close(&format!("impl {name} {{"), "}", |b| self.constructor(b))
            .blank()
            .block_with_close(&format!("impl Default for {name} {{"), "}", |b| {
                b.block_with_close("fn default() -> Self {", "}", |b| b.line("Self::new()"))
            })
            .blank()
            .block_with_close(&format!("impl RouterModule for {name} {{"), "}", |b| {
                b.block_with_close("fn module_name(&self) -> &'static str {", "}", |b| {
                    b.line(&string_literal(self.module.as_str()))
                })
                .blank()
                .block_with_close(
                    "fn find_action_class_name(&self, path: &str) -> Option<&str> {",
                    "}",
                    |b| b.line("self.routes.get(path).copied()"),
                )
            })
            .build()
    }
}
