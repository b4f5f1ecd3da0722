use std::path::{Path, PathBuf};

use droute_codegen::{CodeBuilder, RouteTable};
use droute_core::{GENERATED_HEADER, GeneratedFile};
use droute_manifest::ModuleName;

use crate::naming::{INTERFACE, class_name, string_literal};

/// The `DRouter$$Module$$<module>.java` source file.
pub struct RouterModuleClass<'a> {
    package: &'a str,
    module: &'a ModuleName,
    table: &'a RouteTable,
}

impl<'a> RouterModuleClass<'a> {
    pub fn new(package: &'a str, module: &'a ModuleName, table: &'a RouteTable) -> Self {
        Self {
            package,
            module,
            table,
        }
    }

    /// Path relative to the output directory, always `/`-separated.
    pub fn relative_path(&self) -> String {
        format!(
            "{}/{}.java",
            self.package.replace('.', "/"),
            class_name(self.module)
        )
    }
}

impl GeneratedFile for RouterModuleClass<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        self.package
            .split('.')
            .fold(base.to_path_buf(), |dir, segment| dir.join(segment))
            .join(format!("{}.java", class_name(self.module)))
    }

    fn render(&self) -> String {
        let class = class_name(self.module);
        let interface = INTERFACE.rsplit('.').next().unwrap_or(INTERFACE);

        CodeBuilder::java()
            .doc("//", GENERATED_HEADER)
            .line(&format!("package {};", self.package))
            .blank()
            .line(&format!("import {INTERFACE};"))
            .line("import java.util.HashMap;")
            .line("import java.util.Map;")
            .blank()
            .block_with_close(
                &format!("public final class {class} implements {interface} {{"),
                "}",
                |b| {
                    b.line("private final Map<String, String> modules;")
                        .blank()
                        .block_with_close(&format!("public {class}() {{"), "}", |b| {
                            b.line("this.modules = new HashMap<String, String>();").each(
                                self.table.iter(),
                                |b, (path, entry)| {
                                    b.line(&format!(
                                        "this.modules.put({}, {});",
                                        string_literal(path),
                                        string_literal(entry.implementing_type())
                                    ))
                                },
                            )
                        })
                        .blank()
                        .line("@Override")
                        .block_with_close(
                            "public final String findActionClassName(String actionName) {",
                            "}",
                            |b| b.line("return modules.get(actionName);"),
                        )
                },
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::PACKAGE;

    #[test]
    fn test_path_follows_package() {
        let module = ModuleName::sanitize("login").unwrap();
        let table = RouteTable::new();
        let file = RouterModuleClass::new(PACKAGE, &module, &table);

        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/com/drouter/assist/DRouter$$Module$$login.java")
        );
        assert_eq!(
            file.relative_path(),
            "com/drouter/assist/DRouter$$Module$$login.java"
        );
    }

    #[test]
    fn test_empty_table_still_renders_lookup() {
        let module = ModuleName::sanitize("login").unwrap();
        let table = RouteTable::new();

        let java = RouterModuleClass::new(PACKAGE, &module, &table).render();

        assert!(java.starts_with("// Generated by droute. Do not edit.\n"));
        assert!(!java.contains("this.modules.put"));
        assert!(java.contains("return modules.get(actionName);"));
    }

    #[test]
    fn test_custom_package_moves_path_and_declaration() {
        let module = ModuleName::sanitize("login").unwrap();
        let table = RouteTable::new();
        let file = RouterModuleClass::new("com.drotuer.assist", &module, &table);

        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out/com/drotuer/assist/DRouter$$Module$$login.java")
        );
        assert_eq!(
            file.relative_path(),
            "com/drotuer/assist/DRouter$$Module$$login.java"
        );
        assert!(file.render().contains("\npackage com.drotuer.assist;\n"));
    }
}
