//! Java naming and literal conventions.

use droute_manifest::ModuleName;

/// Default package of the generated router module.
pub const PACKAGE: &str = "com.drouter.assist";

/// Fully qualified name of the lookup interface the generated class implements.
pub const INTERFACE: &str = "com.drouter.api.core.IRouterModule";

/// Prefix of the generated class name; the module name follows it.
pub const CLASS_PREFIX: &str = "DRouter$$Module$$";

/// Simple name of the generated class for `module`.
pub fn class_name(module: &ModuleName) -> String {
    format!("{CLASS_PREFIX}{module}")
}

/// Quote `value` as a Java string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
