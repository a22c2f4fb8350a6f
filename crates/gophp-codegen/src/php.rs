//! PHP service class renderer.
//!
//! Produces one class extending the FFI base class from the PHP support
//! library, with a wrapper method per exported Go function. Every wrapper
//! forwards its arguments unchanged to `$this->ffi`.

use crate::type_map::{doc_type, hint_type, PhpType};
use gophp_ast::naming::{to_pascal_case, to_snake_case};
use gophp_ast::FunctionDescriptor;

/// Extension of the generated binding document
pub const PHP_EXTENSION: &str = "php";

const BASE_CLASS: &str = "GoLibraryBase";
const BASE_CLASS_IMPORT: &str = "Wuwuseo\\PhpffiGoLibrary\\GoLibraryBase";

const INDENT: &str = "    ";

/// Identifiers derived from the Go source file's base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNames {
    /// `my_go`, used in the namespace
    pub snake: String,
    /// `MyGo`, the class name prefix
    pub pascal: String,
}

impl ServiceNames {
    pub fn from_base_name(base_name: &str) -> Self {
        Self {
            snake: to_snake_case(base_name),
            pascal: to_pascal_case(base_name),
        }
    }

    /// `MyGoService`
    pub fn class_name(&self) -> String {
        format!("{}Service", self.pascal)
    }

    /// `MyGoService.php`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name(), PHP_EXTENSION)
    }

    /// `app\my_go\service`
    pub fn namespace(&self) -> String {
        format!("app\\{}\\service", self.snake)
    }
}

/// Render the complete service class for a list of exported functions
pub fn render_service(functions: &[FunctionDescriptor], names: &ServiceNames) -> String {
    let mut output = render_header(names);

    for func in functions {
        output.push_str(&render_doc_block(func));
        output.push_str(&render_method(func));
        output.push('\n');
    }

    output.push_str("}\n");
    output
}

fn render_header(names: &ServiceNames) -> String {
    format!(
        r"<?php
/**
 * FFI Bindings Service
 * Auto-generated by Go-PHP FFI Code Generator
 *
 * Provides PHP interface to Go shared library functions
 */

namespace {namespace};

use {import};

class {class} extends {base} {{

    /**
     * Get the base directory
     * @return string
     */
    protected function getBaseDir(): string
    {{
        return dirname(__DIR__);
    }}

",
        namespace = names.namespace(),
        import = BASE_CLASS_IMPORT,
        class = names.class_name(),
        base = BASE_CLASS,
    )
}

/// PHPDoc block: summary, one `@param` per parameter, `@return`
fn render_doc_block(func: &FunctionDescriptor) -> String {
    let mut lines = vec![format!("{INDENT}/**")];

    if !func.comment.is_empty() {
        // Keep a stray `*/` in Go comments from closing the docblock
        lines.push(format!("{INDENT} * {}", func.comment.replace("*/", "*\\/")));
    }

    for param in &func.params {
        lines.push(format!(
            "{INDENT} * @param {} ${}",
            doc_type(&param.ty),
            param.name
        ));
    }

    lines.push(format!("{INDENT} * @return {}", doc_type(&func.return_type)));
    lines.push(format!("{INDENT} */"));

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

/// Method declaration plus its single delegating call
fn render_method(func: &FunctionDescriptor) -> String {
    let params: Vec<String> = func
        .params
        .iter()
        .map(|param| match hint_type(&param.ty) {
            Some(hint) => format!("{} ${}", hint, param.name),
            None => format!("${}", param.name),
        })
        .collect();

    let return_hint = hint_type(&func.return_type)
        .map(|hint| format!(": {}", hint))
        .unwrap_or_default();

    let args: Vec<String> = func
        .params
        .iter()
        .map(|param| format!("${}", param.name))
        .collect();

    let call = format!("$this->ffi->{}({})", func.name, args.join(", "));
    let statement = if doc_type(&func.return_type) == PhpType::Void {
        format!("{call};")
    } else {
        format!("return {call};")
    };

    format!(
        "{INDENT}public function {name}({params}){return_hint} {{\n{INDENT}{INDENT}{statement}\n{INDENT}}}\n",
        name = func.name,
        params = params.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gophp_ast::Param;

    fn descriptor(name: &str, comment: &str, params: &[(&str, &str)], ret: &str) -> FunctionDescriptor {
        FunctionDescriptor {
            name: name.to_string(),
            comment: comment.to_string(),
            params: params.iter().map(|(n, t)| Param::new(*n, *t)).collect(),
            return_type: ret.to_string(),
            line: 1,
        }
    }

    #[test]
    fn test_service_names() {
        let names = ServiceNames::from_base_name("MyGo");
        assert_eq!(names.snake, "my_go");
        assert_eq!(names.pascal, "MyGo");
        assert_eq!(names.class_name(), "MyGoService");
        assert_eq!(names.file_name(), "MyGoService.php");
        assert_eq!(names.namespace(), "app\\my_go\\service");

        let lower = ServiceNames::from_base_name("mygo");
        assert_eq!(lower.class_name(), "MygoService");
        assert_eq!(lower.namespace(), "app\\mygo\\service");
    }

    #[test]
    fn test_render_add_method() {
        let add = descriptor("Add", "adds two numbers", &[("a", "int"), ("b", "int")], "int");

        assert_eq!(
            render_doc_block(&add),
            "    /**\n     * adds two numbers\n     * @param int $a\n     * @param int $b\n     * @return int\n     */\n"
        );
        assert_eq!(
            render_method(&add),
            "    public function Add(int $a, int $b): int {\n        return $this->ffi->Add($a, $b);\n    }\n"
        );
    }

    #[test]
    fn test_void_method_without_params() {
        let reset = descriptor("Reset", "", &[], "void");

        assert_eq!(
            render_doc_block(&reset),
            "    /**\n     * @return void\n     */\n"
        );
        assert_eq!(
            render_method(&reset),
            "    public function Reset() {\n        $this->ffi->Reset();\n    }\n"
        );
    }

    #[test]
    fn test_untyped_positions() {
        let func = descriptor("Wrap", "", &[("err", "error"), ("p", "*C.char")], "int, error");
        let method = render_method(&func);
        assert!(method.starts_with("    public function Wrap($err, string $p) {\n"));
        assert!(method.contains("return $this->ffi->Wrap($err, $p);"));

        let doc = render_doc_block(&func);
        assert!(doc.contains("@param mixed $err"));
        assert!(doc.contains("@param string $p"));
        assert!(doc.contains("@return mixed"));
    }

    #[test]
    fn test_comment_cannot_close_docblock() {
        let func = descriptor("Odd", "ends */ early", &[], "void");
        assert!(render_doc_block(&func).contains(" * ends *\\/ early\n"));
    }

    #[test]
    fn test_render_service_layout() {
        let functions = vec![
            descriptor("Add", "adds two numbers", &[("a", "int"), ("b", "int")], "int"),
            descriptor("Echo", "", &[("s", "string")], "string"),
        ];
        let names = ServiceNames::from_base_name("MyGo");
        let output = render_service(&functions, &names);

        assert!(output.starts_with("<?php\n"));
        assert!(output.contains("namespace app\\my_go\\service;\n"));
        assert!(output.contains("use Wuwuseo\\PhpffiGoLibrary\\GoLibraryBase;\n"));
        assert!(output.contains("class MyGoService extends GoLibraryBase {\n"));
        assert!(output.contains("        return dirname(__DIR__);\n"));
        assert!(output.ends_with("    }\n\n}\n"));

        let add_pos = output.find("function Add(").unwrap();
        let echo_pos = output.find("function Echo(string $s): string").unwrap();
        assert!(add_pos < echo_pos);
    }

    #[test]
    fn test_render_empty_service() {
        let output = render_service(&[], &ServiceNames::from_base_name("empty"));
        assert!(output.contains("class EmptyService extends GoLibraryBase {"));
        assert!(output.ends_with("        return dirname(__DIR__);\n    }\n\n}\n"));
    }
}
