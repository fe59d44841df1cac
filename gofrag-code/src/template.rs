//! Fragment templates.
//!
//! Every emission operation on [`Code`](crate::Code) appends the output of
//! exactly one function from this module. The functions are pure and do
//! not check that their inputs form valid Go; that is left to
//! canonicalization.

use crate::{
    AssignmentArgs, FuncArgs, IfArgs, IfErrArgs, KeyedElementArgs, SelArgs, ShortVarDeclArgs,
    TestVars, VarSpecArgs,
};

pub const FUNC_END: &str = "}\n\n";
pub const BLOCK_END: &str = "}\n";
pub const PARAM_END_LN: &str = ")\n";
pub const PARAM_END: &str = ")";
pub const LIST: &str = ", ";
pub const LIST_LN: &str = ",\n";
pub const RETURN: &str = "return ";
pub const ADDR: &str = "&";

/// `// {comment}`
pub fn line_comment(comment: &str) -> String {
    format!("// {comment}\n")
}

/// Opens a call: `{name}(`
pub fn call(name: &str) -> String {
    format!("{name}(")
}

pub fn func_header(args: &FuncArgs) -> String {
    format!(
        "func {}({} {}) {} {{\n",
        args.name, args.var, args.ty, args.ret
    )
}

pub fn type_struct(name: &str) -> String {
    format!("type {name} struct {{\n")
}

pub fn var_spec(args: &VarSpecArgs) -> String {
    format!("{} {}\n", args.ident, args.ty)
}

/// `{value}.{selector}`
pub fn sel_field(args: &SelArgs) -> String {
    format!("{}.{}", args.value, args.selector)
}

/// `{value}.{selector}(`, left open for the argument list.
pub fn sel_method(args: &SelArgs) -> String {
    format!("{}.{}(", args.value, args.selector)
}

pub fn if_stmt(args: &IfArgs) -> String {
    format!("if {} {} {} {{\n", args.left, args.operator, args.right)
}

/// `if err := {call}; err {operator} nil {`
pub fn if_err(args: &IfErrArgs) -> String {
    format!("if err := {}; err {} nil {{\n", args.call, args.operator)
}

pub fn assignment(args: &AssignmentArgs) -> String {
    format!("{} = {}", args.left, args.right)
}

/// Opens a composite literal: `{ty}{`
pub fn composite_lit(ty: &str) -> String {
    format!("{ty}{{")
}

pub fn short_var_decl(args: &ShortVarDeclArgs) -> String {
    format!("{} := {}\n", args.ident, args.expr)
}

pub fn keyed_element(args: &KeyedElementArgs) -> String {
    format!("{}: {},\n", args.key, args.element)
}

/// A grouped `var` declaration holding the requested test variables.
///
/// Returns an empty string when no variable is requested.
pub fn test_variables(vars: &TestVars) -> String {
    if !vars.any() {
        return String::new();
    }
    let mut out = String::from("var (\n");
    out.extend(vars.lines());
    out.push_str(")\n\n");
    out
}
