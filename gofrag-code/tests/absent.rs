//! Absence propagation through every emission operation.
//!
//! An operation on present code with valid arguments keeps the chain
//! present; the same operation on the absent state, or with an absent
//! argument record, yields the absent state.

use gofrag_code::{
    AssignmentArgs, Code, Emit, FuncArgs, IfArgs, IfErrArgs, KeyedElementArgs, SelArgs,
    ShortVarDeclArgs, TestVars, VarSpecArgs,
};

type Op = fn(Option<Code>) -> Option<Code>;

fn op(name: &'static str, f: Op) -> (&'static str, Op) {
    (name, f)
}

/// Every operation, called with valid arguments.
fn operations() -> Vec<(&'static str, Op)> {
    vec![
        op("line_comment", |c| c.line_comment("rivendell")),
        op("func_end", |c| c.func_end()),
        op("block_end", |c| c.block_end()),
        op("call", |c| c.call("brethil")),
        op("param_end_ln", |c| c.param_end_ln()),
        op("param_end", |c| c.param_end()),
        op("func_header", |c| c.func_header(&FuncArgs::new("Walk", "to", "string", "error"))),
        op("type_struct", |c| c.type_struct("Moria")),
        op("var_spec", |c| c.var_spec(&VarSpecArgs::new("depth", "int"))),
        op("list", |c| c.list()),
        op("list_ln", |c| c.list_ln()),
        op("sel_field", |c| c.sel_field(&SelArgs::new("gondor", "King"))),
        op("sel_method", |c| c.sel_method(&SelArgs::new("gondor", "Crown"))),
        op("if_stmt", |c| c.if_stmt(&IfArgs::new("a", "==", "b"))),
        op("if_err", |c| c.if_err(&IfErrArgs::new("ride()", "!="))),
        op("ret", |c| c.ret()),
        op("addr", |c| c.addr()),
        op("ident", |c| c.ident("fangorn")),
        op("assignment", |c| c.assignment(&AssignmentArgs::new("x", "y"))),
        op("composite_lit", |c| c.composite_lit("Shire")),
        op("short_var_decl", |c| c.short_var_decl(&ShortVarDeclArgs::new("fangorn", "1"))),
        op("keyed_element", |c| c.keyed_element(&KeyedElementArgs::new("Name", "\"bree\""))),
        op("test_variables", |c| c.test_variables(&TestVars::all())),
        op("test_variables_none", |c| c.test_variables(&TestVars::none())),
        op("raw", |c| c.raw("go")),
        op("when", |c| c.when(true, |c| c.ident("x"))),
        op("each", |c| c.each(["a", "b"], |c, s| c.ident(s))),
    ]
}

/// Every operation taking an argument record, called with an absent record.
fn operations_with_absent_record() -> Vec<(&'static str, Op)> {
    vec![
        op("func_header", |c| c.func_header(None::<&FuncArgs>)),
        op("var_spec", |c| c.var_spec(None::<&VarSpecArgs>)),
        op("sel_field", |c| c.sel_field(None::<&SelArgs>)),
        op("sel_method", |c| c.sel_method(None::<&SelArgs>)),
        op("if_stmt", |c| c.if_stmt(None::<&IfArgs>)),
        op("if_err", |c| c.if_err(None::<&IfErrArgs>)),
        op("assignment", |c| c.assignment(None::<&AssignmentArgs>)),
        op("short_var_decl", |c| c.short_var_decl(None::<&ShortVarDeclArgs>)),
        op("keyed_element", |c| c.keyed_element(None::<&KeyedElementArgs>)),
        op("test_variables", |c| c.test_variables(None::<&TestVars>)),
    ]
}

#[test]
fn test_present_code_stays_present() {
    for (name, op) in operations() {
        assert!(op(Some(Code::new())).is_some(), "{name} returned None");
    }
}

#[test]
fn test_absent_code_stays_absent() {
    for (name, op) in operations() {
        assert!(op(None).is_none(), "{name} did not propagate absence");
    }
}

#[test]
fn test_absent_record_yields_absent() {
    for (name, op) in operations_with_absent_record() {
        assert!(
            op(Some(Code::new())).is_none(),
            "{name} accepted an absent record"
        );
    }
}

#[test]
fn test_absence_survives_the_rest_of_the_chain() {
    let code = Code::new()
        .call("brethil")
        .sel_field(None::<&SelArgs>)
        .ident("fangorn")
        .list()
        .param_end_ln();
    assert!(code.is_none());
    assert_eq!(code.text(), "");
}

#[test]
fn test_absent_text_is_empty() {
    let code: Option<Code> = None;
    assert_eq!(code.text(), "");
}

#[test]
fn test_format_absent_is_nil_pointer() {
    let mut code: Option<Code> = None;
    let err = code.format().unwrap_err();
    assert!(matches!(*err, gofrag_code::Error::NilPointer));
    assert_eq!(err.to_string(), "nil pointer");
}
