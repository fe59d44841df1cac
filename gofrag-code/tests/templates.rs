//! Exact text produced by chains of emission operations, before formatting.

use gofrag_code::{
    AssignmentArgs, Code, Emit, FuncArgs, IfArgs, IfErrArgs, KeyedElementArgs, SelArgs,
    ShortVarDeclArgs, TestVars, VarSpecArgs, testing::assert_content_eq,
};

#[test]
fn test_call_with_arguments() {
    let code = Code::new()
        .call("brethil")
        .ident("fangorn")
        .list()
        .ident("lothlorien")
        .param_end_ln();
    assert_eq!(code.text(), "brethil(fangorn, lothlorien)\n");
}

#[test]
fn test_short_var_decl_with_keyed_element() {
    let code = Code::new()
        .short_var_decl(&ShortVarDeclArgs::new("fangorn", "trollshaws{"))
        .keyed_element(&KeyedElementArgs::new("lothlorien", "ithilien"))
        .func_end();
    assert_eq!(
        code.text(),
        "fangorn := trollshaws{\nlothlorien: ithilien,\n}\n\n"
    );
}

#[test]
fn test_struct_declaration() {
    let code = Code::new()
        .line_comment("Fellowship is a company of walkers")
        .type_struct("Fellowship")
        .var_spec(&VarSpecArgs::new("members", "[]string"))
        .var_spec(&VarSpecArgs::new("ring", "*Ring"))
        .func_end();
    assert_content_eq(
        "// Fellowship is a company of walkers\n\
         type Fellowship struct {\n\
         members []string\n\
         ring *Ring\n\
         }\n\n",
        code.text(),
    );
}

#[test]
fn test_call_with_arguments_on_lines() {
    let code = Code::new()
        .call("fmt.Println")
        .ident("frodo")
        .list_ln()
        .ident("sam")
        .list_ln()
        .param_end_ln();
    assert_eq!(code.text(), "fmt.Println(frodo,\nsam,\n)\n");
}

/// Leave returns early when the ring check fails.
fn leave() -> Option<Code> {
    Code::new()
        .func_header(&FuncArgs::new("Leave", "f", "*Fellowship", "error"))
        .if_err(&IfErrArgs::new("f.ring.Check()", "!="))
        .ret()
        .ident("err")
        .raw("\n")
        .block_end()
        .if_stmt(&IfArgs::new("len(f.members)", "==", "0"))
        .assignment(&AssignmentArgs::new("f.members", "nil"))
        .raw("\n")
        .block_end()
        .ret()
        .ident("nil")
        .raw("\n")
        .func_end()
}

#[test]
fn test_function_with_error_check() {
    assert_content_eq(
        "func Leave(f *Fellowship) error {\n\
         if err := f.ring.Check(); err != nil {\n\
         return err\n\
         }\n\
         if len(f.members) == 0 {\n\
         f.members = nil\n\
         }\n\
         return nil\n\
         }\n\n",
        leave().text(),
    );
}

#[test]
fn test_selectors_and_composite_literal() {
    let code = Code::new()
        .ret()
        .addr()
        .composite_lit("Fellowship")
        .ident("ring")
        .raw(": ")
        .sel_method(&SelArgs::new("mordor", "Forge"))
        .param_end()
        .list()
        .ident("name")
        .raw(": ")
        .sel_field(&SelArgs::new("shire", "Name"))
        .raw("}");
    assert_eq!(
        code.text(),
        "return &Fellowship{ring: mordor.Forge(), name: shire.Name}"
    );
}

#[test]
fn test_variables_in_flag_order() {
    let code = Code::new().test_variables(&TestVars::none().float().string());
    assert_content_eq(
        "var (\n\
         strFoo string = \"foobar\" // test variable type string\n\
         floatFoo float64 = 1234 // test variable type float64\n\
         )\n\n",
        code.text(),
    );
}

#[test]
fn test_variables_none_leaves_text_unchanged() {
    let code = Code::new()
        .line_comment("before")
        .test_variables(&TestVars::none());
    assert_eq!(code.text(), "// before\n");
}

#[test]
fn test_each_builds_keyed_elements() {
    let members = [("Frodo", "\"hobbit\""), ("Gimli", "\"dwarf\"")];
    let code = Code::new()
        .short_var_decl(&ShortVarDeclArgs::new("races", "map[string]string{"))
        .each(members, |c, (key, element)| {
            c.keyed_element(&KeyedElementArgs::new(key, element))
        })
        .block_end();
    assert_eq!(
        code.text(),
        "races := map[string]string{\nFrodo: \"hobbit\",\nGimli: \"dwarf\",\n}\n"
    );
}
