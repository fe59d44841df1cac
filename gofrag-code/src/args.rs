//! Argument records for the emission operations.
//!
//! Each record is a plain bundle of the substrings one template needs.
//! Records are passed by reference; passing `None` instead of a record
//! yields the absent state, see [`Emit`](crate::Emit).

/// A function header with a single parameter and a single result:
/// `func {name}({var} {ty}) {ret} {`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncArgs {
    pub name: String,
    pub var: String,
    pub ty: String,
    pub ret: String,
}

impl FuncArgs {
    pub fn new(
        name: impl Into<String>,
        var: impl Into<String>,
        ty: impl Into<String>,
        ret: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            var: var.into(),
            ty: ty.into(),
            ret: ret.into(),
        }
    }
}

/// An identifier followed by its type, as used in struct fields and
/// `var` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarSpecArgs {
    pub ident: String,
    pub ty: String,
}

impl VarSpecArgs {
    pub fn new(ident: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            ty: ty.into(),
        }
    }
}

/// Operand and selector of a selector expression (`value.selector`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelArgs {
    pub value: String,
    pub selector: String,
}

impl SelArgs {
    pub fn new(value: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selector: selector.into(),
        }
    }
}

/// A binary condition for an `if` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IfArgs {
    pub left: String,
    pub operator: String,
    pub right: String,
}

impl IfArgs {
    pub fn new(
        left: impl Into<String>,
        operator: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator: operator.into(),
            right: right.into(),
        }
    }
}

/// A call whose error result is checked in the `if` simple statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IfErrArgs {
    /// The call expression, e.g. `os.Remove(path)`.
    pub call: String,
    /// Comparison against `nil`, usually `!=` or `==`.
    pub operator: String,
}

impl IfErrArgs {
    pub fn new(call: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            call: call.into(),
            operator: operator.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentArgs {
    pub left: String,
    pub right: String,
}

impl AssignmentArgs {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortVarDeclArgs {
    pub ident: String,
    pub expr: String,
}

impl ShortVarDeclArgs {
    pub fn new(ident: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            expr: expr.into(),
        }
    }
}

/// Key and element of one keyed element in a composite literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedElementArgs {
    pub key: String,
    pub element: String,
}

impl KeyedElementArgs {
    pub fn new(key: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            element: element.into(),
        }
    }
}
