//! The fragment accumulator.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    AssignmentArgs, Error, Formatter, FuncArgs, Gofmt, IfArgs, IfErrArgs, KeyedElementArgs, Result,
    SelArgs, ShortVarDeclArgs, TestVars, VarSpecArgs, template,
};

/// Accumulated Go source text.
///
/// A `Code` starts empty and grows through the operations of [`Emit`].
/// Nothing checks the text for syntactic validity until [`Emit::format`].
///
/// # Example
///
/// ```
/// use gofrag_code::{Code, Emit};
///
/// let code = Code::new()
///     .call("brethil")
///     .ident("fangorn")
///     .list()
///     .ident("lothlorien")
///     .param_end_ln();
///
/// assert_eq!(code.text(), "brethil(fangorn, lothlorien)\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    text: String,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the code and return the accumulated text.
    pub fn into_string(self) -> String {
        self.text
    }

    fn push(mut self, fragment: &str) -> Self {
        self.text.push_str(fragment);
        self
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Chainable fragment emission.
///
/// Implemented for [`Code`] and for `Option<Code>`, where `None` is the
/// absent state. Every operation returns `Option<Code>`: the same code with
/// one fragment appended, or `None` when called on the absent state or with
/// an absent argument record. Absence therefore carries through the rest of
/// a chain without any call failing.
///
/// ```
/// use gofrag_code::{Code, Emit, ShortVarDeclArgs};
///
/// let absent = Code::new().short_var_decl(None::<&ShortVarDeclArgs>).ident("x");
/// assert!(absent.is_none());
/// assert_eq!(absent.text(), "");
/// ```
pub trait Emit: Sized {
    /// Convert into the underlying code, `None` when absent.
    fn into_code(self) -> Option<Code>;

    fn as_code(&self) -> Option<&Code>;

    fn as_code_mut(&mut self) -> Option<&mut Code>;

    /// The accumulated text, or `""` when absent.
    fn text(&self) -> &str {
        self.as_code().map_or("", |code| code.text.as_str())
    }

    /// Append a fragment verbatim.
    fn raw(self, fragment: &str) -> Option<Code> {
        self.into_code().map(|code| code.push(fragment))
    }

    /// Append a fragment rendered from an argument record, or return `None`
    /// if the record is absent.
    fn with_args<'a, A: 'a>(
        self,
        args: impl Into<Option<&'a A>>,
        render: impl FnOnce(&A) -> String,
    ) -> Option<Code> {
        let args = args.into()?;
        self.raw(&render(args))
    }

    fn line_comment(self, comment: &str) -> Option<Code> {
        self.raw(&template::line_comment(comment))
    }

    /// Closes a function body and leaves a blank line.
    fn func_end(self) -> Option<Code> {
        self.raw(template::FUNC_END)
    }

    fn block_end(self) -> Option<Code> {
        self.raw(template::BLOCK_END)
    }

    fn call(self, name: &str) -> Option<Code> {
        self.raw(&template::call(name))
    }

    fn param_end_ln(self) -> Option<Code> {
        self.raw(template::PARAM_END_LN)
    }

    fn param_end(self) -> Option<Code> {
        self.raw(template::PARAM_END)
    }

    fn func_header<'a>(self, args: impl Into<Option<&'a FuncArgs>>) -> Option<Code> {
        self.with_args(args, template::func_header)
    }

    fn type_struct(self, name: &str) -> Option<Code> {
        self.raw(&template::type_struct(name))
    }

    fn var_spec<'a>(self, args: impl Into<Option<&'a VarSpecArgs>>) -> Option<Code> {
        self.with_args(args, template::var_spec)
    }

    fn list(self) -> Option<Code> {
        self.raw(template::LIST)
    }

    fn list_ln(self) -> Option<Code> {
        self.raw(template::LIST_LN)
    }

    fn sel_field<'a>(self, args: impl Into<Option<&'a SelArgs>>) -> Option<Code> {
        self.with_args(args, template::sel_field)
    }

    fn sel_method<'a>(self, args: impl Into<Option<&'a SelArgs>>) -> Option<Code> {
        self.with_args(args, template::sel_method)
    }

    fn if_stmt<'a>(self, args: impl Into<Option<&'a IfArgs>>) -> Option<Code> {
        self.with_args(args, template::if_stmt)
    }

    fn if_err<'a>(self, args: impl Into<Option<&'a IfErrArgs>>) -> Option<Code> {
        self.with_args(args, template::if_err)
    }

    fn ret(self) -> Option<Code> {
        self.raw(template::RETURN)
    }

    fn addr(self) -> Option<Code> {
        self.raw(template::ADDR)
    }

    fn ident(self, ident: &str) -> Option<Code> {
        self.raw(ident)
    }

    fn assignment<'a>(self, args: impl Into<Option<&'a AssignmentArgs>>) -> Option<Code> {
        self.with_args(args, template::assignment)
    }

    fn composite_lit(self, ty: &str) -> Option<Code> {
        self.raw(&template::composite_lit(ty))
    }

    fn short_var_decl<'a>(self, args: impl Into<Option<&'a ShortVarDeclArgs>>) -> Option<Code> {
        self.with_args(args, template::short_var_decl)
    }

    fn keyed_element<'a>(self, args: impl Into<Option<&'a KeyedElementArgs>>) -> Option<Code> {
        self.with_args(args, template::keyed_element)
    }

    /// Declare the requested test variables in one grouped `var` block.
    ///
    /// Appends nothing when no variable is requested.
    fn test_variables<'a>(self, vars: impl Into<Option<&'a TestVars>>) -> Option<Code> {
        self.with_args(vars, template::test_variables)
    }

    /// Conditionally add content.
    fn when<F>(self, condition: bool, f: F) -> Option<Code>
    where
        F: FnOnce(Code) -> Option<Code>,
    {
        let code = self.into_code()?;
        if condition { f(code) } else { Some(code) }
    }

    /// Iterate and add content for each item.
    fn each<T, I, F>(self, items: I, f: F) -> Option<Code>
    where
        I: IntoIterator<Item = T>,
        F: Fn(Code, T) -> Option<Code>,
    {
        items
            .into_iter()
            .try_fold(self.into_code()?, |code, item| f(code, item))
    }

    /// Format the text in canonical gofmt style.
    ///
    /// Uses [`Gofmt::from_env`]. See [`Emit::format_with`].
    fn format(&mut self) -> Result<()> {
        self.format_with(&Gofmt::from_env())
    }

    /// Replace the text with its canonical form as produced by `formatter`.
    ///
    /// Fails with [`Error::NilPointer`] when absent, without calling the
    /// formatter. When the formatter rejects the text, the error wraps the
    /// formatter's diagnostic and the text is left unchanged.
    fn format_with<F>(&mut self, formatter: &F) -> Result<()>
    where
        F: Formatter + ?Sized,
    {
        let code = self.as_code_mut().ok_or(Error::NilPointer)?;
        if code.text.is_empty() {
            debug!("nothing to format");
            return Ok(());
        }

        let formatted = formatter
            .format_source(code.text.as_bytes())
            .and_then(|out| Ok(String::from_utf8(out)?))
            .map_err(|e| {
                warn!(error = %e, "formatter rejected code");
                Error::format_source(e)
            })?;
        code.text = formatted;
        Ok(())
    }
}

impl Emit for Code {
    fn into_code(self) -> Option<Code> {
        Some(self)
    }

    fn as_code(&self) -> Option<&Code> {
        Some(self)
    }

    fn as_code_mut(&mut self) -> Option<&mut Code> {
        Some(self)
    }
}

impl Emit for Option<Code> {
    fn into_code(self) -> Option<Code> {
        self
    }

    fn as_code(&self) -> Option<&Code> {
        self.as_ref()
    }

    fn as_code_mut(&mut self) -> Option<&mut Code> {
        self.as_mut()
    }
}
