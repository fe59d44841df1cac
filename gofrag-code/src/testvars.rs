//! Predeclared variables for generated Go unit tests.

/// Selects which test variables [`Emit::test_variables`](crate::Emit::test_variables)
/// declares.
///
/// Variables are always emitted in field order: string, error, int, float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestVars {
    pub string: bool,
    pub error: bool,
    pub int: bool,
    pub float: bool,
}

impl TestVars {
    /// No variables requested.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every variable requested.
    pub fn all() -> Self {
        Self {
            string: true,
            error: true,
            int: true,
            float: true,
        }
    }

    pub fn string(mut self) -> Self {
        self.string = true;
        self
    }

    pub fn error(mut self) -> Self {
        self.error = true;
        self
    }

    pub fn int(mut self) -> Self {
        self.int = true;
        self
    }

    pub fn float(mut self) -> Self {
        self.float = true;
        self
    }

    /// True if at least one variable is requested.
    pub fn any(&self) -> bool {
        self.string || self.error || self.int || self.float
    }

    /// Declaration lines for the requested variables, in emission order.
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.string, STRING_VAR),
            (self.error, ERROR_VAR),
            (self.int, INT_VAR),
            (self.float, FLOAT_VAR),
        ]
        .into_iter()
        .filter_map(|(requested, line)| requested.then_some(line))
    }
}

pub(crate) const STRING_VAR: &str = "strFoo string = \"foobar\" // test variable type string\n";
pub(crate) const ERROR_VAR: &str =
    "errFoo error = fmt.Errorf(strFoo) // test variable type error\n";
pub(crate) const INT_VAR: &str = "intFoo int64 = 1234 // test variable type int64\n";
pub(crate) const FLOAT_VAR: &str = "floatFoo float64 = 1234 // test variable type float64\n";
