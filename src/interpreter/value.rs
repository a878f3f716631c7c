use std::fmt;

use crate::ast::LiteralValue;

/// The dynamic type of a [`LiteralValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Boolean,
    Number,
    String,
}

impl ValueType {
    /// The name used for the type in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl LiteralValue {
    /// Returns the dynamic type of the value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Boolean(_) => ValueType::Boolean,
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
        }
    }

    /// Returns the name used for the value's type in diagnostics.
    ///
    /// # Example
    /// ```
    /// use expressions::ast::LiteralValue;
    ///
    /// assert_eq!(LiteralValue::Number(1.0).type_name(), "number");
    /// assert_eq!(LiteralValue::from("x").type_name(), "string");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.value_type().name()
    }

    /// Converts the value to a boolean for use by a logical operator.
    ///
    /// Numbers are truthy unless zero; strings are truthy unless empty or
    /// `"0"`.
    ///
    /// # Example
    /// ```
    /// use expressions::ast::LiteralValue;
    ///
    /// assert!(LiteralValue::Number(2.0).is_truthy());
    /// assert!(!LiteralValue::from("0").is_truthy());
    /// assert!(LiteralValue::from("false").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::String(s) => !(s.is_empty() || s == "0"),
        }
    }

    /// Accessors returning the payload only if the value has that type.
    ///
    /// # Example
    /// ```
    /// use expressions::ast::LiteralValue;
    ///
    /// assert_eq!(LiteralValue::Boolean(true).as_bool(), Some(true));
    /// assert_eq!(LiteralValue::from("1").as_number(), None);
    /// ```
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self { Some(*b) } else { None }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        if let Self::Number(n) = self { Some(*n) } else { None }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}
