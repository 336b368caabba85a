/// A const value as written in IDL source (directive arguments and input
/// defaults).
///
/// Object literals are kept as ordered pairs rather than a map so duplicate
/// keys survive into validation.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Scalar(ScalarValue),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn int(text: impl Into<String>) -> Self {
        Value::Scalar(ScalarValue {
            kind: ScalarKind::Int,
            text: text.into(),
        })
    }

    pub fn float(text: impl Into<String>) -> Self {
        Value::Scalar(ScalarValue {
            kind: ScalarKind::Float,
            text: text.into(),
        })
    }

    /// A string literal; `text` is the unquoted content.
    pub fn string(text: impl Into<String>) -> Self {
        Value::Scalar(ScalarValue {
            kind: ScalarKind::Str,
            text: text.into(),
        })
    }

    pub fn boolean(value: bool) -> Self {
        Value::Scalar(ScalarValue {
            kind: ScalarKind::Bool,
            text: value.to_string(),
        })
    }

    pub fn null() -> Self {
        Value::Scalar(ScalarValue {
            kind: ScalarKind::Null,
            text: "null".to_string(),
        })
    }

    /// A bare name token (enum values and variable-like idents).
    pub fn ident(text: impl Into<String>) -> Self {
        Value::Scalar(ScalarValue {
            kind: ScalarKind::Ident,
            text: text.into(),
        })
    }
}

/// A scalar token paired with its lexical kind.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarValue {
    pub kind: ScalarKind,
    pub text: String,
}

/// Lexical kind of a scalar token.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ScalarKind {
    Int,
    Float,
    Str,
    Bool,
    Null,
    Ident,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Int => "INT",
            ScalarKind::Float => "FLOAT",
            ScalarKind::Str => "STRING",
            ScalarKind::Bool => "BOOLEAN",
            ScalarKind::Null => "NULL",
            ScalarKind::Ident => "IDENT",
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
