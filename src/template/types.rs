use std::fmt;
use std::sync::Arc;

/// Declared type of a path placeholder.
///
/// The set is closed: a template declaring anything else fails at
/// registration. `Str` is the default when a placeholder carries no `:type`
/// suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Str,
    Int,
    Bool,
    Email,
}

impl ParamType {
    /// Parse a declared type token from a template, e.g. the `int` in
    /// `{id:int}`. Returns `None` for tokens outside the closed set.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "string" => Some(ParamType::Str),
            "int" => Some(ParamType::Int),
            "bool" => Some(ParamType::Bool),
            "email" => Some(ParamType::Email),
            _ => None,
        }
    }

    /// The template token for this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Str => "string",
            ParamType::Int => "int",
            ParamType::Bool => "bool",
            ParamType::Email => "email",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor for one `{name}` / `{name:type}` placeholder.
///
/// Names come from the static route table and are shared as `Arc<str>` so
/// per-request capture vectors clone them in O(1).
#[derive(Debug, Clone)]
pub struct ParamMeta {
    /// Placeholder name, unique within its template.
    pub name: Arc<str>,
    /// Declared coercion type (`Str` when omitted).
    pub ty: ParamType,
    /// Index of the placeholder within the template's segment sequence.
    pub position: usize,
}
