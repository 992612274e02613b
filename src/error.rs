use crate::template::ParamType;
use std::fmt;

/// Route configuration error.
///
/// Raised at registration time for programmer mistakes: malformed template
/// syntax or an HTTP method outside the allowed set. These abort startup and
/// are never produced while serving requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A template segment has unbalanced or stray `{` `}` braces.
    MalformedTemplate { template: String, segment: String },
    /// A placeholder was declared with an empty name, e.g. `/users/{}`.
    EmptyParamName { template: String },
    /// A placeholder name is not a valid capture identifier
    /// (`[A-Za-z_][A-Za-z0-9_]*`).
    InvalidParamName { template: String, name: String },
    /// The same placeholder name appears twice in one template.
    DuplicateParamName { template: String, name: String },
    /// A placeholder declared a type outside `{string, int, bool, email}`.
    UnknownParamType {
        template: String,
        name: String,
        ty: String,
    },
    /// The registration method is not one of DELETE/GET/HEAD/POST/PUT.
    UnknownMethod { method: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MalformedTemplate { template, segment } => {
                write!(
                    f,
                    "malformed segment '{}' in route template '{}': unbalanced '{{' '}}' braces",
                    segment, template
                )
            }
            ConfigError::EmptyParamName { template } => {
                write!(
                    f,
                    "route template '{}' declares a placeholder with an empty name",
                    template
                )
            }
            ConfigError::InvalidParamName { template, name } => {
                write!(
                    f,
                    "placeholder name '{}' in route template '{}' is not a valid identifier",
                    name, template
                )
            }
            ConfigError::DuplicateParamName { template, name } => {
                write!(
                    f,
                    "placeholder name '{}' appears more than once in route template '{}'",
                    name, template
                )
            }
            ConfigError::UnknownParamType { template, name, ty } => {
                write!(
                    f,
                    "placeholder '{}' in route template '{}' declares unknown type '{}' \
                    (expected one of: string, int, bool, email)",
                    name, template, ty
                )
            }
            ConfigError::UnknownMethod { method } => {
                write!(
                    f,
                    "'{}' is not an allowed method (expected one of: DELETE, GET, HEAD, POST, PUT)",
                    method
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Per-request routing failure.
///
/// Expected, recoverable outcomes produced while serving a request. Each
/// variant carries enough context to render a useful client-facing message
/// and maps to an HTTP status code via [`RequestError::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No registered route structurally matches the request path.
    NotFound,
    /// A route matched the path but was registered under a different method.
    MethodNotAllowed,
    /// The handler declares more positional parameters than the route
    /// supplies.
    InsufficientParameters {
        /// Parameter names the matched route can supply, in template order.
        available: Vec<String>,
        /// Parameter names the handler declared, in declaration order.
        required: Vec<String>,
    },
    /// A declared handler parameter has no bound value to draw from.
    MissingParameter { name: String },
    /// A captured value failed coercion to its declared type.
    TypeMismatch { param: String, expected: ParamType },
}

impl RequestError {
    /// HTTP status code equivalent for this failure.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            RequestError::NotFound => 404,
            RequestError::MethodNotAllowed => 405,
            RequestError::InsufficientParameters { .. }
            | RequestError::MissingParameter { .. }
            | RequestError::TypeMismatch { .. } => 400,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotFound => write!(f, "no route matches the request path"),
            RequestError::MethodNotAllowed => {
                write!(f, "the matched route does not allow the request method")
            }
            RequestError::InsufficientParameters {
                available,
                required,
            } => {
                write!(
                    f,
                    "handler requires more parameters than the route supplies \
                    (available: {}; required: {})",
                    available.join(", "),
                    required.join(", ")
                )
            }
            RequestError::MissingParameter { name } => {
                write!(f, "no bound value for declared parameter '{}'", name)
            }
            RequestError::TypeMismatch { param, expected } => match expected {
                ParamType::Int => write!(f, "parameter '{}' is not an integer", param),
                ParamType::Bool => write!(f, "parameter '{}' is not a boolean", param),
                ParamType::Email => {
                    write!(f, "parameter '{}' is not a valid email address", param)
                }
                ParamType::Str => write!(f, "parameter '{}' is not a string", param),
            },
        }
    }
}

impl std::error::Error for RequestError {}
