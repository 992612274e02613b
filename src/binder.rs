//! Parameter extraction, type coercion, and argument ordering.
//!
//! Once the router has matched a route, the binder re-runs the compiled
//! pattern to pull one raw capture per placeholder, coerces each capture to
//! its declared type, checks the handler's declared parameter list is
//! satisfiable, and finally reorders the coerced values to the handler's
//! declaration order. Every failure here is a per-request outcome, never
//! process-fatal.

use crate::error::RequestError;
use crate::router::{RouteMeta, MAX_INLINE_PARAMS};
use crate::template::ParamType;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::debug;

/// Stack-allocated storage for coerced parameter values, keyed by the
/// placeholder name from the route table.
pub type CoercedVec = SmallVec<[(Arc<str>, Value); MAX_INLINE_PARAMS]>;

/// Loose email-syntax check: one `@`, no whitespace, dotted domain.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should be valid"));

/// Result of binding a matched route against a request path.
#[derive(Debug, Clone)]
pub struct BoundParams {
    /// Coerced values in template order, keyed by placeholder name.
    pub values: CoercedVec,
    /// The same values reordered to the handler's declared parameter order.
    pub args: Vec<Value>,
}

/// Extract, coerce, and order the parameters of a matched route.
///
/// `signature` is the handler's formal parameter name list in declaration
/// order (normally `route.signature`, but callers may bind against a
/// different list).
///
/// # Errors
///
/// - [`RequestError::NotFound`] when the pattern does not match `path`;
///   only reachable when `bind` is called outside the dispatcher flow,
///   since the matcher has already confirmed the match.
/// - [`RequestError::InsufficientParameters`] when the signature declares
///   more names than the route supplies.
/// - [`RequestError::TypeMismatch`] when a captured value fails coercion.
/// - [`RequestError::MissingParameter`] when a declared name has no bound
///   value.
pub fn bind(
    route: &RouteMeta,
    path: &str,
    signature: &[String],
) -> Result<BoundParams, RequestError> {
    let caps = route
        .pattern
        .captures(path)
        .ok_or(RequestError::NotFound)?;

    if signature.len() > route.params.len() {
        return Err(RequestError::InsufficientParameters {
            available: route.params.iter().map(|p| p.name.to_string()).collect(),
            required: signature.to_vec(),
        });
    }

    let mut values = CoercedVec::new();
    for param in &route.params {
        let raw = caps
            .name(&param.name)
            .expect("every placeholder captures once the pattern matched")
            .as_str();
        let value = coerce(&param.name, param.ty, raw)?;
        values.push((Arc::clone(&param.name), value));
    }

    let mut args = Vec::with_capacity(signature.len());
    for name in signature {
        let value = values
            .iter()
            .rfind(|(k, _)| k.as_ref() == name.as_str())
            .map(|(_, v)| v.clone())
            .ok_or_else(|| RequestError::MissingParameter { name: name.clone() })?;
        args.push(value);
    }

    debug!(
        path = %path,
        template = %route.template,
        bound = values.len(),
        ordered = args.len(),
        "Parameters bound"
    );

    Ok(BoundParams { values, args })
}

/// Coerce one raw captured string to its declared type.
///
/// Also used for typed query-parameter access on the request context.
///
/// # Errors
///
/// [`RequestError::TypeMismatch`] naming the parameter and the expected
/// type.
pub fn coerce(name: &str, ty: ParamType, raw: &str) -> Result<Value, RequestError> {
    let mismatch = || RequestError::TypeMismatch {
        param: name.to_string(),
        expected: ty,
    };

    match ty {
        ParamType::Str => Ok(Value::String(raw.to_string())),
        ParamType::Int => coerce_int(raw)
            .map(|n| Value::Number(n.into()))
            .ok_or_else(mismatch),
        ParamType::Bool => match raw {
            "1" | "true" => Ok(Value::Bool(true)),
            "0" | "false" => Ok(Value::Bool(false)),
            _ => Err(mismatch()),
        },
        ParamType::Email => {
            if EMAIL_REGEX.is_match(raw) {
                Ok(Value::String(raw.to_string()))
            } else {
                Err(mismatch())
            }
        }
    }
}

/// "Is numeric" integer conversion: an integer parse, else a finite float
/// parse truncated toward zero.
fn coerce_int(raw: &str) -> Option<i64> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{coerce, coerce_int};
    use crate::error::RequestError;
    use crate::template::ParamType;
    use serde_json::json;

    #[test]
    fn test_coerce_string_passthrough() {
        assert_eq!(coerce("slug", ParamType::Str, "intro").unwrap(), json!("intro"));
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(coerce("id", ParamType::Int, "42").unwrap(), json!(42));
        assert_eq!(coerce("id", ParamType::Int, "-7").unwrap(), json!(-7));
        assert_eq!(coerce("id", ParamType::Int, "4.9").unwrap(), json!(4));
        assert!(matches!(
            coerce("id", ParamType::Int, "4a"),
            Err(RequestError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_coerce_int_rejects_non_finite() {
        assert_eq!(coerce_int("inf"), None);
        assert_eq!(coerce_int("NaN"), None);
        assert_eq!(coerce_int("1e3"), Some(1000));
    }

    #[test]
    fn test_coerce_bool_tokens() {
        assert_eq!(coerce("flag", ParamType::Bool, "true").unwrap(), json!(true));
        assert_eq!(coerce("flag", ParamType::Bool, "1").unwrap(), json!(true));
        assert_eq!(coerce("flag", ParamType::Bool, "false").unwrap(), json!(false));
        assert_eq!(coerce("flag", ParamType::Bool, "0").unwrap(), json!(false));
        assert!(matches!(
            coerce("flag", ParamType::Bool, "yes"),
            Err(RequestError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_coerce_email() {
        assert_eq!(
            coerce("to", ParamType::Email, "a@b.com").unwrap(),
            json!("a@b.com")
        );
        for bad in ["not-an-email", "a@b", "a b@c.com", "@b.com"] {
            assert!(
                matches!(
                    coerce("to", ParamType::Email, bad),
                    Err(RequestError::TypeMismatch { .. })
                ),
                "expected mismatch for {bad:?}"
            );
        }
    }
}
