use super::types::{ParamMeta, ParamType};
use crate::error::ConfigError;
use regex::Regex;
use std::sync::Arc;

/// Matchable form of a route template, derived once at registration.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Anchored regex with one named capture group per placeholder.
    pub pattern: Regex,
    /// Parameter descriptors in left-to-right template order.
    pub params: Vec<ParamMeta>,
    /// Number of non-empty segments in the template. A candidate path must
    /// have the same count to match.
    pub segment_count: usize,
}

/// Compile a route template into its matchable pattern and ordered
/// parameter descriptors.
///
/// The template is split on `/` and empty segments are discarded, so leading
/// and trailing slashes are tolerated. Literal segments are regex-escaped and
/// must match exactly; `{name}` / `{name:type}` segments become single-segment
/// named captures (`[^/]+`). The final pattern is anchored on both ends with
/// a tolerated optional trailing slash, so no partial-prefix match can
/// succeed. A template with zero placeholders degenerates to an exact
/// literal-path matcher.
///
/// # Errors
///
/// Malformed bracket syntax, invalid/duplicate placeholder names, and
/// unknown type tokens are configuration errors reported here, at
/// registration time.
pub fn compile(template: &str) -> Result<CompiledPattern, ConfigError> {
    let segments: Vec<&str> = template.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        // Bare root template: exact match on "/".
        return Ok(CompiledPattern {
            pattern: Regex::new(r"^/$").expect("root pattern should be valid"),
            params: Vec::new(),
            segment_count: 0,
        });
    }

    let mut pattern = String::with_capacity(template.len() + 8);
    pattern.push('^');
    let mut params: Vec<ParamMeta> = Vec::with_capacity(template.matches('{').count());

    for (position, segment) in segments.iter().enumerate() {
        pattern.push('/');

        match placeholder_inner(template, segment)? {
            Some(inner) => {
                let (name, ty) = parse_placeholder(template, inner)?;
                if params.iter().any(|p| p.name.as_ref() == name) {
                    return Err(ConfigError::DuplicateParamName {
                        template: template.to_string(),
                        name: name.to_string(),
                    });
                }
                pattern.push_str("(?P<");
                pattern.push_str(name);
                pattern.push_str(">[^/]+)");
                params.push(ParamMeta {
                    name: Arc::from(name),
                    ty,
                    position,
                });
            }
            None => pattern.push_str(&regex::escape(segment)),
        }
    }

    // Anchor the whole path; a trailing slash on the candidate is tolerated.
    pattern.push_str("/?$");
    let pattern =
        Regex::new(&pattern).expect("route pattern should be valid once segments are validated");

    Ok(CompiledPattern {
        pattern,
        params,
        segment_count: segments.len(),
    })
}

/// Return the text inside `{` `}` if the segment is a placeholder, `None`
/// if it is a literal. Stray or unbalanced braces are rejected either way.
fn placeholder_inner<'a>(template: &str, segment: &'a str) -> Result<Option<&'a str>, ConfigError> {
    let malformed = || ConfigError::MalformedTemplate {
        template: template.to_string(),
        segment: segment.to_string(),
    };

    if segment.starts_with('{') && segment.ends_with('}') && segment.len() >= 2 {
        let inner = &segment[1..segment.len() - 1];
        if inner.contains('{') || inner.contains('}') {
            return Err(malformed());
        }
        Ok(Some(inner))
    } else if segment.contains('{') || segment.contains('}') {
        Err(malformed())
    } else {
        Ok(None)
    }
}

/// Split placeholder text on `:` into its name and declared type.
fn parse_placeholder<'a>(
    template: &str,
    inner: &'a str,
) -> Result<(&'a str, ParamType), ConfigError> {
    let (name, ty) = match inner.split_once(':') {
        Some((name, token)) => {
            let ty = ParamType::parse(token).ok_or_else(|| ConfigError::UnknownParamType {
                template: template.to_string(),
                name: name.to_string(),
                ty: token.to_string(),
            })?;
            (name, ty)
        }
        None => (inner, ParamType::Str),
    };

    if name.is_empty() {
        return Err(ConfigError::EmptyParamName {
            template: template.to_string(),
        });
    }
    if !is_capture_ident(name) {
        return Err(ConfigError::InvalidParamName {
            template: template.to_string(),
            name: name.to_string(),
        });
    }

    Ok((name, ty))
}

/// Placeholder names double as regex capture-group names, so they are held
/// to the capture identifier grammar.
fn is_capture_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
