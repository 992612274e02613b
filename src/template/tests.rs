use super::compile;
use super::types::ParamType;
use crate::error::ConfigError;

#[test]
fn test_root_template() {
    let compiled = compile("/").expect("compile root");
    assert!(compiled.pattern.is_match("/"));
    assert!(compiled.params.is_empty());
    assert_eq!(compiled.segment_count, 0);
}

#[test]
fn test_literal_template() {
    let compiled = compile("/health").expect("compile");
    assert!(compiled.pattern.is_match("/health"));
    assert!(!compiled.pattern.is_match("/health/live"));
    assert!(!compiled.pattern.is_match("/healthz"));
    assert!(compiled.params.is_empty());
    assert_eq!(compiled.segment_count, 1);
}

#[test]
fn test_descriptors_in_template_order() {
    let compiled = compile("/users/{id:int}/posts/{slug}").expect("compile");
    let names: Vec<&str> = compiled.params.iter().map(|p| p.name.as_ref()).collect();
    assert_eq!(names, vec!["id", "slug"]);
    assert_eq!(compiled.params[0].ty, ParamType::Int);
    assert_eq!(compiled.params[0].position, 1);
    assert_eq!(compiled.params[1].ty, ParamType::Str);
    assert_eq!(compiled.params[1].position, 3);
    assert_eq!(compiled.segment_count, 4);
}

#[test]
fn test_named_captures() {
    let compiled = compile("/users/{id}").expect("compile");
    let caps = compiled.pattern.captures("/users/42").expect("match");
    assert_eq!(caps.name("id").map(|m| m.as_str()), Some("42"));
}

#[test]
fn test_leading_trailing_slashes_tolerated() {
    let compiled = compile("users/{id}/").expect("compile");
    assert!(compiled.pattern.is_match("/users/42"));
    assert_eq!(compiled.segment_count, 2);
}

#[test]
fn test_trailing_slash_on_candidate() {
    let compiled = compile("/users/{id}").expect("compile");
    assert!(compiled.pattern.is_match("/users/42/"));
}

#[test]
fn test_anchored_no_prefix_match() {
    let compiled = compile("/users/{id}").expect("compile");
    assert!(!compiled.pattern.is_match("/users/42/posts"));
    assert!(!compiled.pattern.is_match("/api/users/42"));
}

#[test]
fn test_placeholder_is_single_segment() {
    let compiled = compile("/files/{name}").expect("compile");
    assert!(!compiled.pattern.is_match("/files/a/b"));
}

#[test]
fn test_literal_segments_are_escaped() {
    let compiled = compile("/v1.0/items").expect("compile");
    assert!(compiled.pattern.is_match("/v1.0/items"));
    assert!(!compiled.pattern.is_match("/v1x0/items"));
}

#[test]
fn test_default_type_is_string() {
    let compiled = compile("/tags/{tag}").expect("compile");
    assert_eq!(compiled.params[0].ty, ParamType::Str);
}

#[test]
fn test_explicit_string_type() {
    let compiled = compile("/tags/{tag:string}").expect("compile");
    assert_eq!(compiled.params[0].ty, ParamType::Str);
}

#[test]
fn test_unbalanced_braces_rejected() {
    assert!(matches!(
        compile("/users/{id"),
        Err(ConfigError::MalformedTemplate { .. })
    ));
    assert!(matches!(
        compile("/users/id}"),
        Err(ConfigError::MalformedTemplate { .. })
    ));
    assert!(matches!(
        compile("/users/{a}{b}"),
        Err(ConfigError::MalformedTemplate { .. })
    ));
}

#[test]
fn test_empty_param_name_rejected() {
    assert!(matches!(
        compile("/users/{}"),
        Err(ConfigError::EmptyParamName { .. })
    ));
    assert!(matches!(
        compile("/users/{:int}"),
        Err(ConfigError::EmptyParamName { .. })
    ));
}

#[test]
fn test_invalid_param_name_rejected() {
    assert!(matches!(
        compile("/users/{user-id}"),
        Err(ConfigError::InvalidParamName { .. })
    ));
    assert!(matches!(
        compile("/users/{1id}"),
        Err(ConfigError::InvalidParamName { .. })
    ));
}

#[test]
fn test_duplicate_param_name_rejected() {
    assert!(matches!(
        compile("/orgs/{id}/users/{id}"),
        Err(ConfigError::DuplicateParamName { .. })
    ));
}

#[test]
fn test_unknown_type_rejected() {
    assert!(matches!(
        compile("/users/{id:float}"),
        Err(ConfigError::UnknownParamType { .. })
    ));
}
