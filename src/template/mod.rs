//! # Template Module
//!
//! Route template parsing and compilation.
//!
//! A route template is a `/`-delimited path pattern mixing literal segments
//! with `{name}` / `{name:type}` placeholders, e.g.
//! `/users/{id:int}/posts/{slug}`. Compilation happens once, at registration
//! time, and produces everything the matcher and binder need later:
//!
//! 1. an anchored regex with one named capture group per placeholder,
//! 2. the ordered parameter descriptors (name, declared type, position),
//! 3. the template's non-empty segment count, used by the matcher to reject
//!    structurally incompatible paths before the regex ever runs.
//!
//! Malformed templates are configuration errors reported immediately at
//! registration, never deferred to request time.

mod compile;
mod types;

#[cfg(test)]
mod tests;

pub use compile::{compile, CompiledPattern};
pub use types::{ParamMeta, ParamType};
