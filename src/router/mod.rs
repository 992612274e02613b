//! # Router Module
//!
//! Route registration and path matching.
//!
//! The router owns the route table: an insertion-ordered mapping from
//! template string to compiled route, built once at startup and read-only
//! afterwards. Matching uses a two-phase approach:
//!
//! 1. **Compilation**: at registration, templates are compiled into anchored
//!    regex patterns with named capture groups (see [`crate::template`]),
//!    and the registration method is validated against the closed allowed
//!    set {DELETE, GET, HEAD, POST, PUT}.
//!
//! 2. **Matching**: for each incoming request path, the router computes the
//!    candidate's segment count once, then scans routes in insertion order.
//!    A route is only attempted when its segment count equals the
//!    candidate's; the first full-pattern match wins.
//!
//! The segment-count pre-filter is both a correctness guard (a route with N
//! segments never matches a path with M≠N segments) and a cheap rejection
//! before the regex runs.
//!
//! Two ordering properties are deliberate and callers must be aware of them:
//!
//! - registering the same template twice replaces the earlier entry in
//!   place (last write wins, original position kept), and
//! - when two distinct templates both structurally match a path, the one
//!   registered first takes priority over later, possibly more specific,
//!   ones.

mod core;


pub use core::{count_segments, ParamVec, RouteMeta, Router, ALLOWED_METHODS, MAX_INLINE_PARAMS};
