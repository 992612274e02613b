//! # rapidrouter
//!
//! **rapidrouter** is a minimal, template-driven HTTP request router: it
//! matches an incoming request's path and method against registered route
//! templates, extracts and type-coerces path parameters, and dispatches to
//! a bound handler with arguments supplied in the handler's declared order.
//!
//! ## Overview
//!
//! Routes are declared as templates mixing literal segments with typed
//! placeholders:
//!
//! ```text
//! /users/{id:int}/posts/{slug}
//! ```
//!
//! Placeholder types are a closed set of `string` (default), `int`, `bool`,
//! `email`, and coercion failures are classified per-request errors, never
//! crashes. Transport concerns (sockets, TLS, header emission, body
//! serialization) are deliberately out of scope: the crate consumes a
//! method string, a path, and optionally pre-parsed query parameters and a
//! JSON body, and produces a handler result or a classified failure the
//! caller maps to a status code.
//!
//! ## Architecture
//!
//! The library is organized into a small pipeline, one module per stage:
//!
//! - **[`template`]** - route template compilation into anchored regex
//!   patterns plus ordered parameter descriptors
//! - **[`router`]** - the insertion-ordered route table and the
//!   segment-count-filtered first-match scan
//! - **[`binder`]** - capture extraction, typed coercion, arity validation,
//!   and argument ordering against the handler's declared parameter names
//! - **[`dispatcher`]** - per-request orchestration: match → method check →
//!   bind → invoke
//! - **[`response`]** - status classification of outcomes for the transport
//!   caller
//! - **[`error`]** - the two error tiers: registration-time
//!   [`ConfigError`] (aborts startup) and per-request [`RequestError`]
//!   (recoverable, maps to 404/405/400)
//!
//! Data flows one way per request: raw path → router → matched route →
//! binder → ordered arguments → handler.
//!
//! ## Quick Start
//!
//! ```
//! use rapidrouter::{Dispatcher, RequestContext, Router};
//! use serde_json::{json, Value};
//!
//! fn main() -> Result<(), rapidrouter::ConfigError> {
//!     let mut router = Router::new();
//!     router.register(
//!         "GET",
//!         "/users/{id:int}",
//!         &["id"],
//!         |_ctx: &RequestContext, args: Vec<Value>| json!({ "user_id": args[0] }),
//!     )?;
//!
//!     let dispatcher = Dispatcher::new(router);
//!     let result = dispatcher.dispatch("GET", "/users/42");
//!     assert_eq!(result.unwrap(), json!({ "user_id": 42 }));
//!
//!     let err = dispatcher.dispatch("POST", "/users/42").unwrap_err();
//!     assert_eq!(err.status(), 405);
//!     Ok(())
//! }
//! ```
//!
//! ## Ordering Properties
//!
//! Two properties of the route table are deliberate design choices, not
//! bugs to fix:
//!
//! - **First registered wins**: when two templates both structurally match
//!   a path, the earlier registration takes priority, even over a later,
//!   more specific one.
//! - **Last write wins**: re-registering a template replaces its handler
//!   and method while keeping its original position in the scan order.
//!
//! ## Concurrency
//!
//! Register all routes from a single thread before serving. After that the
//! router is read-only and freely shareable: compiled routes live behind
//! `Arc` and no request-time operation mutates shared state. Per-request
//! state ([`RequestContext`]) is owned by the dispatcher for exactly one
//! request.

pub mod binder;
pub mod dispatcher;
pub mod error;
pub mod response;
pub mod router;
pub mod template;

pub use binder::{bind, coerce, BoundParams, CoercedVec};
pub use dispatcher::{Dispatcher, Handler, RequestContext};
pub use error::{ConfigError, RequestError};
pub use response::{respond, status_reason, RouterResponse};
pub use router::{count_segments, ParamVec, RouteMeta, Router, ALLOWED_METHODS, MAX_INLINE_PARAMS};
pub use template::{compile, CompiledPattern, ParamMeta, ParamType};
