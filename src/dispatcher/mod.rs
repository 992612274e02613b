//! # Dispatcher Module
//!
//! Request orchestration: match → method check → bind → invoke.
//!
//! The dispatcher drives one request through the pipeline in a fixed order:
//!
//! 1. the router finds the first structurally compatible route for the path
//!    (no match → `NotFound`, 404);
//! 2. the request method is compared against the matched route's fixed
//!    method (mismatch → `MethodNotAllowed`, 405, checked only after a
//!    path match, so an unmatched path always yields 404 even when another
//!    route with the same path shape allows the method);
//! 3. the binder extracts, coerces, and orders the path parameters
//!    (failures → 400 carrying the failure message);
//! 4. the handler is invoked with the ordered argument list and its result
//!    is returned untouched; response formatting is the caller's concern.
//!
//! Handlers declare their formal parameter names explicitly at registration
//! rather than being inspected at runtime; the dispatcher passes each
//! handler a per-request [`RequestContext`] it owns exclusively for the
//! duration of the call, plus the ordered arguments.

mod core;

pub use core::{Dispatcher, Handler, RequestContext};
