use crate::dispatcher::Handler;
use crate::error::ConfigError;
use crate::template::{compile, ParamMeta};
use http::Method;
use regex::Regex;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of path/query parameters before heap allocation.
/// Most routes have well under 8 placeholders.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the request path.
///
/// Param names come from the static route table and are shared as
/// `Arc<str>`; values are per-request data from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// The closed set of HTTP methods a route may be registered under.
pub const ALLOWED_METHODS: [Method; 5] = [
    Method::DELETE,
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
];

/// A compiled route: immutable after registration.
pub struct RouteMeta {
    /// Method the route was registered under.
    pub method: Method,
    /// The template string as supplied at registration.
    pub template: String,
    /// Anchored pattern with one named capture per placeholder.
    pub pattern: Regex,
    /// Parameter descriptors in template order.
    pub params: Vec<ParamMeta>,
    /// The handler's formal parameter names, in declaration order.
    pub signature: Vec<String>,
    /// Non-empty segment count of the template.
    pub segment_count: usize,
    /// Bound handler, invoked by the dispatcher.
    pub handler: Arc<dyn Handler>,
}

impl fmt::Debug for RouteMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMeta")
            .field("method", &self.method)
            .field("template", &self.template)
            .field("params", &self.params)
            .field("signature", &self.signature)
            .field("segment_count", &self.segment_count)
            .finish_non_exhaustive()
    }
}

/// Count the non-empty `/`-delimited segments of a path or template.
#[must_use]
pub fn count_segments(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Router holding the insertion-ordered route table.
///
/// Registration is expected to happen once, before serving, from a single
/// thread. After that the table is read-only: compiled routes are shared as
/// `Arc<RouteMeta>` across any number of request threads with no further
/// synchronization.
#[derive(Clone, Default)]
pub struct Router {
    /// Compiled routes in insertion order; this is the matching order.
    routes: Vec<Arc<RouteMeta>>,
    /// Template string -> slot in `routes`. Re-registration replaces the
    /// slot contents, keeping the original position.
    index: HashMap<String, usize>,
}

impl Router {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Router {
            routes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a route template under an HTTP method.
    ///
    /// `signature` is the handler's formal parameter name list, in
    /// declaration order; the binder uses it to order coerced values at
    /// request time. The method name is case-insensitive on input and
    /// re-validated against [`ALLOWED_METHODS`]; this guards against typos
    /// in route declarations, not runtime request data.
    ///
    /// Registering the same template twice overwrites the earlier entry
    /// (last write wins).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an unrecognized method or a malformed
    /// template. These are programmer mistakes and should abort startup.
    pub fn register<H>(
        &mut self,
        method: &str,
        template: &str,
        signature: &[&str],
        handler: H,
    ) -> Result<(), ConfigError>
    where
        H: Handler,
    {
        let method = normalize_method(method)?;
        let compiled = compile(template)?;

        let meta = Arc::new(RouteMeta {
            method,
            template: template.to_string(),
            pattern: compiled.pattern,
            params: compiled.params,
            signature: signature.iter().map(|s| (*s).to_string()).collect(),
            segment_count: compiled.segment_count,
            handler: Arc::new(handler),
        });

        match self.index.get(template) {
            Some(&slot) => {
                warn!(
                    method = %meta.method,
                    template = %template,
                    "Replaced existing route registration"
                );
                self.routes[slot] = meta;
            }
            None => {
                info!(
                    method = %meta.method,
                    template = %template,
                    params = meta.params.len(),
                    total_routes = self.routes.len() + 1,
                    "Route registered"
                );
                self.index.insert(template.to_string(), self.routes.len());
                self.routes.push(meta);
            }
        }

        Ok(())
    }

    /// All compiled routes, in insertion order.
    #[must_use]
    pub fn routes(&self) -> &[Arc<RouteMeta>] {
        &self.routes
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the first structurally compatible route for a request path.
    ///
    /// The candidate's segment count is computed once; routes are scanned in
    /// insertion order and only attempted when their segment count matches.
    /// The method is deliberately not part of the search: a method mismatch
    /// is detected on the matched route by the dispatcher, never by widening
    /// the search to other routes.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<Arc<RouteMeta>> {
        let segment_count = count_segments(path);
        debug!(path = %path, segment_count, "Route match attempt");

        for route in &self.routes {
            if route.segment_count == segment_count && route.pattern.is_match(path) {
                debug!(
                    path = %path,
                    template = %route.template,
                    method = %route.method,
                    "Route matched"
                );
                return Some(Arc::clone(route));
            }
        }

        warn!(path = %path, "No route matched");
        None
    }

    /// Print all registered routes to stdout. Useful for debugging route
    /// declarations.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.routes.len());
        for route in &self.routes {
            println!(
                "[route] {} {} params={}",
                route.method,
                route.template,
                route.signature.join(",")
            );
        }
    }
}

/// Normalize a registration method name against the allowed set.
fn normalize_method(name: &str) -> Result<Method, ConfigError> {
    let unknown = || ConfigError::UnknownMethod {
        method: name.to_string(),
    };
    let method = Method::from_bytes(name.to_ascii_uppercase().as_bytes()).map_err(|_| unknown())?;
    if !ALLOWED_METHODS.contains(&method) {
        return Err(unknown());
    }
    Ok(method)
}
