use crate::binder::{self, coerce, CoercedVec};
use crate::error::RequestError;
use crate::router::{ParamVec, RouteMeta, Router};
use crate::template::ParamType;
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A route handler.
///
/// Implemented for free functions and closures of the shape
/// `Fn(&RequestContext, Vec<Value>) -> Value`. `args` arrives in the order
/// of the parameter names the handler declared at registration; the context
/// gives access to the coerced parameter map, query parameters, and the
/// request body.
pub trait Handler: Send + Sync + 'static {
    /// Process one request and produce a result value.
    fn call(&self, ctx: &RequestContext, args: Vec<Value>) -> Value;
}

impl<F> Handler for F
where
    F: Fn(&RequestContext, Vec<Value>) -> Value + Send + Sync + 'static,
{
    fn call(&self, ctx: &RequestContext, args: Vec<Value>) -> Value {
        self(ctx, args)
    }
}

/// Per-request state, owned by the dispatcher for the duration of one
/// request and dropped when the handler returns. Never shared across
/// requests or threads.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved request path.
    pub path: String,
    /// The matched compiled route.
    pub route: Arc<RouteMeta>,
    /// Coerced path parameters in template order.
    pub params: CoercedVec,
    /// Query string parameters as supplied by the transport layer.
    pub query_params: ParamVec,
    /// Request body parsed as JSON, if the transport layer supplied one.
    pub body: Option<Value>,
}

impl RequestContext {
    /// Get a coerced path parameter by placeholder name.
    ///
    /// Uses "last write wins" semantics should duplicate names ever appear.
    #[inline]
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// Get a raw query parameter by name.
    ///
    /// Uses "last write wins" semantics: `?limit=10&limit=20` yields `20`.
    #[inline]
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get a query parameter coerced to the given type.
    ///
    /// # Errors
    ///
    /// [`RequestError::MissingParameter`] when the parameter is absent,
    /// [`RequestError::TypeMismatch`] when the value fails coercion.
    pub fn query_param_as(&self, name: &str, ty: ParamType) -> Result<Value, RequestError> {
        let raw = self
            .query_param(name)
            .ok_or_else(|| RequestError::MissingParameter {
                name: name.to_string(),
            })?;
        coerce(name, ty, raw)
    }

    /// Get a top-level field from the JSON request body.
    #[must_use]
    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.as_ref()?.get(name)
    }

    /// Convert the coerced params to a HashMap for compatibility.
    /// Note: this allocates - use get_param() in hot paths instead.
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, Value> {
        self.params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Dispatcher that drives matched requests through binding and handler
/// invocation.
///
/// Holds the read-only router built during registration; cloning shares the
/// compiled routes.
#[derive(Clone)]
pub struct Dispatcher {
    router: Router,
}

impl Dispatcher {
    /// Wrap a fully registered router.
    #[must_use]
    pub fn new(router: Router) -> Self {
        Dispatcher { router }
    }

    /// The underlying router.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Dispatch a request carrying no query parameters and no body.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::dispatch_full`].
    pub fn dispatch(&self, method: &str, path: &str) -> Result<Value, RequestError> {
        self.dispatch_full(method, path, ParamVec::new(), None)
    }

    /// Dispatch a request to the handler of the first matching route.
    ///
    /// `query_params` and `body` come pre-parsed from the transport layer;
    /// they are threaded into the [`RequestContext`] untouched. On success
    /// the handler's result is returned as-is.
    ///
    /// # Errors
    ///
    /// - [`RequestError::NotFound`] when no route structurally matches the
    ///   path.
    /// - [`RequestError::MethodNotAllowed`] when a route matched the path
    ///   but is registered under a different method.
    /// - Binder failures ([`RequestError::InsufficientParameters`],
    ///   [`RequestError::TypeMismatch`], [`RequestError::MissingParameter`])
    ///   when parameter binding fails.
    pub fn dispatch_full(
        &self,
        method: &str,
        path: &str,
        query_params: ParamVec,
        body: Option<Value>,
    ) -> Result<Value, RequestError> {
        let route = self.router.find(path).ok_or(RequestError::NotFound)?;

        let requested = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| RequestError::MethodNotAllowed)?;
        if requested != route.method {
            warn!(
                method = %requested,
                path = %path,
                template = %route.template,
                allowed = %route.method,
                "Method not allowed on matched route"
            );
            return Err(RequestError::MethodNotAllowed);
        }

        let bound = binder::bind(&route, path, &route.signature)?;

        debug!(
            method = %requested,
            path = %path,
            template = %route.template,
            args = bound.args.len(),
            "Request dispatched to handler"
        );

        let ctx = RequestContext {
            path: path.to_string(),
            route: Arc::clone(&route),
            params: bound.values,
            query_params,
            body,
        };

        let result = route.handler.call(&ctx, bound.args);

        info!(
            method = %requested,
            path = %path,
            template = %route.template,
            "Handler completed"
        );

        Ok(result)
    }
}
