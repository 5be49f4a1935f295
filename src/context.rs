use futures::future::BoxFuture;
use hyper::{
    header::{HeaderMap, HeaderValue},
    Body, Method, Uri, Version,
};
use std::{fmt, sync::Arc};

use crate::error::Result;
use crate::middleware::Middleware;
use crate::request::Request;
use crate::response::Response;

/// The `Context` of the current dispatch.
///
/// Owns the request, the response being built up, and the remaining
/// middleware. Connect-style handlers mutate the response in place; the
/// chain ends by resolving with it.
pub struct Context<State> {
    state: Arc<State>,
    request: Request,
    response: Response,
    handlers: Vec<Arc<dyn Middleware<Self>>>,
}

impl<State: Send + Sync + 'static> Context<State> {
    /// Create a new Context
    pub fn new(
        state: Arc<State>,
        request: Request,
        handlers: Vec<Arc<dyn Middleware<Self>>>,
    ) -> Self {
        Self {
            state,
            request,
            response: Response::new(Body::empty()),
            handlers,
        }
    }

    ///  Access the state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Access the request's HTTP method.
    pub fn method(&self) -> &Method {
        self.request.method()
    }

    /// Access the request's full URI.
    pub fn uri(&self) -> &Uri {
        self.request.uri()
    }

    /// Access the request's HTTP version.
    pub fn version(&self) -> Version {
        self.request.version()
    }

    /// Access the entire request.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Access a mutable handle to the entire request.
    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    /// Access the response as built up so far.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Access a mutable handle to the response.
    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    /// Borrow the request and the response together.
    pub fn parts_mut(&mut self) -> (&mut Request, &mut Response) {
        (&mut self.request, &mut self.response)
    }

    /// Access the request's headers.
    pub fn headers(&self) -> &HeaderMap {
        self.request.headers()
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        self.request.headers_mut()
    }

    pub fn header(&self, key: &'static str) -> Option<&HeaderValue> {
        self.headers().get(key)
    }

    pub fn path(&self) -> &str {
        self.uri().path()
    }

    pub fn query_string(&self) -> &str {
        self.uri().query().unwrap_or("")
    }

    /// Next middleware
    ///
    /// An exhausted chain resolves with the response built up so far.
    pub fn next<'a>(mut self) -> BoxFuture<'a, Result> {
        if self.handlers.is_empty() {
            Box::pin(async move { Ok(self.response) })
        } else {
            let m = self.handlers.remove(0);
            Box::pin(async move { m.call(self).await })
        }
    }
}

impl<State> fmt::Debug for Context<State> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Context").finish()
    }
}
