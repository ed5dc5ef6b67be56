//! Transport that routes requests to in-process handlers.
//!
//! # Design
//! `Transport` plays the part of a network transport in tests. A request's
//! URI authority picks a handler out of the route table; the handler runs on
//! the calling thread against a `ResponseRecorder`, and the recording becomes
//! the `Response`. An unknown host is an error, never a real connection.
//!
//! Dispatch takes `&self` and keeps no state between calls, so an
//! `Arc<Transport>` can serve many threads once registration is done.

use std::fmt;
use std::sync::Arc;

use http::header::{CONTENT_LENGTH, HOST};
use http::{HeaderMap, Request, Uri};

use crate::body::{Body, RequestBody, ResponseBody};
use crate::error::TransportError;
use crate::handler::{Handler, NotFoundHandler, RemoteAddr};
use crate::recorder::ResponseRecorder;
use crate::response::{Response, UNKNOWN_LENGTH};
use crate::route::RouteTable;

/// Peer address handed to handlers unless overridden.
pub const DEFAULT_REMOTE_ADDR: &str = "127.0.0.1:13579";

#[derive(Clone)]
pub struct Transport {
    routes: RouteTable,
    remote_addr: String,
    default_handler: Arc<dyn Handler>,
}

impl Transport {
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(),
            remote_addr: DEFAULT_REMOTE_ADDR.to_string(),
            default_handler: Arc::new(NotFoundHandler),
        }
    }

    pub fn with_remote_addr(mut self, remote_addr: impl Into<String>) -> Self {
        self.remote_addr = remote_addr.into();
        self
    }

    /// Set the address handlers observe as the request's origin.
    pub fn set_remote_addr(&mut self, remote_addr: impl Into<String>) -> &mut Self {
        self.remote_addr = remote_addr.into();
        self
    }

    pub fn remote_addr(&self) -> &str {
        &self.remote_addr
    }

    /// Set the handler used by [`listen_default`](Self::listen_default).
    /// Hosts already registered keep the handler they were given.
    pub fn set_default_handler<H>(&mut self, handler: H) -> &mut Self
    where
        H: Handler + 'static,
    {
        self.default_handler = Arc::new(handler);
        self
    }

    /// Serve `host` with `handler`. A second registration for the same host
    /// replaces the first.
    pub fn listen<H>(&mut self, host: impl Into<String>, handler: H) -> &mut Self
    where
        H: Handler + 'static,
    {
        self.routes.register(host, Arc::new(handler));
        self
    }

    /// Serve `host` with the default handler.
    pub fn listen_default(&mut self, host: impl Into<String>) -> &mut Self {
        self.routes
            .register(host, Arc::clone(&self.default_handler));
        self
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Route `request` to the handler registered for its host and return the
    /// recorded response.
    ///
    /// Fails with [`TransportError::ServerNotFound`] when no handler is
    /// registered. The handler is not called in that case.
    pub fn dispatch(&self, request: Request<Body>) -> Result<Response, TransportError> {
        let host = target_host(request.uri()).to_string();

        let Some(handler) = self.routes.lookup(&host) else {
            let host_header = request
                .headers()
                .get(HOST)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            tracing::warn!(
                host = %host_header,
                target_host = %host,
                uri = %request.uri(),
                "Server not found"
            );
            return Err(TransportError::ServerNotFound { host });
        };

        let (mut parts, body) = request.into_parts();
        parts
            .extensions
            .insert(RemoteAddr(self.remote_addr.clone()));
        let mut forwarded = Request::from_parts(parts, RequestBody::new(body));

        let mut recorder = ResponseRecorder::new();
        handler.serve_http(&mut recorder, &mut forwarded);
        forwarded.body_mut().close();

        let (status, headers, body) = recorder.into_parts();
        let content_length = content_length(&headers);
        tracing::debug!(
            %host,
            method = %forwarded.method(),
            status = status.as_u16(),
            content_length,
            "Dispatched in-process request"
        );

        Ok(Response {
            status,
            status_text: String::new(),
            headers,
            body: ResponseBody::new(body),
            content_length,
            request: forwarded,
            trailers: None,
        })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("routes", &self.routes)
            .field("remote_addr", &self.remote_addr)
            .finish_non_exhaustive()
    }
}

/// Routing key of a request: the URI authority without user info.
fn target_host(uri: &Uri) -> &str {
    match uri.authority() {
        Some(authority) => {
            let authority = authority.as_str();
            authority
                .rsplit_once('@')
                .map_or(authority, |(_, host)| host)
        }
        None => "",
    }
}

/// `Content-Length` as a base-10 integer, or [`UNKNOWN_LENGTH`].
fn content_length(headers: &HeaderMap) -> i64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(UNKNOWN_LENGTH)
}
