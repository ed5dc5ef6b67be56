//! Process-wide default transport for top-level test wiring.
//!
//! Library code should take a `Transport` or `Client` explicitly; this
//! module exists so a test binary can register servers once and dispatch
//! from anywhere.
//!
//! The transport sits behind `RwLock<Arc<Transport>>`. Dispatch clones the
//! `Arc` out and releases the lock before the handler runs, so handlers may
//! dispatch or register through this module themselves. Registration swaps in
//! an updated transport with `Arc::make_mut`; requests already in flight, and
//! clients from [`client`], keep the snapshot they started with.

use std::sync::{Arc, PoisonError, RwLock};

use http::Request;
use once_cell::sync::Lazy;

use crate::body::Body;
use crate::client::Client;
use crate::error::TransportError;
use crate::handler::Handler;
use crate::response::Response;
use crate::transport::Transport;

static DEFAULT_TRANSPORT: Lazy<RwLock<Arc<Transport>>> =
    Lazy::new(|| RwLock::new(Arc::new(Transport::new())));

pub fn default_transport() -> &'static RwLock<Arc<Transport>> {
    &DEFAULT_TRANSPORT
}

fn snapshot() -> Arc<Transport> {
    let transport = DEFAULT_TRANSPORT
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*transport)
}

/// Serve `host` with `handler` on the default transport.
pub fn listen<H>(host: impl Into<String>, handler: H)
where
    H: Handler + 'static,
{
    let mut transport = DEFAULT_TRANSPORT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut *transport).listen(host, handler);
}

/// Serve `host` with the default transport's default handler.
pub fn listen_default(host: impl Into<String>) {
    let mut transport = DEFAULT_TRANSPORT
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::make_mut(&mut *transport).listen_default(host);
}

/// Dispatch `request` through the default transport.
pub fn dispatch(request: Request<Body>) -> Result<Response, TransportError> {
    snapshot().dispatch(request)
}

/// A client over the default transport as currently registered. Hosts
/// registered afterwards are not visible to it.
pub fn client() -> Client {
    Client::new(snapshot())
}
