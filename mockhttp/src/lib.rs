//! In-process HTTP transport for hermetic tests.
//!
//! # Overview
//! Test code registers virtual servers by host identifier (`"host:port"`).
//! Requests sent through a [`Transport`] are routed to the matching
//! [`Handler`] and answered from memory; nothing touches a socket. A request
//! for an unregistered host fails with [`TransportError::ServerNotFound`].
//!
//! # Design
//! - `Transport` owns a `RouteTable`; register during setup with `&mut`,
//!   then share it (`Arc<Transport>`, `Client`) for dispatch.
//! - Handlers are synchronous and write into a [`ResponseRecorder`]. Plain
//!   closures work; `ServiceHandler` adapts an `axum::Router`.
//! - The forwarded request carries a [`RemoteAddr`] extension and a
//!   [`RequestBody`] that the transport closes once the handler returns.
//! - [`global`] holds a process-wide transport for top-level wiring only.
//!
//! ```
//! use http::{Request, StatusCode};
//! use mockhttp::{handler_fn, Body, Transport};
//!
//! let mut transport = Transport::new();
//! transport.listen("api.test", handler_fn(|w, _req| {
//!     w.write_header(StatusCode::ACCEPTED);
//!     w.write_str("queued");
//! }));
//!
//! let req = Request::get("http://api.test/jobs").body(Body::empty()).unwrap();
//! let resp = transport.dispatch(req).unwrap();
//! assert_eq!(resp.status, StatusCode::ACCEPTED);
//! assert_eq!(resp.text(), "queued");
//! ```

pub mod body;
pub mod client;
pub mod error;
pub mod global;
pub mod handler;
pub mod recorder;
pub mod response;
pub mod route;
pub mod service;
pub mod transport;

pub use body::{Body, RequestBody, ResponseBody};
pub use client::Client;
pub use error::{ClientError, TransportError};
pub use handler::{handler_fn, Handler, NotFoundHandler, RemoteAddr};
pub use recorder::ResponseRecorder;
pub use response::{Response, UNKNOWN_LENGTH};
pub use route::RouteTable;
pub use service::ServiceHandler;
pub use transport::{Transport, DEFAULT_REMOTE_ADDR};
