//! Adapter that serves requests with a tower `Service`.
//!
//! # Design
//! `ServiceHandler` lets an `axum::Router` (or any tower service speaking
//! `http` types) sit behind the transport. The handler owns a current-thread
//! tokio runtime and blocks on it for each request, so dispatch stays
//! synchronous. Calling it from inside another tokio runtime panics.
//!
//! The request body is read fully before the service is called. The peer
//! address is passed along both as [`RemoteAddr`] and, when it parses, as
//! axum's `ConnectInfo<SocketAddr>`. A failing service or body becomes a
//! `500` on the recorder.

use std::fmt::{self, Display};
use std::io::{self, Read};
use std::net::SocketAddr;

use axum::body::Body as AxumBody;
use axum::extract::ConnectInfo;
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use tokio::runtime::{Builder, Runtime};
use tower::{Service, ServiceExt};

use crate::body::RequestBody;
use crate::handler::{Handler, RemoteAddr};
use crate::recorder::ResponseRecorder;

pub struct ServiceHandler<S> {
    service: S,
    runtime: Runtime,
}

impl<S> ServiceHandler<S> {
    pub fn new(service: S) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { service, runtime })
    }
}

impl<S> fmt::Debug for ServiceHandler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandler").finish_non_exhaustive()
    }
}

impl<S, B> Handler for ServiceHandler<S>
where
    S: Service<Request<AxumBody>, Response = Response<B>> + Clone + Send + Sync + 'static,
    S::Error: Display,
    B: HttpBody<Data = Bytes>,
    B::Error: Display,
{
    fn serve_http(&self, w: &mut ResponseRecorder, req: &mut Request<RequestBody>) {
        let inner = match to_service_request(req) {
            Ok(inner) => inner,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read request body");
                w.write_header(StatusCode::INTERNAL_SERVER_ERROR);
                return;
            }
        };

        let service = self.service.clone();
        let outcome = self.runtime.block_on(async move {
            let response = service.oneshot(inner).await.map_err(|e| e.to_string())?;
            let (parts, body) = response.into_parts();
            let bytes = body.collect().await.map_err(|e| e.to_string())?.to_bytes();
            Ok::<_, String>((parts, bytes))
        });

        match outcome {
            Ok((parts, bytes)) => {
                w.headers_mut().extend(parts.headers);
                w.write_header(parts.status);
                w.write_bytes(&bytes);
            }
            Err(err) => {
                tracing::error!(error = %err, uri = %req.uri(), "In-process service failed");
                w.write_header(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }
}

fn to_service_request(req: &mut Request<RequestBody>) -> io::Result<Request<AxumBody>> {
    let mut buf = Vec::new();
    req.body_mut().read_to_end(&mut buf)?;

    let mut inner = Request::new(AxumBody::from(buf));
    *inner.method_mut() = req.method().clone();
    *inner.uri_mut() = req.uri().clone();
    *inner.version_mut() = req.version();
    *inner.headers_mut() = req.headers().clone();

    if let Some(remote) = req.extensions().get::<RemoteAddr>() {
        if let Ok(addr) = remote.0.parse::<SocketAddr>() {
            inner.extensions_mut().insert(ConnectInfo(addr));
        }
        inner.extensions_mut().insert(remote.clone());
    }
    Ok(inner)
}
