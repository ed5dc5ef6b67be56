//! The handler capability and the handlers shipped with the crate.

use http::header::{HeaderValue, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use http::{Request, StatusCode};

use crate::body::RequestBody;
use crate::recorder::ResponseRecorder;

/// In-process server logic: reads a request, writes a response.
///
/// Handlers run synchronously on the dispatching thread. The request body is
/// closed by the transport as soon as `serve_http` returns.
pub trait Handler: Send + Sync {
    fn serve_http(&self, w: &mut ResponseRecorder, req: &mut Request<RequestBody>);
}

impl<F> Handler for F
where
    F: Fn(&mut ResponseRecorder, &mut Request<RequestBody>) + Send + Sync,
{
    fn serve_http(&self, w: &mut ResponseRecorder, req: &mut Request<RequestBody>) {
        self(w, req)
    }
}

/// Pin a closure's argument types to the handler signature.
///
/// ```
/// use mockhttp::{handler_fn, Transport};
///
/// let mut transport = Transport::new();
/// transport.listen("api.test", handler_fn(|w, _req| w.write_str("ok")));
/// ```
pub fn handler_fn<F>(f: F) -> F
where
    F: Fn(&mut ResponseRecorder, &mut Request<RequestBody>) + Send + Sync,
{
    f
}

/// Address of the peer as seen by a handler, attached to every forwarded
/// request as an extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAddr(pub String);

/// Answers every request with `404 page not found`.
///
/// Used for hosts registered without an explicit handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundHandler;

impl Handler for NotFoundHandler {
    fn serve_http(&self, w: &mut ResponseRecorder, _req: &mut Request<RequestBody>) {
        let headers = w.headers_mut();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        w.write_header(StatusCode::NOT_FOUND);
        w.write_str("404 page not found\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;

    fn request() -> Request<RequestBody> {
        Request::new(RequestBody::new(Body::empty()))
    }

    #[test]
    fn not_found_handler_writes_404() {
        let mut rec = ResponseRecorder::new();
        NotFoundHandler.serve_http(&mut rec, &mut request());

        assert_eq!(rec.status(), StatusCode::NOT_FOUND);
        assert_eq!(rec.body(), b"404 page not found\n");
        assert_eq!(rec.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
    }

    #[test]
    fn closures_are_handlers() {
        let handler = handler_fn(|w, req| {
            w.write_header(StatusCode::IM_A_TEAPOT);
            w.write_str(req.uri().path());
        });

        let mut rec = ResponseRecorder::new();
        let mut req = request();
        *req.uri_mut() = "/brew".parse().unwrap();
        handler.serve_http(&mut rec, &mut req);

        assert_eq!(rec.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(rec.body(), b"/brew");
    }
}
