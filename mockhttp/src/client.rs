//! Convenience client bound to a transport.

use std::sync::Arc;

use http::header::CONTENT_TYPE;
use http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::body::Body;
use crate::error::ClientError;
use crate::response::Response;
use crate::transport::Transport;

/// Issues requests through a shared [`Transport`].
///
/// Cloning is cheap; clones share the transport.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
}

impl Client {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn send(&self, request: Request<Body>) -> Result<Response, ClientError> {
        Ok(self.transport.dispatch(request)?)
    }

    pub fn get(&self, uri: &str) -> Result<Response, ClientError> {
        let request = Request::get(uri).body(Body::empty())?;
        self.send(request)
    }

    pub fn delete(&self, uri: &str) -> Result<Response, ClientError> {
        let request = Request::delete(uri).body(Body::empty())?;
        self.send(request)
    }

    pub fn post(
        &self,
        uri: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> Result<Response, ClientError> {
        let request = Request::post(uri)
            .header(CONTENT_TYPE, content_type)
            .body(body.into())?;
        self.send(request)
    }

    pub fn post_json<T: Serialize>(&self, uri: &str, value: &T) -> Result<Response, ClientError> {
        let body = serde_json::to_vec(value).map_err(ClientError::Encode)?;
        self.post(uri, "application/json", body)
    }

    /// GET `uri` and deserialize the response body, whatever its status.
    pub fn get_json<T: DeserializeOwned>(&self, uri: &str) -> Result<T, ClientError> {
        self.get(uri)?.json().map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::handler::handler_fn;
    use http::StatusCode;
    use std::io::Read;

    fn client() -> Client {
        let mut transport = Transport::new();
        transport
            .listen(
                "echo.test",
                handler_fn(|w, req| {
                    let mut body = Vec::new();
                    req.body_mut().read_to_end(&mut body).unwrap();
                    if let Some(ct) = req.headers().get(CONTENT_TYPE) {
                        w.headers_mut().insert(CONTENT_TYPE, ct.clone());
                    }
                    w.write_str(req.method().as_str());
                    w.write_str(" ");
                    w.write_bytes(&body);
                }),
            )
            .listen(
                "json.test",
                handler_fn(|w, _req| w.write_str(r#"{"count":3}"#)),
            );
        Client::new(Arc::new(transport))
    }

    #[test]
    fn get_reaches_the_handler() {
        let resp = client().get("http://echo.test/").unwrap();
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.text(), "GET ");
    }

    #[test]
    fn post_sends_body_and_content_type() {
        let resp = client()
            .post("http://echo.test/", "text/plain", "payload")
            .unwrap();
        assert_eq!(resp.text(), "POST payload");
        assert_eq!(resp.headers[CONTENT_TYPE], "text/plain");
    }

    #[test]
    fn post_json_serializes() {
        let resp = client()
            .post_json("http://echo.test/", &serde_json::json!({"a": 1}))
            .unwrap();
        assert_eq!(resp.text(), r#"POST {"a":1}"#);
        assert_eq!(resp.headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn delete_uses_delete_method() {
        let resp = client().delete("http://echo.test/items/1").unwrap();
        assert_eq!(resp.text(), "DELETE ");
    }

    #[test]
    fn get_json_decodes() {
        let value: serde_json::Value = client().get_json("http://json.test/").unwrap();
        assert_eq!(value["count"], 3);
    }

    #[test]
    fn get_json_reports_bad_body() {
        let err = client()
            .get_json::<serde_json::Value>("http://echo.test/")
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[test]
    fn unknown_host_surfaces_transport_error() {
        let err = client().get("http://nowhere.test/").unwrap_err();
        assert!(matches!(
            err,
            ClientError::Transport(TransportError::ServerNotFound { .. })
        ));
    }

    #[test]
    fn invalid_uri_is_a_request_error() {
        let err = client().get("http://bad host/").unwrap_err();
        assert!(matches!(err, ClientError::Request(_)));
    }
}
