//! Responses synthesized from a handler's recorded output.

use http::{HeaderMap, Request, StatusCode};
use serde::de::DeserializeOwned;

use crate::body::{RequestBody, ResponseBody};

/// `content_length` value when the handler set no usable `Content-Length`.
pub const UNKNOWN_LENGTH: i64 = -1;

/// A response shaped like one read off a real connection.
///
/// `status_text` is always empty; derive it from `status` when needed.
/// `trailers` is always `None`.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub status_text: String,
    pub headers: HeaderMap,
    pub body: ResponseBody,
    /// Parsed `Content-Length`, or [`UNKNOWN_LENGTH`].
    pub content_length: i64,
    /// The request as the handler saw it. Its body is closed.
    pub request: Request<RequestBody>,
    pub trailers: Option<HeaderMap>,
}

impl Response {
    /// `content_length` as an option, `None` for the unknown sentinel.
    pub fn known_content_length(&self) -> Option<u64> {
        u64::try_from(self.content_length).ok()
    }

    pub fn text(&self) -> String {
        self.body.text()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(self.body.as_bytes())
    }
}
