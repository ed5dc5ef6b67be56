//! In-memory stand-in for a live connection.

use std::io;

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, StatusCode};

/// Captures the status, headers and body a handler writes.
///
/// The status is committed by the first [`write_header`](Self::write_header)
/// call or by the first body write, which commits `200 OK`. A handler that
/// writes nothing at all is also reported as `200 OK`.
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Commit the response status. Only the first call has any effect.
    pub fn write_header(&mut self, status: StatusCode) {
        if let Some(committed) = self.status {
            tracing::debug!(
                committed = committed.as_u16(),
                ignored = status.as_u16(),
                "Status already written"
            );
            return;
        }
        self.status = Some(status);
    }

    /// Append bytes to the body, committing `200 OK` if no status was set.
    pub fn write_bytes(&mut self, data: &[u8]) {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(data);
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// The committed status, or `200 OK` when none was written.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        let status = self.status();
        (status, self.headers, self.body.freeze())
    }
}

impl io::Write for ResponseRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::CONTENT_TYPE;
    use std::io::Write;

    #[test]
    fn untouched_recorder_reports_ok() {
        let rec = ResponseRecorder::new();
        assert_eq!(rec.status(), StatusCode::OK);
        assert!(rec.body().is_empty());
        assert!(rec.headers().is_empty());
    }

    #[test]
    fn first_status_wins() {
        let mut rec = ResponseRecorder::new();
        rec.write_header(StatusCode::CREATED);
        rec.write_header(StatusCode::BAD_REQUEST);
        assert_eq!(rec.status(), StatusCode::CREATED);
    }

    #[test]
    fn body_write_commits_ok() {
        let mut rec = ResponseRecorder::new();
        rec.write_str("hi");
        rec.write_header(StatusCode::NOT_FOUND);
        assert_eq!(rec.status(), StatusCode::OK);
        assert_eq!(rec.body(), b"hi");
    }

    #[test]
    fn io_write_appends() {
        let mut rec = ResponseRecorder::new();
        write!(rec, "{}-{}", 1, 2).unwrap();
        rec.write_all(b"!").unwrap();
        rec.flush().unwrap();
        assert_eq!(rec.body(), b"1-2!");
    }

    #[test]
    fn into_parts_keeps_everything() {
        let mut rec = ResponseRecorder::new();
        rec.headers_mut()
            .insert(CONTENT_TYPE, "text/plain".parse().unwrap());
        rec.write_header(StatusCode::ACCEPTED);
        rec.write_str("queued");

        let (status, headers, body) = rec.into_parts();
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(&body[..], b"queued");
    }
}
