//! Request and response bodies.
//!
//! # Design
//! `Body` is what a caller hands to the transport: nothing, a buffer, or an
//! arbitrary reader. Dropping it closes whatever it wraps.
//!
//! `RequestBody` is what a handler sees. The transport owns it and closes it
//! once the handler returns; after that every read reports end of stream,
//! whatever state the wrapped reader was in.
//!
//! `ResponseBody` is the recorded output of a handler, fully buffered and
//! rewindable.

use std::fmt;
use std::io::{self, Cursor, Read, Seek, SeekFrom};

use bytes::Bytes;

// ---------------------------------------------------------------------------
// Outbound body
// ---------------------------------------------------------------------------

/// Body of an outbound request.
pub struct Body {
    kind: Kind,
}

enum Kind {
    Empty,
    Buffered(Cursor<Bytes>),
    Reader(Box<dyn Read + Send>),
}

impl Body {
    /// A body with no bytes.
    pub fn empty() -> Self {
        Self { kind: Kind::Empty }
    }

    /// A body streamed from `reader`. The reader is dropped when the body is
    /// closed or dropped.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            kind: Kind::Reader(Box::new(reader)),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.kind {
            Kind::Empty => Ok(0),
            Kind::Buffered(cursor) => cursor.read(buf),
            Kind::Reader(reader) => reader.read(buf),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bytes: Bytes) -> Self {
        Self {
            kind: Kind::Buffered(Cursor::new(bytes)),
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes::from(bytes).into()
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Bytes::from(s).into()
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Bytes::from_static(s.as_bytes()).into()
    }
}

impl From<&'static [u8]> for Body {
    fn from(bytes: &'static [u8]) -> Self {
        Bytes::from_static(bytes).into()
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Empty => f.write_str("Body(empty)"),
            Kind::Buffered(cursor) => write!(f, "Body({} bytes)", cursor.get_ref().len()),
            Kind::Reader(_) => f.write_str("Body(stream)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Forwarded request body
// ---------------------------------------------------------------------------

/// Body of a request forwarded to a handler.
///
/// Two states: open, where reads go to the wrapped body, and closed, where
/// every read returns `Ok(0)`. Closing drops the wrapped body and can be
/// repeated.
pub struct RequestBody {
    state: BodyState,
}

enum BodyState {
    Open(Body),
    Closed,
}

impl RequestBody {
    pub(crate) fn new(body: Body) -> Self {
        Self {
            state: BodyState::Open(body),
        }
    }

    /// Close the body. Later reads report end of stream.
    pub fn close(&mut self) {
        self.state = BodyState::Closed;
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, BodyState::Closed)
    }
}

impl Read for RequestBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.state {
            BodyState::Open(body) => body.read(buf),
            BodyState::Closed => Ok(0),
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            BodyState::Open(body) => f.debug_tuple("Open").field(body).finish(),
            BodyState::Closed => f.write_str("Closed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Recorded response body
// ---------------------------------------------------------------------------

/// Buffered body of a recorded response. Reads advance a cursor that can be
/// rewound with [`Seek::rewind`].
#[derive(Debug, Clone, Default)]
pub struct ResponseBody {
    inner: Cursor<Bytes>,
}

impl ResponseBody {
    pub(crate) fn new(bytes: Bytes) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    /// All recorded bytes, independent of the read position.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }

    /// All recorded bytes as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Read for ResponseBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for ResponseBody {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
