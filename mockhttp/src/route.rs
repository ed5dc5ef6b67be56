//! Host identifier to handler mapping.
//!
//! # Design
//! Registration needs `&mut RouteTable` and lookup needs `&RouteTable`, so
//! the usual pattern (register everything during setup, then share the table
//! read-only) is the only one safe code can express. Keys are matched
//! exactly and case-sensitively; there are no wildcards and no removal.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::handler::Handler;

#[derive(Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Arc<dyn Handler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `host` to `handler`, replacing any earlier registration.
    pub fn register(&mut self, host: impl Into<String>, handler: Arc<dyn Handler>) {
        let host = host.into();
        let replaced = self.routes.insert(host.clone(), handler).is_some();
        tracing::debug!(%host, replaced, "Registered in-process server");
    }

    pub fn lookup(&self, host: &str) -> Option<Arc<dyn Handler>> {
        self.routes.get(host).cloned()
    }

    pub fn contains(&self, host: &str) -> bool {
        self.routes.contains_key(host)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered hosts, in no particular order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("hosts", &self.routes.keys().collect::<Vec<_>>())
            .finish()
    }
}
