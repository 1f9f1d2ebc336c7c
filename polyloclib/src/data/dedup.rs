//! Content-based deduplication.
//!
//! Files are grouped by an MD5 digest of their full content. The digest is
//! only used for equality, never for security.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use parking_lot::Mutex;
use tracing::warn;

/// MD5 digest of a file's content.
pub type Digest = [u8; 16];

/// Thread-safe set of content digests already counted in this run.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: Mutex<HashSet<Digest>>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `digest`; returns `true` if it had been recorded before.
    pub fn seen(&self, digest: Digest) -> bool {
        !self.seen.lock().insert(digest)
    }

    /// Number of distinct digests recorded.
    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }
}

/// Digest a file's content, or `None` if it cannot be read.
pub fn digest_file(path: &Path) -> Option<Digest> {
    match fs::read(path) {
        Ok(content) => Some(md5::compute(content).0),
        Err(err) => {
            warn!(path = %path.display(), "unable to digest file: {err}");
            None
        }
    }
}
