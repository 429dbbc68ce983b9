//! Local resource handles.
//!
//! A handle is a transient `blob:` locator that points at the bytes of a file
//! the user picked. It must be given back to the store that made it, exactly
//! once. Handles aren't `Clone`, and revoking one consumes it.

use std::collections::HashMap;

use uuid::Uuid;

use super::file::LocalFile;

/// A revocable locator for a local file's bytes.
#[derive(Debug, PartialEq, Eq)]
pub struct LocalHandle {
    locator: String,
}

impl LocalHandle {
    /// Wraps a locator minted by an [`ObjectStore`].
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: locator.into(),
        }
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}

/// Something that can mint and revoke [`LocalHandle`]s.
pub trait ObjectStore {
    /// Keeps the file's bytes around and returns a handle to them.
    fn create(&mut self, file: &LocalFile) -> LocalHandle;

    /// Drops the bytes behind `handle`. The handle is consumed.
    fn revoke(&mut self, handle: LocalHandle);
}

/// An [`ObjectStore`] that keeps blobs in memory.
///
/// It also remembers every revocation, so callers can check that a handle was
/// released (and how many times).
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    live: HashMap<String, Blob>,
    revoked: Vec<String>,
}

#[derive(Debug)]
struct Blob {
    media_type: Option<String>,
    bytes: Vec<u8>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `locator` still points at live bytes.
    pub fn is_live(&self, locator: &str) -> bool {
        self.live.contains_key(locator)
    }

    /// Number of blobs that haven't been revoked yet.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// How many times `locator` has been revoked.
    pub fn revocations(&self, locator: &str) -> usize {
        self.revoked.iter().filter(|r| *r == locator).count()
    }

    /// Returns the bytes and media type behind a live locator.
    pub fn get(&self, locator: &str) -> Option<(Option<&str>, &[u8])> {
        self.live
            .get(locator)
            .map(|b| (b.media_type.as_deref(), b.bytes.as_slice()))
    }
}

impl ObjectStore for MemoryObjectStore {
    fn create(&mut self, file: &LocalFile) -> LocalHandle {
        let locator = format!("blob:{}", Uuid::new_v4());
        tracing::debug!("minted `{locator}` for file `{}`", file.name());

        self.live.insert(
            locator.clone(),
            Blob {
                media_type: file.media_type().map(str::to_string),
                bytes: file.bytes().to_vec(),
            },
        );

        LocalHandle::new(locator)
    }

    fn revoke(&mut self, handle: LocalHandle) {
        let LocalHandle { locator } = handle;

        if self.live.remove(&locator).is_none() {
            tracing::warn!("revoked `{locator}`, but it wasn't live");
        } else {
            tracing::debug!("revoked `{locator}`");
        }

        self.revoked.push(locator);
    }
}
