use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::model::PlayerDirectory;

/// Matches the upstream guidance for the full player payload: refresh at
/// most a few times a day.
pub const DEFAULT_REFRESH: Duration = Duration::from_secs(6 * 60 * 60);

/// Supplies a fresh player directory on demand. The real implementation
/// lives with the retrieval collaborator; the engine side only depends on
/// this seam, which also keeps tests free of I/O.
pub trait DirectorySource {
    fn load_directory(&self) -> Result<PlayerDirectory>;
}

impl<F> DirectorySource for F
where
    F: Fn() -> Result<PlayerDirectory>,
{
    fn load_directory(&self) -> Result<PlayerDirectory> {
        self()
    }
}

struct Slot {
    directory: Arc<PlayerDirectory>,
    fetched_at: Instant,
}

/// Read-through cache over a [`DirectorySource`].
///
/// Holds one `{directory, fetched_at}` slot and reloads it once the
/// configured refresh interval has passed. If a reload fails and a previous
/// snapshot exists, the stale snapshot is served instead; staleness is
/// invisible to the engine, which only ever sees a snapshot.
pub struct DirectoryCache<S> {
    source: S,
    refresh: Duration,
    slot: Mutex<Option<Slot>>,
}

impl<S: DirectorySource> DirectoryCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_refresh(source, DEFAULT_REFRESH)
    }

    pub fn with_refresh(source: S, refresh: Duration) -> Self {
        Self {
            source,
            refresh,
            slot: Mutex::new(None),
        }
    }

    /// Current directory snapshot, reloading through the source if the
    /// cached one has expired. Errors only when there is no snapshot at
    /// all to fall back on.
    pub fn snapshot(&self) -> Result<Arc<PlayerDirectory>> {
        let mut guard = self.slot.lock().expect("directory cache lock poisoned");

        if let Some(slot) = guard.as_ref() {
            if slot.fetched_at.elapsed() < self.refresh {
                return Ok(Arc::clone(&slot.directory));
            }
        }

        match self.source.load_directory() {
            Ok(directory) => {
                let directory = Arc::new(directory);
                *guard = Some(Slot {
                    directory: Arc::clone(&directory),
                    fetched_at: Instant::now(),
                });
                Ok(directory)
            }
            Err(err) => {
                if let Some(slot) = guard.as_ref() {
                    log::warn!("directory refresh failed, serving stale snapshot: {err:#}");
                    return Ok(Arc::clone(&slot.directory));
                }
                Err(err)
            }
        }
    }
}
