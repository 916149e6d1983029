// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The snapshot cache.
//!
//! One owner holds the most recent `(availability, bookings, blackouts)`
//! triple. Loads within the TTL are served from memory; refreshes are
//! serialized so at most one upstream fetch is outstanding regardless of
//! caller count, and a failed refresh falls back to the previous snapshot
//! when one exists. Writers invalidate after a successful append so the
//! next load observes the new booking.

use crate::error::StoreError;
use crate::gateway::SheetGateway;
use std::sync::Arc;
use std::time::{Duration, Instant};
use suds::Snapshot;
use tokio::sync::Mutex;
use tracing::warn;

/// Cached snapshot plus its fetch instant.
#[derive(Default)]
struct CacheState {
    /// The most recent good snapshot.
    snapshot: Option<Arc<Snapshot>>,
    /// When it was fetched; `None` after an invalidate.
    fetched_at: Option<Instant>,
}

/// A TTL cache over `SheetGateway::fetch_snapshot`.
pub struct SnapshotCache {
    /// The gateway to refresh from.
    gateway: SheetGateway,
    /// How long a snapshot stays fresh.
    ttl: Duration,
    /// Shared state. The lock is held across a refresh on purpose: holding
    /// it is what coalesces concurrent refresh attempts into one upstream
    /// fetch.
    state: Mutex<CacheState>,
}

impl SnapshotCache {
    /// The default snapshot TTL. Long enough to absorb bursty calendar
    /// traffic, short enough to bound staleness for slot reads.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

    /// Creates a new cache over a gateway.
    #[must_use]
    pub fn new(gateway: SheetGateway, ttl: Duration) -> Self {
        Self {
            gateway,
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Returns the gateway this cache refreshes from.
    #[must_use]
    pub const fn gateway(&self) -> &SheetGateway {
        &self.gateway
    }

    /// Returns the current snapshot, refreshing when stale or forced.
    ///
    /// A non-forced call inside the TTL returns the held snapshot without
    /// touching the store. When a refresh fails and a previous snapshot
    /// exists, the stale snapshot is returned and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only when a refresh fails and no previous
    /// snapshot exists to fall back on.
    pub async fn load(&self, force: bool) -> Result<Arc<Snapshot>, StoreError> {
        let mut state = self.state.lock().await;

        if !force
            && let (Some(snapshot), Some(fetched_at)) = (&state.snapshot, state.fetched_at)
            && fetched_at.elapsed() < self.ttl
        {
            return Ok(Arc::clone(snapshot));
        }

        match self.gateway.fetch_snapshot().await {
            Ok(fresh) => {
                let fresh: Arc<Snapshot> = Arc::new(fresh);
                state.snapshot = Some(Arc::clone(&fresh));
                state.fetched_at = Some(Instant::now());
                Ok(fresh)
            }
            Err(err) => {
                let Some(stale) = &state.snapshot else {
                    return Err(err);
                };
                warn!(error = %err, "sheet refresh failed; serving cached snapshot");
                Ok(Arc::clone(stale))
            }
        }
    }

    /// Forces the next `load` to refetch.
    pub async fn invalidate(&self) {
        self.state.lock().await.fetched_at = None;
    }
}
