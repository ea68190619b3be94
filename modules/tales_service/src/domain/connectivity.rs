//! Online/offline state that selects the data path
//!
//! The state follows the hosted database's reachability as seen by the probe
//! task, unless an operator pins it.

use super::repository::ReachabilityProbe;
use crate::contract::ConnectivityStatus;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Shared connectivity flag
pub struct Connectivity {
    status: RwLock<ConnectivityStatus>,
}

impl Connectivity {
    /// Probe-driven state starting online
    pub fn new() -> Self {
        Self {
            status: RwLock::new(ConnectivityStatus {
                online: true,
                pinned: false,
                changed_at: Utc::now(),
            }),
        }
    }

    /// State pinned to `online`
    pub fn pinned(online: bool) -> Self {
        let connectivity = Self::new();
        connectivity.pin(online);
        connectivity
    }

    pub fn status(&self) -> ConnectivityStatus {
        *self.status.read()
    }

    pub fn is_offline(&self) -> bool {
        !self.status.read().online
    }

    /// Record a probe result; returns whether the state changed
    pub fn observe(&self, reachable: bool) -> bool {
        let mut status = self.status.write();
        if status.pinned || status.online == reachable {
            return false;
        }
        status.online = reachable;
        status.changed_at = Utc::now();
        if reachable {
            tracing::info!("Hosted database reachable again; serving live tales");
        } else {
            tracing::warn!("Hosted database unreachable; serving offline snapshot");
        }
        true
    }

    /// Force a state until released
    pub fn pin(&self, online: bool) {
        let mut status = self.status.write();
        if status.online != online {
            status.changed_at = Utc::now();
        }
        status.online = online;
        status.pinned = true;
        tracing::info!(online, "Connectivity pinned");
    }

    /// Hand control back to the probe
    pub fn release(&self) {
        self.status.write().pinned = false;
        tracing::info!("Connectivity released to probe");
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::new()
    }
}

/// Ping the hosted database every `interval` until cancelled
pub async fn run_probe(
    probe: Arc<dyn ReachabilityProbe>,
    connectivity: Arc<Connectivity>,
    interval: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Connectivity probe stopped");
                return;
            }
            _ = ticker.tick() => {
                let reachable = match probe.ping().await {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::debug!(error = %e, "Connectivity probe failed");
                        false
                    }
                };
                connectivity.observe(reachable);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct FlagProbe {
        up: AtomicBool,
        pings: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ReachabilityProbe for FlagProbe {
        async fn ping(&self) -> anyhow::Result<()> {
            self.pings.fetch_add(1, Ordering::SeqCst);
            if self.up.load(Ordering::SeqCst) {
                Ok(())
            } else {
                anyhow::bail!("connection refused")
            }
        }
    }

    #[test]
    fn test_observe_tracks_transitions() {
        let connectivity = Connectivity::new();
        assert!(!connectivity.is_offline());

        assert!(connectivity.observe(false));
        assert!(connectivity.is_offline());
        assert!(!connectivity.observe(false));

        assert!(connectivity.observe(true));
        assert!(!connectivity.is_offline());
    }

    #[test]
    fn test_pinned_state_ignores_probe() {
        let connectivity = Connectivity::pinned(false);
        assert!(connectivity.status().pinned);
        assert!(!connectivity.observe(true));
        assert!(connectivity.is_offline());

        connectivity.release();
        assert!(connectivity.observe(true));
        assert!(!connectivity.is_offline());
    }

    #[tokio::test(start_paused = true)]
    async fn test_probe_marks_offline_and_stops_on_cancel() {
        let probe = Arc::new(FlagProbe {
            up: AtomicBool::new(false),
            pings: AtomicUsize::new(0),
        });
        let connectivity = Arc::new(Connectivity::new());
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(run_probe(
            probe.clone(),
            connectivity.clone(),
            Duration::from_secs(5),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(connectivity.is_offline());

        probe.up.store(true, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!connectivity.is_offline());

        cancel.cancel();
        handle.await.unwrap();
        assert!(probe.pings.load(Ordering::SeqCst) >= 2);
    }
}
