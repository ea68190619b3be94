//! Module wiring and lifecycle

use crate::config::Config;
use crate::contract::TalesApi;
use crate::domain::{
    run_probe, BrowsePagers, Connectivity, ContactRelay, NoOpContactRelay, Pager,
    ReachabilityProbe, Service,
};
use crate::infra::relay::FormRelayClient;
use crate::infra::storage::{write_snapshot, HostedTaleRepository, SnapshotTaleRepository};
use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
struct Wiring {
    service: Arc<Service>,
    snapshot: Arc<SnapshotTaleRepository>,
    probe: Arc<dyn ReachabilityProbe>,
    connectivity: Arc<Connectivity>,
}

/// Tales service module
pub struct TalesServiceModule {
    config: RwLock<Config>,
    wiring: RwLock<Option<Wiring>>,
}

impl Default for TalesServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            wiring: RwLock::new(None),
        }
    }
}

impl TalesServiceModule {
    /// Build repositories, relay and domain service from `config`
    pub fn init(&self, config: Config) -> Result<()> {
        let hosted = Arc::new(
            HostedTaleRepository::new(&config.hosted).context("building hosted repository")?,
        );
        let snapshot = Arc::new(SnapshotTaleRepository::new(&config.snapshot_path));

        let relay: Arc<dyn ContactRelay> = match &config.contact.relay_url {
            Some(url) => Arc::new(
                FormRelayClient::new(url, config.hosted.timeout)
                    .context("building contact relay")?,
            ),
            None => Arc::new(NoOpContactRelay),
        };

        let connectivity = Arc::new(if config.start_offline {
            Connectivity::pinned(false)
        } else {
            Connectivity::new()
        });

        let pagers = BrowsePagers {
            home: Pager::new(config.home_page_size, config.max_limit),
            explore: Pager::new(config.explore_page_size, config.max_limit),
        };

        let service = Arc::new(Service::new(
            hosted.clone(),
            snapshot.clone(),
            relay,
            connectivity.clone(),
            pagers,
        ));

        *self.wiring.write() = Some(Wiring {
            service,
            snapshot,
            probe: hosted,
            connectivity,
        });

        tracing::info!(
            snapshot = %config.snapshot_path.display(),
            start_offline = config.start_offline,
            "Tales service initialized"
        );
        *self.config.write() = config;
        Ok(())
    }

    fn wiring(&self) -> Result<Wiring> {
        self.wiring
            .read()
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        Ok(self.wiring()?.service)
    }

    /// In-process client over the domain service
    pub fn client(&self) -> Result<Arc<dyn TalesApi>> {
        Ok(Arc::new(crate::api::native::NativeClient::new(
            self.service()?,
        )))
    }

    /// Register the JSON API and the HTML pages on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let wiring = self.wiring()?;

        tracing::info!("Registering tales service routes");
        let router = crate::api::rest::routes::register_routes(router, wiring.service.clone())?;
        Ok(crate::api::pages::register_pages(
            router,
            wiring.service,
            wiring.snapshot,
        ))
    }

    /// Run the reachability probe until `cancel` fires
    pub async fn serve(self: Arc<Self>, cancel: CancellationToken) -> Result<()> {
        let wiring = self.wiring()?;
        let probe = self.config.read().probe.clone();

        if !probe.enabled {
            tracing::info!("Connectivity probe disabled");
            cancel.cancelled().await;
            return Ok(());
        }

        run_probe(wiring.probe, wiring.connectivity, probe.interval, cancel).await;
        Ok(())
    }

    /// Write the first rows of the hosted table to the snapshot file
    ///
    /// Returns the path written and the number of tales in it.
    pub async fn export_snapshot(
        &self,
        count: Option<usize>,
        out: Option<&Path>,
    ) -> Result<(PathBuf, usize)> {
        let service = self.service()?;
        let (count, path) = {
            let cfg = self.config.read();
            (
                count.unwrap_or(cfg.export_count),
                out.map(Path::to_path_buf)
                    .unwrap_or_else(|| cfg.snapshot_path.clone()),
            )
        };

        let tales = service.export_rows(count).await?;
        let written = tales.len();
        let target = path.clone();
        tokio::task::spawn_blocking(move || write_snapshot(&target, &tales))
            .await
            .context("snapshot writer panicked")?
            .with_context(|| format!("writing snapshot to {}", path.display()))?;

        tracing::info!(path = %path.display(), tales = written, "Offline snapshot exported");
        Ok((path, written))
    }
}
