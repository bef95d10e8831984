//! Composition root
//!
//! Decides which storage backend serves this process and wires the
//! services onto it. The decision itself is a pure function
//! ([`select_backend`]); [`compose`] only supplies the probe result.

use std::future::Future;
use std::sync::Arc;

use gallery_adapter::{BootstrapError, InMemoryItemRepository, InMemoryMuseumRepository, MySqlBackend};
use gallery_usecase::{ItemService, MuseumService};
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Rows the in-memory fallback starts with
pub const SEED_ITEMS: [&str; 2] = ["First item", "Second item"];

/// Outcome of trying to bring the relational backend up
#[derive(Debug)]
pub enum Probe<B, E> {
    /// Nobody tried
    Skipped,
    Ready(B),
    Failed(E),
}

/// Why the in-memory backend was chosen
#[derive(Debug)]
pub enum FallbackReason<E> {
    /// Relational storage is switched off in configuration
    Disabled,
    /// Enabled, but no probe result was supplied
    NotProbed,
    /// Enabled and probed, but bootstrap failed
    Unavailable(E),
}

#[derive(Debug)]
pub enum BackendChoice<B, E> {
    Relational(B),
    InMemory(FallbackReason<E>),
}

/// Pick a backend from configuration and the probe outcome.
///
/// A ready backend is only used when enabled; a disabled configuration
/// always wins.
pub fn select_backend<B, E>(enabled: bool, probe: Probe<B, E>) -> BackendChoice<B, E> {
    match (enabled, probe) {
        (false, _) => BackendChoice::InMemory(FallbackReason::Disabled),
        (true, Probe::Ready(backend)) => BackendChoice::Relational(backend),
        (true, Probe::Failed(err)) => BackendChoice::InMemory(FallbackReason::Unavailable(err)),
        (true, Probe::Skipped) => BackendChoice::InMemory(FallbackReason::NotProbed),
    }
}

enum ActiveBackend {
    InMemory,
    MySql(MySqlBackend),
}

/// Services wired onto the selected backend.
///
/// Owns the MySQL pool when that backend was chosen.
pub struct Services {
    pub items: ItemService,
    pub museums: MuseumService,
    backend: ActiveBackend,
}

impl Services {
    fn in_memory() -> Self {
        Self {
            items: ItemService::new(Arc::new(InMemoryItemRepository::seeded(SEED_ITEMS))),
            museums: MuseumService::new(Arc::new(InMemoryMuseumRepository::new())),
            backend: ActiveBackend::InMemory,
        }
    }

    fn mysql(backend: MySqlBackend) -> Self {
        Self {
            items: ItemService::new(Arc::new(backend.item_repository())),
            museums: MuseumService::new(Arc::new(backend.museum_repository())),
            backend: ActiveBackend::MySql(backend),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            ActiveBackend::InMemory => "memory",
            ActiveBackend::MySql(_) => "mysql",
        }
    }

    /// Items currently stored, or `None` when the store does not answer
    pub async fn item_count(&self) -> Option<usize> {
        match self.items.list().await {
            Ok(items) => Some(items.len()),
            Err(err) => {
                warn!(backend = self.backend_name(), error = %err, "item store not answering");
                None
            }
        }
    }

    /// Release the backend. The MySQL pool is closed here and nowhere else.
    pub async fn shutdown(self) {
        if let ActiveBackend::MySql(backend) = self.backend {
            backend.close().await;
            info!("mysql pool closed");
        }
    }
}

/// Build the services.
///
/// `connect` is awaited only when the relational backend is enabled; `None`
/// means no connection attempt was supplied. Any bootstrap failure degrades
/// to the in-memory store; this never fails.
pub async fn compose<F>(config: &DatabaseConfig, connect: Option<F>) -> Services
where
    F: Future<Output = Result<MySqlBackend, BootstrapError>>,
{
    let probe = match connect {
        Some(connect) if config.enabled => match connect.await {
            Ok(backend) => Probe::Ready(backend),
            Err(err) => Probe::Failed(err),
        },
        _ => Probe::Skipped,
    };

    match select_backend(config.enabled, probe) {
        BackendChoice::Relational(backend) => {
            info!(backend = "mysql", "using relational storage");
            Services::mysql(backend)
        }
        BackendChoice::InMemory(reason) => {
            match reason {
                FallbackReason::Disabled => {
                    info!(backend = "memory", "relational storage disabled")
                }
                FallbackReason::NotProbed => {
                    warn!(backend = "memory", "relational storage not probed; using memory")
                }
                FallbackReason::Unavailable(err) => warn!(
                    backend = "memory",
                    error = %err,
                    "relational storage unavailable; falling back to memory"
                ),
            }
            Services::in_memory()
        }
    }
}
