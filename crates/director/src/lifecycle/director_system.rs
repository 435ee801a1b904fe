use super::SystemConfig;
use crate::clients::{ApplicationClient, RuntimeClient};
use tracing::{error, info};

/// Owns the running store actors and the clients that reach them.
///
/// Each resource kind gets its own [`StoreActor`](tenant_store::StoreActor) on its own Tokio
/// task. Consumers receive clones of the clients; nothing is global.
///
/// # Example
///
/// ```ignore
/// let system = DirectorSystem::new(SystemConfig::from_env());
///
/// let runtime = system.runtime_client.create_runtime(id, tenant, input).await?;
///
/// system.shutdown().await?;
/// ```
pub struct DirectorSystem {
    /// Client for the Runtime store
    pub runtime_client: RuntimeClient,

    /// Client for the Application store
    pub application_client: ApplicationClient,

    /// Task handles for the running store actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DirectorSystem {
    /// Spawns one store actor per resource kind. Must be called inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        let (runtime_actor, runtime_client) = crate::runtime_store::new(config.buffer_size);
        let (application_actor, application_client) =
            crate::application_store::new(config.buffer_size);

        let runtime_handle = tokio::spawn(runtime_actor.run());
        let application_handle = tokio::spawn(application_actor.run());

        info!(buffer_size = config.buffer_size, "Director system started");

        Self {
            runtime_client,
            application_client,
            handles: vec![runtime_handle, application_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the request channels; each actor then drains and exits.
    /// Clones handed out earlier keep their actor alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down director system...");

        drop(self.runtime_client);
        drop(self.application_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("Director system shutdown complete.");
        Ok(())
    }
}
