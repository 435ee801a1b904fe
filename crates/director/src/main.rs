//! # Director Demo
//!
//! Starts a [`DirectorSystem`], registers a runtime and an application for a tenant, edits
//! their metadata, and shows that another tenant cannot see them.
//!
//! ```bash
//! RUST_LOG=info cargo run -p director
//! ```

use director::lifecycle::{setup_tracing, DirectorSystem, SystemConfig};
use director::model::{ApplicationInput, RuntimeInput};
use serde_json::json;
use tenant_store::{ListQuery, TenantClient, TenantId};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = DirectorSystem::new(SystemConfig::from_env());
    let tenant = TenantId::from("acme");

    let span = tracing::info_span!("runtime_registration");
    let runtime = async {
        let input = RuntimeInput {
            name: "edge-eu".to_string(),
            description: Some("Edge runtime in eu-west".to_string()),
            ..Default::default()
        };
        let runtime = system
            .runtime_client
            .create_runtime("rt-1".into(), tenant.clone(), input)
            .await?;
        system
            .runtime_client
            .add_label(
                tenant.clone(),
                "rt-1".into(),
                "region".to_string(),
                vec!["eu-west".to_string()],
            )
            .await?;
        Ok::<_, director::runtime_store::RuntimeError>(runtime)
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(runtime = %runtime.name, "Runtime registered");

    let span = tracing::info_span!("application_registration");
    async {
        let input = ApplicationInput {
            name: "billing".to_string(),
            health_check_url: Some("https://billing.acme.example/healthz".to_string()),
            ..Default::default()
        };
        system
            .application_client
            .create_application("app-1".into(), tenant.clone(), input)
            .await?;
        system
            .application_client
            .add_annotation(tenant.clone(), "app-1".into(), "owner".to_string(), json!("team-billing"))
            .await?;
        Ok::<_, director::application_store::ApplicationError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let page = system
        .application_client
        .list(tenant.clone(), ListQuery::default())
        .await
        .map_err(|e| e.to_string())?;
    info!(tenant = %tenant, total = page.total_count, "Applications listed");

    match system
        .runtime_client
        .get_by_id(TenantId::from("globex"), "rt-1".into())
        .await
    {
        Ok(_) => warn!("Runtime leaked across tenants"),
        Err(e) => info!(error = %e, "Other tenant cannot see the runtime"),
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
