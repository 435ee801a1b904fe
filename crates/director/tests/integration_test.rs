use director::application_store::ApplicationError;
use director::lifecycle::{DirectorSystem, SystemConfig};
use director::model::{ApplicationInput, RuntimeInput};
use director::runtime_store::RuntimeError;
use serde_json::json;
use tenant_store::{ErrorKind, ListQuery, MetadataError, TenantClient, TenantEntity, TenantId};

fn acme() -> TenantId {
    TenantId::from("acme")
}

fn globex() -> TenantId {
    TenantId::from("globex")
}

fn runtime_input(name: &str) -> RuntimeInput {
    RuntimeInput {
        name: name.to_string(),
        ..Default::default()
    }
}

/// Full end-to-end test with both stores running.
#[tokio::test]
async fn test_full_director_system() {
    let system = DirectorSystem::new(SystemConfig::default());

    let runtime = system
        .runtime_client
        .create_runtime("r1".into(), acme(), runtime_input("edge"))
        .await
        .expect("Failed to create runtime");
    assert_eq!(runtime.id().0, "r1");
    assert_eq!(runtime.tenant(), &acme());

    let fetched = system
        .runtime_client
        .get_by_id(acme(), "r1".into())
        .await
        .expect("Failed to get runtime");
    assert_eq!(fetched, runtime);

    let app = system
        .application_client
        .create_application(
            "a1".into(),
            acme(),
            ApplicationInput {
                name: "billing".into(),
                health_check_url: Some("https://billing/healthz".into()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create application");
    assert_eq!(app.health_check_url.as_deref(), Some("https://billing/healthz"));

    // Runtimes and applications live in separate stores
    let runtimes = system
        .runtime_client
        .list(acme(), ListQuery::default())
        .await
        .unwrap();
    assert_eq!(runtimes.total_count, 1);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_wrong_tenant_is_not_found() {
    let system = DirectorSystem::new(SystemConfig::default());

    system
        .runtime_client
        .create_runtime("r1".into(), acme(), runtime_input("edge"))
        .await
        .unwrap();

    let err = system
        .runtime_client
        .get_by_id(globex(), "r1".into())
        .await
        .unwrap_err();
    assert_eq!(err, RuntimeError::NotFound("r1".into()));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let page = system
        .runtime_client
        .list(globex(), ListQuery::default())
        .await
        .unwrap();
    assert!(page.data.is_empty());

    let err = system
        .runtime_client
        .delete_runtime(globex(), "r1".into())
        .await
        .unwrap_err();
    assert_eq!(err, RuntimeError::NotFound("r1".into()));

    // Still there for its owner
    assert!(system
        .runtime_client
        .get_by_id(acme(), "r1".into())
        .await
        .is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete_runtime() {
    let system = DirectorSystem::new(SystemConfig::default());
    let client = &system.runtime_client;

    client
        .create_runtime("r1".into(), acme(), runtime_input("edge"))
        .await
        .unwrap();

    let updated = client
        .update_runtime(
            acme(),
            "r1".into(),
            RuntimeInput {
                name: "edge-v2".into(),
                description: Some("second".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "edge-v2");
    assert_eq!(updated.tenant(), &acme());

    let err = client
        .update_runtime(acme(), "ghost".into(), runtime_input("ghost"))
        .await
        .unwrap_err();
    assert_eq!(err, RuntimeError::NotFound("ghost".into()));

    let deleted = client.delete_runtime(acme(), "r1".into()).await.unwrap();
    assert_eq!(deleted.name, "edge-v2");
    assert!(client.get_by_id(acme(), "r1".into()).await.is_err());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_application_metadata_flow() {
    let system = DirectorSystem::new(SystemConfig::default());
    let client = &system.application_client;

    client
        .create_application("a1".into(), acme(), ApplicationInput::default())
        .await
        .unwrap();

    client
        .add_label(acme(), "a1".into(), "foo".into(), vec!["bar".into(), "baz".into(), "bar".into()])
        .await
        .unwrap();
    let app = client
        .delete_label(acme(), "a1".into(), "foo".into(), vec!["bar".into()])
        .await
        .unwrap();
    assert_eq!(app.labels["foo"].iter().collect::<Vec<_>>(), vec!["baz"]);

    client
        .add_annotation(acme(), "a1".into(), "owner".into(), json!({ "team": "billing" }))
        .await
        .unwrap();
    let err = client
        .add_annotation(acme(), "a1".into(), "owner".into(), json!("other"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApplicationError::Metadata(MetadataError::AnnotationExists("owner".into()))
    );
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = client
        .delete_annotation(acme(), "a1".into(), "missing".into())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let stored = client.get_by_id(acme(), "a1".into()).await.unwrap();
    assert_eq!(stored.annotations["owner"], json!({ "team": "billing" }));

    system.shutdown().await.unwrap();
}

/// Many tasks registering runtimes through clones of one client.
#[tokio::test]
async fn test_concurrent_runtime_registration() {
    let system = DirectorSystem::new(SystemConfig { buffer_size: 4 });

    let mut handles = vec![];
    for i in 0..10 {
        let client = system.runtime_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create_runtime(format!("r{i}").into(), acme(), runtime_input("edge"))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let page = system
        .runtime_client
        .list(acme(), ListQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total_count, 10);
    assert!(!page.page_info.has_next_page);

    system.shutdown().await.unwrap();
}

/// Concurrent label changes on the same runtime all land.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_labels_on_one_runtime() {
    let system = DirectorSystem::new(SystemConfig::default());
    system
        .runtime_client
        .create_runtime("r1".into(), acme(), runtime_input("edge"))
        .await
        .unwrap();

    let mut handles = vec![];
    for i in 0..50 {
        let client = system.runtime_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .add_label(acme(), "r1".into(), format!("k{i}"), vec!["v".into()])
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = system
        .runtime_client
        .get_by_id(acme(), "r1".into())
        .await
        .unwrap();
    assert_eq!(stored.labels.len(), 50);

    system.shutdown().await.unwrap();
}
