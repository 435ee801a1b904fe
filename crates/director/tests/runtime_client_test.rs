use director::clients::RuntimeClient;
use director::model::{Runtime, RuntimeInput};
use director::runtime_store::RuntimeError;
use tenant_store::mock::MockClient;
use tenant_store::{MetadataError, StoreError, TenantClient, TenantEntity, TenantId};

fn acme() -> TenantId {
    TenantId::from("acme")
}

fn runtime(name: &str) -> Runtime {
    RuntimeInput {
        name: name.to_string(),
        ..Default::default()
    }
    .to_runtime("r1".into(), acme())
}

/// RuntimeClient logic against a scripted store: no actor is running.
#[tokio::test]
async fn test_add_label_writes_mutated_copy() {
    let mut mock = MockClient::<Runtime>::new();
    mock.expect_modify("r1".into()).return_ok(runtime("edge"));

    let client = RuntimeClient::new(mock.client());
    let result = client
        .add_label(acme(), "r1".into(), "env".into(), vec!["prod".into(), "prod".into()])
        .await
        .unwrap();

    assert_eq!(result.labels["env"].len(), 1);
    let written = mock.written();
    assert_eq!(written.len(), 1);
    assert!(written[0].labels["env"].contains("prod"));
    mock.verify();
}

#[tokio::test]
async fn test_failed_mutation_writes_nothing() {
    let mut mock = MockClient::<Runtime>::new();
    mock.expect_modify("r1".into()).return_ok(runtime("edge"));

    let client = RuntimeClient::new(mock.client());
    let err = client
        .delete_annotation(acme(), "r1".into(), "missing".into())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        RuntimeError::Metadata(MetadataError::AnnotationNotFound("missing".into()))
    );
    assert!(mock.written().is_empty());
    mock.verify();
}

#[tokio::test]
async fn test_store_errors_are_mapped() {
    let mut mock = MockClient::<Runtime>::new();
    mock.expect_get_by_id("r1".into())
        .return_err(StoreError::not_found("runtime", "r1"));
    mock.expect_create().return_err(StoreError::ActorDropped);

    let client = RuntimeClient::new(mock.client());

    let err = client.get_by_id(acme(), "r1".into()).await.unwrap_err();
    assert_eq!(err, RuntimeError::NotFound("r1".into()));

    let err = client
        .create_runtime("r1".into(), acme(), RuntimeInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::StoreCommunicationError(_)));

    mock.verify();
}

#[tokio::test]
async fn test_update_runtime_keeps_identity() {
    let mut mock = MockClient::<Runtime>::new();
    mock.expect_modify("r1".into()).return_ok(runtime("edge"));
    mock.expect_modify("r2".into())
        .return_err(StoreError::not_found("runtime", "r2"));

    let client = RuntimeClient::new(mock.client());
    let input = RuntimeInput {
        name: "core".into(),
        description: Some("moved".into()),
        ..Default::default()
    };

    let updated = client
        .update_runtime(acme(), "r1".into(), input.clone())
        .await
        .unwrap();
    assert_eq!(updated.name, "core");
    assert_eq!(updated.id().to_string(), "r1");
    assert_eq!(updated.tenant(), &acme());
    assert_eq!(mock.written(), vec![updated]);

    let err = client
        .update_runtime(acme(), "r2".into(), input)
        .await
        .unwrap_err();
    assert_eq!(err, RuntimeError::NotFound("r2".into()));

    mock.verify();
}
