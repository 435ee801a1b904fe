//! # Mock Store & Testing Guide
//!
//! [`MockClient<T>`] hands out a real [`StoreClient<T>`] whose requests are answered from a
//! queue of expectations instead of a repository. Use it to test code that sits *around* a
//! store client (resource clients, metadata read-modify-write flows) without running a
//! [`StoreActor`](crate::StoreActor).
//!
//! | Feature | MockClient | Real StoreActor |
//! |---------|------------|-----------------|
//! | **State** | None, answers are scripted | Real repository |
//! | **Error Injection** | Easy (`return_err`) | Needs specific state |
//! | **Use Case** | Client logic | The store itself, full system |
//!
//! ```rust
//! use tenant_store::mock::MockClient;
//! use tenant_store::{StoreError, TenantEntity, TenantId};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Widget { id: u32, tenant: TenantId }
//!
//! impl TenantEntity for Widget {
//!     type Id = u32;
//!     const KIND: &'static str = "widget";
//!     fn id(&self) -> &u32 { &self.id }
//!     fn tenant(&self) -> &TenantId { &self.tenant }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Widget>::new();
//!     let client = mock.client();
//!
//!     // Simulate a stopped store
//!     mock.expect_get_by_id(1).return_err(StoreError::ActorClosed);
//!
//!     let result = client.get_by_id(TenantId::from("acme"), 1).await;
//!     assert_eq!(result, Err(StoreError::ActorClosed));
//!     mock.verify();
//! }
//! ```
//!
//! Items passed to `create` and `update`, and records a `modify` mutation succeeded on, are
//! recorded and available through [`MockClient::written`]. That is how a test checks what a
//! metadata operation stored.
//!
//! For lower-level control use [`create_mock_client`] and the `expect_*` receiver helpers.

use crate::client::StoreClient;
use crate::entity::TenantEntity;
use crate::error::StoreError;
use crate::message::{Mutation, Response, StoreRequest};
use crate::page::{ListQuery, Page};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the scripted answer to it.
enum Expectation<T: TenantEntity> {
    GetById {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    List {
        response: Result<Page<T>, StoreError>,
    },
    Create {
        response: Result<(), StoreError>,
    },
    Update {
        response: Result<(), StoreError>,
    },
    Delete {
        response: Result<(), StoreError>,
    },
    /// `stored` is the record the mutation is applied to.
    Modify {
        id: T::Id,
        stored: Result<T, StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock store with expectation tracking.
pub struct MockClient<T: TenantEntity> {
    client: StoreClient<T>,
    expectations: Expectations<T>,
    written: Arc<Mutex<Vec<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: TenantEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TenantEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let written = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let written_clone = written.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::GetById { id, respond_to, .. },
                        Some(Expectation::GetById {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "GetById called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Create { item, respond_to }, Some(Expectation::Create { response })) => {
                        written_clone.lock().unwrap().extend(item);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Update { item, respond_to }, Some(Expectation::Update { response })) => {
                        written_clone.lock().unwrap().extend(item);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Delete { respond_to, .. }, Some(Expectation::Delete { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Modify {
                            id,
                            apply,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Modify {
                            id: expected,
                            stored,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Modify called with unexpected id");
                        let response = stored.and_then(|mut item| {
                            apply(&mut item)?;
                            written_clone.lock().unwrap().push(item.clone());
                            Ok(item)
                        });
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            written,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Expects a `get_by_id` for `id`.
    pub fn expect_get_by_id(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::GetById { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Page<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, ()> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, ()> {
        self.builder(|response| Expectation::Update { response })
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        self.builder(|response| Expectation::Delete { response })
    }

    /// Expects a `modify` of `id`. `return_ok` takes the stored record the mutation runs on.
    pub fn expect_modify(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |stored| Expectation::Modify { id, stored })
    }

    /// Items received by `create` and `update` plus successfully modified records, in arrival
    /// order.
    pub fn written(&self) -> Vec<T> {
        self.written.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }
}

/// Completes an expectation with the answer the mock should give.
pub struct ExpectationBuilder<T: TenantEntity, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T>>,
}

impl<T: TenantEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: pull requests with the `expect_*` helpers, assert on them, and
/// answer through the returned responder.
pub fn create_mock_client<T: TenantEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is a GetById request
pub async fn expect_get_by_id<T: TenantEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(crate::TenantId, T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::GetById {
            tenant,
            id,
            respond_to,
        }) => Some((tenant, id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: TenantEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(crate::TenantId, ListQuery, Response<Page<T>>)> {
    match receiver.recv().await {
        Some(StoreRequest::List {
            tenant,
            query,
            respond_to,
        }) => Some((tenant, query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: TenantEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(Option<T>, Response<()>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Modify request
pub async fn expect_modify<T: TenantEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(crate::TenantId, T::Id, Mutation<T>, Response<T>)> {
    match receiver.recv().await {
        Some(StoreRequest::Modify {
            tenant,
            id,
            apply,
            respond_to,
        }) => Some((tenant, id, apply, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::TenantId;
    use crate::metadata::MetadataError;

    #[derive(Clone, Debug, PartialEq)]
    struct Widget {
        id: u32,
        tenant: TenantId,
        name: String,
    }

    impl TenantEntity for Widget {
        type Id = u32;
        const KIND: &'static str = "widget";

        fn id(&self) -> &u32 {
            &self.id
        }

        fn tenant(&self) -> &TenantId {
            &self.tenant
        }
    }

    fn widget(id: u32, name: &str) -> Widget {
        Widget {
            id,
            tenant: TenantId::from("acme"),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers() {
        let (client, mut receiver) = create_mock_client::<Widget>(10);

        let list_task = tokio::spawn(async move {
            client
                .list(TenantId::from("acme"), ListQuery::default())
                .await
        });

        let (tenant, query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(tenant, TenantId::from("acme"));
        assert_eq!(query, ListQuery::default());
        responder.send(Ok(Page::single(vec![widget(1, "a")]))).unwrap();

        let page = list_task.await.unwrap().unwrap();
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Widget>::new();

        mock.expect_create().return_ok(());
        mock.expect_get_by_id(1).return_ok(widget(1, "a"));
        mock.expect_update().return_err(StoreError::not_found("widget", 1));

        let client = mock.client();
        let tenant = TenantId::from("acme");

        client.create(widget(1, "a")).await.unwrap();
        let fetched = client.get_by_id(tenant, 1).await.unwrap();
        assert_eq!(fetched.name, "a");
        let updated = client.update(widget(1, "b")).await;
        assert_eq!(updated, Err(StoreError::not_found("widget", 1)));

        assert_eq!(mock.written(), vec![widget(1, "a"), widget(1, "b")]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_modify_expectation_applies_mutation() {
        let mut mock = MockClient::<Widget>::new();
        mock.expect_modify(1).return_ok(widget(1, "a"));
        mock.expect_modify(1).return_ok(widget(1, "a"));

        let client = mock.client();
        let renamed = client
            .modify(TenantId::from("acme"), 1, |w: &mut Widget| {
                w.name = "b".into();
                Ok(())
            })
            .await
            .unwrap();
        let rejected = client
            .modify(TenantId::from("acme"), 1, |_: &mut Widget| {
                Err(MetadataError::AnnotationExists("owner".into()))
            })
            .await;

        assert_eq!(renamed.name, "b");
        assert_eq!(
            rejected,
            Err(StoreError::Metadata(MetadataError::AnnotationExists(
                "owner".into()
            )))
        );
        assert_eq!(mock.written(), vec![widget(1, "b")]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_modify_receiver_helper() {
        let (client, mut receiver) = create_mock_client::<Widget>(10);

        let modify_task = tokio::spawn(async move {
            client
                .modify(TenantId::from("acme"), 7, |w: &mut Widget| {
                    w.name = "seven".into();
                    Ok(())
                })
                .await
        });

        let (tenant, id, apply, responder) = expect_modify(&mut receiver)
            .await
            .expect("Expected Modify request");
        assert_eq!(tenant, TenantId::from("acme"));
        assert_eq!(id, 7);
        let mut stored = widget(7, "");
        apply(&mut stored).unwrap();
        responder.send(Ok(stored)).unwrap();

        let modified = modify_task.await.unwrap().unwrap();
        assert_eq!(modified.name, "seven");
    }
}
