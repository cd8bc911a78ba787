// SPDX-License-Identifier: GPL-3.0-only
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::forms::{AddCafeFields, DeleteCafeFields, FormErrors, FormInput};
use crate::store::{CafeRecord, CafeStore, StoreError, StoreResult};
use crate::workflow::notice::{Notice, NoticeSlots};

pub const DUPLICATE_NAME_MESSAGE: &str = "A cafe with this name already exists.";
pub const NOT_FOUND_HEADING: &str = "Cafe with that id is not found in database. Please try again.";
pub const MISMATCH_HEADING: &str = "Cafe id and name do not match. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(CafeRecord),
    Rejected(FormErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(CafeRecord),
    Rejected(FormErrors),
    NotFound,
    IdentityMismatch,
}

impl DeleteOutcome {
    /// Heading explaining a refused delete, if it has one.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some(NOT_FOUND_HEADING),
            Self::IdentityMismatch => Some(MISMATCH_HEADING),
            _ => None,
        }
    }
}

/// Runs the list, add and delete flows against a store.
///
/// Rejections are returned as outcomes. Only storage faults surface as
/// `Err`, always as `StoreError::Database`.
pub struct WorkflowController {
    store: Arc<dyn CafeStore>,
    notices: Arc<NoticeSlots>,
}

impl WorkflowController {
    pub fn new(store: Arc<dyn CafeStore>, notices: Arc<NoticeSlots>) -> Self {
        Self { store, notices }
    }

    /// Notice for the landing page, consuming any pending one.
    pub async fn landing(&self, session_id: &Uuid) -> Notice {
        self.notices
            .take(session_id)
            .await
            .unwrap_or_else(Notice::landing_default)
    }

    pub async fn list(&self) -> StoreResult<Vec<CafeRecord>> {
        self.store.list_all().await
    }

    pub async fn add(&self, session_id: Uuid, input: &FormInput) -> StoreResult<AddOutcome> {
        let fields = match AddCafeFields::parse(input) {
            Ok(fields) => fields,
            Err(errors) => {
                debug!(failed_fields = errors.len(), "Add cafe form rejected");
                return Ok(AddOutcome::Rejected(errors));
            }
        };

        debug!(name = %fields.name(), "Creating cafe");
        match self.store.create(fields.into_new_cafe()).await {
            Ok(record) => {
                self.notices.set(session_id, Notice::cafe_added()).await;
                info!(cafe_id = record.id, name = %record.name, "Cafe added");
                Ok(AddOutcome::Added(record))
            }
            Err(StoreError::DuplicateName(name)) => {
                warn!(name = %name, "Cafe name already taken");
                Ok(AddOutcome::Rejected(FormErrors::single("name", DUPLICATE_NAME_MESSAGE)))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, session_id: Uuid, input: &FormInput) -> StoreResult<DeleteOutcome> {
        let fields = match DeleteCafeFields::parse(input) {
            Ok(fields) => fields,
            Err(errors) => return Ok(DeleteOutcome::Rejected(errors)),
        };

        let Some(id) = fields.record_id() else {
            debug!(id = %fields.id, "Delete requested for non-numeric id");
            return Ok(DeleteOutcome::NotFound);
        };

        let record = match self.store.get_by_id(id).await {
            Ok(record) => record,
            Err(StoreError::NotFound(_)) => return Ok(DeleteOutcome::NotFound),
            Err(e) => return Err(e),
        };

        if record.name != fields.name {
            warn!(cafe_id = id, submitted = %fields.name, "Cafe id and name do not match");
            return Ok(DeleteOutcome::IdentityMismatch);
        }

        match self.store.delete(id).await {
            Ok(()) => {
                self.notices.set(session_id, Notice::cafe_deleted()).await;
                info!(cafe_id = id, name = %record.name, "Cafe deleted");
                Ok(DeleteOutcome::Deleted(record))
            }
            // Deleted by someone else between lookup and delete
            Err(StoreError::NotFound(_)) => Ok(DeleteOutcome::NotFound),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::forms::validator::INVALID_URL_MESSAGE;
    use crate::store::NewCafe;
    use crate::test_helpers::{add_cafe_input, setup_test_store};

    struct UnavailableStore;

    #[async_trait]
    impl CafeStore for UnavailableStore {
        async fn create(&self, _cafe: NewCafe) -> StoreResult<CafeRecord> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn list_all(&self) -> StoreResult<Vec<CafeRecord>> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn get_by_id(&self, _id: i64) -> StoreResult<CafeRecord> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn delete(&self, _id: i64) -> StoreResult<()> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }
    }

    async fn setup_controller() -> (WorkflowController, Arc<dyn CafeStore>) {
        let store: Arc<dyn CafeStore> = Arc::new(setup_test_store().await.unwrap());
        let controller = WorkflowController::new(Arc::clone(&store), Arc::new(NoticeSlots::new()));
        (controller, store)
    }

    fn delete_input(id: &str, name: &str) -> FormInput {
        FormInput::from([
            ("id".to_string(), id.to_string()),
            ("name".to_string(), name.to_string()),
        ])
    }

    async fn add_cafe(controller: &WorkflowController, name: &str) -> CafeRecord {
        match controller.add(Uuid::new_v4(), &add_cafe_input(name)).await.unwrap() {
            AddOutcome::Added(record) => record,
            other => panic!("expected cafe to be added, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let (controller, _store) = setup_controller().await;
        let record = add_cafe(&controller, "Cafe A").await;

        let cafes = controller.list().await.unwrap();
        assert_eq!(cafes, vec![record.clone()]);
        assert_eq!(record.name, "Cafe A");
        assert_eq!(record.coffee_price, Some("£2.50".to_string()));
    }

    #[tokio::test]
    async fn test_add_sets_notice_once() {
        let (controller, _store) = setup_controller().await;
        let session = Uuid::new_v4();

        let outcome = controller.add(session, &add_cafe_input("Cafe A")).await.unwrap();
        assert!(matches!(outcome, AddOutcome::Added(_)));

        assert_eq!(controller.landing(&session).await, Notice::cafe_added());
        assert_eq!(controller.landing(&session).await, Notice::landing_default());
    }

    #[tokio::test]
    async fn test_add_long_name_accepted() {
        let (controller, store) = setup_controller().await;
        let name = "x".repeat(251);

        let record = add_cafe(&controller, &name).await;
        assert_eq!(record.name, name);
        assert_eq!(store.get_by_id(record.id).await.unwrap(), record);
    }

    #[tokio::test]
    async fn test_add_duplicate_name_reported_on_name() {
        let (controller, store) = setup_controller().await;
        add_cafe(&controller, "Cafe A").await;
        let session = Uuid::new_v4();

        let outcome = controller.add(session, &add_cafe_input("Cafe A")).await.unwrap();
        match outcome {
            AddOutcome::Rejected(errors) => {
                assert_eq!(errors.get("name"), Some(DUPLICATE_NAME_MESSAGE));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(store.list_all().await.unwrap().len(), 1);
        assert_eq!(controller.landing(&session).await, Notice::landing_default());
    }

    #[tokio::test]
    async fn test_add_invalid_url_never_reaches_store() {
        // Any store call would fail, so a rejection proves the store was untouched
        let controller = WorkflowController::new(Arc::new(UnavailableStore), Arc::new(NoticeSlots::new()));
        let mut input = add_cafe_input("Cafe A");
        input.insert("map_url".to_string(), "not-a-url".to_string());

        let outcome = controller.add(Uuid::new_v4(), &input).await.unwrap();
        match outcome {
            AddOutcome::Rejected(errors) => assert_eq!(errors.get("map_url"), Some(INVALID_URL_MESSAGE)),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_matching_pair() {
        let (controller, store) = setup_controller().await;
        let record = add_cafe(&controller, "Cafe A").await;
        let session = Uuid::new_v4();

        let outcome = controller
            .delete(session, &delete_input(&record.id.to_string(), "Cafe A"))
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted(record));
        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(controller.landing(&session).await, Notice::cafe_deleted());
    }

    #[tokio::test]
    async fn test_delete_name_mismatch_keeps_record() {
        let (controller, store) = setup_controller().await;
        let record = add_cafe(&controller, "Cafe A").await;

        let outcome = controller
            .delete(Uuid::new_v4(), &delete_input(&record.id.to_string(), "Wrong Name"))
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::IdentityMismatch);
        assert_eq!(outcome.heading(), Some(MISMATCH_HEADING));
        assert_eq!(store.list_all().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_delete_name_match_is_case_sensitive() {
        let (controller, store) = setup_controller().await;
        let record = add_cafe(&controller, "Cafe A").await;

        let outcome = controller
            .delete(Uuid::new_v4(), &delete_input(&record.id.to_string(), "cafe a"))
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::IdentityMismatch);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_padded_name_is_mismatch() {
        let (controller, store) = setup_controller().await;
        let record = add_cafe(&controller, "Cafe A").await;

        let outcome = controller
            .delete(Uuid::new_v4(), &delete_input(&record.id.to_string(), "  Cafe A  "))
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::IdentityMismatch);
        assert_eq!(store.list_all().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let (controller, store) = setup_controller().await;
        add_cafe(&controller, "Cafe A").await;

        let outcome = controller
            .delete(Uuid::new_v4(), &delete_input("9999", "Cafe A"))
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(outcome.heading(), Some(NOT_FOUND_HEADING));

        let outcome = controller
            .delete(Uuid::new_v4(), &delete_input("abc", "Cafe A"))
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_fields() {
        let (controller, _store) = setup_controller().await;
        let outcome = controller
            .delete(Uuid::new_v4(), &FormInput::new())
            .await
            .unwrap();

        match outcome {
            DeleteOutcome::Rejected(errors) => {
                assert!(errors.get("id").is_some());
                assert!(errors.get("name").is_some());
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_storage_faults_propagate() {
        let controller = WorkflowController::new(Arc::new(UnavailableStore), Arc::new(NoticeSlots::new()));

        assert!(matches!(controller.list().await, Err(StoreError::Database(_))));
        assert!(matches!(
            controller.add(Uuid::new_v4(), &add_cafe_input("Cafe A")).await,
            Err(StoreError::Database(_))
        ));
        assert!(matches!(
            controller.delete(Uuid::new_v4(), &delete_input("1", "Cafe A")).await,
            Err(StoreError::Database(_))
        ));
    }
}
