//! Client status checks

use common::error::DatabaseResult;
use std::sync::Arc;

use super::MAX_LIST_LEN;
use crate::{models::StatusCheck, repositories::Store};

/// Service recording client status checks
#[derive(Clone)]
pub struct StatusService {
    store: Arc<dyn Store>,
}

impl StatusService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Record a check-in from `client_name`
    pub async fn create(&self, client_name: String) -> DatabaseResult<StatusCheck> {
        let check = StatusCheck::new(client_name);
        self.store.insert_status_check(&check).await?;
        Ok(check)
    }

    /// List recorded checks, at most [`MAX_LIST_LEN`] of them
    pub async fn list(&self) -> DatabaseResult<Vec<StatusCheck>> {
        self.store.list_status_checks(MAX_LIST_LEN).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    #[tokio::test]
    async fn test_create_then_list() {
        let service = StatusService::new(Arc::new(MemoryStore::new()));

        let first = service.create("web".to_string()).await.unwrap();
        let second = service.create("web".to_string()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.list().await.unwrap(), vec![first, second]);
    }
}
