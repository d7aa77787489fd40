// src/infrastructure/profile_store.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::config::{AppConfig, ProviderBackend};
use crate::domain::profile_document::ProfileDocumentRef;
use crate::error::{AppError, AppResult};
use crate::infrastructure::provider_error;

/// Profile document store client trait
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Collect references to every profile document whose `email`
    /// field equals the given value
    async fn find_refs_by_email(&self, email: &str) -> AppResult<Vec<ProfileDocumentRef>>;

    /// Delete the referenced documents as a single batch
    ///
    /// The commit is all-or-nothing on the store side. An empty batch
    /// is a no-op that still succeeds.
    async fn delete_batch(&self, refs: &[ProfileDocumentRef]) -> AppResult<()>;
}

/// Client for the Firestore REST surface
pub struct FirestoreProfileStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    collection: String,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    // Entries carrying only a read time have no document
    document: Option<QueryDocument>,
}

#[derive(Debug, Deserialize)]
struct QueryDocument {
    name: String,
}

impl FirestoreProfileStore {
    pub fn new(config: &AppConfig, project_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config
                .document_store
                .base_url
                .trim_end_matches('/')
                .to_string(),
            project_id,
            collection: config.document_store.users_collection.clone(),
            access_token: config.google_access_token.clone(),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents:{}",
            self.base_url, self.project_id, action
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ProfileStore for FirestoreProfileStore {
    async fn find_refs_by_email(&self, email: &str) -> AppResult<Vec<ProfileDocumentRef>> {
        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "email" },
                        "op": "EQUAL",
                        "value": { "stringValue": email }
                    }
                }
            }
        });

        let response = self
            .authorize(self.client.post(self.endpoint("runQuery")))
            .json(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error("documents:runQuery", response).await);
        }

        let results: Vec<QueryResult> = response.json().await?;
        Ok(results
            .into_iter()
            .filter_map(|result| result.document)
            .map(|document| ProfileDocumentRef::new(document.name))
            .collect())
    }

    async fn delete_batch(&self, refs: &[ProfileDocumentRef]) -> AppResult<()> {
        if refs.is_empty() {
            return Ok(());
        }

        // One commit carrying every delete; the store applies it atomically
        let writes: Vec<_> = refs
            .iter()
            .map(|doc_ref| json!({ "delete": doc_ref.path }))
            .collect();

        let response = self
            .authorize(self.client.post(self.endpoint("commit")))
            .json(&json!({ "writes": writes }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error("documents:commit", response).await);
        }

        debug!(deleted = refs.len(), "Profile documents deleted");
        Ok(())
    }
}

/// In-process document store for development mode
#[derive(Default)]
pub struct MemoryProfileStore {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile document and return its reference
    pub async fn insert(&self, email: &str) -> ProfileDocumentRef {
        let path = format!("users/{}", Uuid::new_v4());
        let mut documents = self.documents.write().await;
        documents.insert(path.clone(), email.to_string());
        ProfileDocumentRef::new(path)
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_refs_by_email(&self, email: &str) -> AppResult<Vec<ProfileDocumentRef>> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|(_, document_email)| document_email.as_str() == email)
            .map(|(path, _)| ProfileDocumentRef::new(path.clone()))
            .collect())
    }

    async fn delete_batch(&self, refs: &[ProfileDocumentRef]) -> AppResult<()> {
        // A single write guard makes the whole batch effective at once
        let mut documents = self.documents.write().await;
        for doc_ref in refs {
            documents.remove(&doc_ref.path);
        }
        Ok(())
    }
}

/// Create the profile store client based on configuration
pub fn create_profile_store(config: &AppConfig) -> AppResult<Arc<dyn ProfileStore>> {
    match config.provider_backend {
        ProviderBackend::Memory => Ok(Arc::new(MemoryProfileStore::new())),
        ProviderBackend::Firebase => {
            let project_id = config.project_id.clone().ok_or_else(|| {
                AppError::Internal("GCP_PROJECT_ID is required for the firebase backend".to_string())
            })?;
            Ok(Arc::new(FirestoreProfileStore::new(config, project_id)))
        }
    }
}
