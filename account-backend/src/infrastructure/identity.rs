// src/infrastructure/identity.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::{AppConfig, ProviderBackend};
use crate::domain::identity_account::IdentityAccount;
use crate::error::{AppError, AppResult};
use crate::infrastructure::provider_error;

/// Identity provider client trait
///
/// Accounts are looked up by email and deleted by uid; this service
/// never creates or mutates them.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Look up an account by its email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<IdentityAccount>>;

    /// Delete an account by its unique id
    async fn delete_account(&self, uid: &str) -> AppResult<()>;
}

/// Client for the Identity Toolkit REST surface
pub struct GoogleIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
struct LookupUser {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(default)]
    email: String,
}

impl GoogleIdentityProvider {
    pub fn new(config: &AppConfig, project_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.identity.base_url.trim_end_matches('/').to_string(),
            project_id,
            access_token: config.google_access_token.clone(),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1/projects/{}/accounts:{}",
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
impl IdentityProvider for GoogleIdentityProvider {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<IdentityAccount>> {
        let response = self
            .authorize(self.client.post(self.endpoint("lookup")))
            .json(&json!({ "email": [email] }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error("accounts:lookup", response).await);
        }

        // An unknown email resolves to a body without a `users` field
        let body: LookupResponse = response.json().await?;
        Ok(body.users.into_iter().next().map(|user| IdentityAccount {
            uid: user.local_id,
            email: user.email,
        }))
    }

    async fn delete_account(&self, uid: &str) -> AppResult<()> {
        let response = self
            .authorize(self.client.post(self.endpoint("delete")))
            .json(&json!({ "localId": uid }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(provider_error("accounts:delete", response).await);
        }

        debug!(uid = %uid, "Identity account deleted");
        Ok(())
    }
}

/// In-process identity provider for development mode
#[derive(Default)]
pub struct MemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<String, IdentityAccount>>>,
}

impl MemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, account: IdentityAccount) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.uid.clone(), account);
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<IdentityAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|account| account.email == email)
            .cloned())
    }

    async fn delete_account(&self, uid: &str) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;
        accounts.remove(uid);
        Ok(())
    }
}

/// Create the identity provider client based on configuration
pub fn create_identity_provider(config: &AppConfig) -> AppResult<Arc<dyn IdentityProvider>> {
    match config.provider_backend {
        ProviderBackend::Memory => Ok(Arc::new(MemoryIdentityProvider::new())),
        ProviderBackend::Firebase => {
            let project_id = config.project_id.clone().ok_or_else(|| {
                AppError::Internal("GCP_PROJECT_ID is required for the firebase backend".to_string())
            })?;
            Ok(Arc::new(GoogleIdentityProvider::new(config, project_id)))
        }
    }
}
