// tests/common/mock_providers.rs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use account_backend::domain::identity_account::IdentityAccount;
use account_backend::domain::profile_document::ProfileDocumentRef;
use account_backend::error::{AppError, AppResult};
use account_backend::infrastructure::identity::IdentityProvider;
use account_backend::infrastructure::profile_store::ProfileStore;

/// テスト用のモックIDプロバイダー
///
/// アカウントの事前投入と任意の失敗注入ができる。
#[derive(Clone, Default)]
pub struct MockIdentityProvider {
    accounts: Arc<Mutex<HashMap<String, IdentityAccount>>>,
    fail_lookup: Arc<AtomicBool>,
    fail_delete: Arc<AtomicBool>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(self, uid: &str, email: &str) -> Self {
        self.accounts
            .lock()
            .unwrap()
            .insert(uid.to_string(), IdentityAccount::new(uid, email));
        self
    }

    pub fn fail_lookup(&self) {
        self.fail_lookup.store(true, Ordering::SeqCst);
    }

    pub fn fail_delete(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    pub fn contains_uid(&self, uid: &str) -> bool {
        self.accounts.lock().unwrap().contains_key(uid)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<IdentityAccount>> {
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(AppError::Internal(
                "identity provider is unavailable".to_string(),
            ));
        }
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .values()
            .find(|account| account.email == email)
            .cloned())
    }

    async fn delete_account(&self, uid: &str) -> AppResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(AppError::Internal(
                "identity provider is unavailable".to_string(),
            ));
        }
        self.accounts.lock().unwrap().remove(uid);
        Ok(())
    }
}

/// テスト用のモックドキュメントストア
#[derive(Clone, Default)]
pub struct MockProfileStore {
    documents: Arc<Mutex<HashMap<String, String>>>,
    fail_query: Arc<AtomicBool>,
    fail_commit: Arc<AtomicBool>,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, path: &str, email: &str) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(path.to_string(), email.to_string());
        self
    }

    pub fn fail_query(&self) {
        self.fail_query.store(true, Ordering::SeqCst);
    }

    pub fn fail_commit(&self) {
        self.fail_commit.store(true, Ordering::SeqCst);
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.documents.lock().unwrap().contains_key(path)
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn find_refs_by_email(&self, email: &str) -> AppResult<Vec<ProfileDocumentRef>> {
        if self.fail_query.load(Ordering::SeqCst) {
            return Err(AppError::Internal(
                "document store is unavailable".to_string(),
            ));
        }
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|(_, document_email)| document_email.as_str() == email)
            .map(|(path, _)| ProfileDocumentRef::new(path.clone()))
            .collect())
    }

    async fn delete_batch(&self, refs: &[ProfileDocumentRef]) -> AppResult<()> {
        // コミット失敗時は1件も削除しない(all-or-nothing)
        if self.fail_commit.load(Ordering::SeqCst) {
            return Err(AppError::Internal(
                "document store commit failed".to_string(),
            ));
        }
        let mut documents = self.documents.lock().unwrap();
        for doc_ref in refs {
            documents.remove(&doc_ref.path);
        }
        Ok(())
    }
}
