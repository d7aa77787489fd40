// src/config/mod.rs

use std::env;

/// 外部プロバイダーのバックエンド種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderBackend {
    /// インプロセスのインメモリ実装(開発用)
    Memory,
    /// Firebase の REST サーフェスに対する HTTP クライアント
    Firebase,
}

impl ProviderBackend {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "firebase" => Ok(Self::Firebase),
            other => Err(format!("Invalid PROVIDER_BACKEND value: {}", other)),
        }
    }
}

/// IDプロバイダーのクライアント設定
#[derive(Clone, Debug)]
pub struct IdentityConfig {
    pub base_url: String,
}

/// ドキュメントストアのクライアント設定
#[derive(Clone, Debug)]
pub struct DocumentStoreConfig {
    pub base_url: String,
    pub users_collection: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// デプロイ先の固定リージョン
    pub region: String,
    pub cors_allowed_origins: Vec<String>,
    pub provider_backend: ProviderBackend,
    pub project_id: Option<String>,
    /// デプロイ環境が注入するBearerトークン(エミュレーター利用時は不要)
    pub google_access_token: Option<String>,
    pub identity: IdentityConfig,
    pub document_store: DocumentStoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let provider_backend = ProviderBackend::parse(
            &env::var("PROVIDER_BACKEND").unwrap_or_else(|_| "memory".to_string()),
        )?;

        // firebaseバックエンドではプロジェクトIDが必須
        let project_id = env::var("GCP_PROJECT_ID").ok();
        if provider_backend == ProviderBackend::Firebase && project_id.is_none() {
            return Err("GCP_PROJECT_ID must be set for the firebase backend".to_string());
        }

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            region: env::var("REGION").unwrap_or_else(|_| "us-central1".to_string()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3001".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            provider_backend,
            project_id,
            google_access_token: env::var("GOOGLE_ACCESS_TOKEN").ok(),
            identity: IdentityConfig {
                base_url: env::var("IDENTITY_BASE_URL")
                    .unwrap_or_else(|_| "https://identitytoolkit.googleapis.com".to_string()),
            },
            document_store: DocumentStoreConfig {
                base_url: env::var("FIRESTORE_BASE_URL")
                    .unwrap_or_else(|_| "https://firestore.googleapis.com".to_string()),
                users_collection: env::var("USERS_COLLECTION")
                    .unwrap_or_else(|_| "users".to_string()),
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    #[allow(dead_code)]
    pub fn is_test(&self) -> bool {
        self.environment == "test"
    }

    #[allow(dead_code)]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            region: "us-central1".to_string(),
            cors_allowed_origins: vec!["http://localhost:3001".to_string()],
            provider_backend: ProviderBackend::Memory,
            project_id: None,
            google_access_token: None,
            identity: IdentityConfig {
                base_url: "http://localhost:9099".to_string(),
            },
            document_store: DocumentStoreConfig {
                base_url: "http://localhost:8080".to_string(),
                users_collection: "users".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_backend_parse() {
        assert_eq!(
            ProviderBackend::parse("memory").unwrap(),
            ProviderBackend::Memory
        );
        assert_eq!(
            ProviderBackend::parse("Firebase").unwrap(),
            ProviderBackend::Firebase
        );
        assert!(ProviderBackend::parse("s3").is_err());
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig::for_testing();
        assert_eq!(config.server_addr(), "127.0.0.1:5000");
    }
}
