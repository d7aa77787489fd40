// src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use account_backend::api::create_app_router;
use account_backend::api::handlers::deletion_handler::AppState;
use account_backend::config::AppConfig;
use account_backend::infrastructure::identity::create_identity_provider;
use account_backend::infrastructure::profile_store::create_profile_store;
use account_backend::service::deletion_service::UserDeletionService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 開発時の.envを読み込む
    dotenvy::dotenv().ok();

    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting account backend server...");

    // 設定を読み込む
    let app_config = AppConfig::from_env().expect("Failed to load configuration");
    tracing::info!(
        environment = %app_config.environment,
        region = %app_config.region,
        backend = ?app_config.provider_backend,
        "Configuration loaded"
    );

    // 外部プロバイダーのクライアントを作成
    let identity_provider =
        create_identity_provider(&app_config).expect("Failed to create identity provider");
    let profile_store = create_profile_store(&app_config).expect("Failed to create profile store");

    // 削除サービスの作成
    let deletion_service = Arc::new(UserDeletionService::new(identity_provider, profile_store));

    // ルーターの設定
    let app_state = AppState { deletion_service };
    let app_router = create_app_router(app_state, &app_config);

    // サーバーの起動
    let server_addr = app_config.server_addr();
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
