//! Roster API
//!
//! A team and membership management service:
//! - Team creation, deletion and roster management over HTTP
//! - Ownership and membership checks on every operation
//! - JWT-based user authentication
//! - Pluggable storage (in-memory or PostgreSQL)

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use api::state::AppState;
use domain::team::Team;
use domain::user::User;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::storage::{StorageBackend, StorageConfig, StorageFactory};
use infrastructure::team::{StorageTeamRepository, TeamService};
use infrastructure::user::{Argon2Hasher, StorageUserRepository, UserService};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend =
        StorageBackend::parse(&config.storage.backend).unwrap_or(StorageBackend::InMemory);

    info!("Storage backend: {:?}", backend);

    let storage_config = match backend {
        StorageBackend::InMemory => StorageConfig::in_memory(),
        StorageBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .clone()
                .or_else(|| std::env::var("DATABASE_URL").ok())
                .ok_or_else(|| {
                    anyhow::anyhow!("The postgres backend requires storage.database_url or DATABASE_URL")
                })?;
            StorageConfig::postgres_url(url)
        }
    };

    let team_storage = StorageFactory::create::<Team>(&storage_config, "teams").await?;
    let user_storage = StorageFactory::create::<User>(&storage_config, "users").await?;

    let team_repository = Arc::new(StorageTeamRepository::new(team_storage));
    let team_service = Arc::new(TeamService::new(team_repository));

    let user_repository = Arc::new(StorageUserRepository::new(user_storage));
    let password_hasher = Arc::new(Argon2Hasher::new());
    let user_service = Arc::new(UserService::new(user_repository, password_hasher));

    let jwt_service = create_jwt_service(config);

    Ok(AppState::new(team_service, user_service, jwt_service))
}

/// Create JWT service from secret (config, env var, or random)
fn create_jwt_service(config: &AppConfig) -> Arc<JwtService> {
    let jwt_secret = config
        .auth
        .jwt_secret
        .clone()
        .or_else(|| std::env::var("JWT_SECRET").ok())
        .unwrap_or_else(|| {
            tracing::warn!(
                "No JWT_SECRET configured. Generating a random secret; \
                sessions will NOT persist across restarts."
            );
            generate_random_secret()
        });

    Arc::new(JwtService::new(JwtConfig::new(
        jwt_secret,
        config.auth.jwt_expiration_hours,
    )))
}

fn generate_random_secret() -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
