use std::sync::Arc;

use shared::repositories::in_memory_score_repository::InMemoryScoreRepository;
use shared::repositories::score_repository::{DynamoDbScoreRepository, ScoreRepository};
use shared::services::auth_service::{AuthService, IdentityResolver};
use shared::services::move_service::MoveService;
use shared::services::score_service::ScoreService;
use tracing::info;

use crate::config::{Config, ScoresBackend};

#[derive(Clone)]
pub struct AppState {
    pub identity_resolver: Arc<dyn IdentityResolver>,
    pub score_service: Arc<ScoreService>,
    pub move_service: Arc<MoveService>,
}

impl AppState {
    pub fn new(
        identity_resolver: Arc<dyn IdentityResolver>,
        score_repository: Arc<dyn ScoreRepository + Send + Sync>,
    ) -> Self {
        AppState {
            identity_resolver,
            score_service: Arc::new(ScoreService::new(score_repository)),
            move_service: Arc::new(MoveService::new()),
        }
    }

    pub async fn from_config(config: &Config) -> Self {
        let auth_service = AuthService::new(config.auth_mode.clone())
            .with_allowed_client_ids(config.allowed_client_ids.clone());

        let score_repository: Arc<dyn ScoreRepository + Send + Sync> =
            match &config.scores_backend {
                ScoresBackend::DynamoDb { table_name } => {
                    info!("Storing scores in DynamoDB table {}", table_name);
                    let aws_config = aws_config::load_from_env().await;
                    let client = aws_sdk_dynamodb::Client::new(&aws_config);
                    Arc::new(DynamoDbScoreRepository::new(client, table_name.clone()))
                }
                ScoresBackend::Memory => {
                    info!("Storing scores in memory");
                    Arc::new(InMemoryScoreRepository::new())
                }
            };

        Self::new(Arc::new(auth_service), score_repository)
    }
}
