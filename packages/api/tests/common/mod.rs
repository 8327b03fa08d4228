#![allow(dead_code)]

use std::sync::Arc;

use api::state::AppState;
use axum_test::TestServer;
use chrono::Duration;
use shared::models::auth::Identity;
use shared::repositories::in_memory_score_repository::InMemoryScoreRepository;
use shared::services::auth_service::AuthService;

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub server: TestServer,
    pub auth_service: Arc<AuthService>,
    pub repository: Arc<InMemoryScoreRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        let auth_service = Arc::new(AuthService::with_jwt_secret(JWT_SECRET.to_string()));
        let repository = Arc::new(InMemoryScoreRepository::new());
        let state = AppState::new(auth_service.clone(), repository.clone());
        let server = TestServer::new(api::create_app(state)).expect("Failed to start test server");

        TestApp {
            server,
            auth_service,
            repository,
        }
    }

    pub fn token_for(&self, user_id: &str) -> String {
        self.auth_service
            .issue_token(&Identity::new(user_id), Duration::hours(1))
            .expect("Failed to issue test token")
    }
}
