use std::sync::Arc;

use crate::models::auth::Identity;
use crate::models::score::{NewScore, Score, ScoreOrder, ScoreQuery};
use crate::repositories::score_repository::ScoreRepository;
use crate::services::errors::score_service_errors::ScoreServiceError;

#[derive(Clone)]
pub struct ScoreService {
    repository: Arc<dyn ScoreRepository + Send + Sync>,
}

impl ScoreService {
    pub fn new(repository: Arc<dyn ScoreRepository + Send + Sync>) -> Self {
        ScoreService { repository }
    }

    /// Records a finished game for `identity`.
    pub async fn insert(
        &self,
        identity: &Identity,
        outcome: &str,
    ) -> Result<Score, ScoreServiceError> {
        if outcome.is_empty() {
            return Err(ScoreServiceError::ValidationError(
                "Outcome cannot be empty".to_string(),
            ));
        }

        let new_score = NewScore::new(&identity.user_id, outcome);
        self.repository
            .insert(&new_score)
            .await
            .map_err(ScoreServiceError::from)
    }

    /// Up to `limit` of the caller's scores in the requested order.
    pub async fn list_for_user(
        &self,
        identity: &Identity,
        order: ScoreOrder,
        limit: i64,
    ) -> Result<Vec<Score>, ScoreServiceError> {
        let limit = usize::try_from(limit).map_err(|_| {
            ScoreServiceError::ValidationError("Limit cannot be negative".to_string())
        })?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query = ScoreQuery {
            owner: identity.user_id.clone(),
            order,
            limit,
        };
        self.repository
            .list_by_owner(&query)
            .await
            .map_err(ScoreServiceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::errors::score_repository_errors::ScoreRepositoryError;
    use crate::repositories::score_repository::MockScoreRepository;
    use chrono::Utc;

    fn player() -> Identity {
        Identity::new("player-1")
    }

    #[tokio::test]
    async fn test_insert_scopes_score_to_identity() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_insert()
            .withf(|new_score| new_score.owner == "player-1" && new_score.outcome == "win")
            .times(1)
            .returning(|new_score| Ok(new_score.clone().into_score(1, Utc::now())));

        let service = ScoreService::new(Arc::new(mock_repo));
        let score = service.insert(&player(), "win").await.unwrap();

        assert_eq!(score.id, 1);
        assert_eq!(score.owner, "player-1");
        assert_eq!(score.outcome, "win");
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_outcome() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo.expect_insert().times(0);

        let service = ScoreService::new(Arc::new(mock_repo));
        let result = service.insert(&player(), "").await;

        assert!(matches!(result, Err(ScoreServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_insert_stores_whitespace_outcome_verbatim() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_insert()
            .withf(|new_score| new_score.outcome == "   ")
            .times(1)
            .returning(|new_score| Ok(new_score.clone().into_score(1, Utc::now())));

        let service = ScoreService::new(Arc::new(mock_repo));
        let score = service.insert(&player(), "   ").await.unwrap();

        assert_eq!(score.outcome, "   ");
    }

    #[tokio::test]
    async fn test_insert_surfaces_repository_errors() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(ScoreRepositoryError::DynamoDb("throttled".to_string())));

        let service = ScoreService::new(Arc::new(mock_repo));
        let result = service.insert(&player(), "loss").await;

        assert!(matches!(
            result,
            Err(ScoreServiceError::RepositoryError(ScoreRepositoryError::DynamoDb(_)))
        ));
    }

    #[tokio::test]
    async fn test_list_builds_owner_query() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_list_by_owner()
            .withf(|query| {
                query.owner == "player-1"
                    && query.order == ScoreOrder::ByOutcomeTextAsc
                    && query.limit == 5
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = ScoreService::new(Arc::new(mock_repo));
        let scores = service
            .list_for_user(&player(), ScoreOrder::ByOutcomeTextAsc, 5)
            .await
            .unwrap();

        assert!(scores.is_empty());
    }

    #[tokio::test]
    async fn test_list_with_zero_limit_skips_repository() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo.expect_list_by_owner().times(0);

        let service = ScoreService::new(Arc::new(mock_repo));
        let scores = service
            .list_for_user(&player(), ScoreOrder::ByTimeDesc, 0)
            .await
            .unwrap();

        assert!(scores.is_empty());
    }

    #[tokio::test]
    async fn test_list_rejects_negative_limit() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo.expect_list_by_owner().times(0);

        let service = ScoreService::new(Arc::new(mock_repo));
        let result = service
            .list_for_user(&player(), ScoreOrder::ByTimeDesc, -1)
            .await;

        assert!(matches!(result, Err(ScoreServiceError::ValidationError(_))));
    }
}
