use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::score::{NewScore, Score, ScoreOrder, ScoreQuery};
use crate::repositories::errors::score_repository_errors::ScoreRepositoryError;
use crate::repositories::score_repository::ScoreRepository;

/// Process-local score store for running without DynamoDB.
///
/// Ids and play times are assigned under the write lock, so both increase
/// with insertion order.
#[derive(Default)]
pub struct InMemoryScoreRepository {
    scores: RwLock<Vec<Score>>,
    last_id: AtomicI64,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.scores.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.scores.read().await.is_empty()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn insert(&self, new_score: &NewScore) -> Result<Score, ScoreRepositoryError> {
        let mut scores = self.scores.write().await;

        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let played_at = match scores.last() {
            Some(previous) if previous.played_at > now => previous.played_at,
            _ => now,
        };

        let score = new_score.clone().into_score(id, played_at);
        scores.push(score.clone());
        Ok(score)
    }

    async fn list_by_owner(&self, query: &ScoreQuery) -> Result<Vec<Score>, ScoreRepositoryError> {
        let mut owned: Vec<Score> = self
            .scores
            .read()
            .await
            .iter()
            .filter(|score| score.owner == query.owner)
            .cloned()
            .collect();

        match query.order {
            ScoreOrder::ByTimeDesc => owned.sort_by(|a, b| {
                b.played_at
                    .cmp(&a.played_at)
                    .then_with(|| b.id.cmp(&a.id))
            }),
            // Stable sort keeps insertion order among equal outcomes.
            ScoreOrder::ByOutcomeTextAsc => owned.sort_by(|a, b| a.outcome.cmp(&b.outcome)),
        }

        owned.truncate(query.limit);
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(owner: &str, order: ScoreOrder, limit: usize) -> ScoreQuery {
        ScoreQuery {
            owner: owner.to_string(),
            order,
            limit,
        }
    }

    async fn seeded(outcomes: &[&str]) -> InMemoryScoreRepository {
        let repository = InMemoryScoreRepository::new();
        for outcome in outcomes {
            repository
                .insert(&NewScore::new("player-1", outcome))
                .await
                .unwrap();
        }
        repository
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids_and_times() {
        let repository = InMemoryScoreRepository::new();

        let first = repository
            .insert(&NewScore::new("player-1", "win"))
            .await
            .unwrap();
        let second = repository
            .insert(&NewScore::new("player-2", "loss"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.played_at >= first.played_at);
        assert_eq!(repository.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_by_time_is_most_recent_first() {
        let repository = seeded(&["win", "loss", "draw"]).await;

        let scores = repository
            .list_by_owner(&query("player-1", ScoreOrder::ByTimeDesc, 10))
            .await
            .unwrap();

        let outcomes: Vec<&str> = scores.iter().map(|s| s.outcome.as_str()).collect();
        assert_eq!(outcomes, vec!["draw", "loss", "win"]);
    }

    #[tokio::test]
    async fn test_list_by_text_is_ascending_with_stable_ties() {
        let repository = seeded(&["win", "draw", "loss", "draw"]).await;

        let scores = repository
            .list_by_owner(&query("player-1", ScoreOrder::ByOutcomeTextAsc, 10))
            .await
            .unwrap();

        let ordered: Vec<(&str, i64)> = scores
            .iter()
            .map(|s| (s.outcome.as_str(), s.id))
            .collect();
        assert_eq!(
            ordered,
            vec![("draw", 2), ("draw", 4), ("loss", 3), ("win", 1)]
        );
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner() {
        let repository = seeded(&["win"]).await;

        let other = repository
            .list_by_owner(&query("player-2", ScoreOrder::ByTimeDesc, 10))
            .await
            .unwrap();

        assert!(other.is_empty());
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let repository = seeded(&["a", "b", "c", "d", "e"]).await;

        let two = repository
            .list_by_owner(&query("player-1", ScoreOrder::ByTimeDesc, 2))
            .await
            .unwrap();
        let none = repository
            .list_by_owner(&query("player-1", ScoreOrder::ByTimeDesc, 0))
            .await
            .unwrap();

        assert_eq!(two.len(), 2);
        assert!(none.is_empty());
    }
}
