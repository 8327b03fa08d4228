use crate::models::score::{NewScore, Score, ScoreOrder, ScoreQuery};
use crate::repositories::errors::score_repository_errors::ScoreRepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use serde_dynamo::aws_sdk_dynamodb_1::{from_items, to_item};
use std::collections::HashMap;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Partition key of the item holding the id counter.
pub const COUNTER_OWNER: &str = "#counter";
/// Local secondary index sorted by `played_at`.
pub const PLAYED_AT_INDEX: &str = "LSI_ScoresByPlayedAt";
/// Local secondary index sorted by `outcome`.
pub const OUTCOME_INDEX: &str = "LSI_ScoresByOutcome";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Stores a new score, assigning its id and play time.
    async fn insert(&self, new_score: &NewScore) -> Result<Score, ScoreRepositoryError>;
    async fn list_by_owner(&self, query: &ScoreQuery) -> Result<Vec<Score>, ScoreRepositoryError>;
}

/// Scores table layout: PK `owner` (S), SK `id` (N), plus the two LSIs above.
/// The counter lives in the same table under [`COUNTER_OWNER`] and never
/// appears in the indexes since it has no `played_at` or `outcome`.
pub struct DynamoDbScoreRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbScoreRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    async fn next_id(&self) -> Result<i64, ScoreRepositoryError> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("owner", AttributeValue::S(COUNTER_OWNER.to_string()))
            .key("id", AttributeValue::N("0".to_string()))
            .update_expression("ADD next_id :one")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| ScoreRepositoryError::DynamoDb(e.to_string()))?;

        counter_value(output.attributes())
    }
}

/// Reads `next_id` out of the attributes returned by the counter update.
pub fn counter_value(
    attributes: Option<&HashMap<String, AttributeValue>>,
) -> Result<i64, ScoreRepositoryError> {
    attributes
        .and_then(|attributes| attributes.get("next_id"))
        .and_then(|value| value.as_n().ok())
        .and_then(|n| n.parse::<i64>().ok())
        .ok_or(ScoreRepositoryError::CounterUnavailable)
}

/// Start key for the next query page, or `None` once `limit` scores are
/// collected or the index is exhausted.
pub fn next_start_key(
    collected: usize,
    limit: usize,
    last_evaluated_key: Option<HashMap<String, AttributeValue>>,
) -> Option<HashMap<String, AttributeValue>> {
    match last_evaluated_key {
        Some(key) if collected < limit => Some(key),
        _ => None,
    }
}

/// Index and scan direction serving each order.
pub fn index_for(order: ScoreOrder) -> (&'static str, bool) {
    match order {
        ScoreOrder::ByTimeDesc => (PLAYED_AT_INDEX, false),
        ScoreOrder::ByOutcomeTextAsc => (OUTCOME_INDEX, true),
    }
}

#[async_trait]
impl ScoreRepository for DynamoDbScoreRepository {
    async fn insert(&self, new_score: &NewScore) -> Result<Score, ScoreRepositoryError> {
        let id = self.next_id().await?;
        let score = new_score.clone().into_score(id, Utc::now());

        let item =
            to_item(&score).map_err(|e| ScoreRepositoryError::Serialization(e.to_string()))?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| ScoreRepositoryError::DynamoDb(e.to_string()))?;

        debug!("Stored score {} for {}", score.id, score.owner);
        Ok(score)
    }

    async fn list_by_owner(&self, query: &ScoreQuery) -> Result<Vec<Score>, ScoreRepositoryError> {
        // DynamoDB rejects Limit = 0.
        if query.limit == 0 {
            return Ok(Vec::new());
        }

        let (index_name, forward) = index_for(query.order);
        let mut scores: Vec<Score> = Vec::new();
        let mut start_key = None;

        loop {
            let remaining = query.limit - scores.len();
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(index_name)
                .key_condition_expression("#owner = :owner")
                .expression_attribute_names("#owner", "owner")
                .expression_attribute_values(":owner", AttributeValue::S(query.owner.clone()))
                .scan_index_forward(forward)
                .limit(i32::try_from(remaining).unwrap_or(i32::MAX))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| ScoreRepositoryError::DynamoDb(e.to_string()))?;

            let page: Vec<Score> = from_items(output.items.unwrap_or_default())
                .map_err(|e| ScoreRepositoryError::Serialization(e.to_string()))?;
            scores.extend(page);

            start_key = next_start_key(scores.len(), query.limit, output.last_evaluated_key);
            if start_key.is_none() {
                break;
            }
        }

        scores.truncate(query.limit);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_for_time_order_scans_backwards() {
        assert_eq!(
            index_for(ScoreOrder::ByTimeDesc),
            ("LSI_ScoresByPlayedAt", false)
        );
    }

    #[test]
    fn test_index_for_text_order_scans_forwards() {
        assert_eq!(
            index_for(ScoreOrder::ByOutcomeTextAsc),
            ("LSI_ScoresByOutcome", true)
        );
    }

    #[test]
    fn test_score_item_layout() {
        let score = NewScore::new("player-1", "win").into_score(3, Utc::now());
        let item: HashMap<String, AttributeValue> = to_item(&score).unwrap();

        assert_eq!(
            item.get("owner"),
            Some(&AttributeValue::S("player-1".to_string()))
        );
        assert_eq!(item.get("id"), Some(&AttributeValue::N("3".to_string())));
        assert_eq!(
            item.get("outcome"),
            Some(&AttributeValue::S("win".to_string()))
        );
        assert!(matches!(item.get("played_at"), Some(AttributeValue::N(_))));
    }

    fn counter_attributes(value: AttributeValue) -> HashMap<String, AttributeValue> {
        HashMap::from([("next_id".to_string(), value)])
    }

    fn page_key(id: &str) -> HashMap<String, AttributeValue> {
        HashMap::from([
            ("owner".to_string(), AttributeValue::S("player-1".to_string())),
            ("id".to_string(), AttributeValue::N(id.to_string())),
        ])
    }

    #[test]
    fn test_counter_value_reads_updated_next_id() {
        let attributes = counter_attributes(AttributeValue::N("42".to_string()));

        assert_eq!(counter_value(Some(&attributes)).unwrap(), 42);
    }

    #[test]
    fn test_counter_value_without_usable_next_id_is_unavailable() {
        let wrong_type = counter_attributes(AttributeValue::S("42".to_string()));
        let not_a_number = counter_attributes(AttributeValue::N("4.2e".to_string()));

        for attributes in [None, Some(&HashMap::new()), Some(&wrong_type), Some(&not_a_number)] {
            assert!(matches!(
                counter_value(attributes),
                Err(ScoreRepositoryError::CounterUnavailable)
            ));
        }
    }

    #[test]
    fn test_next_start_key_continues_short_pages() {
        assert_eq!(next_start_key(3, 10, Some(page_key("3"))), Some(page_key("3")));
    }

    #[test]
    fn test_next_start_key_stops_at_limit_or_last_page() {
        assert_eq!(next_start_key(10, 10, Some(page_key("10"))), None);
        assert_eq!(next_start_key(3, 10, None), None);
    }

    #[test]
    fn test_score_repository_is_object_safe() {
        let mock = MockScoreRepository::new();
        let _: &dyn ScoreRepository = &mock;
    }
}
