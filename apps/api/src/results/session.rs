use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::models::quiz_result::NewQuizResult;
use crate::results::store::ResultStore;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random bits in the session id prefix.
const RANDOM_BITS: u32 = 52;

/// Random base36 string followed by the base36 millisecond timestamp.
/// Not guaranteed unique.
pub fn generate_session_id() -> String {
    let random = u128::from(rand::random::<u64>() >> (64 - RANDOM_BITS));
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    format!("{}{}", to_base36(random), to_base36(millis))
}

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Saves a quiz summary without making the caller wait. Exactly one attempt:
/// a failure is logged and dropped, never retried or surfaced.
pub fn persist_in_background(
    store: Arc<dyn ResultStore>,
    record: NewQuizResult,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let session_id = record.session_id.clone();
        match store.save(record).await {
            Ok(saved) => debug!(session_id = %session_id, id = saved.id, "Quiz result saved"),
            Err(e) => warn!(session_id = %session_id, "Failed to save quiz result: {e}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::quiz_result::QuizResult;
    use crate::results::store::InMemoryResultStore;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingStore {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl ResultStore for FailingStore {
        async fn save(&self, _result: NewQuizResult) -> Result<QuizResult, AppError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Internal(anyhow::anyhow!("disk full")))
        }

        async fn find_by_session(&self, _session_id: &str) -> Result<Option<QuizResult>, AppError> {
            Ok(None)
        }
    }

    fn record(session_id: &str) -> NewQuizResult {
        NewQuizResult {
            session_id: session_id.to_string(),
            answers: serde_json::json!([]),
            top_matches: vec![],
            scores: BTreeMap::new(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_295), "zz");
    }

    #[test]
    fn test_session_id_shape() {
        let id = generate_session_id();
        assert!(id.len() >= 9, "id too short: {id}");
        assert!(id.bytes().all(|b| BASE36.contains(&b)));
        assert_ne!(generate_session_id(), generate_session_id());
    }

    #[tokio::test]
    async fn test_background_save_lands_in_store() {
        let store = Arc::new(InMemoryResultStore::new());
        persist_in_background(store.clone(), record("bg-1"))
            .await
            .unwrap();
        assert!(store.find_by_session("bg-1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_background_failure_is_swallowed_without_retry() {
        let store = Arc::new(FailingStore {
            attempts: AtomicUsize::new(0),
        });
        let handle = persist_in_background(store.clone(), record("bg-2"));
        assert!(handle.await.is_ok());
        assert_eq!(store.attempts.load(Ordering::SeqCst), 1);
    }
}
