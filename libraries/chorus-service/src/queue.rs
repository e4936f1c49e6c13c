/// Durable delivery queue
///
/// The channel between the export producer and the consumer process. The
/// trait is the narrow contract the pipeline needs: publish with an
/// acknowledgment, and a blocking-with-timeout receive for the consumer
/// loop. The Redis implementation uses a list per topic (LPUSH/BRPOP),
/// which gives at-least-once handoff and per-topic FIFO.
use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use thiserror::Error;

/// Delivery channel failure
#[derive(Error, Debug)]
pub enum QueueError {
    /// The backend could not be reached or rejected the command
    #[error("queue backend error: {0}")]
    Backend(String),
}

/// Durable message handoff between producer and consumer
#[async_trait]
pub trait DeliveryQueue: Send + Sync {
    /// Publish a payload; returning `Ok` is the channel's acknowledgment
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), QueueError>;

    /// Receive the next payload, or `None` when nothing arrived within
    /// the backend's wait window
    async fn receive(&self, topic: &str) -> Result<Option<Vec<u8>>, QueueError>;
}

/// Redis-list-backed delivery queue
#[derive(Clone)]
pub struct RedisQueue {
    conn: ConnectionManager,
}

/// How long a receive blocks before reporting an empty window, seconds
const RECEIVE_WAIT_SECS: f64 = 5.0;

impl RedisQueue {
    /// Connect to Redis at `url`
    pub async fn connect(url: &str) -> Result<Self, QueueError> {
        let client = redis::Client::open(url).map_err(|e| QueueError::Backend(e.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| QueueError::Backend(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl DeliveryQueue for RedisQueue {
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<(), QueueError> {
        let mut conn = self.conn.clone();
        // LPUSH + BRPOP keeps per-topic FIFO order
        let result: Result<i64, redis::RedisError> = conn.lpush(topic, payload).await;
        result.map(|_| ()).map_err(|e| QueueError::Backend(e.to_string()))
    }

    async fn receive(&self, topic: &str) -> Result<Option<Vec<u8>>, QueueError> {
        let mut conn = self.conn.clone();
        let result: Result<Option<(String, Vec<u8>)>, redis::RedisError> =
            conn.brpop(topic, RECEIVE_WAIT_SECS).await;
        result
            .map(|popped| popped.map(|(_, payload)| payload))
            .map_err(|e| QueueError::Backend(e.to_string()))
    }
}
