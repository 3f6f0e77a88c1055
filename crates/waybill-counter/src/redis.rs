use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{trace, warn};
use waybill_core::counter::Result;
use waybill_core::{CounterError, CounterStore};

/// Default bound on a single counter operation.
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(2);

/// A Redis-backed implementation of [`CounterStore`].
///
/// Uses `INCR`, which is atomic with respect to all clients of the
/// same Redis instance, so every caller across every generator process
/// observes a distinct sequence value. Redis owns durability of the
/// counter; this adapter holds only a connection handle.
///
/// Every operation is bounded by `op_timeout`; an unreachable or slow
/// store surfaces as an error instead of a hang, and no fallback value
/// is ever fabricated.
#[derive(Debug, Clone)]
pub struct RedisCounterStore {
    conn: redis::aio::MultiplexedConnection,
    op_timeout: Duration,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> CounterError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        CounterError::Timeout(message)
    } else {
        CounterError::Unavailable(message)
    }
}

impl RedisCounterStore {
    /// Creates a new Redis counter store from an existing connection.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self {
            conn,
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    /// Creates a new Redis counter store with a custom operation timeout.
    pub fn with_timeout(conn: redis::aio::MultiplexedConnection, op_timeout: Duration) -> Self {
        Self { conn, op_timeout }
    }

    /// Connects to Redis and builds a counter store around the connection.
    pub async fn connect(url: &str, op_timeout: Duration) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| CounterError::Initialization(format!("invalid redis url: {e}")))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CounterError::Initialization(format!("failed to connect: {e}")))?;
        Ok(Self::with_timeout(conn, op_timeout))
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment(&self, key: &str) -> Result<u64> {
        trace!(key = %key, "incrementing sequence counter in Redis");

        let mut conn = self.conn.clone();
        let incr = conn.incr::<_, _, u64>(key, 1);

        match tokio::time::timeout(self.op_timeout, incr).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(key = %key, error = %e, "Redis error on INCR");
                Err(map_redis_error("failed to increment counter", e))
            }
            Err(_) => {
                warn!(key = %key, timeout = ?self.op_timeout, "Redis INCR timed out");
                Err(CounterError::Timeout(format!(
                    "INCR '{key}' exceeded {:?}",
                    self.op_timeout
                )))
            }
        }
    }
}
