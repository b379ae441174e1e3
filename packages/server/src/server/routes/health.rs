use std::time::Instant;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

/// Liveness report. `pending_moderation` doubles as the database round-trip:
/// it is only present when the store answered.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending_moderation: Option<i64>,
    pool_idle: usize,
    pool_size: u32,
}

impl HealthReport {
    fn from_check(check: Option<(i64, u64)>, pool_idle: usize, pool_size: u32) -> Self {
        let (status, database) = match check {
            Some(_) => ("healthy", "ok"),
            None => ("unhealthy", "unavailable"),
        };
        Self {
            status,
            database,
            latency_ms: check.map(|(_, ms)| ms),
            pending_moderation: check.map(|(pending, _)| pending),
            pool_idle,
            pool_size,
        }
    }

    fn status_code(&self) -> StatusCode {
        if self.database == "ok" {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// `GET /health`. No role required; 503 when the store does not answer within
/// the statement timeout.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthReport>) {
    let pool = &state.deps.db_pool;
    let started = Instant::now();

    let pending = tokio::time::timeout(
        state.deps.tx_timeouts.statement_timeout,
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM flat WHERE status = 'on_moderation'")
            .fetch_one(pool),
    )
    .await;

    let check = match pending {
        Ok(Ok(count)) => Some((count, started.elapsed().as_millis() as u64)),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Health check query failed");
            None
        }
        Err(_) => {
            tracing::warn!("Health check query timed out");
            None
        }
    };

    let report = HealthReport::from_check(check, pool.num_idle(), pool.size());
    (report.status_code(), Json(report))
}
