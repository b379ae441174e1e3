//! Test harness with testcontainers for integration testing.
//!
//! Uses a shared Postgres container across all tests.
//! The container and migrations are initialized once on first test, then reused.

use anyhow::{Context, Result};
use rent_core::common::Validator;
use rent_core::domains::auth::JwtService;
use rent_core::kernel::{MockNotifier, ServerDeps, TxTimeouts};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::ApiClient;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=rent_core=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness that manages test infrastructure.
///
/// Every test gets a fresh pool and a fresh [`MockNotifier`], but shares the
/// database; tests create their own houses so they never see each other's rows.
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let house = create_test_house(&ctx.deps, "1 Main St").await.unwrap();
/// }
/// ```
pub struct TestHarness {
    pub db_pool: PgPool,
    pub notifier: MockNotifier,
    pub deps: ServerDeps,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
            .await
            .expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        let notifier = MockNotifier::new();
        let deps = build_deps(db_pool.clone(), notifier.clone(), TxTimeouts::default());

        Ok(Self {
            db_pool,
            notifier,
            deps,
        })
    }

    /// Same database, different notifier.
    pub fn deps_with_notifier(&self, notifier: MockNotifier) -> ServerDeps {
        build_deps(self.db_pool.clone(), notifier, self.deps.tx_timeouts)
    }

    /// Same database, tighter transaction timeouts.
    pub fn deps_with_timeout(&self, timeout: Duration) -> ServerDeps {
        build_deps(
            self.db_pool.clone(),
            self.notifier.clone(),
            TxTimeouts::uniform(timeout),
        )
    }

    /// HTTP client over the full router, backed by this harness's deps.
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.deps.clone())
    }

    /// Wait for background notification tasks to finish.
    pub async fn settle(&self) {
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}

fn build_deps(db_pool: PgPool, notifier: MockNotifier, tx_timeouts: TxTimeouts) -> ServerDeps {
    ServerDeps::new(
        db_pool,
        Validator::new(),
        Arc::new(notifier),
        Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string())),
        tx_timeouts,
    )
}
