//! Test harness with testcontainers for integration testing.
//!
//! Uses a shared Postgres container across all tests: the container and
//! migrations are initialized once on first test, then reused. Each test
//! gets fresh in-memory infrastructure fakes over the shared database.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use server_core::config::PaymentPolicy;
use server_core::kernel::test_dependencies::{MockObjectStore, RecordingNotifier};
use server_core::kernel::ServerDeps;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG; try_init avoids panicking if already installed.
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

/// Test harness wiring the shared database to per-test fakes.
pub struct TestHarness {
    pub db_pool: PgPool,
    pub deps: ServerDeps,
    pub object_store: Arc<MockObjectStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;
        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to shared test database")?;

        let object_store = Arc::new(MockObjectStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let deps = ServerDeps::new(
            db_pool.clone(),
            object_store.clone(),
            notifier.clone(),
            PaymentPolicy::default(),
        );

        Ok(Self {
            db_pool,
            deps,
            object_store,
            notifier,
        })
    }

    /// Rebuild deps around custom fakes (failure injection)
    pub fn deps_with(
        &self,
        object_store: Arc<MockObjectStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> ServerDeps {
        ServerDeps::new(
            self.db_pool.clone(),
            object_store,
            notifier,
            PaymentPolicy::default(),
        )
    }
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}
