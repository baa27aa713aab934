//! Test harness with testcontainers for integration testing.
//!
//! One Postgres container is shared across the whole test run; every test
//! gets its own freshly-migrated database and its own server instance, so
//! parallel tests cannot see each other's entries.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::SocketAddr;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const JWT_ISSUER: &str = "lucky-draw-tests";

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    /// Connection URL prefix without a database name.
    base_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG when debugging tests; try_init() avoids panicking
        // if another test got here first.
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

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let base_url = format!("postgresql://postgres:postgres@{}:{}", host, port);

        Ok(Self {
            base_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_try_init(Self::init)
            .await
            .expect("Failed to initialize shared test infrastructure")
    }
}

/// One running server over its own database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub db_pool: PgPool,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn an app with open admin signup (no access code).
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(None).await
    }

    /// Spawn an app, optionally requiring an admin signup access code.
    pub async fn spawn_with(admin_access_code: Option<String>) -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        // Fresh database per test
        let db_name = format!("test_{}", Uuid::new_v4().simple());
        let admin_pool = PgPool::connect(&format!("{}/postgres", infra.base_url))
            .await
            .context("Failed to connect for database creation")?;
        sqlx::query(&format!(r#"CREATE DATABASE "{}""#, db_name))
            .execute(&admin_pool)
            .await
            .context("Failed to create test database")?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&format!("{}/{}", infra.base_url, db_name))
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        let app = draw_core::server::build_app(
            pool.clone(),
            JWT_SECRET,
            JWT_ISSUER.to_string(),
            admin_access_code,
            false,
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await;
        });

        Ok(Self {
            addr,
            db_pool: pool,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}
