use std::sync::Arc;
use tavern::config::{EnvConfig, CONFIG};
use tavern::db::postgres_service::PostgresService;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub const TEST_ADMIN_KEY: &str = "test-admin-key";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        init_test_config();

        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// OnceLock, so the first test in the process wins; every test uses the
// same admin key.
pub fn init_test_config() {
    CONFIG
        .set(EnvConfig {
            port: 8080,
            db_url: "unused-in-tests".to_string(),
            admin_key: TEST_ADMIN_KEY.to_string(),
        })
        .ok();
}

#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};
    use uuid::Uuid;

    pub fn unique_email(prefix: &str) -> String {
        format!("{}-{}@test.com", prefix, Uuid::new_v4())
    }

    pub fn register_payload(username: &str, email: &str, password: &str) -> Value {
        json!({
            "username": username,
            "email": email,
            "password": password,
            "password_confirmation": password,
        })
    }
}
