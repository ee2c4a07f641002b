use async_trait::async_trait;
use clinic_portal::auth::{self, Authenticator, Credentials};
use clinic_portal::configuration::{self, AuthenticationBackend, DatabaseSettings, Settings};
use clinic_portal::error::BizErrorEnum;
use clinic_portal::startup::Application;
use clinic_portal::telemetry;
use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::sync::Arc;
use uuid::Uuid;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink type is part of the subscriber type, hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
    };
});

/// Demo accounts from `configuration/local.yaml`.
pub const DEMO_ACCOUNTS: [(&str, &str, &str); 4] = [
    ("admin", "admin123", "super-admin"),
    ("dr.smith", "doctor123", "doctor"),
    ("reception1", "reception123", "receptionist"),
    ("john.doe", "patient123", "patient"),
];

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

/// Always answers with a store failure.
pub struct UnavailableAuthenticator;

#[async_trait]
impl Authenticator for UnavailableAuthenticator {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<bool, BizErrorEnum> {
        Err(BizErrorEnum::QueryUsersError(sqlx::Error::PoolTimedOut))
    }
}

fn test_configuration() -> Settings {
    let mut config = configuration::get_configuration().expect("Failed to read configuration");
    // Use a random OS port
    config.application.port = 0;
    config.application.host = "127.0.0.1".into();
    config.application.secure_cookies = false;
    config.authentication.backend = AuthenticationBackend::InMemory;
    config.authentication.show_demo_accounts = true;
    config
}

impl TestApp {
    /// Spin up the application with the demo accounts and return a client
    /// that keeps cookies and does not follow redirects.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let application = Application::build(test_configuration())
            .await
            .expect("Failed to build application");
        Self::launch(application)
    }

    /// Same as `spawn_app`, with a custom account store.
    pub async fn spawn_app_with(authenticator: Arc<dyn Authenticator>) -> TestApp {
        Lazy::force(&TRACING);

        let application = Application::build_with_authenticator(test_configuration(), authenticator)
            .expect("Failed to build application");
        Self::launch(application)
    }

    /// Spin up the application on the `users` table of a fresh, migrated
    /// database. The returned pool points at that database and starts empty.
    pub async fn spawn_app_on_postgres() -> (TestApp, PgPool) {
        Lazy::force(&TRACING);

        let mut config = test_configuration();
        config.database.database_name = Uuid::new_v4().to_string();
        config.authentication.backend = AuthenticationBackend::Postgres;
        config.authentication.show_demo_accounts = false;
        let db_pool = configure_database(&config.database).await;

        let application = Application::build(config)
            .await
            .expect("Failed to build application");
        (Self::launch(application), db_pool)
    }

    fn launch(application: Application) -> TestApp {
        let port = application.port();
        // Launch the server as a background task
        let _ = tokio::spawn(application.run_until_stopped());

        let api_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .cookie_store(true)
            .build()
            .expect("Failed to build client");

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            api_client,
        }
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.api_client
            .post(&format!("{}/login", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn login_as(&self, username: &str, password: &str, role: &str) -> reqwest::Response {
        self.post_login(&serde_json::json!({
            "username": username,
            "password": password,
            "role": role,
        }))
        .await
    }

    pub async fn get_login_html(&self) -> String {
        self.api_client
            .get(&format!("{}/login", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .unwrap()
    }

    pub async fn get_dashboard(&self, role: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/dashboard/{}", &self.address, role))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_dashboard_html(&self, role: &str) -> String {
        self.get_dashboard(role).await.text().await.unwrap()
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Create a database, run the migrations and return a connection pool
pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database");
    // Migrate database
    let db_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to migrate the database");
    db_pool
}

/// Store an account the way an operator would: Argon2 PHC string, wire role name.
pub async fn insert_user(
    db_pool: &PgPool,
    username: &str,
    password: &str,
    role: &str,
) -> Result<(), sqlx::Error> {
    let password_hash = auth::hash_password(Secret::new(password.to_string()))
        .await
        .expect("Failed to hash password");
    sqlx::query("INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3)")
        .bind(username)
        .bind(password_hash.expose_secret())
        .bind(role)
        .execute(db_pool)
        .await?;
    Ok(())
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
