use crate::auth::{self, Authenticator, InMemoryAuthenticator, PgAuthenticator};
use crate::configuration::{
    AccountSettings, AuthenticationBackend, AuthenticationSettings, DatabaseSettings, Settings,
};
use crate::constant::{DASHBOARD_PREFIX, LOGIN_PATH};
use crate::error::BizErrorEnum;
use crate::routes;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

/// `Key` needs 512 bits of material.
const MIN_SECRET_LEN: usize = 64;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build the server with the account store named in the configuration.
    pub async fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let authenticator = build_authenticator(&config.authentication, &config.database).await?;
        Self::build_with_authenticator(config, authenticator)
    }

    /// Build the server around an existing account store.
    pub fn build_with_authenticator(
        config: Settings,
        authenticator: Arc<dyn Authenticator>,
    ) -> Result<Self, BizErrorEnum> {
        // 0.0.0.0 as host to accept connections from any network interface
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::LocalAddrError)?
            .port();

        let demo_accounts = demo_accounts(&config.authentication);
        let server = run(
            listener,
            authenticator,
            demo_accounts,
            config.application.hmac_secret,
            config.application.secure_cookies,
        )?;

        // We "save" the bound port in one of `Application`'s fields
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // This function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

/// Accounts listed on the login page; empty unless enabled.
#[derive(Default)]
pub struct DemoAccounts(pub Vec<AccountSettings>);

fn demo_accounts(config: &AuthenticationSettings) -> DemoAccounts {
    if config.show_demo_accounts && config.backend == AuthenticationBackend::InMemory {
        DemoAccounts(config.accounts.clone())
    } else {
        DemoAccounts::default()
    }
}

#[tracing::instrument(name = "Build authenticator", skip_all, fields(backend = ?config.backend))]
async fn build_authenticator(
    config: &AuthenticationSettings,
    database: &DatabaseSettings,
) -> Result<Arc<dyn Authenticator>, BizErrorEnum> {
    let authenticator: Arc<dyn Authenticator> = match config.backend {
        AuthenticationBackend::InMemory => {
            Arc::new(InMemoryAuthenticator::build(&config.accounts).await?)
        }
        AuthenticationBackend::Postgres => Arc::new(PgAuthenticator::new(get_connection_pool(
            database,
        ))),
    };
    Ok(authenticator)
}

fn run(
    listener: TcpListener,
    authenticator: Arc<dyn Authenticator>,
    demo_accounts: DemoAccounts,
    hmac_secret: Secret<String>,
    secure_cookies: bool,
) -> Result<Server, BizErrorEnum> {
    let secret_len = hmac_secret.expose_secret().len();
    if secret_len < MIN_SECRET_LEN {
        tracing::error!("The hmac secret is too short");
        return Err(BizErrorEnum::SecretKeyTooShort(secret_len));
    }
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());

    // Flash message, CookieMessageStore enforces that the cookie used as storage is signed
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let authenticator = web::Data::from(authenticator);
    let demo_accounts = web::Data::new(demo_accounts);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(secure_cookies)
                    .build(),
            )
            .wrap(TracingLogger::default())
            .app_data(authenticator.clone())
            .app_data(demo_accounts.clone())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            .route(LOGIN_PATH, web::get().to(routes::login_form))
            .route(LOGIN_PATH, web::post().to(routes::login))
            .route("/logout", web::post().to(routes::log_out))
            .service(
                web::scope(DASHBOARD_PREFIX)
                    .wrap(actix_web_lab::middleware::from_fn(
                        auth::reject_anonymous_users,
                    ))
                    .route("/{role}", web::get().to(routes::dashboard)),
            )
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}

/// The pool connects on first use, the in-memory backend never touches it.
pub fn get_connection_pool(config: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(config.with_db())
}
