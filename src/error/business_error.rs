use actix_web::http::StatusCode;
use actix_web::ResponseError;
use argon2::password_hash;
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // VALIDATE AUTH
    #[error("Stored role '{0}' is not a known role.")]
    StoredRoleInvalid(String),

    // VALIDATE DATABASE ACCESS
    #[error("Failed to query users.")]
    QueryUsersError(#[source] sqlx::Error),

    // PASSWORD HASHING
    #[error("Failed to parse password hash")]
    Argon2HashParseError(#[source] password_hash::Error),

    #[error("Failed to hash password")]
    Argon2HashPasswordError(#[source] password_hash::Error),

    #[error("Failed to spawn blocking task.")]
    SpawnBlockingTaskError(#[source] tokio::task::JoinError),

    // SESSION
    #[error("Failed to insert key to session")]
    ActixSessionInsertError(#[source] actix_session::SessionInsertError),

    #[error("Failed to get key from session")]
    ActixSessionGetError(#[source] actix_session::SessionGetError),

    #[error("The hmac secret must be at least 64 bytes long, got {0}.")]
    SecretKeyTooShort(usize),

    // OTHER
    #[error("Failed to bind TcpListener.")]
    BindTcpListenerError(#[source] std::io::Error),

    #[error("Failed to listen TcpListener.")]
    ListenTcpListenerError(#[source] std::io::Error),

    #[error("Failed to read the local address of TcpListener.")]
    LocalAddrError(#[source] std::io::Error),

    #[error("Failed to run server.")]
    RunServerError(#[source] std::io::Error),

    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

/// Anything that reaches the HTTP layer as an error is on us.
impl ResponseError for BizErrorEnum {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
