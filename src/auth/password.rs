use crate::error::BizErrorEnum;
use crate::telemetry;
use argon2::password_hash::SaltString;
use argon2::{password_hash, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, Secret};

/// Verified against when the username is unknown, so that a miss costs
/// as much as a wrong password. The parameters must stay those of
/// `Argon2::default()`, which `compute_password_hash` uses.
const FALLBACK_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$\
gZiV/M1gPc22ElAH/Jh1Hw$\
CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

pub fn fallback_password_hash() -> Secret<String> {
    Secret::new(FALLBACK_PASSWORD_HASH.to_string())
}

/// PHC string format:
/// ${algorithm}${algorithm version}${,-separated algorithm parameters}${hash}${salt}
///
/// For example:
/// $argon2id$v=19$m=19456,t=2,p=1$OzLfJ+WIZzODQlNBT20mbw$8DU86CFOWvlJu5D+75BV6DidbTJLM92egH4+ZJxXZU4
#[tracing::instrument(name = "Compute password hash", skip(password))]
pub fn compute_password_hash(password: Secret<String>) -> Result<Secret<String>, BizErrorEnum> {
    let salt = SaltString::generate(&mut rand::thread_rng());

    let password_hash = Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map_err(BizErrorEnum::Argon2HashPasswordError)?
        .to_string();

    Ok(Secret::new(password_hash))
}

/// Argon2 infers the load parameters and salt from the PHC string.
///
/// A mismatch is `Ok(false)`; only a hash that cannot be parsed or
/// evaluated is an error.
#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
pub fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<bool, BizErrorEnum> {
    let expected_password_hash = PasswordHash::new(expected_password_hash.expose_secret())
        .map_err(BizErrorEnum::Argon2HashParseError)?;
    match Argon2::default().verify_password(
        password_candidate.expose_secret().as_bytes(),
        &expected_password_hash,
    ) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(BizErrorEnum::Argon2HashParseError(e)),
    }
}

/// Offload the CPU-intensive hashing to the blocking thread pool.
pub async fn hash_password(password: Secret<String>) -> Result<Secret<String>, BizErrorEnum> {
    telemetry::spawn_blocking_with_tracing(move || compute_password_hash(password))
        .await
        // spawn_blocking is fallible - we have a nested Result here!
        .map_err(BizErrorEnum::SpawnBlockingTaskError)?
}

pub async fn verify_password(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<bool, BizErrorEnum> {
    telemetry::spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, password_candidate)
    })
    .await
    .map_err(BizErrorEnum::SpawnBlockingTaskError)?
}
