use secrecy::Secret;
use serde::Deserialize;

/// Body of `POST /login`.
///
/// Missing fields deserialize as empty strings so that an incomplete form is
/// reported as a validation problem rather than a `400`.
#[derive(Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
    #[serde(default)]
    pub role: String,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}
