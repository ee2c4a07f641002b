use crate::constant::SESSION_USER;
use crate::domain::Role;
use crate::error::BizErrorEnum;
use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::Ready;

/// Who is logged in. Stored in the session cookie, never holds the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: Role,
}

/// Customize actix-web Extractor
pub struct TypedSession(Session);

impl TypedSession {
    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn insert_user(&self, user: &SessionUser) -> Result<(), BizErrorEnum> {
        self.0
            .insert(SESSION_USER, user)
            .map_err(BizErrorEnum::ActixSessionInsertError)
    }

    pub fn get_user(&self) -> Result<Option<SessionUser>, BizErrorEnum> {
        self.0
            .get(SESSION_USER)
            .map_err(BizErrorEnum::ActixSessionGetError)
    }

    pub fn log_out(&self) {
        self.0.purge()
    }
}

/// Make TypedSession as an actix-web extractor
impl FromRequest for TypedSession {
    // "We return the same error returned by the
    // implementation of `FromRequest` for `Session`".
    type Error = <Session as FromRequest>::Error;
    // Nothing to await here, `Ready` resolves the first time it is polled.
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Ok(TypedSession(req.get_session())))
    }
}
