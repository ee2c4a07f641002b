use crate::constant::LOGIN_PATH;
use crate::session_state::{SessionUser, TypedSession};
use crate::utils;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{FromRequest, HttpMessage};
use actix_web_flash_messages::FlashMessage;
use actix_web_lab::middleware::Next;

/// Guard for the dashboards.
///
/// Anonymous requests are bounced to the login page; logged-in ones get
/// their [`SessionUser`] attached to the request extensions, where handlers
/// pick it up with `web::ReqData<SessionUser>`.
///
/// The redirect is returned as a response rather than an error: the flash
/// framework only attaches its cookie to successful service responses.
pub async fn reject_anonymous_users(
    mut req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    match session.get_user()? {
        Some(user) => {
            req.extensions_mut().insert::<SessionUser>(user);
            Ok(next.call(req).await?.map_into_left_body())
        }
        None => {
            tracing::info!("Rejected an anonymous request to {}", req.path());
            FlashMessage::error("You are not logged in, please log in before proceeding").send();
            let response = utils::redirect_to(LOGIN_PATH);
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
