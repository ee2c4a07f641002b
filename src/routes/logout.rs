use crate::constant::LOGIN_PATH;
use crate::session_state::TypedSession;
use crate::utils;
use actix_web::HttpResponse;
use actix_web_flash_messages::FlashMessage;

#[tracing::instrument(name = "Logout", skip(session))]
pub async fn log_out(session: TypedSession) -> HttpResponse {
    session.log_out();

    FlashMessage::info("You have successfully logged out.").send();
    utils::redirect_to(LOGIN_PATH)
}
