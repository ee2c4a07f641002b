use crate::domain::Role;
use crate::session_state::SessionUser;
use crate::utils;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};

/// One page per role; a user only ever sees their own role's page.
#[tracing::instrument(
    name = "Get dashboard",
    skip(user, flash_msgs),
    fields(username = %user.username)
)]
pub async fn dashboard(
    path: web::Path<String>,
    user: web::ReqData<SessionUser>,
    flash_msgs: IncomingFlashMessages,
) -> HttpResponse {
    let user = user.into_inner();
    let requested = match Role::parse(&path.into_inner()) {
        Ok(role) => role,
        Err(_) => return HttpResponse::NotFound().finish(),
    };

    if requested != user.role {
        tracing::warn!("{} tried to open the {} dashboard", user.role, requested);
        FlashMessage::error(format!(
            "You do not have access to the {} dashboard.",
            requested.label()
        ))
        .send();
        return utils::redirect_to(user.role.dashboard_path());
    }

    let body = include_str!("dashboard.html")
        .replace("{messages}", &utils::flash_messages_html(&flash_msgs))
        .replace("{role}", requested.label())
        .replace("{username}", &htmlescape::encode_minimal(&user.username));
    utils::ok_to(body)
}
