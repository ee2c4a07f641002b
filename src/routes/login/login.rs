use crate::auth::Authenticator;
use crate::constant::LOGIN_PATH;
use crate::controller::{
    CredentialFormController, FlashNotifier, Notifier, RedirectNavigator, Severity, SubmitOutcome,
};
use crate::domain::LoginForm;
use crate::error::{BizErrorEnum, LoginError};
use crate::request::LoginData;
use crate::session_state::{SessionUser, TypedSession};
use crate::telemetry;
use crate::utils;
use actix_web::{web, HttpResponse};

/// Each request gets its own controller; the notifications it emits become
/// flash messages and its navigation becomes the redirect.
#[tracing::instrument(
    name = "Login",
    skip(form, authenticator, session),
    fields(username = tracing::field::Empty, role = tracing::field::Empty)
)]
pub async fn login(
    form: web::Form<LoginData>,
    authenticator: web::Data<dyn Authenticator>,
    session: TypedSession,
) -> HttpResponse {
    let form: LoginForm = form.into_inner().into();
    let username = form.username.clone();
    telemetry::record_field("username", &username);
    telemetry::record_field("role", &form.role);

    let controller = CredentialFormController::new(
        authenticator.into_inner(),
        RedirectNavigator::default(),
        FlashNotifier::default(),
    )
    .with_form(form);

    let response = match controller.submit().await {
        SubmitOutcome::LoggedIn(role) => {
            // Avoid session fixation attack
            session.renew();
            match session.insert_user(&SessionUser { username, role }) {
                Ok(()) => controller.navigator().redirect_or(LOGIN_PATH),
                Err(e) => abandon_login(controller.notifier(), e),
            }
        }
        _ => controller.navigator().redirect_or(LOGIN_PATH),
    };
    controller.notifier().send();
    response
}

/// The user was authenticated but could not be remembered: take back the
/// success message and send them back to the form.
fn abandon_login(notifier: &FlashNotifier, error: BizErrorEnum) -> HttpResponse {
    tracing::error!(error.cause_chain = ?error, "Failed to store the session user");
    notifier.discard();
    notifier.notify(Severity::Error, &LoginError::AuthFailure(error).to_string());
    utils::redirect_to(LOGIN_PATH)
}
