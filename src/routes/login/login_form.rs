use crate::constant::DEFAULT_ROLE;
use crate::domain::Role;
use crate::startup::DemoAccounts;
use crate::utils;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use secrecy::ExposeSecret;

#[tracing::instrument(name = "Get login page", skip(flash_msgs, demo_accounts))]
pub async fn login_form(
    flash_msgs: IncomingFlashMessages,
    demo_accounts: web::Data<DemoAccounts>,
) -> HttpResponse {
    let body = include_str!("login.html")
        .replace("{messages}", &utils::flash_messages_html(&flash_msgs))
        .replace("{role_options}", &role_options())
        .replace("{demo_accounts}", &demo_accounts_html(&demo_accounts));
    utils::ok_to(body)
}

/// The selector only offers the closed role set.
fn role_options() -> String {
    Role::ALL
        .iter()
        .map(|role| {
            let selected = if role.as_str() == DEFAULT_ROLE {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                role.as_str(),
                selected,
                role.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn demo_accounts_html(demo_accounts: &DemoAccounts) -> String {
    if demo_accounts.0.is_empty() {
        return String::new();
    }
    let rows: String = demo_accounts
        .0
        .iter()
        .map(|account| {
            format!(
                "<li><strong>{}:</strong> {} / {}</li>",
                account.role.label(),
                htmlescape::encode_minimal(&account.username),
                htmlescape::encode_minimal(account.password.expose_secret())
            )
        })
        .collect();
    format!("<h3>Demo Credentials:</h3><ul>{}</ul>", rows)
}
