use actix_web_flash_messages::{IncomingFlashMessages, Level};

/// Render the incoming flash messages, escaped, one paragraph each.
pub fn flash_messages_html(flash_msgs: &IncomingFlashMessages) -> String {
    flash_msgs
        .iter()
        .map(|msg| {
            format!(
                r#"<p class="flash-{}"><i>{}</i></p>"#,
                level_class(msg.level()),
                htmlescape::encode_minimal(msg.content())
            )
        })
        .collect()
}

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Success => "success",
        Level::Error => "error",
        Level::Warning => "warning",
        _ => "info",
    }
}
