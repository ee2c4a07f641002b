/// How loud a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Shows a message to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Sends the user somewhere else. Fire-and-forget.
pub trait Navigator {
    fn navigate(&self, path: &str);
}
