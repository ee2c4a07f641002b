use crate::controller::{Notifier, Severity};
use actix_web_flash_messages::FlashMessage;
use std::cell::RefCell;

/// Notifications as flash messages, rendered by the next page the browser loads.
///
/// Messages are queued until [`FlashNotifier::send`], so the handler can still
/// take them back if the request fails after the controller has spoken.
/// `send` must run while the request is being handled: the messages go on the
/// outgoing mailbox of that request.
#[derive(Debug, Default)]
pub struct FlashNotifier {
    queued: RefCell<Vec<(Severity, String)>>,
}

impl FlashNotifier {
    pub fn queued(&self) -> Vec<(Severity, String)> {
        self.queued.borrow().clone()
    }

    /// Drop everything queued so far.
    pub fn discard(&self) {
        self.queued.borrow_mut().clear();
    }

    pub fn send(&self) {
        for (severity, message) in self.queued.borrow_mut().drain(..) {
            match severity {
                Severity::Success => FlashMessage::success(message).send(),
                Severity::Error => FlashMessage::error(message).send(),
            }
        }
    }
}

impl Notifier for FlashNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.queued
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}
