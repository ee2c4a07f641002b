use crate::controller::Navigator;
use crate::utils;
use actix_web::HttpResponse;
use std::cell::RefCell;

/// Navigation as an HTTP redirect.
///
/// Remembers the first destination it is given; later calls are ignored.
#[derive(Debug, Default)]
pub struct RedirectNavigator {
    location: RefCell<Option<String>>,
}

impl RedirectNavigator {
    pub fn location(&self) -> Option<String> {
        self.location.borrow().clone()
    }

    /// `303` to the recorded destination, or to `fallback` if there is none.
    pub fn redirect_or(&self, fallback: &str) -> HttpResponse {
        match self.location.borrow().as_deref() {
            Some(location) => utils::redirect_to(location),
            None => utils::redirect_to(fallback),
        }
    }
}

impl Navigator for RedirectNavigator {
    fn navigate(&self, path: &str) {
        let mut location = self.location.borrow_mut();
        if location.is_none() {
            *location = Some(path.to_string());
        }
    }
}
