mod capability;
mod credential_form;
mod flash;
mod redirect;

pub use capability::*;
pub use credential_form::*;
pub use flash::FlashNotifier;
pub use redirect::RedirectNavigator;
