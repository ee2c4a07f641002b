mod login;
mod login_form;

pub use login::*;
pub use login_form::*;
