mod login_form;
mod role;

pub use login_form::LoginForm;
pub use role::Role;
