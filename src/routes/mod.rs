mod dashboard;
mod health_check;
mod home;
mod login;
mod logout;

// re-export
pub use dashboard::*;
pub use health_check::*;
pub use home::*;
pub use login::*;
pub use logout::*;
