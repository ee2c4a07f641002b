mod authenticator;
mod credentials;
mod in_memory;
mod middleware;
mod password;
mod postgres;

pub use authenticator::*;
pub use credentials::*;
pub use in_memory::*;
pub use middleware::*;
pub use password::*;
pub use postgres::*;
