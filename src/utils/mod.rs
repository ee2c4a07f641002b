mod flash_util;
mod response_util;

pub use flash_util::*;
pub use response_util::*;
