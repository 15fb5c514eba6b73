mod errors;
mod session_helper;

pub use errors::HelperError;
pub use session_helper::{SessionHelper, security_attribute};
