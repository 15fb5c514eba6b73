mod errors;
mod jar;
mod types;

pub use errors::CookieError;
pub use jar::{CookieJar, MemoryCookieJar};
pub use types::Cookie;
