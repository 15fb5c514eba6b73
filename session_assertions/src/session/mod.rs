mod errors;
mod memory;
mod store;
mod types;

pub use errors::SessionError;
pub use memory::MemorySession;
pub use store::{CacheData, InMemorySessionStore, SessionStore};
pub use types::SessionHandle;
