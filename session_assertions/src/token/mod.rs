mod errors;
mod serializer;
mod storage;
mod types;

pub use errors::TokenError;
pub use serializer::{JsonTokenSerializer, TokenSerializer};
pub use storage::{MemoryTokenStorage, TokenStorage};
pub use types::{AuthToken, AuthUser, GuardToken, TestUser, TokenUser, UsernamePasswordToken};
