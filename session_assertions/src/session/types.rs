use serde_json::Value;

use crate::session::errors::SessionError;

/// Handle to the session of one simulated browser
///
/// Attribute values are JSON values; an absent attribute reads as `None`.
pub trait SessionHandle {
    /// Name of the session, which is also the name of its cookie
    fn name(&self) -> &str;

    /// Current session identifier
    fn id(&self) -> &str;

    fn has(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<&Value>;

    fn set(&mut self, key: &str, value: Value);

    fn remove(&mut self, key: &str) -> Option<Value>;

    /// Names of all attributes currently set
    fn attribute_names(&self) -> Vec<String>;

    /// Persist the attributes so later requests observe them.
    fn save(&mut self) -> Result<(), SessionError>;

    /// Clear every attribute and issue a new identifier.
    fn invalidate(&mut self) -> Result<(), SessionError>;
}
