use serde_json::Value;

/// One entry of a bulk session assertion
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBinding {
    /// Only the presence of the attribute is checked
    NameOnly(String),
    /// The attribute must hold this value
    NameValue(String, Value),
}

impl SessionBinding {
    pub fn name(attribute: impl Into<String>) -> Self {
        SessionBinding::NameOnly(attribute.into())
    }

    pub fn value(attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        SessionBinding::NameValue(attribute.into(), value.into())
    }

    pub fn attribute(&self) -> &str {
        match self {
            SessionBinding::NameOnly(attribute) | SessionBinding::NameValue(attribute, _) => {
                attribute
            }
        }
    }

    pub fn expected(&self) -> Option<&Value> {
        match self {
            SessionBinding::NameOnly(_) => None,
            SessionBinding::NameValue(_, value) => Some(value),
        }
    }
}

impl From<&str> for SessionBinding {
    fn from(attribute: &str) -> Self {
        SessionBinding::name(attribute)
    }
}

impl<V: Into<Value>> From<(&str, V)> for SessionBinding {
    fn from((attribute, value): (&str, V)) -> Self {
        SessionBinding::value(attribute, value)
    }
}
