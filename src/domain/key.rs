use serde::{Deserialize, Serialize};
use std::fmt;

/// Binding identity: the type a binding satisfies plus an optional qualifier.
///
/// Two bindings for the same type with different qualifiers are distinct.
/// The rendered form (`@qualifier Type` or bare `Type`) is what diagnostic
/// messages show to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

impl Key {
    pub fn of(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            qualifier: None,
        }
    }

    pub fn qualified(qualifier: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            qualifier: Some(qualifier.into()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "@{} {}", qualifier, self.type_name),
            None => write!(f, "{}", self.type_name),
        }
    }
}
