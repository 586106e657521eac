use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl User {
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(bio) = changes.bio {
            self.bio = bio;
        }
    }
}

/// Partial profile update. A `None` field is left untouched; `bio` carries a
/// second level so an explicit null can clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub bio: Option<Option<String>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Name cannot be empty")]
    EmptyName,
}

pub fn validate_changes(changes: UserChanges) -> Result<UserChanges, ProfileError> {
    if let Some(name) = &changes.name {
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
    }
    Ok(changes)
}
