//! List domain types.

use core::fmt;

use serde::Serialize;

use mn_roasters_core::{ListId, UserId};

/// A named collection of entries owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct List {
    /// Unique list ID.
    pub list_id: ListId,
    pub list_name: String,
    /// Owning user.
    pub user_id: UserId,
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<List list_ID={} list_name={}>",
            self.list_id, self.list_name
        )
    }
}

/// Parameters for creating a new list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub list_name: String,
    pub user_id: UserId,
}

impl NewList {
    #[must_use]
    pub fn new(list_name: impl Into<String>, user_id: UserId) -> Self {
        Self {
            list_name: list_name.into(),
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let list = List {
            list_id: ListId::new(2),
            list_name: "My Roasters".to_owned(),
            user_id: UserId::new(1),
        };
        assert_eq!(list.to_string(), "<List list_ID=2 list_name=My Roasters>");
    }
}
