//! Entry domain types.
//!
//! An entry is the payload-carrying link between a list and a roaster: one
//! user's score and note for one roaster, filed on one of their lists.

use core::fmt;

use serde::Serialize;

use mn_roasters_core::{EntryId, ListId, RoasterId, UserId};

/// A score and note for a roaster on a list.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Entry {
    /// Unique entry ID.
    pub entry_id: EntryId,
    pub list_id: ListId,
    pub roaster_id: RoasterId,
    pub score: Option<f64>,
    pub note: Option<String>,
}

/// Parameters for creating a new entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub list_id: ListId,
    pub roaster_id: RoasterId,
    pub score: Option<f64>,
    pub note: Option<String>,
}

/// An entry joined with the names it points at.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct EntryDetail {
    pub entry_id: EntryId,
    pub score: Option<f64>,
    pub note: Option<String>,
    pub roaster_id: RoasterId,
    pub roaster_name: String,
    pub list_id: ListId,
    pub list_name: String,
    /// Owner of the list, i.e. the entry's author.
    pub author_id: UserId,
}

impl fmt::Display for EntryDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Entry entry_id={} score=", self.entry_id)?;
        match self.score {
            Some(score) => write!(f, "{score:?}")?,
            None => f.write_str("None")?,
        }
        write!(
            f,
            " roaster={} list={} author={}>",
            self.roaster_name, self.list_name, self.author_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(score: Option<f64>) -> EntryDetail {
        EntryDetail {
            entry_id: EntryId::new(1),
            score,
            note: Some("lovely".to_owned()),
            roaster_id: RoasterId::new(1),
            roaster_name: "City Girl Coffee Test".to_owned(),
            list_id: ListId::new(1),
            list_name: "My Favorites".to_owned(),
            author_id: UserId::new(1),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            detail(Some(5.0)).to_string(),
            "<Entry entry_id=1 score=5.0 roaster=City Girl Coffee Test list=My Favorites author=1>"
        );
    }

    #[test]
    fn test_display_keeps_fractional_score() {
        assert!(detail(Some(4.25)).to_string().contains("score=4.25 "));
    }

    #[test]
    fn test_display_without_score() {
        assert!(detail(None).to_string().contains("score=None"));
    }
}
