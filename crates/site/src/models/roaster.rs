//! Roaster domain types.

use core::fmt;

use serde::{Deserialize, Serialize};

use mn_roasters_core::RoasterId;

/// A coffee roasting business.
///
/// Everything except `name` and `address` is optional. The place ID, rating
/// and coordinates come from geocoding the address.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Roaster {
    /// Unique roaster ID.
    pub roaster_id: RoasterId,
    pub name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub hours: Option<String>,
    pub website: Option<String>,
    /// External place identifier from the geocoding provider.
    pub place_id: Option<String>,
    pub avg_user_rating: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl fmt::Display for Roaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Roaster roaster_ID={} name={}>",
            self.roaster_id, self.name
        )
    }
}

/// Parameters for creating or replacing a roaster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewRoaster {
    pub name: String,
    pub address: String,
    pub phone_number: Option<String>,
    pub hours: Option<String>,
    pub website: Option<String>,
    pub place_id: Option<String>,
    pub avg_user_rating: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl NewRoaster {
    /// A roaster with only the required fields set.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_only_required_fields() {
        let roaster = NewRoaster::new("Dogwood", "Minneapolis");
        assert_eq!(roaster.name, "Dogwood");
        assert_eq!(roaster.address, "Minneapolis");
        assert!(roaster.phone_number.is_none());
        assert!(roaster.lat.is_none());
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let roaster: NewRoaster =
            serde_json::from_str(r#"{"name": "Dogwood", "address": "Minneapolis"}"#).unwrap();
        assert_eq!(roaster, NewRoaster::new("Dogwood", "Minneapolis"));
    }

    #[test]
    fn test_display() {
        let roaster = Roaster {
            roaster_id: RoasterId::new(4),
            name: "Dogwood".to_owned(),
            address: "Minneapolis".to_owned(),
            phone_number: None,
            hours: None,
            website: None,
            place_id: None,
            avg_user_rating: None,
            lat: None,
            lng: None,
        };
        assert_eq!(roaster.to_string(), "<Roaster roaster_ID=4 name=Dogwood>");
    }
}
