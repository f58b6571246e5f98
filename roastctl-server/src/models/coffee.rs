//! Coffee records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A coffee row.
///
/// `Default` is the zero-valued record returned for lookups that match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Coffee {
    pub id: i64,
    pub name: String,
    pub roaster: String,
    pub roaster_location: Option<String>,
    pub origins: Option<String>,
    #[serde(alias = "imageurl")]
    pub image_url: Option<String>,
}

impl Coffee {
    /// Record as persisted by an insert: only `name` and `roaster` are stored.
    pub fn inserted(id: i64, new: NewCoffee) -> Self {
        Self {
            id,
            name: new.name,
            roaster: new.roaster,
            ..Self::default()
        }
    }
}

/// Body of `POST /coffees`. Any other fields in the body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewCoffee {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub roaster: String,
}

/// Body of `PUT /coffees/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoffeeNameUpdate {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
}
