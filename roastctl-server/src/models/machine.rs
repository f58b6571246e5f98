//! Brewing machine records
//!
//! `(vendor, name)` is the natural key: inserts return the existing row for
//! a pair that is already stored instead of adding a second one.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A machine row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Machine {
    pub id: i64,
    pub vendor: String,
    pub name: String,
    #[serde(alias = "imageurl")]
    pub image_url: Option<String>,
}

/// Body of `POST /machines`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewMachine {
    #[serde(deserialize_with = "super::null_as_default")]
    pub vendor: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(alias = "imageurl")]
    pub image_url: Option<String>,
}
