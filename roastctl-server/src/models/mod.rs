//! Record shapes shared by the store and the HTTP layer
//!
//! Optional columns are `Option<String>`: `None` is a NULL column and
//! serializes as JSON `null`, which keeps "no location recorded" distinct
//! from an empty string.

pub mod coffee;
pub mod machine;

pub use coffee::{Coffee, CoffeeNameUpdate, NewCoffee};
pub use machine::{Machine, NewMachine};

use serde::{Deserialize, Deserializer};

/// Decode a JSON `null` as the field's zero value, the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
