//! Route handlers organized by resource

pub mod coffees;
pub mod health;
pub mod machines;
pub mod roasters;
