//! Per-table repositories
//!
//! Each repository borrows the pool and runs one statement per call.
//! Rows come back in insertion (`id`) order.

pub mod coffees;
pub mod machines;

pub use coffees::CoffeeRepo;
pub use machines::MachineRepo;
