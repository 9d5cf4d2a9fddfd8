//! Static calculator tool registry for calc-index.
//!
//! This crate defines the descriptor model and the ordered, compile-time list
//! of calculator tools shown on the directory page.

pub mod models;
pub mod schema;
pub mod tools;

pub use models::*;
pub use tools::CALCULATOR_TOOLS;
