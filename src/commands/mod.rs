//! Command implementations

mod days;
mod solve;

pub use days::days;
pub use solve::solve;
