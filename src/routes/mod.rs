//! src/routes/mod.rs
mod health_check;
pub use health_check::*;

mod home;
pub use home::*;
