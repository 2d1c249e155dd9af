//! SeaORM entity models for the lab scheduler schema.
//!
//! Each module mirrors one table created by the `migration` crate.

pub mod announcement;
pub mod contact_message;
pub mod event;
pub mod faq;
pub mod location;
pub mod prelude;
pub mod series;
pub mod user;
