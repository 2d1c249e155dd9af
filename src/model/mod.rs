//! API data transfer objects.
//!
//! Request and response bodies exchanged over the JSON API. Server-side domain models
//! convert into these at the controller boundary; nothing in this module touches the
//! database.

pub mod announcement;
pub mod api;
pub mod contact;
pub mod event;
pub mod faq;
pub mod location;
pub mod series;
pub mod user;
