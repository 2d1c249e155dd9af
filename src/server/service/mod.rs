//! Business logic layer between controllers and repositories.
//!
//! Services take validated parameter models, orchestrate repository calls and return
//! domain models. They never build HTTP responses.

pub mod announcement;
pub mod auth;
pub mod contact;
pub mod document;
pub mod event;
pub mod faq;
pub mod location;
pub mod series;
pub mod user;
