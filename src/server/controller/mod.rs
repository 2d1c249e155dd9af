//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into
//! parameter models, call a service and convert the result back into a DTO.

pub mod announcement;
pub mod auth;
pub mod contact;
pub mod document;
pub mod event;
pub mod faq;
pub mod location;
pub mod series;
pub mod user;
