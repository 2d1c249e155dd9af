//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! The event and series repositories are generic over `ConnectionTrait` so the series
//! service can run them inside a `DatabaseTransaction`.

pub mod announcement;
pub mod contact;
pub mod event;
pub mod faq;
pub mod location;
pub mod series;
pub mod user;

#[cfg(test)]
mod test;
