//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories for dependent entities take the ids or emails
//! of their parents explicitly; `helpers` creates whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let location = factory::location::create_location(&db, &user.email).await?;
//!
//!     let (user, location) = factory::helpers::create_event_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@lab.test")
//!     .roles(&["admin"])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with roles
//! - `location` - Locations
//! - `announcement` - Announcements
//! - `faq` - FAQ entries
//! - `series` - Recurring series rows (no events generated)
//! - `event` - Standalone or series-linked events
//! - `helpers` - Dependency chains and the shared id counter

pub mod announcement;
pub mod event;
pub mod faq;
pub mod helpers;
pub mod location;
pub mod series;
pub mod user;

pub use announcement::create_announcement;
pub use event::create_event;
pub use faq::create_faq;
pub use location::create_location;
pub use series::create_series;
pub use user::create_user;
