pub use super::announcement::Entity as Announcement;
pub use super::contact_message::Entity as ContactMessage;
pub use super::event::Entity as Event;
pub use super::faq::Entity as Faq;
pub use super::location::Entity as Location;
pub use super::series::Entity as Series;
pub use super::user::Entity as User;
