//! Small helpers shared by controllers, services and the auth guard.

pub mod extract;
pub mod parse;
pub mod password;
pub mod token;
