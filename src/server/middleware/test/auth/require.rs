use super::*;

mod header;
mod revocation;
mod roles;
