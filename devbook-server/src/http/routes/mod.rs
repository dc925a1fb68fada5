//! Route handlers organized by resource

pub mod followers;
pub mod health;
pub mod login;
pub mod users;
