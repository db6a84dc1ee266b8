//! Administrative routes

pub mod users;

pub use users::list_users;
