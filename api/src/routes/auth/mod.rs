//! Authentication route handlers
//!
//! - Registration and login (both set the session cookie)
//! - Logout (clears the cookie)
//! - Current user lookup

pub mod cookie;
pub mod login;
pub mod logout;
pub mod me;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;
