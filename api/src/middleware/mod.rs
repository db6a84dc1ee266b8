pub mod session;

pub use session::{is_public_path, login_redirect, SessionContext, SessionGate};
