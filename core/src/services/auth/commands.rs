//! Inputs to the authentication use cases

/// Credentials submitted at login
#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Data submitted at registration
#[derive(Debug, Clone, Default)]
pub struct RegisterCommand {
    pub email: String,
    pub password: String,
    pub name: String,
}
