pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::api_response::ApiResponse;
pub use models::auth_response::AuthResponse;
pub use models::session::Session;
pub use models::todo::Todo;
pub use models::todo_draft::TodoDraft;
pub use models::user::User;
