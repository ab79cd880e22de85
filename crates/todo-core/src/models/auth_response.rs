use crate::{Session, User};

use serde::{Deserialize, Serialize};

/// Success body of `/users/login` and `/users/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl From<AuthResponse> for Session {
    fn from(response: AuthResponse) -> Self {
        Session::new(response.token, response.user)
    }
}
