use crate::{Client, ClientResult};

use async_trait::async_trait;
use todo_core::{AuthResponse, Session, Todo, TodoDraft};

/// The calls the page controllers need from the backend
#[async_trait]
pub trait TodoBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse>;

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<AuthResponse>;

    async fn logout(&self) -> ClientResult<()>;

    async fn get_todos(&self) -> ClientResult<Vec<Todo>>;

    async fn add_todo(&self, draft: &TodoDraft) -> ClientResult<Todo>;

    async fn remove_todo(&self, id: &str) -> ClientResult<()>;

    /// Make subsequent calls carry this session's credentials
    fn restore_session(&self, session: &Session);

    /// Stop sending the current credentials
    fn clear_session(&self);
}

#[async_trait]
impl TodoBackend for Client {
    async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        Client::login(self, email, password).await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<AuthResponse> {
        Client::register(self, email, password, name).await
    }

    async fn logout(&self) -> ClientResult<()> {
        Client::logout(self).await
    }

    async fn get_todos(&self) -> ClientResult<Vec<Todo>> {
        Client::get_todos(self).await
    }

    async fn add_todo(&self, draft: &TodoDraft) -> ClientResult<Todo> {
        Client::add_todo(self, draft.title(), draft.description()).await
    }

    async fn remove_todo(&self, id: &str) -> ClientResult<()> {
        Client::remove_todo(self, id).await
    }

    fn restore_session(&self, session: &Session) {
        Client::restore_session(self, session)
    }

    fn clear_session(&self) {
        Client::clear_session(self)
    }
}
