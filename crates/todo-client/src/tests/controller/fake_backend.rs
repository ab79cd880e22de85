use crate::{ClientError, ClientResult, Operation, TodoBackend};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use todo_core::{AuthResponse, Session, Todo, TodoDraft, User};

/// In-memory backend: keeps server-side todos and fails on request.
#[derive(Default)]
pub(crate) struct FakeBackend {
    todos: Mutex<Vec<Todo>>,
    next_id: Mutex<u32>,
    failures: Mutex<HashMap<Operation, StatusCode>>,
    calls: Mutex<Vec<Operation>>,
    session: Mutex<Option<Session>>,
}

impl FakeBackend {
    pub(crate) fn with_todos(todos: Vec<Todo>) -> Self {
        let backend = Self::default();
        *backend.next_id.lock().unwrap() = todos.len() as u32;
        *backend.todos.lock().unwrap() = todos;
        backend
    }

    pub(crate) fn fail(&self, operation: Operation, status: StatusCode) {
        self.failures.lock().unwrap().insert(operation, status);
    }

    pub(crate) fn recover(&self, operation: Operation) {
        self.failures.lock().unwrap().remove(&operation);
    }

    /// Someone else changed the list behind the client's back
    pub(crate) fn insert_externally(&self, todo: Todo) {
        self.todos.lock().unwrap().push(todo);
    }

    pub(crate) fn calls(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == operation)
            .count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn session(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn call(&self, operation: Operation) -> ClientResult<()> {
        self.calls.lock().unwrap().push(operation);
        match self.failures.lock().unwrap().get(&operation) {
            Some(status) => Err(ClientError::from_status(operation, *status)),
            None => Ok(()),
        }
    }

    fn auth_response(email: &str, name: &str) -> AuthResponse {
        AuthResponse {
            token: "t1".to_string(),
            user: User {
                id: "u1".to_string(),
                name: name.to_string(),
                email: email.to_string(),
            },
        }
    }
}

#[async_trait]
impl TodoBackend for FakeBackend {
    async fn login(&self, email: &str, _password: &str) -> ClientResult<AuthResponse> {
        self.call(Operation::Login)?;
        Ok(Self::auth_response(email, "A"))
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> ClientResult<AuthResponse> {
        self.call(Operation::Register)?;
        Ok(Self::auth_response(email, name))
    }

    async fn logout(&self) -> ClientResult<()> {
        self.call(Operation::Logout)
    }

    async fn get_todos(&self) -> ClientResult<Vec<Todo>> {
        self.call(Operation::GetTodos)?;
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn add_todo(&self, draft: &TodoDraft) -> ClientResult<Todo> {
        self.call(Operation::AddTodo)?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let todo = Todo::new(next_id.to_string(), draft.title(), draft.description());
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn remove_todo(&self, id: &str) -> ClientResult<()> {
        self.call(Operation::RemoveTodo)?;
        self.todos.lock().unwrap().retain(|todo| !todo.has_id(id));
        Ok(())
    }

    fn restore_session(&self, session: &Session) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear_session(&self) {
        *self.session.lock().unwrap() = None;
    }
}
