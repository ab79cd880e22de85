use crate::client::operation::Operation;
use crate::client::session_jar::SessionJar;
use crate::{ClientError, ClientResult};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use todo_config::ApiConfig;
use todo_core::{ApiResponse, AuthResponse, Session, Todo};

/// Cookie name used when no configuration is supplied
pub const DEFAULT_SESSION_COOKIE: &str = "token";

/// HTTP client for the todo REST API
///
/// Credentials travel as cookies. The jar picks up whatever the backend sets
/// on login, and a persisted [`Session`] can be injected to seed it.
pub struct Client {
    pub base_url: String,
    pub session_cookie: String,
    api_url: Url,
    jar: Arc<SessionJar>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:3000/api/v1")
    /// * `session` - Previously persisted session to reuse, if any
    pub fn new(base_url: &str, session: Option<&Session>) -> ClientResult<Self> {
        Self::with_session_cookie(base_url, DEFAULT_SESSION_COOKIE, session)
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig, session: Option<&Session>) -> ClientResult<Self> {
        Self::with_session_cookie(&config.base_url, &config.session_cookie, session)
    }

    pub fn with_session_cookie(
        base_url: &str,
        session_cookie: &str,
        session: Option<&Session>,
    ) -> ClientResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let api_url =
            Url::parse(&base_url).map_err(|e| ClientError::invalid_url(&base_url, e.to_string()))?;

        let jar = Arc::new(SessionJar::default());
        let client = ReqwestClient::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()?;

        let client = Self {
            base_url,
            session_cookie: session_cookie.to_string(),
            api_url,
            jar,
            client,
        };

        if let Some(session) = session {
            client.restore_session(session);
        }

        Ok(client)
    }

    /// Make the jar hold exactly this session's token
    ///
    /// Cookies the backend set earlier, on any path, are dropped.
    pub fn restore_session(&self, session: &Session) {
        debug!("Restoring session for {}", session.user.email);
        self.jar.replace(
            &format!("{}={}; Path=/", self.session_cookie, session.token),
            &self.api_url,
        );
    }

    /// Forget every cookie, including ones the backend set on login
    pub fn clear_session(&self) {
        self.jar.clear();
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request; any non-2xx status becomes the operation's failure
    async fn execute(
        &self,
        operation: Operation,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("{operation}: backend answered {status}");
            return Err(ClientError::from_status(operation, status));
        }

        debug!("{operation:?}: {status}");
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Log in; the backend sets the session cookie on success
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { email, password };
        let req = self.request(Method::POST, "/users/login").json(&body);
        let response = self.execute(Operation::Login, req).await?;
        Self::decode(response).await
    }

    /// Register a new account. Does not log the user in.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<AuthResponse> {
        #[derive(Serialize)]
        struct RegisterRequest<'a> {
            email: &'a str,
            password: &'a str,
            name: &'a str,
        }

        let body = RegisterRequest {
            email,
            password,
            name,
        };
        let req = self.request(Method::POST, "/users/register").json(&body);
        let response = self.execute(Operation::Register, req).await?;
        Self::decode(response).await
    }

    /// Invalidate the server-side session
    pub async fn logout(&self) -> ClientResult<()> {
        let req = self.request(Method::POST, "/users/logout");
        self.execute(Operation::Logout, req).await?;
        Ok(())
    }

    // =========================================================================
    // Todo Operations
    // =========================================================================

    /// List the current user's todos
    pub async fn get_todos(&self) -> ClientResult<Vec<Todo>> {
        let req = self.request(Method::GET, "/todos");
        let response = self.execute(Operation::GetTodos, req).await?;
        let envelope: ApiResponse<Vec<Todo>> = Self::decode(response).await?;
        Ok(envelope.into_data())
    }

    /// Create a todo. `title` must be non-empty; the backend assigns the id.
    pub async fn add_todo(&self, title: &str, description: &str) -> ClientResult<Todo> {
        #[derive(Serialize)]
        struct AddTodoRequest<'a> {
            title: &'a str,
            description: &'a str,
        }

        let body = AddTodoRequest { title, description };
        let req = self.request(Method::POST, "/todos/addTodo").json(&body);
        let response = self.execute(Operation::AddTodo, req).await?;
        let envelope: ApiResponse<Todo> = Self::decode(response).await?;
        Ok(envelope.into_data())
    }

    /// Delete a todo by its backend id
    ///
    /// The id is opaque and is appended as a single percent-encoded segment.
    pub async fn remove_todo(&self, id: &str) -> ClientResult<()> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::invalid_url(&self.base_url, "URL cannot be a base"))?
            .pop_if_empty()
            .extend(["todos", "removeTodo", id]);

        let req = self.client.request(Method::DELETE, url);
        self.execute(Operation::RemoveTodo, req).await?;
        Ok(())
    }
}
