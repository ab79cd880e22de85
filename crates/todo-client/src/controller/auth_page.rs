use crate::TodoBackend;
use crate::controller::{Navigation, Route};
use crate::session::SessionStore;

use log::{error, info, warn};
use todo_core::Session;

pub const REGISTRATION_SUCCESS: &str =
    "Registration successful! Please login with your credentials.";
pub const REQUIRED_FIELDS_MISSING: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// State behind the login / register page.
pub struct AuthPage<'a, B: TodoBackend> {
    backend: &'a B,
    store: &'a SessionStore,
    mode: AuthMode,
    email: String,
    password: String,
    name: String,
    error: Option<String>,
    success: Option<String>,
    session: Option<Session>,
}

impl<'a, B: TodoBackend> AuthPage<'a, B> {
    pub fn new(backend: &'a B, store: &'a SessionStore) -> Self {
        Self {
            backend,
            store,
            mode: AuthMode::default(),
            email: String::new(),
            password: String::new(),
            name: String::new(),
            error: None,
            success: None,
            session: None,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// The session established by the last successful login
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Switch between login and register; all fields and banners are cleared.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.clear_fields();
        self.error = None;
        self.success = None;
    }

    pub async fn submit(&mut self) -> Navigation {
        self.error = None;
        self.success = None;

        if !self.has_required_fields() {
            self.error = Some(REQUIRED_FIELDS_MISSING.to_string());
            return Navigation::Stay;
        }

        match self.mode {
            AuthMode::Login => self.submit_login().await,
            AuthMode::Register => self.submit_register().await,
        }
    }

    async fn submit_login(&mut self) -> Navigation {
        let response = match self.backend.login(&self.email, &self.password).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Login failed: {e}");
                self.error = Some(e.user_message());
                return Navigation::Stay;
            }
        };

        let session = Session::from(response);
        if let Err(e) = self.store.save(&session) {
            error!("Could not persist session: {e}");
            self.error = Some(e.recovery_hint().to_string());
            return Navigation::Stay;
        }

        self.backend.restore_session(&session);
        info!("Logged in as {}", session.user.email);
        self.session = Some(session);
        Navigation::To(Route::Todos)
    }

    /// Registration does not log the user in; the page returns to login mode.
    async fn submit_register(&mut self) -> Navigation {
        match self
            .backend
            .register(&self.email, &self.password, &self.name)
            .await
        {
            Ok(response) => {
                info!("Registered {}", response.user.email);
                self.clear_fields();
                self.mode = AuthMode::Login;
                self.success = Some(REGISTRATION_SUCCESS.to_string());
            }
            Err(e) => {
                warn!("Registration failed: {e}");
                self.error = Some(e.user_message());
            }
        }

        Navigation::Stay
    }

    fn has_required_fields(&self) -> bool {
        let filled = |s: &str| !s.trim().is_empty();

        filled(&self.email)
            && filled(&self.password)
            && (self.mode == AuthMode::Login || filled(&self.name))
    }

    fn clear_fields(&mut self) {
        self.email.clear();
        self.password.clear();
        self.name.clear();
    }
}
