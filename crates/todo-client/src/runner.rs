use crate::cli::Commands;
use crate::client::{Client, DEFAULT_SESSION_COOKIE};
use crate::controller::{AuthPage, Navigation, Route, TodoListController};
use crate::error::{CliError, Result as CliResult};
use crate::session::SessionStore;
use crate::view::TodoListView;

use std::io::Write;
use std::path::PathBuf;

use log::warn;
use todo_config::Config;
use todo_core::{Session, TodoDraft};

/// Executes one CLI command against the backend, writing results to `out`.
pub struct Runner {
    base_url: String,
    session_cookie: String,
    session_path: PathBuf,
    refetch_after_mutation: bool,
    json: bool,
}

impl Runner {
    pub fn new(base_url: impl Into<String>, session_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            session_path: session_path.into(),
            refetch_after_mutation: false,
            json: false,
        }
    }

    /// Build from loaded config; an explicit `--server` wins over the config.
    pub fn from_config(config: &Config, server: Option<&str>) -> CliResult<Self> {
        let base_url = server.unwrap_or(&config.api.base_url);

        Ok(Self::new(base_url, config.session_path()?)
            .with_session_cookie(&config.api.session_cookie)
            .with_refetch_after_mutation(config.todos.refetch_after_mutation))
    }

    pub fn with_session_cookie(mut self, name: &str) -> Self {
        self.session_cookie = name.to_string();
        self
    }

    pub fn with_refetch_after_mutation(mut self, refetch: bool) -> Self {
        self.refetch_after_mutation = refetch;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub async fn run<W: Write>(&self, command: Commands, out: &mut W) -> CliResult<()> {
        let store = SessionStore::new(&self.session_path);
        let session = Self::load_session(&store)?;
        let client =
            Client::with_session_cookie(&self.base_url, &self.session_cookie, session.as_ref())?;

        match command {
            Commands::Login { email, password } => {
                let mut page = AuthPage::new(&client, &store);
                page.set_email(email);
                page.set_password(password);

                if page.submit().await.is_redirect_to(Route::Todos)
                    && let Some(session) = page.session()
                {
                    writeln!(out, "Logged in as {} <{}>", session.user.name, session.user.email)?;
                    return Ok(());
                }
                Err(CliError::action(page.error().unwrap_or("Login failed")))
            }

            Commands::Register {
                email,
                password,
                name,
            } => {
                let mut page = AuthPage::new(&client, &store);
                page.toggle_mode();
                page.set_email(email);
                page.set_password(password);
                page.set_name(name);

                match (page.submit().await, page.success()) {
                    (Navigation::Stay, Some(message)) => {
                        writeln!(out, "{message}")?;
                        Ok(())
                    }
                    _ => Err(CliError::action(
                        page.error().unwrap_or("Registration failed"),
                    )),
                }
            }

            Commands::Logout => {
                let mut controller = TodoListController::new(&client, &store);
                match controller.logout().await {
                    Navigation::To(Route::Auth) => {
                        writeln!(out, "Logged out")?;
                        Ok(())
                    }
                    _ => Err(CliError::action(
                        controller.error().unwrap_or("Failed to logout"),
                    )),
                }
            }

            Commands::Whoami => {
                let session = session.ok_or(CliError::NotLoggedIn)?;
                if self.json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&session.user)?)?;
                } else {
                    writeln!(
                        out,
                        "{} <{}> (id {})",
                        session.user.name, session.user.email, session.user.id
                    )?;
                }
                Ok(())
            }

            Commands::List => {
                let controller = self.mount(&client, &store, session.as_ref()).await?;
                self.render(&controller, out)
            }

            Commands::Add { title, description } => {
                TodoDraft::new(title.as_str(), description.as_str())?;

                let mut controller = self.mount(&client, &store, session.as_ref()).await?;
                controller.open_add_form();
                controller.set_title(title);
                controller.set_description(description);

                let navigation = controller.submit_add().await;
                Self::settle(navigation, controller.error())?;
                self.render(&controller, out)
            }

            Commands::Remove { id } => {
                let mut controller = self.mount(&client, &store, session.as_ref()).await?;

                let mut target = None;
                {
                    let item = controller
                        .items()
                        .find(|item| item.todo().has_id(&id))
                        .ok_or_else(|| CliError::UnknownTodo { id: id.clone() })?;
                    item.request_delete(|todo_id| target = Some(todo_id.to_string()));
                }

                if let Some(todo_id) = target {
                    let navigation = controller.delete(&todo_id).await;
                    Self::settle(navigation, controller.error())?;
                }
                self.render(&controller, out)
            }
        }
    }

    /// A corrupted session file is backed up and treated as logged out.
    fn load_session(store: &SessionStore) -> CliResult<Option<Session>> {
        let loaded = store.load()?;

        if loaded.is_corrupted() {
            warn!(
                "Ignoring corrupted session file: {}",
                loaded.corruption_error.as_deref().unwrap_or_default()
            );
            store.backup_corrupted()?;
        }

        Ok(loaded.session)
    }

    /// Todo commands need a session; without one nothing is sent.
    async fn mount<'a>(
        &self,
        client: &'a Client,
        store: &'a SessionStore,
        session: Option<&Session>,
    ) -> CliResult<TodoListController<'a, Client>> {
        if session.is_none() {
            return Err(CliError::NotLoggedIn);
        }

        let mut controller = TodoListController::new(client, store)
            .with_refetch_after_mutation(self.refetch_after_mutation);
        let navigation = controller.mount().await;
        Self::settle(navigation, controller.error())?;

        Ok(controller)
    }

    fn settle(navigation: Navigation, error: Option<&str>) -> CliResult<()> {
        if navigation.is_redirect_to(Route::Auth) {
            return Err(CliError::SessionExpired {
                message: error.unwrap_or("Unauthorized").to_string(),
            });
        }

        match error {
            Some(message) => Err(CliError::action(message)),
            None => Ok(()),
        }
    }

    fn render<W: Write>(
        &self,
        controller: &TodoListController<'_, Client>,
        out: &mut W,
    ) -> CliResult<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(controller.todos())?)?;
        } else {
            write!(out, "{}", TodoListView::new(controller.todos(), controller.error()))?;
        }
        Ok(())
    }
}
