use crate::controller::{AddTodoForm, Navigation, Route};
use crate::session::SessionStore;
use crate::view::TodoItemView;
use crate::{ClientError, TodoBackend};

use log::{debug, error, info, warn};
use todo_core::{Todo, TodoDraft};

pub const LOAD_FAILED: &str = "Failed to load todos";
pub const ADD_FAILED: &str = "Failed to add todo";
pub const DELETE_FAILED: &str = "Failed to delete todo";
pub const LOGOUT_FAILED: &str = "Failed to logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Ready,
}

/// State behind the todo list page.
///
/// The list is patched locally from each successful response (append on add,
/// filter on delete) unless `refetch_after_mutation` is set, in which case the
/// whole list is reloaded instead. Failed calls leave the list untouched.
pub struct TodoListController<'a, B: TodoBackend> {
    backend: &'a B,
    store: &'a SessionStore,
    refetch_after_mutation: bool,
    phase: ViewPhase,
    todos: Vec<Todo>,
    form: AddTodoForm,
    error: Option<String>,
}

impl<'a, B: TodoBackend> TodoListController<'a, B> {
    pub fn new(backend: &'a B, store: &'a SessionStore) -> Self {
        Self {
            backend,
            store,
            refetch_after_mutation: false,
            phase: ViewPhase::Loading,
            todos: Vec::new(),
            form: AddTodoForm::default(),
            error: None,
        }
    }

    pub fn with_refetch_after_mutation(mut self, refetch: bool) -> Self {
        self.refetch_after_mutation = refetch;
        self
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn items(&self) -> impl Iterator<Item = TodoItemView<'_>> {
        self.todos.iter().map(TodoItemView::new)
    }

    pub fn form(&self) -> &AddTodoForm {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Page entry: load the list.
    pub async fn mount(&mut self) -> Navigation {
        self.load().await
    }

    pub async fn load(&mut self) -> Navigation {
        self.phase = ViewPhase::Loading;

        let navigation = match self.backend.get_todos().await {
            Ok(todos) => {
                debug!("Loaded {} todos", todos.len());
                self.todos = todos;
                self.error = None;
                Navigation::Stay
            }
            Err(e) => self.fail(LOAD_FAILED, &e),
        };

        self.phase = ViewPhase::Ready;
        navigation
    }

    pub fn open_add_form(&mut self) {
        self.form.open();
    }

    pub fn cancel_add_form(&mut self) {
        self.form.close();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Submit the add form. A blank title is ignored without a network call.
    pub async fn submit_add(&mut self) -> Navigation {
        let draft = match TodoDraft::new(self.form.title.as_str(), self.form.description.as_str())
        {
            Ok(draft) => draft,
            Err(e) => {
                debug!("Add skipped: {e}");
                return Navigation::Stay;
            }
        };

        match self.backend.add_todo(&draft).await {
            Ok(todo) => {
                info!("Added todo {:?}", todo.id());
                self.form.reset();
                self.error = None;
                if self.refetch_after_mutation {
                    return self.load().await;
                }
                self.todos.push(todo);
                Navigation::Stay
            }
            Err(e) => self.fail(ADD_FAILED, &e),
        }
    }

    /// Delete the todo with `id`; on success it disappears from the list.
    pub async fn delete(&mut self, id: &str) -> Navigation {
        match self.backend.remove_todo(id).await {
            Ok(()) => {
                info!("Deleted todo {id}");
                self.error = None;
                if self.refetch_after_mutation {
                    return self.load().await;
                }
                self.todos.retain(|todo| !todo.has_id(id));
                Navigation::Stay
            }
            Err(e) => self.fail(DELETE_FAILED, &e),
        }
    }

    /// Log out; the persisted session is removed and the page is left.
    pub async fn logout(&mut self) -> Navigation {
        match self.backend.logout().await {
            Ok(()) => {
                self.backend.clear_session();
                if let Err(e) = self.store.clear() {
                    error!("Logged out but could not clear session: {e}");
                }
                self.reset();
                Navigation::To(Route::Auth)
            }
            Err(e) => {
                warn!("Logout failed: {e}");
                self.error = Some(LOGOUT_FAILED.to_string());
                Navigation::Stay
            }
        }
    }

    /// Record the banner; an unauthorized answer also discards local state
    /// and sends the user back to the auth page.
    fn fail(&mut self, message: &str, err: &ClientError) -> Navigation {
        warn!("{message}: {err}");
        self.error = Some(message.to_string());

        if err.is_unauthorized() {
            info!("Backend rejected the session, returning to login");
            self.reset();
            return Navigation::To(Route::Auth);
        }

        Navigation::Stay
    }

    fn reset(&mut self) {
        self.todos.clear();
        self.form.reset();
    }
}
