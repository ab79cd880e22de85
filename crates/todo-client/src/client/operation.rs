use std::fmt;

/// Which error family a failed call belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Auth,
    Fetch,
}

/// Backend calls the client can make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    Logout,
    GetTodos,
    AddTodo,
    RemoveTodo,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Login | Self::Register | Self::Logout => OperationKind::Auth,
            Self::GetTodos | Self::AddTodo | Self::RemoveTodo => OperationKind::Fetch,
        }
    }

    /// Flat message shown to the user when the call is rejected
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
            Self::Logout => "Logout failed",
            Self::GetTodos => "Failed to fetch todos",
            Self::AddTodo => "Failed to add todo",
            Self::RemoveTodo => "Failed to delete todo",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}
