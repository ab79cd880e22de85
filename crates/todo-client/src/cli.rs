use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Manage your todo list on a remote todo server")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (defaults to api.base_url from config.toml or TODO_API_URL)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Print todos as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account (log in afterwards)
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Full name
        #[arg(long)]
        name: String,
    },

    /// End the session on the server and forget it locally
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List your todos
    List,

    /// Add a todo
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a todo by id
    Remove {
        /// Todo id as shown by `todo list`
        id: String,
    },
}
