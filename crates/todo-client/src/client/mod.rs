pub(crate) mod backend;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod operation;
pub(crate) mod session_jar;

pub use backend::TodoBackend;
pub use client::{Client, DEFAULT_SESSION_COOKIE};
pub use error::{ClientError, Result as ClientResult};
pub use operation::{Operation, OperationKind};
