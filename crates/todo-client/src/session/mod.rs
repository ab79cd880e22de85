pub(crate) mod error;
pub(crate) mod loaded_session;
pub(crate) mod session_store;

pub use error::{Result as SessionResult, SessionError};
pub use loaded_session::LoadedSession;
pub use session_store::SessionStore;
