/// Pages the client can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Login / register page (the unauthenticated entry point)
    Auth,
    /// The todo list
    Todos,
}

/// What the caller should do after a controller action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Navigation {
    Stay,
    To(Route),
}

impl Navigation {
    pub fn is_redirect_to(&self, route: Route) -> bool {
        *self == Navigation::To(route)
    }
}
