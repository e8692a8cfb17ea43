//! In-memory role session and page gating.
//!
//! The session is a plain client-side flag pair: it is never validated
//! by the backend, carries no expiry, and resets to unauthenticated on
//! reload. It gates which page tree renders and must not be treated as
//! an access-control boundary.

/// Who is using the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Researcher,
    Farmer,
}

impl Role {
    /// Landing page right after login.
    pub fn home(&self) -> Page {
        match self {
            Role::Researcher => Page::Dashboard,
            Role::Farmer => Page::Farmer,
        }
    }
}

/// Client-side session state. Default is unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl Session {
    pub fn authenticated(role: Role) -> Self {
        Self {
            authenticated: true,
            role: Some(role),
        }
    }
}

/// Every reachable view of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    // Researcher tree
    Dashboard,
    Analytics,
    Prediction,
    ModelPerformance,
    Reports,
    LiveMap,
    Simulation,
    Predict,
    // Farmer tree
    Farmer,
}

impl Page {
    /// Role whose tree this page belongs to; `None` for the public
    /// login view.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Page::Login => None,
            Page::Farmer => Some(Role::Farmer),
            _ => Some(Role::Researcher),
        }
    }
}

/// Resolve a navigation request against the current session.
///
/// Unauthenticated sessions, and sessions whose role flag does not
/// match a permitted value, always land on the login view. A request
/// into the other role's tree (or back to login while signed in) lands
/// on the session role's home page.
pub fn resolve(requested: Page, session: &Session) -> Page {
    if !session.authenticated {
        return Page::Login;
    }
    let Some(role) = session.role else {
        return Page::Login;
    };
    match requested.required_role() {
        Some(required) if required == role => requested,
        _ => role.home(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_always_resolves_to_login() {
        let session = Session::default();
        for page in [Page::Dashboard, Page::Farmer, Page::Login, Page::Reports] {
            assert_eq!(resolve(page, &session), Page::Login);
        }
    }

    #[test]
    fn authenticated_without_role_resolves_to_login() {
        let session = Session {
            authenticated: true,
            role: None,
        };
        assert_eq!(resolve(Page::Dashboard, &session), Page::Login);
    }

    #[test]
    fn researcher_reaches_the_researcher_tree() {
        let session = Session::authenticated(Role::Researcher);
        for page in [
            Page::Dashboard,
            Page::Analytics,
            Page::Prediction,
            Page::ModelPerformance,
            Page::Reports,
            Page::LiveMap,
            Page::Simulation,
            Page::Predict,
        ] {
            assert_eq!(resolve(page, &session), page);
        }
    }

    #[test]
    fn cross_tree_requests_land_on_role_home() {
        let researcher = Session::authenticated(Role::Researcher);
        assert_eq!(resolve(Page::Farmer, &researcher), Page::Dashboard);
        assert_eq!(resolve(Page::Login, &researcher), Page::Dashboard);

        let farmer = Session::authenticated(Role::Farmer);
        assert_eq!(resolve(Page::Dashboard, &farmer), Page::Farmer);
        assert_eq!(resolve(Page::Simulation, &farmer), Page::Farmer);
        assert_eq!(resolve(Page::Farmer, &farmer), Page::Farmer);
    }
}
