use std::fmt;

use crate::api::guards::{authorize, Decision};
use crate::db::models::User;
use crate::db::types::Role;
use crate::services::auth::Session;

const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Courses,
    Assignments,
    Users,
}

impl Route {
    pub const HOME: Route = Route::Dashboard;
    pub const ALL: [Route; 5] =
        [Route::Login, Route::Dashboard, Route::Courses, Route::Assignments, Route::Users];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Courses => "/courses",
            Route::Assignments => "/assignments",
            Route::Users => "/users",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Courses => "Courses",
            Route::Assignments => "Assignments",
            Route::Users => "Users",
        }
    }

    /// Query strings, fragments and trailing slashes are ignored. Anything
    /// unrecognised lands on the home route.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        Route::ALL.into_iter().find(|route| route.path() == path).unwrap_or(Route::HOME)
    }

    pub fn is_public(self) -> bool {
        self == Route::Login
    }

    /// `None` admits any signed-in user.
    pub fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Route::Users => Some(ADMIN_ONLY),
            Route::Login | Route::Dashboard | Route::Courses | Route::Assignments => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The route actually rendered for a navigation attempt.
pub fn resolve(session: &Session, requested: Route) -> Route {
    if requested.is_public() {
        return if session.is_authenticated() { Route::HOME } else { requested };
    }

    match authorize(session, requested.required_roles()) {
        Decision::Allow => requested,
        Decision::RedirectTo(target) => {
            tracing::debug!(requested = %requested, target = %target, "Navigation redirected");
            target
        }
    }
}

/// Sidebar entries for the signed-in user, in display order.
pub fn navigation(user: &User) -> Vec<Route> {
    let session = Session::Authenticated(user.clone());
    Route::ALL
        .into_iter()
        .filter(|route| !route.is_public())
        .filter(|route| authorize(&session, route.required_roles()) == Decision::Allow)
        .collect()
}
