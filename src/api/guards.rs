use crate::api::router::Route;
use crate::db::types::Role;
use crate::services::auth::Session;

/// Outcome of checking a session against a route's role requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(Route),
}

/// Signed-out sessions go to the login route. A signed-in user whose role is
/// not listed goes home. `None` means any signed-in user is allowed.
pub fn authorize(session: &Session, roles: Option<&[Role]>) -> Decision {
    let Some(user) = session.user() else {
        return Decision::RedirectTo(Route::Login);
    };

    match roles {
        Some(roles) if !roles.contains(&user.role) => Decision::RedirectTo(Route::HOME),
        _ => Decision::Allow,
    }
}
