//! Route table and navigation guard.

mod route;

pub use route::Route;

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::session::Session;

/// Entry point for signed-out users.
pub const LOGIN_PATH: &str = "/login";

/// Something that can move the user to another location.
pub trait Redirect: Send + Sync {
    /// Go to `to` without running the guard.
    fn redirect(&self, to: &str);
}

/// A path matched against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Route name.
    pub name: String,
    /// Concrete path that matched.
    pub path: String,
    /// Values of `:name` segments.
    pub params: BTreeMap<String, String>,
    /// Whether the route needs a signed-in session.
    pub requires_auth: bool,
}

/// Outcome of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The target route is entered.
    Allowed(ResolvedRoute),
    /// The guard sent the user elsewhere.
    Redirected {
        /// Route that was refused.
        from: ResolvedRoute,
        /// Where the user was sent.
        to: String,
    },
}

impl Navigation {
    /// Whether navigation ended on the requested route.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Navigation::Allowed(_))
    }

    /// Path the user ends up on.
    pub fn location(&self) -> &str {
        match self {
            Navigation::Allowed(route) => &route.path,
            Navigation::Redirected { to, .. } => to,
        }
    }
}

/// The guard: protected routes need a signed-in session.
pub fn guard(route: ResolvedRoute, logged_in: bool) -> Navigation {
    if route.requires_auth && !logged_in {
        Navigation::Redirected {
            from: route,
            to: LOGIN_PATH.to_owned(),
        }
    } else {
        Navigation::Allowed(route)
    }
}

/// Route table plus the current location.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    current: RwLock<String>,
}

impl Router {
    /// Create a router over `routes`, starting at `/`.
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            current: RwLock::new("/".to_owned()),
        }
    }

    /// Router with the application's route table.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(vec![
            Route::new(LOGIN_PATH, "login")?,
            Route::new("/register", "register")?,
            Route::new("/", "home")?.redirect_to("/posts"),
            Route::new("/posts", "posts")?,
            Route::new("/post/:id", "post-detail")?,
            Route::new("/shops", "shops")?,
            Route::new("/shop/:id", "shop-detail")?,
            Route::new("/profile", "profile")?.requires_auth(),
            Route::new("/follow", "follow")?.requires_auth(),
        ]))
    }

    /// The route table.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Match `path`, following static redirects.
    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute> {
        let mut target = strip_query(path).to_owned();

        // Each hop must land on a different route; more hops than routes is a loop.
        for _ in 0..=self.routes.len() {
            let (route, params) = self
                .routes
                .iter()
                .find_map(|r| r.matches(&target).map(|p| (r, p)))
                .ok_or_else(|| Error::RouteNotFound(target.clone()))?;

            match &route.redirect {
                Some(next) => target = next.clone(),
                None => {
                    return Ok(ResolvedRoute {
                        name: route.name.clone(),
                        path: target,
                        params,
                        requires_auth: route.requires_auth,
                    })
                }
            }
        }

        Err(Error::InvalidArgument(format!(
            "redirect loop while resolving '{}'",
            path
        )))
    }

    /// Navigate to `path`, running the guard once against `session`.
    pub fn navigate(&self, session: &Session, path: &str) -> Result<Navigation> {
        let route = self.resolve(path)?;
        let navigation = guard(route, session.is_logged_in());

        if let Navigation::Redirected { from, to } = &navigation {
            log::debug!("Guard redirected {} to {}", from.path, to);
        }
        self.set_current(navigation.location());

        Ok(navigation)
    }

    /// Current location.
    pub fn current(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_current(&self, path: &str) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = path.to_owned();
    }
}

impl Redirect for Router {
    fn redirect(&self, to: &str) {
        self.set_current(strip_query(to));
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, TOKEN_KEY};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn session(token: Option<&str>) -> Session {
        let storage = MemoryStorage::new();
        if let Some(token) = token {
            crate::storage::KeyValueStorage::set(&storage, TOKEN_KEY, token).unwrap();
        }
        Session::initialize(Arc::new(storage))
    }

    #[test]
    fn test_guard_redirects_when_logged_out() {
        let router = Router::standard().unwrap();
        let nav = router.navigate(&session(None), "/profile").unwrap();

        assert!(!nav.is_allowed());
        assert_eq!(nav.location(), LOGIN_PATH);
        assert_eq!(router.current(), LOGIN_PATH);
    }

    #[test]
    fn test_guard_allows_when_logged_in() {
        let router = Router::standard().unwrap();
        let nav = router.navigate(&session(Some("abc")), "/follow").unwrap();

        assert!(nav.is_allowed());
        assert_eq!(router.current(), "/follow");
    }

    #[test]
    fn test_public_routes_need_no_session() {
        let router = Router::standard().unwrap();
        for path in ["/login", "/register", "/posts", "/shops", "/post/3", "/shop/9"] {
            let nav = router.navigate(&session(None), path).unwrap();
            assert!(nav.is_allowed(), "{} should be public", path);
        }
    }

    #[test]
    fn test_home_redirects_before_guard() {
        let router = Router::standard().unwrap();
        let route = router.resolve("/").unwrap();

        assert_eq!(route.name, "posts");
        assert_eq!(route.path, "/posts");
    }

    #[test]
    fn test_params_and_query() {
        let router = Router::standard().unwrap();
        let route = router.resolve("/post/17?from=feed").unwrap();

        assert_eq!(route.name, "post-detail");
        assert_eq!(route.params.get("id").map(String::as_str), Some("17"));
    }

    #[test]
    fn test_unknown_route() {
        let router = Router::standard().unwrap();
        assert!(matches!(
            router.resolve("/nowhere"),
            Err(Error::RouteNotFound(p)) if p == "/nowhere"
        ));
    }

    #[test]
    fn test_redirect_loop() {
        let router = Router::new(vec![
            Route::new("/a", "a").unwrap().redirect_to("/b"),
            Route::new("/b", "b").unwrap().redirect_to("/a"),
        ]);
        assert!(matches!(router.resolve("/a"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_logout_moves_router_to_login() {
        let router = Arc::new(Router::standard().unwrap());
        let session = session(Some("abc")).with_redirect(router.clone());

        router.navigate(&session, "/profile").unwrap();
        assert_eq!(router.current(), "/profile");

        session.logout();
        assert_eq!(router.current(), LOGIN_PATH);

        let nav = router.navigate(&session, "/profile").unwrap();
        assert!(!nav.is_allowed());
    }
}
