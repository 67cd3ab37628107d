//! Client-side route table for the admin.
//!
//! | path     | name    | target              |
//! |----------|---------|---------------------|
//! | `/`      |         | redirect to `/login`|
//! | `/login` | `login` | [`View::Login`]     |
//! | `/users` | `users` | [`View::Users`]     |
//!
//! The table is declared once and never changes. There are no guards or nested
//! routes; views are identified by [`View`] and rendered elsewhere.

use std::{fmt, sync::OnceLock};
use thiserror::Error;

pub mod paths {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const USERS: &str = "/users";
}

pub mod names {
    pub const LOGIN: &str = "login";
    pub const USERS: &str = "users";
}

/// View a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Users,
}

impl View {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Users => "Users",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

impl Route {
    #[must_use]
    pub const fn view(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name: Some(name),
            target: RouteTarget::View(view),
        }
    }

    #[must_use]
    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            target: RouteTarget::Redirect(to),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.unwrap_or("-");
        match self.target {
            RouteTarget::View(view) => write!(formatter, "{:<8} {:<6} {}", self.path, name, view),
            RouteTarget::Redirect(to) => {
                write!(formatter, "{:<8} {:<6} -> {}", self.path, name, to)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
    #[error("route {from} redirects to unknown path {to}")]
    UnknownRedirectTarget {
        from: &'static str,
        to: &'static str,
    },
    #[error("redirect cycle starting at {0}")]
    RedirectCycle(&'static str),
}

/// Where a location ends up after redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub route: &'a Route,
    pub view: View,
    pub redirected_from: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

static APP_ROUTES: OnceLock<RouteTable> = OnceLock::new();

impl RouteTable {
    /// The admin's route table, built on first use.
    pub fn app() -> &'static Self {
        APP_ROUTES.get_or_init(|| Self {
            routes: vec![
                Route::redirect(paths::ROOT, paths::LOGIN),
                Route::view(paths::LOGIN, names::LOGIN, View::Login),
                Route::view(paths::USERS, names::USERS, View::Users),
            ],
        })
    }

    /// Builds a table after checking paths and names are unique and every
    /// redirect lands on a view.
    ///
    /// # Errors
    /// Returns a [`RouteError`] naming the first offending route.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        for (index, route) in routes.iter().enumerate() {
            let earlier = &routes[..index];
            if earlier
                .iter()
                .any(|other| normalize(other.path).eq_ignore_ascii_case(&normalize(route.path)))
            {
                return Err(RouteError::DuplicatePath(route.path));
            }
            if let Some(name) = route.name {
                if earlier.iter().any(|other| other.name == Some(name)) {
                    return Err(RouteError::DuplicateName(name));
                }
            }
        }

        let table = Self { routes };
        for route in &table.routes {
            if let RouteTarget::Redirect(to) = route.target {
                if table.find(to).is_none() {
                    return Err(RouteError::UnknownRedirectTarget {
                        from: route.path,
                        to,
                    });
                }
                if table.resolve(route.path).is_none() {
                    return Err(RouteError::RedirectCycle(route.path));
                }
            }
        }

        Ok(table)
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a location (path with optional query or fragment) to the view it
    /// renders, following redirects. Matching ignores case and a trailing slash.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<Resolution<'_>> {
        let mut route = self.find(location)?;
        let mut redirected_from = Vec::new();

        loop {
            match route.target {
                RouteTarget::View(view) => {
                    return Some(Resolution {
                        route,
                        view,
                        redirected_from,
                    });
                }
                RouteTarget::Redirect(to) => {
                    if redirected_from.len() >= self.routes.len() {
                        return None;
                    }
                    redirected_from.push(route.path);
                    route = self.find(to)?;
                }
            }
        }
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == Some(name))
    }

    /// Path of the named route.
    #[must_use]
    pub fn href(&self, name: &str) -> Option<&'static str> {
        self.by_name(name).map(|route| route.path)
    }

    fn find(&self, location: &str) -> Option<&Route> {
        let wanted = normalize(location);
        self.routes
            .iter()
            .find(|route| normalize(route.path).eq_ignore_ascii_case(&wanted))
    }
}

/// Drops query and fragment, ensures a leading slash, and strips one trailing
/// slash from anything but the root.
fn normalize(location: &str) -> String {
    let end = location
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(location.len());
    let path = location[..end].trim();

    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
