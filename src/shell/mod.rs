//! Frontend shell: context providers, layout chrome and a router outlet,
//! rendered to HTML.

pub mod layout;
pub mod providers;
pub mod router;

use askama::Template;

use layout::{LayoutTemplate, NavLink};
use providers::{AuthContext, NotificationContext, ThemeContext};
use router::RouteTable;

pub const APP_TITLE: &str = "Visitor Ticketing System";

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Failed to render shell: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Shell {
    pub theme: ThemeContext,
    pub auth: AuthContext,
    pub notifications: NotificationContext,
    pub routes: RouteTable,
}

impl Shell {
    /// Shell with default contexts: light theme, no user, no notifications
    pub fn new(routes: RouteTable) -> Self {
        Self {
            routes,
            ..Self::default()
        }
    }

    /// Renders the shell for `location`. An unmatched location leaves the
    /// outlet empty.
    pub fn render(&self, location: &str) -> Result<String, ShellError> {
        let active = self.routes.resolve(location);

        let nav: Vec<NavLink<'_>> = self
            .routes
            .iter()
            .map(|route| NavLink {
                path: &route.path,
                label: &route.label,
                active: active.is_some_and(|a| a.path == route.path),
            })
            .collect();

        let template = LayoutTemplate {
            title: APP_TITLE,
            theme: self.theme.theme.as_str(),
            authenticated: self.auth.is_authenticated(),
            notification_count: self.notifications.count(),
            location,
            nav,
            outlet: active.map(|route| route.content.as_str()).unwrap_or_default(),
        };

        Ok(template.render()?)
    }
}
