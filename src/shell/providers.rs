// Context providers wrapped around the shell, outermost first

/// Fixed nesting: theme > auth > notifications > router
pub const PROVIDER_ORDER: [ProviderKind; 4] = [
    ProviderKind::Theme,
    ProviderKind::Auth,
    ProviderKind::Notifications,
    ProviderKind::Router,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Theme,
    Auth,
    Notifications,
    Router,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Auth => "auth",
            Self::Notifications => "notifications",
            Self::Router => "router",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    pub theme: Theme,
}

/// Signed-in user, if any. No authentication happens in the shell itself.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub user: Option<String>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationContext {
    pub notifications: Vec<Notification>,
}

impl NotificationContext {
    pub fn count(&self) -> usize {
        self.notifications.len()
    }
}
