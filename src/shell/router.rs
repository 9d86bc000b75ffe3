// Route table rendered into the shell's content outlet

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    /// Sidebar label
    pub label: String,
    /// Page markup, inserted unescaped
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(
        mut self,
        path: impl Into<String>,
        label: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.routes.push(Route {
            path: normalize(&path.into()).to_string(),
            label: label.into(),
            content: content.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// First route whose path equals `location` (query, fragment and
    /// trailing slash ignored)
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let wanted: &str = normalize(location);
        self.routes.iter().find(|route| route.path == wanted)
    }
}

fn normalize(location: &str) -> &str {
    let path: &str = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Application pages. None are defined yet.
pub fn app_routes() -> RouteTable {
    RouteTable::new()
}
