//! Route table of the dashboard shell.

/// Every page reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Zones,
    Plans,
    Contact,
    Users,
    Settings,
}

impl AppRoute {
    /// Absolute path, e.g. `/zonas`.
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "/",
            AppRoute::Zones => "/zonas",
            AppRoute::Plans => "/planes",
            AppRoute::Contact => "/contacto",
            AppRoute::Users => "/usuarios",
            AppRoute::Settings => "/configuracion",
        }
    }

    /// Path without the leading slash, as the router's static segment.
    pub fn segment(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Translation key of the sidebar label.
    pub fn label_key(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "sidebar.dashboard",
            AppRoute::Zones => "sidebar.zones",
            AppRoute::Plans => "sidebar.plans",
            AppRoute::Contact => "sidebar.contact",
            AppRoute::Users => "sidebar.users",
            AppRoute::Settings => "sidebar.settings",
        }
    }

    pub fn page_title_key(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "pages.dashboard.title",
            AppRoute::Zones => "pages.zones.title",
            AppRoute::Plans => "pages.plans.title",
            AppRoute::Contact => "pages.contact.title",
            AppRoute::Users => "pages.users.title",
            AppRoute::Settings => "pages.settings.title",
        }
    }

    /// Icon name understood by the frontend icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            AppRoute::Dashboard => "layout-dashboard",
            AppRoute::Zones => "map-pin",
            AppRoute::Plans => "wifi",
            AppRoute::Contact => "phone",
            AppRoute::Users => "users",
            AppRoute::Settings => "settings",
        }
    }

    /// Sidebar order.
    pub fn all() -> [AppRoute; 6] {
        [
            AppRoute::Dashboard,
            AppRoute::Zones,
            AppRoute::Plans,
            AppRoute::Contact,
            AppRoute::Users,
            AppRoute::Settings,
        ]
    }

    /// Exact match, ignoring one trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path {
            "/" => "/",
            other => other.strip_suffix('/').unwrap_or(other),
        };
        Self::all().into_iter().find(|route| route.path() == trimmed)
    }

    /// Whether a sidebar link for `self` should render as active at `path`.
    pub fn is_active(&self, path: &str) -> bool {
        Self::from_path(path) == Some(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(AppRoute::from_path("/zonas/"), Some(AppRoute::Zones));
        assert_eq!(AppRoute::from_path("/planes/x"), None);
        assert_eq!(AppRoute::from_path(""), None);
    }

    #[test]
    fn dashboard_is_only_active_at_root() {
        assert!(AppRoute::Dashboard.is_active("/"));
        assert!(!AppRoute::Dashboard.is_active("/zonas"));
        assert!(AppRoute::Zones.is_active("/zonas"));
    }

    #[test]
    fn segments_drop_the_leading_slash() {
        assert_eq!(AppRoute::Dashboard.segment(), "");
        assert_eq!(AppRoute::Settings.segment(), "configuracion");
    }
}
