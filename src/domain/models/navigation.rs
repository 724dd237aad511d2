use serde::{Deserialize, Serialize};

/// Who the header is rendering for. Owned by the session provider,
/// read-only for the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub is_authenticated: bool,
    pub user_name: Option<String>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_name: Option<String>) -> Self {
        Self {
            is_authenticated: true,
            user_name,
        }
    }

    /// User name to show, if any. Only an empty name counts as absent;
    /// anything else is shown as given.
    pub fn display_name(&self) -> Option<&str> {
        self.user_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Destinations reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Search,
    Dashboard,
    Login,
}

impl NavTarget {
    pub fn label(&self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Search => "Search",
            NavTarget::Dashboard => "Dashboard",
            NavTarget::Login => "Login",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Search => "/search",
            NavTarget::Dashboard => "/dashboard",
            NavTarget::Login => "/login",
        }
    }
}

/// One entry of the header's link/action set, shared by the desktop row
/// and the mobile panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link(NavTarget),
    UserLabel(String),
    Logout,
}

impl NavItem {
    /// Whether activating this entry does something (label is display only)
    pub fn is_control(&self) -> bool {
        !matches!(self, NavItem::UserLabel(_))
    }

    pub fn text(&self) -> &str {
        match self {
            NavItem::Link(target) => target.label(),
            NavItem::UserLabel(name) => name.as_str(),
            NavItem::Logout => "Logout",
        }
    }
}

/// Ordered entries for a viewer: Home, Search, then either
/// Dashboard / user label / Logout or Login.
pub fn nav_items(viewer: &Viewer) -> Vec<NavItem> {
    let mut items = vec![NavItem::Link(NavTarget::Home), NavItem::Link(NavTarget::Search)];

    if viewer.is_authenticated {
        items.push(NavItem::Link(NavTarget::Dashboard));
        if let Some(name) = viewer.display_name() {
            items.push(NavItem::UserLabel(name.to_string()));
        }
        items.push(NavItem::Logout);
    } else {
        items.push(NavItem::Link(NavTarget::Login));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(viewer: &Viewer) -> Vec<String> {
        nav_items(viewer).iter().map(|item| item.text().to_string()).collect()
    }

    #[test]
    fn test_anonymous_gets_login_only() {
        let texts = texts(&Viewer::anonymous());
        assert_eq!(texts, vec!["Home", "Search", "Login"]);
        assert!(!texts.iter().any(|t| t == "Dashboard" || t == "Logout"));
    }

    #[test]
    fn test_signed_in_with_name() {
        let texts = texts(&Viewer::signed_in(Some("Alice".to_string())));
        assert_eq!(texts, vec!["Home", "Search", "Dashboard", "Alice", "Logout"]);
        assert!(!texts.iter().any(|t| t == "Login"));
    }

    #[test]
    fn test_signed_in_without_name_has_no_label() {
        let items = nav_items(&Viewer::signed_in(None));
        assert!(items.contains(&NavItem::Link(NavTarget::Dashboard)));
        assert!(items.contains(&NavItem::Logout));
        assert!(!items.iter().any(|item| matches!(item, NavItem::UserLabel(_))));
    }

    #[test]
    fn test_empty_name_is_treated_as_absent() {
        let viewer = Viewer::signed_in(Some(String::new()));
        assert_eq!(viewer.display_name(), None);
        assert_eq!(nav_items(&viewer).len(), 4);
    }

    #[test]
    fn test_whitespace_name_is_shown_untouched() {
        for name in ["   ", " Alice "] {
            let viewer = Viewer::signed_in(Some(name.to_string()));
            assert_eq!(viewer.display_name(), Some(name));
            assert!(nav_items(&viewer).contains(&NavItem::UserLabel(name.to_string())));
        }
    }

    #[test]
    fn test_name_is_ignored_when_signed_out() {
        let viewer = Viewer {
            is_authenticated: false,
            user_name: Some("Alice".to_string()),
        };
        assert_eq!(texts(&viewer), vec!["Home", "Search", "Login"]);
    }

    #[test]
    fn test_target_paths() {
        assert_eq!(NavTarget::Home.path(), "/");
        assert_eq!(NavTarget::Search.path(), "/search");
        assert_eq!(NavTarget::Dashboard.path(), "/dashboard");
        assert_eq!(NavTarget::Login.path(), "/login");
    }

    #[test]
    fn test_only_label_is_not_a_control() {
        assert!(NavItem::Link(NavTarget::Home).is_control());
        assert!(NavItem::Logout.is_control());
        assert!(!NavItem::UserLabel("Alice".to_string()).is_control());
    }
}
