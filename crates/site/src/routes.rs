//! Route tree and primary navigation for the dashboard.

use dashboard_runtime::{FeatureFlags, NavItem, RouteDefinition, RouteEntry};
use system_ui::IconName;

use crate::pages::{
    ComponentsPage, DashboardHome, MessagesPage, NotFoundPage, SettingsPage, UserDetailPage,
    UsersPage,
};

/// Keyed route tree. The users section nests its list and detail views under one parent.
pub fn route_tree(features: &FeatureFlags) -> RouteDefinition {
    let mut routes = RouteDefinition::new()
        .route("home", RouteEntry::at("/").view(DashboardHome))
        .route(
            "users",
            RouteEntry::at("/users").nested(
                RouteDefinition::new()
                    .route("list", RouteEntry::at("").view(UsersPage))
                    .route(":id", RouteEntry::default().view(UserDetailPage)),
            ),
        )
        .route("settings", RouteEntry::at("/settings").view(SettingsPage))
        .route("components", RouteEntry::at("/components").view(ComponentsPage));

    if features.messages_demo {
        routes = routes.route("messages", RouteEntry::at("/messages").view(MessagesPage));
    }

    routes.route("not-found", RouteEntry::at("/*any").view(NotFoundPage))
}

/// Sidebar entries matching [`route_tree`].
pub fn primary_nav(features: &FeatureFlags) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::link("Dashboard", "/").with_icon(IconName::Dashboard),
        NavItem::link("Users", "/users").with_icon(IconName::People),
        NavItem::link("Components", "/components").with_icon(IconName::Palette),
    ];
    if features.messages_demo {
        items.push(NavItem::link("Messages", "/messages").with_icon(IconName::Alert));
    }
    items.push(NavItem::link("Settings", "/settings").with_icon(IconName::Settings));
    items
}

#[cfg(test)]
mod tests {
    use dashboard_runtime::flatten_routes;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn users_section_is_nested_and_catch_all_is_last() {
        let routes = flatten_routes(&route_tree(&FeatureFlags::default()));
        let ids: Vec<&str> = routes.iter().map(|route| route.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["home", "users", "settings", "components", "messages", "not-found"]
        );
        let users = routes[1].children.as_deref().expect("users children");
        assert_eq!(users[1].router_path(), ":id");
        assert!(routes[1].element.is_none());
    }

    #[test]
    fn disabled_messages_demo_drops_route_and_link() {
        let features = FeatureFlags {
            messages_demo: false,
            ..FeatureFlags::default()
        };

        let routes = flatten_routes(&route_tree(&features));
        assert!(routes.iter().all(|route| route.id != "messages"));
        assert!(primary_nav(&features)
            .iter()
            .all(|item| item.route.as_deref() != Some("/messages")));
    }

    #[test]
    fn every_sidebar_link_has_a_route() {
        let routes = flatten_routes(&route_tree(&FeatureFlags::default()));
        for item in primary_nav(&FeatureFlags::default()) {
            let route = item.route.expect("sidebar items navigate");
            assert!(
                routes.iter().any(|entry| entry.router_path() == route),
                "no route for {route}"
            );
        }
    }
}
