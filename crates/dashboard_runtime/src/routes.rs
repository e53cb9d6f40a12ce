//! Keyed route declarations and their conversion into `leptos_router` definitions.
//!
//! Routes are authored as an ordered key → entry mapping with optional nested mappings.
//! [`flatten_routes`] turns that into router-shaped [`RouteObject`] lists; [`mount_routes`] turns
//! those into `<Route>` definitions.

use std::fmt;

use leptos::*;
use leptos_router::{Outlet, Route, RouteProps, Routes, RoutesProps};

#[derive(Clone, Default)]
/// Ordered key → [`RouteEntry`] mapping. Keys are unique; re-inserting a key replaces in place.
pub struct RouteDefinition {
    entries: Vec<(String, RouteEntry)>,
}

impl RouteDefinition {
    /// Empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `key`.
    pub fn route(mut self, key: impl Into<String>, entry: RouteEntry) -> Self {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((key, entry)),
        }
        self
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for RouteDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[derive(Clone, Default)]
/// One authored route.
pub struct RouteEntry {
    /// Absolute or relative path as authored. Falls back to the key when mounted.
    pub path: Option<String>,
    /// Rendered view.
    pub element: Option<ViewFn>,
    /// Nested routes.
    pub children: Option<RouteDefinition>,
}

impl RouteEntry {
    /// Entry at `path`.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Sets the rendered view.
    pub fn view<F, IV>(mut self, view: F) -> Self
    where
        F: Fn() -> IV + 'static,
        IV: IntoView,
    {
        self.element = Some(ViewFn::from(view));
        self
    }

    /// Sets the nested routes.
    pub fn nested(mut self, children: RouteDefinition) -> Self {
        self.children = Some(children);
        self
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("element", &self.element.is_some())
            .field("children", &self.children)
            .finish()
    }
}

#[derive(Clone)]
/// Router-shaped route produced by [`flatten_routes`].
pub struct RouteObject {
    /// Authoring key.
    pub id: String,
    /// Path as authored.
    pub path: Option<String>,
    /// Rendered view.
    pub element: Option<ViewFn>,
    /// Flattened nested routes; `None` when the entry had no nested mapping.
    pub children: Option<Vec<RouteObject>>,
}

impl RouteObject {
    /// Path handed to the router: the authored path or, failing that, the key.
    pub fn router_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.id)
    }
}

impl fmt::Debug for RouteObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteObject")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("element", &self.element.is_some())
            .field("children", &self.children)
            .finish()
    }
}

/// Converts a keyed route mapping into router-shaped objects, preserving order and nesting.
///
/// Paths are not joined with their parent's; each entry keeps the path it was authored with.
pub fn flatten_routes(routes: &RouteDefinition) -> Vec<RouteObject> {
    routes
        .iter()
        .map(|(key, entry)| RouteObject {
            id: key.to_string(),
            path: entry.path.clone(),
            element: entry.element.clone(),
            children: entry.children.as_ref().map(flatten_routes),
        })
        .collect()
}

fn route_view(route: RouteObject) -> View {
    let path = route.router_path().to_string();
    let element = route
        .element
        .unwrap_or_else(|| ViewFn::from(|| view! { <Outlet/> }));
    let props = RouteProps::builder()
        .path(path)
        .view(move || element.run());

    match route.children {
        Some(children) => {
            let nested: Children =
                Box::new(move || Fragment::new(children.into_iter().map(route_view).collect()));
            Route(props.children(nested).build()).into_view()
        }
        None => Route(props.build()).into_view(),
    }
}

/// Builds `<Route>` definitions for `routes`. Entries without an element render an `<Outlet/>`.
pub fn mount_routes(routes: Vec<RouteObject>) -> Fragment {
    Fragment::new(routes.into_iter().map(route_view).collect())
}

#[component]
/// `<Routes>` block for a flattened route list.
pub fn RouteTree(routes: Vec<RouteObject>) -> impl IntoView {
    Routes(
        RoutesProps::builder()
            .children(Box::new(move || mount_routes(routes)))
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(routes: &[RouteObject]) -> Vec<&str> {
        routes.iter().map(|route| route.id.as_str()).collect()
    }

    #[test]
    fn flat_input_keeps_length_and_has_no_children() {
        let routes = RouteDefinition::new()
            .route("home", RouteEntry::at("/"))
            .route("users", RouteEntry::at("/users"))
            .route("settings", RouteEntry::at("/settings"));

        let flat = flatten_routes(&routes);

        assert_eq!(flat.len(), routes.len());
        assert_eq!(ids(&flat), vec!["home", "users", "settings"]);
        assert!(flat.iter().all(|route| route.children.is_none()));
    }

    #[test]
    fn nested_children_are_flattened_in_order() {
        let routes = RouteDefinition::new().route(
            "a",
            RouteEntry::default().nested(
                RouteDefinition::new()
                    .route("b", RouteEntry::default())
                    .route("c", RouteEntry::default()),
            ),
        );

        let flat = flatten_routes(&routes);

        assert_eq!(ids(&flat), vec!["a"]);
        let children = flat[0].children.as_deref().expect("a has children");
        assert_eq!(ids(children), vec!["b", "c"]);
    }

    #[test]
    fn paths_are_not_joined_and_missing_paths_use_the_key() {
        let routes = RouteDefinition::new().route(
            "users",
            RouteEntry::at("/users").nested(
                RouteDefinition::new()
                    .route(":id", RouteEntry::default())
                    .route("list", RouteEntry::at("")),
            ),
        );

        let flat = flatten_routes(&routes);
        let children = flat[0].children.as_deref().expect("users has children");

        assert_eq!(flat[0].router_path(), "/users");
        assert_eq!(children[0].router_path(), ":id");
        assert_eq!(children[1].router_path(), "");
    }

    #[test]
    fn repeated_key_replaces_in_place() {
        let routes = RouteDefinition::new()
            .route("home", RouteEntry::at("/"))
            .route("about", RouteEntry::at("/about"))
            .route("home", RouteEntry::at("/home"));

        let flat = flatten_routes(&routes);

        assert_eq!(ids(&flat), vec!["home", "about"]);
        assert_eq!(flat[0].path.as_deref(), Some("/home"));
    }

    #[test]
    fn empty_nested_mapping_yields_empty_children() {
        let routes =
            RouteDefinition::new().route("shell", RouteEntry::at("/").nested(RouteDefinition::new()));

        let flat = flatten_routes(&routes);

        assert_eq!(flat[0].children.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn flattening_keeps_elements() {
        let routes = RouteDefinition::new()
            .route("home", RouteEntry::at("/").view(|| "home"))
            .route("bare", RouteEntry::at("/bare"));

        let flat = flatten_routes(&routes);

        assert!(flat[0].element.is_some());
        assert!(flat[1].element.is_none());
    }
}
