use leptos::{ev::MouseEvent, *};
use leptos_router::use_location;
use system_ui::{
    BreadcrumbItem, BreadcrumbList, Cluster, IconButton, IconName, NavLink, NavList, ShellSidebar,
};

use super::SIDEBAR_ID;
use crate::{
    model::{NavImage, NavItem, SecondaryNavEntry},
    runtime_context::use_layout,
};

/// Whether `route` should be highlighted for `pathname`. `/` only matches itself.
pub fn is_active_route(route: &str, pathname: &str) -> bool {
    let route = route.trim_end_matches('/');
    let pathname = pathname.trim_end_matches('/');
    if route.is_empty() {
        return pathname.is_empty();
    }
    pathname == route
        || pathname
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn click_handler(on_click: Option<Callback<()>>) -> Option<Callback<MouseEvent>> {
    on_click.map(|on_click| Callback::new(move |_: MouseEvent| on_click.call(())))
}

/// Owned breadcrumb entries paired with whether each is the current page (the last one).
pub fn breadcrumb_trail(items: &[NavItem]) -> Vec<(NavItem, bool)> {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, item)| (item, index == last))
        .collect()
}

fn nav_link(item: NavItem, collapsed: Signal<bool>) -> View {
    let location = use_location();
    let route = item.route.clone();
    let active = Signal::derive(move || {
        route
            .as_deref()
            .is_some_and(|route| location.pathname.with(|path| is_active_route(route, path)))
    });
    let (icon, image_src) = match item.image {
        Some(NavImage::Icon(icon)) => (Some(icon), None),
        Some(NavImage::Source(src)) => (None, Some(src)),
        None => (None, None),
    };

    view! {
        <NavLink
            label=item.text
            href=item.route
            icon=icon
            image_src=image_src
            active=active
            collapsed=collapsed
            on_click=click_handler(item.on_click)
        />
    }
    .into_view()
}

#[component]
/// Primary navigation column with a collapse toggle.
pub fn Sidebar(#[prop(into)] items: Vec<NavItem>) -> impl IntoView {
    let layout = use_layout();
    let collapsed = Signal::derive(move || layout.sidebar_collapsed());

    view! {
        <ShellSidebar
            id=SIDEBAR_ID
            visible=Signal::derive(move || layout.show_sidebar())
            collapsed=collapsed
        >
            <NavList aria_label="Primary" collapsed=collapsed>
                {items
                    .into_iter()
                    .map(|item| nav_link(item, collapsed))
                    .collect_view()}
            </NavList>
            <IconButton
                icon=IconName::ChevronLeft
                aria_label=Signal::derive(move || {
                    let label = if collapsed.get() { "Expand navigation" } else { "Collapse navigation" };
                    label.to_string()
                })
                aria_expanded=Signal::derive(move || !collapsed.get())
                ui_slot="collapse-toggle"
                on_click=Callback::new(move |_| layout.toggle_sidebar_collapsed())
            />
        </ShellSidebar>
    }
}

#[component]
/// Breadcrumb trail from the layout context. The last entry is the current page.
pub fn Breadcrumbs() -> impl IntoView {
    let layout = use_layout();

    move || {
        let items = layout.breadcrumbs();
        if items.is_empty() {
            return ().into_view();
        }
        view! {
            <BreadcrumbList>
                {breadcrumb_trail(&items)
                    .into_iter()
                    .map(|(item, current)| {
                        view! {
                            <BreadcrumbItem
                                href=item.route
                                current=current
                                on_click=click_handler(item.on_click)
                            >
                                {item.text}
                            </BreadcrumbItem>
                        }
                    })
                    .collect_view()}
            </BreadcrumbList>
        }
        .into_view()
    }
}

#[component]
/// Contextual links declared by the current page.
pub fn SecondaryNav() -> impl IntoView {
    let layout = use_layout();
    let collapsed = Signal::derive(|| false);

    move || {
        let entries = layout.secondary_nav();
        if entries.is_empty() {
            return ().into_view();
        }
        view! {
            <NavList aria_label="Section" layout_class="dashboard-secondary-nav">
                {entries
                    .iter()
                    .map(|entry| match entry {
                        SecondaryNavEntry::Item(item) => nav_link(item.clone(), collapsed),
                        SecondaryNavEntry::Custom(render) => {
                            view! { <li data-ui-kind="nav-custom">{render.run()}</li> }.into_view()
                        }
                    })
                    .collect_view()}
            </NavList>
        }
        .into_view()
    }
}

#[component]
/// Page-level action buttons declared by the current page.
pub fn ActionList() -> impl IntoView {
    let layout = use_layout();

    move || {
        let actions = layout.actions();
        if actions.is_empty() {
            return ().into_view();
        }
        view! {
            <Cluster ui_slot="page-actions">
                {actions.iter().map(|action| action.run()).collect_view()}
            </Cluster>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn breadcrumb_trail_marks_only_last_entry_current() {
        let items = vec![
            NavItem::link("Home", "/"),
            NavItem::link("Users", "/users"),
            NavItem::new("Ada"),
        ];

        let trail = breadcrumb_trail(&items);

        let flags: Vec<(&str, bool)> = trail
            .iter()
            .map(|(item, current)| (item.text.as_str(), *current))
            .collect();
        assert_eq!(flags, vec![("Home", false), ("Users", false), ("Ada", true)]);
        assert!(breadcrumb_trail(&[]).is_empty());
    }

    #[test]
    fn root_route_only_matches_root() {
        assert!(is_active_route("/", "/"));
        assert!(!is_active_route("/", "/users"));
    }

    #[test]
    fn nested_paths_keep_section_active() {
        assert!(is_active_route("/users", "/users"));
        assert!(is_active_route("/users", "/users/42"));
        assert!(is_active_route("/users/", "/users"));
        assert!(!is_active_route("/users", "/users-archive"));
        assert!(!is_active_route("/settings", "/users"));
    }
}
