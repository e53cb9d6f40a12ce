//! Per-route page declarations.
//!
//! A [`Page`] pushes its breadcrumbs, secondary nav, actions, and tab title into the layout
//! context once per mount. Later prop changes are ignored; a page whose navigation changes after
//! mount calls the [`crate::LayoutContext`] setters itself.

use std::rc::Rc;

use leptos::*;

use crate::{
    config::{use_dashboard_config, DashboardConfig},
    model::{ActionViews, NavItem, NavItems, SecondaryNavEntries, SecondaryNavEntry},
    runtime_context::{use_layout, LayoutContext},
};

/// Builds the tab title `"<title> : <app name>"`. The separator is kept when `title` is empty.
pub fn compose_document_title(title: Option<&str>, app_name: &str) -> String {
    format!("{} : {app_name}", title.unwrap_or_default())
}

#[derive(Clone, Default)]
/// Static layout metadata declared by a routed page.
pub struct PageDeclaration {
    /// Page title, without the app name.
    pub title: Option<String>,
    /// Breadcrumb trail.
    pub breadcrumbs: NavItems,
    /// Secondary nav entries.
    pub secondary_nav: SecondaryNavEntries,
    /// Page actions.
    pub actions: ActionViews,
}

impl PageDeclaration {
    /// Writes every declared field into `layout`, replacing whatever the previous page set.
    pub fn apply(&self, layout: LayoutContext, app_name: &str) {
        layout.set_breadcrumbs(Rc::clone(&self.breadcrumbs));
        layout.set_secondary_nav(Rc::clone(&self.secondary_nav));
        layout.set_actions(Rc::clone(&self.actions));
        layout.set_document_title(compose_document_title(self.title.as_deref(), app_name));
    }
}

/// Applies `declaration` to `layout` using the app name from `config`.
///
/// Called from the [`Page`] body, which runs once per mount. Nothing here is tracked, so later
/// layout writes by the page are never overwritten.
pub fn declare_page(
    layout: LayoutContext,
    config: &DashboardConfig,
    declaration: &PageDeclaration,
) {
    untrack(|| declaration.apply(layout, &config.app_name));
}

#[component]
/// Declares the layout metadata of a routed page and renders its body.
pub fn Page(
    /// Tab title, without the app name.
    #[prop(optional, into)]
    title: Option<String>,
    /// Breadcrumb trail, replacing the previous page's.
    #[prop(optional, into)]
    breadcrumbs: Vec<NavItem>,
    /// Section links shown under the header.
    #[prop(optional, into)]
    secondary_nav: Vec<SecondaryNavEntry>,
    /// Buttons rendered next to the breadcrumbs.
    #[prop(optional, into)]
    actions: Vec<ViewFn>,
    children: Children,
) -> impl IntoView {
    let layout = use_layout();
    let config = use_dashboard_config();
    let declaration = PageDeclaration {
        title,
        breadcrumbs: breadcrumbs.into(),
        secondary_nav: secondary_nav.into(),
        actions: actions.into(),
    };

    declare_page(layout, &config, &declaration);

    view! {
        <div class="dashboard-page" data-ui-kind="page">
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::LayoutState;

    fn declaration(title: Option<&str>, crumbs: &[&str]) -> PageDeclaration {
        PageDeclaration {
            title: title.map(str::to_string),
            breadcrumbs: crumbs
                .iter()
                .map(|crumb| NavItem::new(*crumb))
                .collect::<Vec<_>>()
                .into(),
            ..PageDeclaration::default()
        }
    }

    #[test]
    fn title_includes_app_name() {
        assert_eq!(
            compose_document_title(Some("Dashboard"), "Moo"),
            "Dashboard : Moo"
        );
    }

    #[test]
    fn empty_title_keeps_separator() {
        assert_eq!(compose_document_title(None, "Moo"), " : Moo");
        assert_eq!(compose_document_title(Some(""), "Moo"), " : Moo");
    }

    fn moo() -> DashboardConfig {
        DashboardConfig {
            app_name: "Moo".to_string(),
            ..DashboardConfig::default()
        }
    }

    #[test]
    fn declared_page_uses_configured_app_name() {
        let _ = leptos::create_runtime();
        let layout = LayoutContext::new(LayoutState::default());

        declare_page(layout, &moo(), &declaration(Some("Dashboard"), &["Home"]));

        assert_eq!(layout.document_title(), "Dashboard : Moo");
        assert_eq!(layout.breadcrumbs().len(), 1);
    }

    #[test]
    fn later_layout_writes_are_not_reverted() {
        let _ = leptos::create_runtime();
        let layout = LayoutContext::new(LayoutState::default());

        declare_page(layout, &moo(), &declaration(Some("Users"), &["Home", "Users"]));
        layout.set_breadcrumbs(vec![
            NavItem::new("Home"),
            NavItem::new("Users"),
            NavItem::new("Ada"),
        ]);
        layout.set_document_title("Ada : Moo");

        assert_eq!(layout.breadcrumbs().len(), 3);
        assert_eq!(layout.document_title(), "Ada : Moo");
    }

    #[test]
    fn applying_declarations_replaces_previous_page() {
        let _ = leptos::create_runtime();
        let layout = LayoutContext::new(LayoutState::default());

        declaration(Some("Users"), &["Home", "Users"]).apply(layout, "Moo");
        layout.set_actions(vec![ViewFn::from(|| "Invite")]);
        declaration(Some("Dashboard"), &["Home"]).apply(layout, "Moo");

        let crumbs: Vec<String> = layout
            .breadcrumbs()
            .iter()
            .map(|item| item.text.clone())
            .collect();
        assert_eq!(crumbs, vec!["Home"]);
        assert!(layout.actions().is_empty());
        assert_eq!(layout.document_title(), "Dashboard : Moo");
    }

    #[test]
    fn remount_does_not_accumulate() {
        let _ = leptos::create_runtime();
        let layout = LayoutContext::new(LayoutState::default());
        let page = declaration(Some("Settings"), &["Home", "Settings"]);

        for _ in 0..3 {
            declare_page(layout, &moo(), &page);
        }

        assert_eq!(layout.breadcrumbs().len(), 2);
        assert_eq!(layout.document_title(), "Settings : Moo");
    }
}
