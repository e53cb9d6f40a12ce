//! Layout actions and the transition function applied by the layout provider.

use std::rc::Rc;

use crate::model::{ActionViews, LayoutState, NavItems, SecondaryNavEntries};

#[derive(Clone)]
/// Actions accepted by [`reduce_layout`].
pub enum LayoutAction {
    /// Replace the breadcrumb trail.
    SetBreadcrumbs(NavItems),
    /// Replace the secondary nav entries.
    SetSecondaryNav(SecondaryNavEntries),
    /// Replace the page actions.
    SetActions(ActionViews),
    /// Show or hide the sidebar.
    SetShowSidebar(bool),
    /// Flip sidebar visibility.
    ToggleSidebar,
    /// Collapse or expand the sidebar.
    SetSidebarCollapsed(bool),
    /// Flip sidebar collapse.
    ToggleSidebarCollapsed,
    /// Replace the avatar photo.
    SetPhoto(Option<String>),
    /// Replace the browser tab title.
    SetDocumentTitle(String),
}

impl std::fmt::Debug for LayoutAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetBreadcrumbs(items) => write!(f, "SetBreadcrumbs({} items)", items.len()),
            Self::SetSecondaryNav(items) => write!(f, "SetSecondaryNav({} items)", items.len()),
            Self::SetActions(items) => write!(f, "SetActions({} items)", items.len()),
            Self::SetShowSidebar(value) => write!(f, "SetShowSidebar({value})"),
            Self::ToggleSidebar => f.write_str("ToggleSidebar"),
            Self::SetSidebarCollapsed(value) => write!(f, "SetSidebarCollapsed({value})"),
            Self::ToggleSidebarCollapsed => f.write_str("ToggleSidebarCollapsed"),
            Self::SetPhoto(photo) => write!(f, "SetPhoto({photo:?})"),
            Self::SetDocumentTitle(title) => write!(f, "SetDocumentTitle({title:?})"),
        }
    }
}

/// Replaces `slot` wholesale. Pointer-identical or both-empty lists are a no-op.
fn replace_list<T>(slot: &mut Rc<[T]>, next: Rc<[T]>) -> bool {
    if Rc::ptr_eq(slot, &next) || (slot.is_empty() && next.is_empty()) {
        return false;
    }
    *slot = next;
    true
}

fn replace_value<T: PartialEq>(slot: &mut T, next: T) -> bool {
    if *slot == next {
        return false;
    }
    *slot = next;
    true
}

/// Applies `action` to `state`, returning whether anything changed.
pub fn reduce_layout(state: &mut LayoutState, action: LayoutAction) -> bool {
    match action {
        LayoutAction::SetBreadcrumbs(items) => replace_list(&mut state.breadcrumbs, items),
        LayoutAction::SetSecondaryNav(items) => replace_list(&mut state.secondary_nav, items),
        LayoutAction::SetActions(items) => replace_list(&mut state.actions, items),
        LayoutAction::SetShowSidebar(show) => replace_value(&mut state.show_sidebar, show),
        LayoutAction::ToggleSidebar => {
            state.show_sidebar = !state.show_sidebar;
            true
        }
        LayoutAction::SetSidebarCollapsed(collapsed) => {
            replace_value(&mut state.sidebar_collapsed, collapsed)
        }
        LayoutAction::ToggleSidebarCollapsed => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
            true
        }
        LayoutAction::SetPhoto(photo) => replace_value(&mut state.photo, photo),
        LayoutAction::SetDocumentTitle(title) => replace_value(&mut state.document_title, title),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{NavItem, SecondaryNavEntry};

    fn crumbs(labels: &[&str]) -> NavItems {
        labels
            .iter()
            .map(|label| NavItem::link(*label, format!("/{label}")))
            .collect::<Vec<_>>()
            .into()
    }

    fn texts(items: &NavItems) -> Vec<&str> {
        items.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn only_latest_breadcrumbs_are_visible() {
        let mut state = LayoutState::default();

        for labels in [&["home"][..], &["home", "users"], &["home", "settings"]] {
            assert!(reduce_layout(
                &mut state,
                LayoutAction::SetBreadcrumbs(crumbs(labels))
            ));
        }

        assert_eq!(texts(&state.breadcrumbs), vec!["home", "settings"]);
    }

    #[test]
    fn same_list_reference_is_a_noop() {
        let mut state = LayoutState::default();
        let items = crumbs(&["home", "users"]);

        assert!(reduce_layout(
            &mut state,
            LayoutAction::SetBreadcrumbs(items.clone())
        ));
        assert!(!reduce_layout(
            &mut state,
            LayoutAction::SetBreadcrumbs(items.clone())
        ));
        assert!(Rc::ptr_eq(&state.breadcrumbs, &items));

        assert!(reduce_layout(
            &mut state,
            LayoutAction::SetBreadcrumbs(crumbs(&["home", "users"]))
        ));
    }

    #[test]
    fn secondary_nav_and_actions_are_replaced_not_merged() {
        let mut state = LayoutState::default();
        let first: SecondaryNavEntries = vec![
            SecondaryNavEntry::from(NavItem::link("Profile", "/users/1")),
            SecondaryNavEntry::from(NavItem::link("Audit", "/users/1/audit")),
        ]
        .into();
        reduce_layout(&mut state, LayoutAction::SetSecondaryNav(first));
        reduce_layout(
            &mut state,
            LayoutAction::SetSecondaryNav(vec![NavItem::new("Only").into()].into()),
        );
        assert_eq!(state.secondary_nav.len(), 1);

        assert!(!reduce_layout(
            &mut state,
            LayoutAction::SetActions(Vec::new().into())
        ));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn sidebar_toggles_do_not_touch_navigation_state() {
        let mut state = LayoutState::default();
        reduce_layout(
            &mut state,
            LayoutAction::SetBreadcrumbs(crumbs(&["home"])),
        );

        assert!(reduce_layout(&mut state, LayoutAction::ToggleSidebar));
        assert!(state.show_sidebar);
        assert!(!reduce_layout(&mut state, LayoutAction::SetShowSidebar(true)));
        assert!(reduce_layout(
            &mut state,
            LayoutAction::SetSidebarCollapsed(true)
        ));
        assert!(reduce_layout(&mut state, LayoutAction::ToggleSidebarCollapsed));

        assert!(state.show_sidebar);
        assert!(!state.sidebar_collapsed);
        assert_eq!(texts(&state.breadcrumbs), vec!["home"]);
    }

    #[test]
    fn photo_and_title_report_changes_only_when_different() {
        let mut state = LayoutState::default();
        assert!(reduce_layout(
            &mut state,
            LayoutAction::SetPhoto(Some("/avatars/ada.png".to_string()))
        ));
        assert!(!reduce_layout(
            &mut state,
            LayoutAction::SetPhoto(Some("/avatars/ada.png".to_string()))
        ));
        assert!(reduce_layout(
            &mut state,
            LayoutAction::SetDocumentTitle("Users : Moo".to_string())
        ));
        assert_eq!(state.document_title, "Users : Moo");
    }
}
