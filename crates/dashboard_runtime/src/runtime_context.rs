//! Layout provider and context wiring for the dashboard shell.
//!
//! [`LayoutProvider`] owns the layout signal and its dispatch callback. Pages write through the
//! setter methods on [`LayoutContext`]; chrome components read through the tracked accessors.

use std::rc::Rc;

use leptos::*;

use crate::{
    model::{ActionViews, LayoutSize, LayoutState, NavItem, NavItems, SecondaryNavEntries},
    reducer::{reduce_layout, LayoutAction},
    SecondaryNavEntry,
};

#[derive(Clone, Copy)]
/// Leptos context for reading layout state and dispatching [`LayoutAction`] values.
pub struct LayoutContext {
    /// Reactive layout state.
    pub state: RwSignal<LayoutState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<LayoutAction>,
}

impl LayoutContext {
    /// Creates a context whose dispatch only notifies subscribers when the reducer reports a change.
    pub fn new(initial: LayoutState) -> Self {
        let state = create_rw_signal(initial);
        let dispatch = Callback::new(move |action: LayoutAction| {
            let mut layout = state.get_untracked();
            if reduce_layout(&mut layout, action) {
                state.set(layout);
            }
        });
        Self { state, dispatch }
    }

    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: LayoutAction) {
        self.dispatch.call(action);
    }

    /// Replaces the breadcrumb trail.
    pub fn set_breadcrumbs(&self, items: impl Into<NavItems>) {
        self.dispatch_action(LayoutAction::SetBreadcrumbs(items.into()));
    }

    /// Replaces the secondary nav entries.
    pub fn set_secondary_nav(&self, entries: impl Into<SecondaryNavEntries>) {
        self.dispatch_action(LayoutAction::SetSecondaryNav(entries.into()));
    }

    /// Replaces secondary nav with plain nav items.
    pub fn set_secondary_nav_items(&self, items: Vec<NavItem>) {
        let entries: Vec<SecondaryNavEntry> = items.into_iter().map(Into::into).collect();
        self.set_secondary_nav(entries);
    }

    /// Replaces the page actions.
    pub fn set_actions(&self, actions: impl Into<ActionViews>) {
        self.dispatch_action(LayoutAction::SetActions(actions.into()));
    }

    /// Shows or hides the sidebar.
    pub fn set_show_sidebar(&self, show: bool) {
        self.dispatch_action(LayoutAction::SetShowSidebar(show));
    }

    /// Flips sidebar visibility.
    pub fn toggle_sidebar(&self) {
        self.dispatch_action(LayoutAction::ToggleSidebar);
    }

    /// Collapses or expands the sidebar.
    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.dispatch_action(LayoutAction::SetSidebarCollapsed(collapsed));
    }

    /// Flips sidebar collapse.
    pub fn toggle_sidebar_collapsed(&self) {
        self.dispatch_action(LayoutAction::ToggleSidebarCollapsed);
    }

    /// Replaces the avatar photo URL.
    pub fn set_photo(&self, photo: Option<String>) {
        self.dispatch_action(LayoutAction::SetPhoto(photo));
    }

    /// Replaces the browser tab title.
    pub fn set_document_title(&self, title: impl Into<String>) {
        self.dispatch_action(LayoutAction::SetDocumentTitle(title.into()));
    }

    /// Display density. Fixed for the lifetime of the provider.
    pub fn size(&self) -> LayoutSize {
        self.state.with_untracked(|state| state.size)
    }

    /// Tracked breadcrumb trail.
    pub fn breadcrumbs(&self) -> NavItems {
        self.state.with(|state| Rc::clone(&state.breadcrumbs))
    }

    /// Tracked secondary nav entries.
    pub fn secondary_nav(&self) -> SecondaryNavEntries {
        self.state.with(|state| Rc::clone(&state.secondary_nav))
    }

    /// Tracked page actions.
    pub fn actions(&self) -> ActionViews {
        self.state.with(|state| Rc::clone(&state.actions))
    }

    /// Tracked sidebar visibility.
    pub fn show_sidebar(&self) -> bool {
        self.state.with(|state| state.show_sidebar)
    }

    /// Tracked sidebar collapse.
    pub fn sidebar_collapsed(&self) -> bool {
        self.state.with(|state| state.sidebar_collapsed)
    }

    /// Tracked avatar photo URL.
    pub fn photo(&self) -> Option<String> {
        self.state.with(|state| state.photo.clone())
    }

    /// Tracked browser tab title.
    pub fn document_title(&self) -> String {
        self.state.with(|state| state.document_title.clone())
    }
}

#[component]
/// Provides [`LayoutContext`] to descendant components.
pub fn LayoutProvider(
    /// Display density for the whole application.
    #[prop(optional)]
    size: LayoutSize,
    /// Whether the sidebar starts visible.
    #[prop(optional)]
    sidebar_open: bool,
    /// Tab title shown until a page declares its own.
    #[prop(optional, into)]
    initial_title: String,
    children: Children,
) -> impl IntoView {
    let mut initial = LayoutState::new(size);
    initial.show_sidebar = sidebar_open;
    initial.document_title = initial_title;

    provide_context(LayoutContext::new(initial));

    children().into_view()
}

/// Returns the nearest [`LayoutContext`].
///
/// Outside a [`LayoutProvider`] this logs a warning and returns a detached context holding the
/// default state; writes to it reach no chrome.
pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().unwrap_or_else(|| {
        logging::warn!("use_layout called outside LayoutProvider; using detached default layout");
        let detached = LayoutContext::new(LayoutState::default());
        provide_context(detached);
        detached
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels(items: &NavItems) -> Vec<String> {
        items.iter().map(|item| item.text.clone()).collect()
    }

    #[test]
    fn setters_replace_and_accessors_read_latest() {
        let _ = leptos::create_runtime();
        let layout = LayoutContext::new(LayoutState::new(LayoutSize::Small));

        layout.set_breadcrumbs(vec![NavItem::link("Home", "/")]);
        layout.set_breadcrumbs(vec![
            NavItem::link("Home", "/"),
            NavItem::new("Users"),
        ]);
        layout.set_secondary_nav_items(vec![NavItem::link("Profile", "/users/1")]);
        layout.set_document_title("Users : Moo");

        assert_eq!(labels(&layout.breadcrumbs()), vec!["Home", "Users"]);
        assert_eq!(layout.secondary_nav().len(), 1);
        assert_eq!(layout.document_title(), "Users : Moo");
        assert_eq!(layout.size(), LayoutSize::Small);
    }

    #[test]
    fn identical_list_does_not_notify() {
        let _ = leptos::create_runtime();
        let layout = LayoutContext::new(LayoutState::default());
        let items: NavItems = vec![NavItem::link("Home", "/")].into();
        layout.set_breadcrumbs(Rc::clone(&items));

        let before = layout.state.get_untracked();
        layout.set_breadcrumbs(Rc::clone(&items));
        let after = layout.state.get_untracked();

        assert!(Rc::ptr_eq(&before.breadcrumbs, &after.breadcrumbs));
        assert!(Rc::ptr_eq(&after.breadcrumbs, &items));
    }

    #[test]
    fn sidebar_toggles_are_independent() {
        let _ = leptos::create_runtime();
        let layout = LayoutContext::new(LayoutState::default());

        layout.toggle_sidebar();
        layout.toggle_sidebar_collapsed();
        layout.toggle_sidebar_collapsed();

        assert!(layout.show_sidebar());
        assert!(!layout.sidebar_collapsed());

        layout.set_photo(Some("/avatars/ada.png".to_string()));
        assert_eq!(layout.photo().as_deref(), Some("/avatars/ada.png"));
    }

    #[test]
    fn consumer_without_provider_gets_default_state() {
        let _ = leptos::create_runtime();
        let layout = use_layout();

        assert!(layout.breadcrumbs().is_empty());
        assert!(layout.secondary_nav().is_empty());
        assert!(layout.actions().is_empty());
        assert!(!layout.show_sidebar());
        assert!(!layout.sidebar_collapsed());
        assert_eq!(layout.size(), LayoutSize::Default);
    }
}
