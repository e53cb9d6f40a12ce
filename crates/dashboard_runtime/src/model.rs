//! Layout state shared by the dashboard chrome and the routed pages.

use std::{fmt, rc::Rc};

use leptos::{Callback, ViewFn};
use serde::{Deserialize, Serialize};
use system_ui::{ButtonSize, IconName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Display density, fixed when the layout provider is created.
pub enum LayoutSize {
    /// Dense tables and compact controls.
    Small,
    /// Standard spacing.
    #[default]
    Default,
}

impl LayoutSize {
    /// Stable token for `data-ui-density`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Default => "default",
        }
    }

    /// Button size matching this density.
    pub fn button_size(self) -> ButtonSize {
        match self {
            Self::Small => ButtonSize::Sm,
            Self::Default => ButtonSize::Md,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Leading image for a [`NavItem`].
pub enum NavImage {
    /// Design-system icon.
    Icon(IconName),
    /// Image URL.
    Source(String),
}

#[derive(Clone)]
/// Route-target descriptor rendered by breadcrumbs, the sidebar, and secondary nav.
pub struct NavItem {
    /// Router path; `None` renders a button (or plain text for breadcrumbs).
    pub route: Option<String>,
    /// Display label.
    pub text: String,
    /// Click handler invoked in addition to navigation.
    pub on_click: Option<Callback<()>>,
    /// Optional leading icon or image.
    pub image: Option<NavImage>,
}

impl NavItem {
    /// Creates a label-only item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            route: None,
            text: text.into(),
            on_click: None,
            image: None,
        }
    }

    /// Creates an item that navigates to `route`.
    pub fn link(text: impl Into<String>, route: impl Into<String>) -> Self {
        Self::new(text).with_route(route)
    }

    /// Sets the router path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Sets a design-system icon as the leading image.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.image = Some(NavImage::Icon(icon));
        self
    }

    /// Sets an image URL as the leading image.
    pub fn with_image_src(mut self, src: impl Into<String>) -> Self {
        self.image = Some(NavImage::Source(src.into()));
        self
    }

    /// Sets the click handler.
    pub fn with_on_click(mut self, on_click: Callback<()>) -> Self {
        self.on_click = Some(on_click);
        self
    }
}

impl fmt::Debug for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavItem")
            .field("route", &self.route)
            .field("text", &self.text)
            .field("on_click", &self.on_click.is_some())
            .field("image", &self.image)
            .finish()
    }
}

impl PartialEq for NavItem {
    fn eq(&self, other: &Self) -> bool {
        self.route == other.route
            && self.text == other.text
            && self.image == other.image
            && self.on_click.is_some() == other.on_click.is_some()
    }
}

#[derive(Clone)]
/// Secondary-nav entry: a navigable item or an arbitrary renderable.
pub enum SecondaryNavEntry {
    /// Rendered as a nav link.
    Item(NavItem),
    /// Rendered as-is.
    Custom(ViewFn),
}

impl From<NavItem> for SecondaryNavEntry {
    fn from(item: NavItem) -> Self {
        Self::Item(item)
    }
}

impl fmt::Debug for SecondaryNavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => f.debug_tuple("Item").field(item).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Shared breadcrumb list.
pub type NavItems = Rc<[NavItem]>;
/// Shared secondary-nav list.
pub type SecondaryNavEntries = Rc<[SecondaryNavEntry]>;
/// Shared page action list.
pub type ActionViews = Rc<[ViewFn]>;

#[derive(Clone)]
/// Per-application layout state owned by [`crate::LayoutProvider`].
pub struct LayoutState {
    /// Display density.
    pub size: LayoutSize,
    /// Breadcrumb trail, current page last.
    pub breadcrumbs: NavItems,
    /// Contextual links for the current page.
    pub secondary_nav: SecondaryNavEntries,
    /// Page-level action buttons.
    pub actions: ActionViews,
    /// Whether the sidebar column is shown.
    pub show_sidebar: bool,
    /// Whether the sidebar shows icons only.
    pub sidebar_collapsed: bool,
    /// Avatar photo URL supplied by the identity integration.
    pub photo: Option<String>,
    /// Browser tab title last declared by a page.
    pub document_title: String,
}

impl LayoutState {
    /// Empty state at the given density.
    pub fn new(size: LayoutSize) -> Self {
        Self {
            size,
            breadcrumbs: Vec::new().into(),
            secondary_nav: Vec::new().into(),
            actions: Vec::new().into(),
            show_sidebar: false,
            sidebar_collapsed: false,
            photo: None,
            document_title: String::new(),
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(LayoutSize::Default)
    }
}

impl fmt::Debug for LayoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutState")
            .field("size", &self.size)
            .field("breadcrumbs", &self.breadcrumbs)
            .field("secondary_nav", &self.secondary_nav)
            .field("actions", &self.actions.len())
            .field("show_sidebar", &self.show_sidebar)
            .field("sidebar_collapsed", &self.sidebar_collapsed)
            .field("photo", &self.photo)
            .field("document_title", &self.document_title)
            .finish()
    }
}
