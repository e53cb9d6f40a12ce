//! Dashboard runtime: layout state, page declarations, messages, theming, routing, and chrome.
//!
//! Providers own the reactive state and expose it through `use_*` accessors. Every accessor
//! falls back to a detached default when its provider is missing, so components can be
//! rendered in isolation.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod config;
pub mod messages;
pub mod model;
pub mod page;
pub mod reducer;
pub mod routes;
pub mod runtime_context;
pub mod theme;

pub use components::DashboardShell;
pub use config::{
    provide_dashboard_config, use_dashboard_config, ConfigError, DashboardConfig, FeatureFlags,
};
pub use messages::{
    use_messages, LiveKey, Message, MessageQueue, MessageVariant, MessagesContext,
    MessagesProvider, QueuedMessage,
};
pub use model::*;
pub use page::{compose_document_title, declare_page, Page, PageDeclaration};
pub use reducer::{reduce_layout, LayoutAction};
pub use routes::{flatten_routes, mount_routes, RouteDefinition, RouteEntry, RouteObject, RouteTree};
pub use runtime_context::{use_layout, LayoutContext, LayoutProvider};
pub use theme::{find_theme, use_theme, Theme, ThemeContext, ThemeId, ThemeProvider, THEMES};
