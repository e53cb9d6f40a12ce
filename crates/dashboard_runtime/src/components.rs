//! Dashboard chrome composed from `system_ui` primitives.
//!
//! [`DashboardShell`] must render inside a `leptos_router` `<Router>` and below the layout,
//! messages, and theme providers.

mod error_panel;
mod header;
mod navigation;
mod toasts;

use leptos::*;
use leptos_meta::Title;
use system_ui::{AppShell, Cluster, LayoutJustify, ShellFooter, ShellMain, Text, TextRole, TextTone};

pub use self::{
    error_panel::{error_lines, ErrorPanel},
    header::{switcher_value, theme_selection, Header, ThemeSwitcher},
    navigation::{breadcrumb_trail, is_active_route, ActionList, Breadcrumbs, SecondaryNav, Sidebar},
    toasts::ToastLayer,
};

use crate::{
    config::use_dashboard_config,
    model::NavItem,
    runtime_context::use_layout,
    theme::use_theme,
};

/// DOM id of the primary sidebar, referenced by the header toggle.
pub const SIDEBAR_ID: &str = "dashboard-sidebar";

#[component]
/// Full dashboard chrome around the routed page body.
///
/// Chrome renders outside the [`ErrorPanel`] boundary, so a failing page never removes it.
pub fn DashboardShell(
    /// Primary navigation entries.
    #[prop(into)]
    sidebar_items: Vec<NavItem>,
    /// Name shown in the header avatar.
    #[prop(optional, into)]
    user_name: Option<String>,
    children: Children,
) -> impl IntoView {
    let layout = use_layout();
    let theme = use_theme();
    let config = use_dashboard_config();
    let footer_text = format!("{} dashboard", config.app_name);

    view! {
        <Title text=move || layout.document_title() />
        <AppShell
            density=layout.size().token()
            theme=Signal::derive(move || theme.effective().as_str().to_string())
            sidebar_visible=Signal::derive(move || layout.show_sidebar())
        >
            <Header user_name=user_name.unwrap_or_else(|| "Guest".to_string()) />
            <Sidebar items=sidebar_items />
            <ShellMain>
                <Cluster justify=LayoutJustify::Between layout_class="dashboard-page-header">
                    <Breadcrumbs />
                    <ActionList />
                </Cluster>
                {config.features.secondary_nav.then(|| view! { <SecondaryNav /> })}
                <ErrorPanel>{children()}</ErrorPanel>
            </ShellMain>
            <ShellFooter>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {footer_text}
                </Text>
            </ShellFooter>
            <ToastLayer />
        </AppShell>
    }
}
