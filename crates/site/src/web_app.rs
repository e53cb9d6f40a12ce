use std::rc::Rc;

use dashboard_runtime::{
    flatten_routes, provide_dashboard_config, DashboardShell, LayoutProvider, MessagesProvider,
    RouteTree, ThemeId, ThemeProvider,
};
use leptos::*;
use leptos_meta::{provide_meta_context, Meta};
use leptos_router::Router;
use platform_host::{PrefsStore, WebPrefsStore};

use crate::{
    config::load_config,
    routes::{primary_nav, route_tree},
};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    provide_dashboard_config(config.clone());

    let prefs: Rc<dyn PrefsStore> = Rc::new(WebPrefsStore);
    let routes = flatten_routes(&route_tree(&config.features));
    let sidebar_items = primary_nav(&config.features);

    view! {
        <Meta name="description" content="Admin dashboard shell built on the system_ui primitives." />

        <ThemeProvider default_theme=ThemeId::System prefs=prefs>
            <LayoutProvider
                size=config.default_size
                sidebar_open=true
                initial_title=config.app_name.clone()
            >
                <MessagesProvider>
                    <Router>
                        <DashboardShell sidebar_items=sidebar_items user_name="Ada Lovelace">
                            <RouteTree routes=routes />
                        </DashboardShell>
                    </Router>
                </MessagesProvider>
            </LayoutProvider>
        </ThemeProvider>
    }
}
