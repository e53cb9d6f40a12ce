use super::*;

#[component]
/// Root dashboard layout grid (header, sidebar, main, footer).
pub fn AppShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// `"small"` or `"default"` display density.
    #[prop(default = "default")]
    density: &'static str,
    #[prop(optional, into)] theme: MaybeSignal<String>,
    #[prop(optional, into)] sidebar_visible: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-app-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="app-shell"
            data-ui-density=density
            data-theme=move || theme.get()
            data-ui-sidebar=move || if sidebar_visible.get() { "visible" } else { "hidden" }
        >
            {children()}
        </div>
    }
}

#[component]
/// Top application bar.
pub fn ShellHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-shell-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="shell-header"
            data-ui-elevation=Elevation::Raised.token()
        >
            {children()}
        </header>
    }
}

#[component]
/// Side navigation column. Hidden columns stay mounted so focus order is stable.
pub fn ShellSidebar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] visible: MaybeSignal<bool>,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let visible = Signal::derive(move || visible.get());
    view! {
        <aside
            class=merge_layout_class("ui-shell-sidebar", layout_class)
            id=id
            hidden=move || !visible.get()
            aria-hidden=move || bool_token(!visible.get())
            data-ui-primitive="true"
            data-ui-kind="shell-sidebar"
            data-ui-collapsed=move || bool_token(collapsed.get())
        >
            {children()}
        </aside>
    }
}

#[component]
/// Main content column.
pub fn ShellMain(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <main
            class=merge_layout_class("ui-shell-main", layout_class)
            id="main-content"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="shell-main"
        >
            {children()}
        </main>
    }
}

#[component]
/// Page footer strip.
pub fn ShellFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-shell-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="shell-footer"
        >
            {children()}
        </footer>
    }
}
