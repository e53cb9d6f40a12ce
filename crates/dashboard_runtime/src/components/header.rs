use leptos::*;
use system_ui::{
    Avatar, Cluster, Icon, IconName, IconSize, LayoutJustify, SelectField, ShellHeader,
};

use super::SIDEBAR_ID;
use crate::{
    config::use_dashboard_config,
    runtime_context::use_layout,
    theme::{use_theme, ThemeId, THEMES},
};

/// Maps a switcher value to a selection. The system entry clears the selection.
pub fn theme_selection(id: &str) -> Option<ThemeId> {
    ThemeId::parse(id).filter(|theme| *theme != ThemeId::System)
}

/// Value the switcher shows: the selection, or the provider default while nothing is selected.
pub fn switcher_value(selection: Option<ThemeId>, default_theme: ThemeId) -> &'static str {
    selection.unwrap_or(default_theme).as_str()
}

#[component]
/// Theme selector bound to the theme context.
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = use_theme();
    let options: Vec<(String, String)> = THEMES
        .iter()
        .map(|entry| (entry.id.as_str().to_string(), entry.name.to_string()))
        .collect();

    view! {
        <SelectField
            options=options
            aria_label="Theme"
            ui_slot="theme-switcher"
            value=Signal::derive(move || switcher_value(theme.theme(), theme.default_theme).to_string())
            on_change=Callback::new(move |id: String| theme.set_theme(theme_selection(&id)))
        />
    }
}

#[component]
/// Top bar with the sidebar toggle, app name, theme switcher, and avatar.
pub fn Header(#[prop(into)] user_name: String) -> impl IntoView {
    let layout = use_layout();
    let config = use_dashboard_config();

    view! {
        <ShellHeader>
            <Cluster justify=LayoutJustify::Between>
                <Cluster>
                    <button
                        type="button"
                        class="dashboard-sidebar-toggle"
                        aria-controls=SIDEBAR_ID
                        aria-expanded=move || if layout.show_sidebar() { "true" } else { "false" }
                        aria-label="Toggle navigation"
                        on:click=move |_| layout.toggle_sidebar()
                    >
                        <Icon icon=IconName::Navigation size=IconSize::Md />
                    </button>
                    <a href="/" class="dashboard-brand" data-ui-slot="brand">
                        {config.app_name.clone()}
                    </a>
                </Cluster>
                <Cluster>
                    {config.features.theme_switcher.then(|| view! { <ThemeSwitcher /> })}
                    <Avatar name=user_name src=Signal::derive(move || layout.photo()) />
                </Cluster>
            </Cluster>
        </ShellHeader>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn system_entry_clears_selection() {
        assert_eq!(theme_selection(""), None);
        assert_eq!(theme_selection("red"), Some(ThemeId::Red));
        assert_eq!(theme_selection("purple"), None);
    }

    #[test]
    fn unselected_switcher_shows_provider_default() {
        assert_eq!(switcher_value(None, ThemeId::Dark), "dark");
        assert_eq!(switcher_value(None, ThemeId::System), "");
        assert_eq!(switcher_value(Some(ThemeId::Red), ThemeId::Dark), "red");
    }
}
