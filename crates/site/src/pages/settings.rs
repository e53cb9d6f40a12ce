use dashboard_runtime::components::ThemeSwitcher;
use dashboard_runtime::{use_layout, use_messages, use_theme, Message, NavItem, Page};
use leptos::*;
use system_ui::{
    Button, ButtonVariant, CheckboxField, Cluster, FieldGroup, Heading, Panel, Stack, Switch, Text,
    TextField, TextRole, TextTone,
};

use super::home_crumb;

/// Validation message for the display-name field.
pub(crate) fn display_name_error(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Some("Display name is required.".to_string())
    } else if trimmed.chars().count() > 40 {
        Some("Display name must be 40 characters or fewer.".to_string())
    } else {
        None
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let layout = use_layout();
    let theme = use_theme();
    let messages = use_messages();

    let display_name = create_rw_signal("Ada Lovelace".to_string());
    let photo_url = create_rw_signal(
        layout
            .state
            .with_untracked(|state| state.photo.clone())
            .unwrap_or_default(),
    );
    let email_updates = create_rw_signal(true);
    let name_error = Signal::derive(move || display_name.with(|name| display_name_error(name)));

    let save = move |_: ev::MouseEvent| {
        if let Some(error) = name_error.get_untracked() {
            messages.send_message(
                Message::warning("Settings not saved")
                    .with_key("settings-save")
                    .with_message(error),
            );
            return;
        }
        let photo = photo_url.with_untracked(|url| {
            let url = url.trim();
            (!url.is_empty()).then(|| url.to_string())
        });
        layout.set_photo(photo);
        messages.send_message(
            Message::success("Settings saved")
                .with_key("settings-save")
                .with_message(format!("Theme: {}", theme.descriptor().name)),
        );
    };

    view! {
        <Page title="Settings" breadcrumbs=vec![home_crumb(), NavItem::new("Settings")]>
            <Stack>
                <Heading level=1>"Settings"</Heading>
                <Panel title="Profile">
                    <Stack>
                        <FieldGroup title="Display name" error=name_error>
                            <TextField
                                aria_label="Display name"
                                autocomplete="name"
                                required=true
                                value=display_name
                                on_input=Callback::new(move |value: String| display_name.set(value))
                            />
                        </FieldGroup>
                        <FieldGroup title="Photo URL" description="Shown in the header avatar.">
                            <TextField
                                aria_label="Photo URL"
                                input_type="url"
                                placeholder="https://"
                                value=photo_url
                                on_input=Callback::new(move |value: String| photo_url.set(value))
                            />
                        </FieldGroup>
                        <Cluster>
                            <CheckboxField
                                aria_label="Email me product updates"
                                checked=email_updates
                                on_change=Callback::new(move |checked: bool| email_updates.set(checked))
                            />
                            <Text>"Email me product updates"</Text>
                        </Cluster>
                    </Stack>
                </Panel>
                <Panel title="Appearance">
                    <Stack>
                        <FieldGroup title="Theme">
                            <ThemeSwitcher />
                        </FieldGroup>
                        <Cluster>
                            <Switch
                                aria_label="Compact navigation"
                                checked=Signal::derive(move || layout.sidebar_collapsed())
                                on_toggle=Callback::new(move |collapsed: bool| layout.set_sidebar_collapsed(collapsed))
                            />
                            <Text>"Compact navigation"</Text>
                        </Cluster>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {move || format!("Display density: {}", layout.size().token())}
                        </Text>
                    </Stack>
                </Panel>
                <Cluster>
                    <Button variant=ButtonVariant::Primary on_click=Callback::new(save)>
                        "Save"
                    </Button>
                    <Button
                        variant=ButtonVariant::Quiet
                        on_click=Callback::new(move |_| theme.set_theme(None))
                    >
                        "Reset theme"
                    </Button>
                </Cluster>
            </Stack>
        </Page>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_name_must_be_present_and_short() {
        assert_eq!(display_name_error("Ada"), None);
        assert_eq!(
            display_name_error("   "),
            Some("Display name is required.".to_string())
        );
        assert!(display_name_error(&"x".repeat(41)).is_some());
    }
}
