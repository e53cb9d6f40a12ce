use leptos::*;
use system_ui::{Button, ButtonVariant, IconName, Panel, Stack, Text, TextTone};

/// Display text of every collected error.
pub fn error_lines(errors: &Errors) -> Vec<String> {
    errors.iter().map(|(_, error)| error.to_string()).collect()
}

#[component]
/// Error boundary around the routed page body.
///
/// A failing child renders a panel with the raw error text, optional guidance, and a reset
/// button that clears the collected errors.
pub fn ErrorPanel(
    /// Extra help shown under the error text.
    #[prop(optional, into)]
    guidance: Option<String>,
    children: Children,
) -> impl IntoView {
    let guidance = store_value(guidance);

    view! {
        <ErrorBoundary fallback={move |errors: RwSignal<Errors>| {
            view! {
                <Panel title="This page failed to render" layout_class="dashboard-error-panel">
                    <Stack>
                        <ul data-ui-slot="errors">
                            {move || {
                                errors
                                    .with(error_lines)
                                    .into_iter()
                                    .map(|line| view! { <li><code>{line}</code></li> })
                                    .collect_view()
                            }}
                        </ul>
                        {guidance
                            .get_value()
                            .map(|text| view! { <Text tone=TextTone::Secondary>{text}</Text> })}
                        <Button
                            variant=ButtonVariant::Primary
                            leading_icon=IconName::ChevronLeft
                            on_click=Callback::new(move |_| errors.set(Errors::default()))
                        >
                            "Try again"
                        </Button>
                    </Stack>
                </Panel>
            }
        }}>
            {children()}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn collected_errors_render_their_text() {
        let mut errors = Errors::default();
        assert!(error_lines(&errors).is_empty());

        errors.insert_with_default_key(std::io::Error::other("widget exploded"));

        assert_eq!(error_lines(&errors), vec!["widget exploded".to_string()]);
    }
}
