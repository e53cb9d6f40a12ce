use dashboard_runtime::{NavItem, Page, SecondaryNavEntry};
use leptos::*;
use system_ui::{
    pagination_slots, Badge, Button, ButtonSize, ButtonVariant, Cluster, EmptyState, Grid,
    Heading, Icon, IconButton, IconName, IconSize, PageSlot, Pagination, Panel, SelectField,
    Spinner, Stack, Surface, SurfaceVariant, Text, TextRole, TextTone, Tooltip, TooltipPlacement,
};
use thiserror::Error;

use super::home_crumb;

#[derive(Debug, Clone, Error)]
#[error("the sample widget failed to render")]
struct RenderFault;

fn slot_summary(current: usize, total: usize) -> String {
    pagination_slots(current, total, 1)
        .into_iter()
        .map(|slot| match slot {
            PageSlot::Page(page) => page.to_string(),
            PageSlot::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn FaultyWidget(broken: RwSignal<bool>) -> impl IntoView {
    move || {
        if broken.get() {
            Err(RenderFault)
        } else {
            Ok(view! { <Text tone=TextTone::Success>"Widget rendered."</Text> })
        }
    }
}

#[component]
pub fn ComponentsPage() -> impl IntoView {
    let page = create_rw_signal(5usize);
    let broken = create_rw_signal(false);
    let tone = create_rw_signal("info".to_string());
    let tone_options: Vec<(String, String)> = ["info", "success", "warning", "danger"]
        .into_iter()
        .map(|token| (token.to_string(), token.to_string()))
        .collect();

    let jump = SecondaryNavEntry::Custom(ViewFn::from(|| {
        view! { <Badge tone=TextTone::Info>"Gallery"</Badge> }
    }));

    view! {
        <Page
            title="Components"
            breadcrumbs=vec![home_crumb(), NavItem::new("Components")]
            secondary_nav=vec![jump, NavItem::link("Users table", "/users").into()]
        >
            <Stack>
                <Heading level=1>"Design system"</Heading>
                <Grid columns=2>
                    <Panel title="Buttons">
                        <Cluster>
                            <Button variant=ButtonVariant::Primary>"Primary"</Button>
                            <Button>"Standard"</Button>
                            <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                            <Button variant=ButtonVariant::Danger size=ButtonSize::Sm>"Danger"</Button>
                            <Tooltip text="Opens settings" placement=TooltipPlacement::Bottom>
                                <IconButton icon=IconName::Settings aria_label="Settings" />
                            </Tooltip>
                        </Cluster>
                    </Panel>
                    <Panel title="Text and badges">
                        <Stack>
                            <SelectField
                                options=tone_options
                                aria_label="Badge tone"
                                value=tone
                                on_change=Callback::new(move |next: String| tone.set(next))
                            />
                            <Cluster>
                                {move || {
                                    let selected = match tone.get().as_str() {
                                        "success" => TextTone::Success,
                                        "warning" => TextTone::Warning,
                                        "danger" => TextTone::Danger,
                                        _ => TextTone::Info,
                                    };
                                    view! { <Badge tone=selected>{tone.get()}</Badge> }
                                }}
                                <Text role=TextRole::Code>"data-ui-tone"</Text>
                            </Cluster>
                        </Stack>
                    </Panel>
                    <Panel title="Icons">
                        <Cluster>
                            {IconName::all()
                                .iter()
                                .map(|icon| {
                                    let icon = *icon;
                                    view! {
                                        <Tooltip text=icon.token().to_string()>
                                            <Icon icon size=IconSize::Md aria_label=icon.token() />
                                        </Tooltip>
                                    }
                                })
                                .collect_view()}
                        </Cluster>
                    </Panel>
                    <Panel title="Pagination">
                        <Stack>
                            <Pagination
                                current=page
                                total_pages=12
                                on_change=Callback::new(move |next| page.set(next))
                            />
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {move || slot_summary(page.get(), 12)}
                            </Text>
                        </Stack>
                    </Panel>
                    <Panel title="Loading and empty states">
                        <Cluster>
                            <Spinner label="Loading" />
                            <Surface variant=SurfaceVariant::Inset>
                                <EmptyState icon=IconName::Table title="No rows">
                                    "Nothing to show yet."
                                </EmptyState>
                            </Surface>
                        </Cluster>
                    </Panel>
                    <Panel title="Error boundary">
                        <Stack>
                            <Text tone=TextTone::Secondary>
                                "Breaking the widget replaces this page with the error panel. The chrome stays."
                            </Text>
                            <Button
                                variant=ButtonVariant::Danger
                                on_click=Callback::new(move |_| broken.set(true))
                            >
                                "Break widget"
                            </Button>
                            <FaultyWidget broken />
                        </Stack>
                    </Panel>
                </Grid>
            </Stack>
        </Page>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slot_summary_marks_gaps() {
        assert_eq!(slot_summary(5, 12), "1 … 4 5 6 … 12");
        assert_eq!(slot_summary(1, 3), "1 2 3");
    }
}
