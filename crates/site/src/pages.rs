//! Routed pages.

mod showcase;
mod settings;
mod users;

use dashboard_runtime::{use_messages, Message, NavItem, Page};
use leptos::*;
use system_ui::{
    Badge, Button, ButtonVariant, Cluster, EmptyState, Grid, Heading, IconName, Panel, Stack,
    Text, TextRole, TextTone,
};

pub use self::{
    settings::SettingsPage,
    showcase::ComponentsPage,
    users::{UserDetailPage, UsersPage},
};
use crate::data::{demo_users, Role};

pub(crate) fn home_crumb() -> NavItem {
    NavItem::link("Home", "/").with_icon(IconName::Home)
}

#[component]
fn StatPanel(#[prop(into)] label: String, value: usize, tone: TextTone) -> impl IntoView {
    view! {
        <Panel>
            <Stack>
                <Text role=TextRole::Label tone=TextTone::Secondary>{label}</Text>
                <Heading level=2 tone=tone>{value.to_string()}</Heading>
            </Stack>
        </Panel>
    }
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    let messages = use_messages();
    let users = demo_users();
    let active = users.iter().filter(|user| user.active).count();
    let admins = users.iter().filter(|user| user.role == Role::Admin).count();

    let refresh = ViewFn::from(move || {
        view! {
            <Button
                leading_icon=IconName::ChevronDown
                on_click=Callback::new(move |_| {
                    messages.send_message(
                        Message::info("Dashboard refreshed").with_message("Figures are up to date."),
                    );
                })
            >
                "Refresh"
            </Button>
        }
    });

    view! {
        <Page title="Dashboard" breadcrumbs=vec![home_crumb()] actions=vec![refresh]>
            <Stack>
                <Heading level=1>"Overview"</Heading>
                <Grid columns=3>
                    <StatPanel label="Users" value=users.len() tone=TextTone::Primary />
                    <StatPanel label="Active" value=active tone=TextTone::Success />
                    <StatPanel label="Admins" value=admins tone=TextTone::Warning />
                </Grid>
                <Panel title="Recent activity">
                    <EmptyState icon=IconName::Alert title="Nothing new">
                        "Activity from your team shows up here."
                    </EmptyState>
                </Panel>
            </Stack>
        </Page>
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let messages = use_messages();
    let sent = create_rw_signal(0usize);
    let send = move |message: Message| {
        messages.send_message(message);
        sent.update(|count| *count += 1);
    };

    view! {
        <Page
            title="Messages"
            breadcrumbs=vec![home_crumb(), NavItem::new("Messages")]
        >
            <Stack>
                <Heading level=1>"Notifications"</Heading>
                <Text tone=TextTone::Secondary>
                    "Toasts dismiss themselves after a few seconds. Dismissing one early cancels its timer."
                </Text>
                <Cluster>
                    <Button on_click=Callback::new(move |_| send(Message::success("Saved").with_message("Your changes were stored.")))>
                        "Success"
                    </Button>
                    <Button on_click=Callback::new(move |_| send(Message::info("Heads up").with_message("A new release is available.")))>
                        "Info"
                    </Button>
                    <Button on_click=Callback::new(move |_| send(Message::warning("Quota").with_message("You are at 90% of your quota.")))>
                        "Warning"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new(move |_| send(Message::danger("Request failed")))
                    >
                        "Danger without text"
                    </Button>
                </Cluster>
                <Cluster>
                    <Button on_click=Callback::new(move |_| {
                        send(Message::info("Upload").with_key("upload").with_message("Uploading report.csv"));
                    })>
                        "Start upload"
                    </Button>
                    <Button on_click=Callback::new(move |_| {
                        send(Message::success("Upload").with_key("upload").with_message("report.csv uploaded"));
                    })>
                        "Finish upload"
                    </Button>
                    <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| messages.clear_all())>
                        "Clear all"
                    </Button>
                </Cluster>
                <Cluster>
                    <Text role=TextRole::Caption>"Sent this visit"</Text>
                    <Badge tone=TextTone::Info>{move || sent.get().to_string()}</Badge>
                    <Text role=TextRole::Caption>"Live"</Text>
                    <Badge>{move || messages.keys().len().to_string()}</Badge>
                </Cluster>
            </Stack>
        </Page>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Page title="Not found" breadcrumbs=vec![home_crumb(), NavItem::new("Not found")]>
            <EmptyState icon=IconName::Search title="Page not found">
                <Stack>
                    <Text>"The page you asked for does not exist."</Text>
                    <a href="/">"Back to the dashboard"</a>
                </Stack>
            </EmptyState>
        </Page>
    }
}
