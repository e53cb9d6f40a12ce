use dashboard_runtime::{compose_document_title, use_dashboard_config, use_layout, use_messages};
use dashboard_runtime::{Message, NavItem, Page, SecondaryNavEntry};
use leptos::*;
use leptos_router::use_params_map;
use system_ui::{
    page_count, page_range, Avatar, Badge, Button, ButtonVariant, Cluster, DataTable, EmptyState,
    FieldGroup, Heading, IconName, IconSize, Pagination, Panel, Stack, Switch, TableCell,
    TableHeaderCell, Text, TextField, TextTone,
};

use super::home_crumb;
use crate::data::{demo_users, filter_users, find_user, sort_users, DemoUser, UserColumn};

const PAGE_SIZE: usize = 10;

fn users_crumb() -> NavItem {
    NavItem::link("Users", "/users").with_icon(IconName::People)
}

fn user_secondary_nav() -> Vec<SecondaryNavEntry> {
    vec![
        NavItem::link("Directory", "/users").into(),
        NavItem::link("Settings", "/settings").into(),
    ]
}

#[component]
fn SortHeader(
    column: UserColumn,
    sort: RwSignal<(UserColumn, bool)>,
    page: RwSignal<usize>,
    children: Children,
) -> impl IntoView {
    let direction = Signal::derive(move || {
        let (active, ascending) = sort.get();
        (active == column).then_some(ascending)
    });
    let on_sort = Callback::new(move |_| {
        sort.update(|(active, ascending)| {
            if *active == column {
                *ascending = !*ascending;
            } else {
                *active = column;
                *ascending = true;
            }
        });
        page.set(1);
    });

    view! {
        <TableHeaderCell sort=direction on_sort=on_sort>
            {children()}
        </TableHeaderCell>
    }
}

fn user_row(user: DemoUser) -> impl IntoView {
    let href = format!("/users/{}", user.id);
    view! {
        <tr>
            <TableCell>
                <Cluster>
                    <Avatar name=user.name.clone() size=IconSize::Sm />
                    <a href=href>{user.name}</a>
                </Cluster>
            </TableCell>
            <TableCell>{user.email}</TableCell>
            <TableCell>
                <Badge tone=user.role.tone()>{user.role.label()}</Badge>
            </TableCell>
            <TableCell>{if user.active { "Active" } else { "Suspended" }}</TableCell>
        </tr>
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let messages = use_messages();
    let directory = store_value(demo_users());
    let query = create_rw_signal(String::new());
    let sort = create_rw_signal((UserColumn::Name, true));
    let page = create_rw_signal(1usize);

    let visible = create_memo(move |_| {
        let mut users = directory.with_value(|users| filter_users(users, &query.get()));
        let (column, ascending) = sort.get();
        sort_users(&mut users, column, ascending);
        users
    });
    let total_pages = Signal::derive(move || visible.with(|users| page_count(users.len(), PAGE_SIZE)));

    let invite = ViewFn::from(move || {
        view! {
            <Button
                variant=ButtonVariant::Primary
                leading_icon=IconName::Person
                on_click=Callback::new(move |_| {
                    messages.send_message(
                        Message::success("Invitation sent").with_message("They will get an email shortly."),
                    );
                })
            >
                "Invite user"
            </Button>
        }
    });

    view! {
        <Page
            title="Users"
            breadcrumbs=vec![home_crumb(), users_crumb()]
            secondary_nav=user_secondary_nav()
            actions=vec![invite]
        >
            <Stack>
                <Heading level=1>"Directory"</Heading>
                <FieldGroup title="Search">
                    <TextField
                        placeholder="Name or email"
                        aria_label="Search users"
                        input_type="search"
                        value=query
                        on_input=Callback::new(move |value: String| {
                            query.set(value);
                            page.set(1);
                        })
                    />
                </FieldGroup>
                <Show
                    when=move || visible.with(|users| !users.is_empty())
                    fallback=|| view! {
                        <EmptyState icon=IconName::Search title="No matches">
                            "Try a different name or email."
                        </EmptyState>
                    }
                >
                    <DataTable caption="Users" dense=true>
                        <thead>
                            <tr>
                                <SortHeader column=UserColumn::Name sort page>"Name"</SortHeader>
                                <SortHeader column=UserColumn::Email sort page>"Email"</SortHeader>
                                <SortHeader column=UserColumn::Role sort page>"Role"</SortHeader>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let current = page.get();
                                visible.with(|users| {
                                    users[page_range(current, PAGE_SIZE, users.len())]
                                        .iter()
                                        .cloned()
                                        .map(user_row)
                                        .collect_view()
                                })
                            }}
                        </tbody>
                    </DataTable>
                    <Pagination
                        current=page
                        total_pages=total_pages
                        on_change=Callback::new(move |next| page.set(next))
                    />
                </Show>
            </Stack>
        </Page>
    }
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let layout = use_layout();
    let messages = use_messages();
    let config = use_dashboard_config();
    let params = use_params_map();
    let user = create_memo(move |_| {
        params
            .with(|map| map.get("id").and_then(|id| id.parse::<u32>().ok()))
            .and_then(find_user)
    });

    // The route component is reused when only `:id` changes, so follow it explicitly.
    create_effect(move |previous: Option<Option<u32>>| {
        let current = user.with(|user| user.as_ref().map(|user| user.id));
        if previous.is_some_and(|previous| previous != current) {
            let name = user.with(|user| user.as_ref().map(|user| user.name.clone()));
            let label = name.clone().unwrap_or_else(|| "Unknown user".to_string());
            layout.set_breadcrumbs(vec![home_crumb(), users_crumb(), NavItem::new(label)]);
            layout.set_document_title(compose_document_title(name.as_deref(), &config.app_name));
        }
        current
    });

    let initial = user.get_untracked();
    let title = initial
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "Unknown user".to_string());
    let active = create_rw_signal(initial.as_ref().is_some_and(|user| user.active));

    view! {
        <Page
            title=title.clone()
            breadcrumbs=vec![home_crumb(), users_crumb(), NavItem::new(title)]
            secondary_nav=user_secondary_nav()
        >
            {move || match user.get() {
                Some(user) => {
                    let name = user.name.clone();
                    view! {
                        <Panel>
                            <Stack>
                                <Cluster>
                                    <Avatar name=user.name.clone() size=IconSize::Lg />
                                    <Stack>
                                        <Heading level=1>{user.name.clone()}</Heading>
                                        <Text tone=TextTone::Secondary>{user.email.clone()}</Text>
                                    </Stack>
                                    <Badge tone=user.role.tone()>{user.role.label()}</Badge>
                                </Cluster>
                                <FieldGroup title="Account" description="Suspended users cannot sign in.">
                                    <Switch
                                        checked=active
                                        aria_label="Account active"
                                        on_toggle=Callback::new(move |next: bool| {
                                            active.set(next);
                                            let status = if next { "reactivated" } else { "suspended" };
                                            messages.send_message(
                                                Message::info(format!("{name} {status}"))
                                                    .with_key(format!("user-status-{}", user.id))
                                                    .with_message("The change applies at next sign-in."),
                                            );
                                        })
                                    />
                                </FieldGroup>
                            </Stack>
                        </Panel>
                    }
                    .into_view()
                }
                None => view! {
                    <EmptyState icon=IconName::Person title="Unknown user">
                        <a href="/users">"Back to the directory"</a>
                    </EmptyState>
                }
                .into_view(),
            }}
        </Page>
    }
}
