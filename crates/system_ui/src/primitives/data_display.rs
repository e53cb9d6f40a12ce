use super::*;

#[component]
/// Generic surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Titled content panel used for dashboard cards and form sections.
pub fn Panel(
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {title.map(|title| view! { <header data-ui-slot="title">{title}</header> })}
            <div data-ui-slot="body">{children()}</div>
        </section>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Page or section heading rendered as a real `h1`..`h4` element.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let tone = tone.token();
    match level {
        1 => view! { <h1 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>{children()}</h1> }.into_view(),
        2 => view! { <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>{children()}</h2> }.into_view(),
        3 => view! { <h3 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>{children()}</h3> }.into_view(),
        _ => view! { <h4 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>{children()}</h4> }.into_view(),
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty state content block with an optional leading icon.
pub fn EmptyState(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            {title.map(|title| view! { <div data-ui-slot="title">{title}</div> })}
            <div data-ui-slot="body">{children()}</div>
        </div>
    }
}

#[component]
/// Indeterminate loading spinner.
pub fn Spinner(
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading".to_string());
    view! {
        <span
            class=merge_layout_class("ui-spinner", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-size=size.token()
        >
            <span data-ui-slot="ring" aria-hidden="true"></span>
            <span data-ui-slot="label">{label}</span>
        </span>
    }
}

/// Up to two uppercase initials for an avatar fallback.
pub(crate) fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
/// User avatar. Renders the photo when present, otherwise initials or a person glyph.
pub fn Avatar(
    #[prop(into)] name: MaybeSignal<String>,
    #[prop(optional, into)] src: MaybeSignal<Option<String>>,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let name = Signal::derive(move || name.get());
    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-size=size.token()
            title=move || name.get()
        >
            {move || match src.get() {
                Some(src) => view! { <img data-ui-slot="photo" src=src alt=name.get() /> }.into_view(),
                None => {
                    let initials = avatar_initials(&name.get());
                    if initials.is_empty() {
                        view! { <Icon icon=IconName::Person size /> }.into_view()
                    } else {
                        view! { <span data-ui-slot="initials" aria-hidden="true">{initials}</span> }
                            .into_view()
                    }
                }
            }}
        </span>
    }
}

#[component]
/// Shared table primitive. Callers render `thead`/`tbody` rows as children.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] dense: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-table-scroll" data-ui-slot="table-scroll">
            <table
                class=merge_layout_class("ui-data-table", layout_class)
                data-ui-primitive="true"
                data-ui-kind="data-table"
                data-ui-density=move || if dense.get() { "compact" } else { "standard" }
                aria-label=aria_label
            >
                {caption.map(|caption| view! { <caption>{caption}</caption> })}
                {children()}
            </table>
        </div>
    }
}

#[component]
/// Column header cell. Sortable columns expose `aria-sort` and a click callback.
pub fn TableHeaderCell(
    #[prop(optional, into)] sort: MaybeSignal<Option<bool>>,
    #[prop(optional)] on_sort: Option<Callback<MouseEvent>>,
    #[prop(optional)] numeric: bool,
    children: Children,
) -> impl IntoView {
    let sortable = on_sort.is_some();
    view! {
        <th
            scope="col"
            data-ui-kind="table-header-cell"
            data-ui-align=if numeric { "end" } else { "start" }
            data-ui-sortable=bool_token(sortable)
            aria-sort=move || match sort.get() {
                Some(true) => "ascending",
                Some(false) => "descending",
                None => "none",
            }
            on:click=move |ev| {
                if let Some(on_sort) = on_sort.as_ref() {
                    on_sort.call(ev);
                }
            }
        >
            {children()}
        </th>
    }
}

#[component]
/// Body cell.
pub fn TableCell(#[prop(optional)] numeric: bool, children: Children) -> impl IntoView {
    view! {
        <td data-ui-kind="table-cell" data-ui-align=if numeric { "end" } else { "start" }>
            {children()}
        </td>
    }
}

#[cfg(test)]
mod tests {
    use super::avatar_initials;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(avatar_initials("ada lovelace byron"), "AL");
        assert_eq!(avatar_initials("  grace  "), "G");
        assert_eq!(avatar_initials(""), "");
    }
}
