use std::ops::Range;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One rendered slot in a pagination control.
pub enum PageSlot {
    /// A 1-based page number.
    Page(usize),
    /// A collapsed run of pages.
    Ellipsis,
}

/// Number of pages needed for `total_items` at `page_size` items per page.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Item index range shown on 1-based `page`, clamped to `total_items`.
pub fn page_range(page: usize, page_size: usize, total_items: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    start..end
}

/// Computes the visible page slots: first, last, and `siblings` pages either side of `current`.
///
/// A gap of exactly one page renders that page instead of an ellipsis.
pub fn pagination_slots(current: usize, total: usize, siblings: usize) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(siblings).max(1);
    let end = current.saturating_add(siblings).min(total);

    let mut slots = Vec::with_capacity(end - start + 5);
    if start > 1 {
        slots.push(PageSlot::Page(1));
        match start {
            2 => {}
            3 => slots.push(PageSlot::Page(2)),
            _ => slots.push(PageSlot::Ellipsis),
        }
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total {
        match total - end {
            1 => {}
            2 => slots.push(PageSlot::Page(total - 1)),
            _ => slots.push(PageSlot::Ellipsis),
        }
        slots.push(PageSlot::Page(total));
    }
    slots
}

#[component]
/// Page navigation control with previous/next buttons and a windowed page list.
pub fn Pagination(
    #[prop(into)] current: MaybeSignal<usize>,
    #[prop(into)] total_pages: MaybeSignal<usize>,
    #[prop(default = 1)] siblings: usize,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<usize>>,
) -> impl IntoView {
    let current = Signal::derive(move || current.get());
    let total_pages = Signal::derive(move || total_pages.get());
    let emit = move |page: usize| {
        let total = total_pages.get_untracked();
        if total == 0 || page == current.get_untracked() {
            return;
        }
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(page.clamp(1, total));
        }
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label="Pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
            data-ui-size=size.token()
        >
            <IconButton
                icon=IconName::ChevronLeft
                aria_label="Previous page"
                size
                ui_slot="previous"
                disabled=Signal::derive(move || current.get() <= 1)
                on_click=Callback::new(move |_| emit(current.get_untracked().saturating_sub(1)))
            />
            {move || {
                pagination_slots(current.get(), total_pages.get(), siblings)
                    .into_iter()
                    .map(|slot| match slot {
                        PageSlot::Page(page) => {
                            let is_current = page == current.get_untracked();
                            view! {
                                <button
                                    type="button"
                                    data-ui-slot="page"
                                    data-ui-selected=bool_token(is_current)
                                    aria-current=if is_current { Some("page") } else { None }
                                    on:click=move |_| emit(page)
                                >
                                    {page}
                                </button>
                            }
                                .into_view()
                        }
                        PageSlot::Ellipsis => {
                            view! { <span data-ui-slot="ellipsis" aria-hidden="true">"…"</span> }
                                .into_view()
                        }
                    })
                    .collect_view()
            }}
            <IconButton
                icon=IconName::ChevronRight
                aria_label="Next page"
                size
                ui_slot="next"
                disabled=Signal::derive(move || current.get() >= total_pages.get())
                on_click=Callback::new(move |_| emit(current.get_untracked() + 1))
            />
        </nav>
    }
}

#[component]
/// Ordered breadcrumb trail container.
pub fn BreadcrumbList(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-breadcrumbs", layout_class)
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumbs"
        >
            <ol>{children()}</ol>
        </nav>
    }
}

#[component]
/// One breadcrumb step. The current (last) step renders as plain text.
pub fn BreadcrumbItem(
    #[prop(optional_no_strip, into)] href: Option<String>,
    #[prop(optional)] current: bool,
    #[prop(optional_no_strip, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let content = match href {
        Some(href) if !current => view! {
            <a
                href=href
                on:click=move |ev| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(ev);
                    }
                }
            >
                {children()}
            </a>
        }
        .into_view(),
        _ => view! { <span aria-current=if current { Some("page") } else { None }>{children()}</span> }
            .into_view(),
    };

    view! {
        <li data-ui-kind="breadcrumb-item" data-ui-selected=bool_token(current)>
            {content}
        </li>
    }
}

#[component]
/// Vertical navigation list used by the sidebar and secondary nav.
pub fn NavList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-nav-list", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="nav-list"
            data-ui-collapsed=move || bool_token(collapsed.get())
        >
            <ul>{children()}</ul>
        </nav>
    }
}

#[component]
/// Navigation entry: a link when `href` is set, otherwise a button.
pub fn NavLink(
    #[prop(into)] label: String,
    #[prop(optional_no_strip, into)] href: Option<String>,
    #[prop(optional_no_strip, into)] icon: Option<IconName>,
    #[prop(optional_no_strip, into)] image_src: Option<String>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] collapsed: MaybeSignal<bool>,
    #[prop(optional_no_strip, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let handle_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click.as_ref() {
            on_click.call(ev);
        }
    };
    let active = Signal::derive(move || active.get());
    let title = label.clone();
    let leading = match (icon, image_src) {
        (Some(icon), _) => Some(view! { <Icon icon size=IconSize::Sm /> }.into_view()),
        (None, Some(src)) => {
            Some(view! { <img data-ui-slot="image" src=src alt="" aria-hidden="true" /> }.into_view())
        }
        (None, None) => None,
    };
    let body = view! {
        {leading}
        <span data-ui-slot="label" hidden=move || collapsed.get()>{label}</span>
    };

    let control = match href {
        Some(href) => view! {
            <a
                href=href
                title=title
                aria-current=move || if active.get() { Some("page") } else { None }
                on:click=handle_click
            >
                {body}
            </a>
        }
        .into_view(),
        None => view! {
            <button type="button" title=title on:click=handle_click>
                {body}
            </button>
        }
        .into_view(),
    };

    view! {
        <li
            class="ui-nav-link"
            data-ui-primitive="true"
            data-ui-kind="nav-link"
            data-ui-selected=move || bool_token(active.get())
        >
            {control}
        </li>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use PageSlot::{Ellipsis, Page};

    #[test]
    fn window_collapses_both_sides_around_middle_page() {
        assert_eq!(
            pagination_slots(5, 10, 1),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn single_page_gap_renders_the_page_instead_of_ellipsis() {
        assert_eq!(
            pagination_slots(4, 10, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_slots(8, 10, 1),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn edges_and_degenerate_totals() {
        assert_eq!(pagination_slots(1, 10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
        assert_eq!(pagination_slots(99, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(pagination_slots(1, 1, 2), vec![Page(1)]);
        assert!(pagination_slots(1, 0, 1).is_empty());
    }

    #[test]
    fn page_math_clamps_to_item_count() {
        assert_eq!(page_count(41, 10), 5);
        assert_eq!(page_count(40, 10), 4);
        assert_eq!(page_count(3, 0), 0);
        assert_eq!(page_range(5, 10, 41), 40..41);
        assert_eq!(page_range(9, 10, 41), 41..41);
        assert_eq!(page_range(0, 10, 41), 0..10);
    }
}
