use super::*;

#[component]
/// Hover/focus tooltip attached to its children.
pub fn Tooltip(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(default = TooltipPlacement::Top)] placement: TooltipPlacement,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let tooltip_id = format!("ui-tooltip-{}", next_tooltip_id());

    view! {
        <span
            class=merge_layout_class("ui-tooltip-anchor", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tooltip-anchor"
            aria-describedby=tooltip_id.clone()
            on:mouseenter=move |_| set_open.set(true)
            on:mouseleave=move |_| set_open.set(false)
            on:focusin=move |_| set_open.set(true)
            on:focusout=move |_| set_open.set(false)
        >
            {children()}
            <span
                id=tooltip_id
                role="tooltip"
                data-ui-kind="tooltip"
                data-ui-placement=placement.token()
                data-ui-elevation=Elevation::Overlay.token()
                data-ui-state=move || if open.get() { "open" } else { "closed" }
                hidden=move || !open.get()
            >
                {move || text.get()}
            </span>
        </span>
    }
}

fn next_tooltip_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

#[component]
/// Fixed-position live region that hosts toast surfaces.
pub fn ToastRegion(
    /// `"dark"` or `"light"`, mirrored from the active theme.
    #[prop(into)]
    color_mode: MaybeSignal<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-toast-region", layout_class)
            aria-live="polite"
            aria-label="Notifications"
            data-ui-primitive="true"
            data-ui-kind="toast-region"
            data-ui-color-mode=move || color_mode.get()
        >
            {children()}
        </section>
    }
}

#[component]
/// One toast notification card with an optional dismiss button.
pub fn ToastSurface(
    #[prop(into)] title: String,
    #[prop(default = TextTone::Info)] tone: TextTone,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let urgent = matches!(tone, TextTone::Danger | TextTone::Warning);
    view! {
        <article
            class="ui-toast"
            role=if urgent { "alert" } else { "status" }
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
            data-ui-elevation=Elevation::Overlay.token()
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Md layout_class="ui-toast-icon" /> })}
            <div data-ui-slot="copy">
                <div data-ui-slot="title">{title}</div>
                <div data-ui-slot="body">{children()}</div>
            </div>
            {on_dismiss.map(|on_dismiss| view! {
                <IconButton
                    icon=IconName::Dismiss
                    aria_label="Dismiss notification"
                    size=ButtonSize::Sm
                    ui_slot="dismiss"
                    on_click=on_dismiss
                />
            })}
        </article>
    }
}
