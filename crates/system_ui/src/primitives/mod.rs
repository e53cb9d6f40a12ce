//! Shared structural, shell, overlay, data-display, control, and layout primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;
mod shell;

pub use controls::{Button, CheckboxField, FieldGroup, IconButton, SelectField, Switch, TextField};
pub use data_display::{
    Avatar, Badge, DataTable, EmptyState, Heading, Panel, Spinner, Surface, TableCell,
    TableHeaderCell, Text,
};
pub use layout::{Cluster, Grid, Stack};
pub use navigation::{
    page_count, page_range, pagination_slots, BreadcrumbItem, BreadcrumbList, NavLink, NavList,
    PageSlot, Pagination,
};
pub use overlays::{ToastRegion, ToastSurface, Tooltip};
pub use shell::{AppShell, ShellFooter, ShellHeader, ShellMain, ShellSidebar};

/// Declares a closed token enum whose variants map to stable `data-ui-*` attribute values.
macro_rules! ui_tokens {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            #[allow(dead_code)]
            pub(crate) fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

ui_tokens! {
    /// Semantic surface variants for structural primitives.
    SurfaceVariant {
        /// Primary surface.
        #[default]
        Standard => "standard",
        /// Secondary or muted surface.
        Muted => "muted",
        /// Inset surface.
        Inset => "inset",
    }
}

ui_tokens! {
    /// Semantic elevation levels for shared primitives.
    Elevation {
        /// Flat surface.
        #[default]
        Flat => "flat",
        /// Raised card-like surface.
        Raised => "raised",
        /// Floating overlay surface (toasts, tooltips).
        Overlay => "overlay",
    }
}

ui_tokens! {
    /// Shared button variants.
    ButtonVariant {
        /// Standard action button.
        #[default]
        Standard => "standard",
        /// Primary call-to-action.
        Primary => "primary",
        /// Borderless toolbar/nav button.
        Quiet => "quiet",
        /// Destructive action.
        Danger => "danger",
        /// Button styled as an inline link.
        Link => "link",
    }
}

ui_tokens! {
    /// Shared button sizing tokens.
    ButtonSize {
        /// Dense button used by the small layout size.
        Sm => "sm",
        /// Default button.
        #[default]
        Md => "md",
        /// Large button.
        Lg => "lg",
    }
}

ui_tokens! {
    /// Shared input-field variants.
    FieldVariant {
        /// Standard bordered input.
        #[default]
        Standard => "standard",
        /// Inline/filter input embedded in toolbars.
        Inline => "inline",
    }
}

ui_tokens! {
    /// Shared text roles.
    TextRole {
        /// Body text.
        #[default]
        Body => "body",
        /// Label text.
        Label => "label",
        /// Caption text.
        Caption => "caption",
        /// Section or page title.
        Title => "title",
        /// Monospace/code text.
        Code => "code",
    }
}

ui_tokens! {
    /// Shared text and status tone.
    TextTone {
        /// Primary text.
        #[default]
        Primary => "primary",
        /// Secondary text.
        Secondary => "secondary",
        /// Informational status.
        Info => "info",
        /// Success status.
        Success => "success",
        /// Warning status.
        Warning => "warning",
        /// Danger/error status.
        Danger => "danger",
    }
}

ui_tokens! {
    /// Shared layout gap tokens.
    LayoutGap {
        /// No gap.
        None => "none",
        /// Small gap.
        Sm => "sm",
        /// Default gap.
        #[default]
        Md => "md",
        /// Large gap.
        Lg => "lg",
    }
}

ui_tokens! {
    /// Shared layout padding tokens.
    LayoutPadding {
        /// No padding.
        None => "none",
        /// Compact padding.
        Sm => "sm",
        /// Default padding.
        #[default]
        Md => "md",
        /// Spacious padding.
        Lg => "lg",
    }
}

ui_tokens! {
    /// Shared cross-axis alignment tokens.
    LayoutAlign {
        /// Stretch/fill alignment.
        #[default]
        Stretch => "stretch",
        /// Start alignment.
        Start => "start",
        /// Center alignment.
        Center => "center",
        /// End alignment.
        End => "end",
    }
}

ui_tokens! {
    /// Shared main-axis justification tokens.
    LayoutJustify {
        /// Start justification.
        #[default]
        Start => "start",
        /// Center justification.
        Center => "center",
        /// Space between items.
        Between => "between",
        /// End justification.
        End => "end",
    }
}

ui_tokens! {
    /// Preferred side for tooltip bubbles relative to their anchor.
    TooltipPlacement {
        /// Above the anchor.
        #[default]
        Top => "top",
        /// Below the anchor.
        Bottom => "bottom",
        /// Leading side of the anchor.
        Start => "start",
        /// Trailing side of the anchor.
        End => "end",
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("users-card")),
            "ui-card users-card"
        );
    }

    #[test]
    fn token_defaults_match_the_css_contract() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(TextTone::Danger.token(), "danger");
        assert_eq!(TooltipPlacement::default().token(), "top");
    }
}
